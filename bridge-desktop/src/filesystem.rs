//! File System Access Implementation using std::fs

use bridge_traits::{
    error::{BridgeError, Result},
    storage::{FileMetadata, FileSystemAccess},
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Blocking file system implementation rooted at a base directory.
///
/// Relative paths handed to [`FileSystemAccess::resolve`] are joined onto
/// the base directory, which defaults to the process working directory.
pub struct StdFileSystem {
    base_dir: PathBuf,
}

impl StdFileSystem {
    /// File system rooted at the current working directory
    pub fn current_dir() -> Result<Self> {
        let base_dir = std::env::current_dir().map_err(Self::map_io_error)?;
        Ok(Self { base_dir })
    }

    /// File system rooted at `base_dir`
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn map_io_error(e: std::io::Error) -> BridgeError {
        BridgeError::Io(e)
    }
}

impl FileSystemAccess for StdFileSystem {
    fn exists(&self, path: &Path) -> Result<bool> {
        path.try_exists().map_err(Self::map_io_error)
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata> {
        let metadata = fs::metadata(path).map_err(Self::map_io_error)?;

        Ok(FileMetadata {
            size: metadata.len(),
            modified_at: metadata
                .modified()
                .ok()
                .and_then(|t| t.duration_since(std::time::UNIX_EPOCH).ok())
                .map(|d| d.as_secs() as i64),
            is_directory: metadata.is_dir(),
        })
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let data = fs::read_to_string(path).map_err(Self::map_io_error)?;
        debug!(path = ?path, size = data.len(), "Read file");
        Ok(data)
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(Self::map_io_error)?;
        debug!(path = ?path, size = contents.len(), "Wrote file");
        Ok(())
    }

    fn working_directory(&self) -> Result<PathBuf> {
        Ok(self.base_dir.clone())
    }
}
