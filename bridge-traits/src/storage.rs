//! Storage and File System Abstractions
//!
//! Provides a platform-agnostic trait for the whole-file text I/O the core
//! performs when rewriting generated package files.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// File metadata information
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub size: u64,
    pub modified_at: Option<i64>,
    pub is_directory: bool,
}

/// File system access trait
///
/// Abstracts file I/O so file rewrites can be exercised against an
/// in-memory store in tests and against the real disk on desktop.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::FileSystemAccess;
///
/// fn touch_marker(fs: &dyn FileSystemAccess, dir: &Path) -> Result<()> {
///     fs.write_string(&dir.join(".patched"), "1")?;
///     Ok(())
/// }
/// ```
pub trait FileSystemAccess: Send + Sync {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> Result<bool>;

    /// Get metadata for a file or directory
    fn metadata(&self, path: &Path) -> Result<FileMetadata>;

    /// Read an entire UTF-8 file into memory
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace a file's contents, creating it if it doesn't exist
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;

    /// Directory used as the base for relative paths
    fn working_directory(&self) -> Result<PathBuf>;

    /// Resolve `path` against [`working_directory`](Self::working_directory)
    /// when it is relative.
    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(self.working_directory()?.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Fs {}

        impl FileSystemAccess for Fs {
            fn exists(&self, path: &Path) -> Result<bool>;
            fn metadata(&self, path: &Path) -> Result<FileMetadata>;
            fn read_to_string(&self, path: &Path) -> Result<String>;
            fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
            fn working_directory(&self) -> Result<PathBuf>;
        }
    }

    #[test]
    fn test_file_metadata() {
        let metadata = FileMetadata {
            size: 1024,
            modified_at: Some(1234567900),
            is_directory: false,
        };

        assert_eq!(metadata.size, 1024);
        assert!(!metadata.is_directory);
    }

    #[test]
    fn test_resolve_joins_relative_paths() {
        let mut fs = MockFs::new();
        fs.expect_working_directory()
            .times(1)
            .returning(|| Ok(PathBuf::from("/project")));

        let resolved = fs.resolve(Path::new("node_modules/pkg")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/node_modules/pkg"));
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let mut fs = MockFs::new();
        fs.expect_working_directory().never();

        let resolved = fs.resolve(Path::new("/abs/models.js")).unwrap();
        assert_eq!(resolved, PathBuf::from("/abs/models.js"));
    }
}
