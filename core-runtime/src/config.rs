//! # Onboarding Configuration Module
//!
//! Provides configuration management for the onboarding core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct an
//! `OnboardConfig` that holds the host bridges and settings the CLI hands to
//! the auth formatter and the model patcher. Validation is fail-fast: a
//! missing bridge is reported with an actionable message instead of being
//! discovered later.
//!
//! ## Bridges
//!
//! - `StyleRenderer` - Styled terminal output (desktop default: ANSI truecolor)
//! - `FileSystemAccess` - Patch target I/O (desktop default: std::fs)
//! - `Clock` - Wall clock for expiry hints (default: `SystemClock`)
//!
//! When the `desktop-shims` feature is enabled, desktop defaults for the
//! style renderer and file system are injected automatically if not provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::OnboardConfig;
//!
//! let config = OnboardConfig::builder()
//!     .project_root("/path/to/agent")
//!     .allow_stale_hints(true)
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::{Clock, FileSystemAccess, PlainStyleRenderer, StyleRenderer, SystemClock};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Generated model table shipped by the agent's model package, relative to
/// the project root.
pub const DEFAULT_MODELS_PATH: &str =
    "node_modules/@mariozechner/pi-ai/dist/models.generated.js";

/// Configuration for the onboarding core.
///
/// Use [`OnboardConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct OnboardConfig {
    /// Root of the agent project (where `node_modules` lives)
    pub project_root: PathBuf,

    /// Generated model table to patch
    pub models_path: PathBuf,

    /// Styled output renderer
    pub style_renderer: Arc<dyn StyleRenderer>,

    /// File system used by the model patcher
    pub file_system: Arc<dyn FileSystemAccess>,

    /// Wall clock for token expiry hints
    pub clock: Arc<dyn Clock>,

    /// Behaviour flags
    pub flags: OnboardFlags,
}

impl std::fmt::Debug for OnboardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardConfig")
            .field("project_root", &self.project_root)
            .field("models_path", &self.models_path)
            .field("style_renderer", &"StyleRenderer { ... }")
            .field("file_system", &"FileSystemAccess { ... }")
            .field("clock", &"Clock { ... }")
            .field("flags", &self.flags)
            .finish()
    }
}

/// Behaviour flags for the formatter and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OnboardFlags {
    /// Render an expired token as "refresh on use" instead of "expired"
    pub allow_stale_hints: bool,

    /// Fail when an auth group references an unknown choice
    pub strict_auth_groups: bool,

    /// Never emit styled output, regardless of terminal capability
    pub plain_output: bool,
}

impl OnboardConfig {
    /// Creates a new builder for constructing an `OnboardConfig`.
    pub fn builder() -> OnboardConfigBuilder {
        OnboardConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Project root is not empty
    /// - Models path names a file
    pub fn validate(&self) -> Result<()> {
        if self.project_root.as_os_str().is_empty() {
            return Err(Error::Config("Project root cannot be empty".to_string()));
        }

        if self.models_path.as_os_str().is_empty() || self.models_path.file_name().is_none() {
            return Err(Error::Config(format!(
                "Models path must name a file, got '{}'",
                self.models_path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn style_renderer_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "StyleRenderer".to_string(),
        message: "StyleRenderer implementation is required for hint output. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default AnsiStyleRenderer. \
                 Embedders: inject a renderer, or use PlainStyleRenderer for unstyled text."
            .to_string(),
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn file_system_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "FileSystemAccess".to_string(),
        message: "FileSystemAccess implementation is required for patching the model table. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default StdFileSystem."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_style_renderer() -> Result<Arc<dyn StyleRenderer>> {
    use bridge_desktop::AnsiStyleRenderer;

    let renderer: Arc<dyn StyleRenderer> = Arc::new(AnsiStyleRenderer::detect());
    Ok(renderer)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_style_renderer() -> Result<Arc<dyn StyleRenderer>> {
    Err(style_renderer_missing_error())
}

#[cfg(feature = "desktop-shims")]
fn provide_default_file_system(project_root: &Path) -> Result<Arc<dyn FileSystemAccess>> {
    use bridge_desktop::StdFileSystem;

    let fs: Arc<dyn FileSystemAccess> = Arc::new(StdFileSystem::with_base_dir(project_root));
    Ok(fs)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_file_system(_project_root: &Path) -> Result<Arc<dyn FileSystemAccess>> {
    Err(file_system_missing_error())
}

/// Builder for constructing [`OnboardConfig`] instances.
#[derive(Default)]
pub struct OnboardConfigBuilder {
    project_root: Option<PathBuf>,
    models_path: Option<PathBuf>,
    style_renderer: Option<Arc<dyn StyleRenderer>>,
    file_system: Option<Arc<dyn FileSystemAccess>>,
    clock: Option<Arc<dyn Clock>>,
    flags: OnboardFlags,
}

impl OnboardConfigBuilder {
    /// Sets the project root.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_runtime::config::OnboardConfig;
    ///
    /// let builder = OnboardConfig::builder()
    ///     .project_root("/srv/agent");
    /// ```
    pub fn project_root<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.project_root = Some(path.into());
        self
    }

    /// Sets the model table path.
    ///
    /// Relative paths are resolved against the project root. Default:
    /// [`DEFAULT_MODELS_PATH`].
    pub fn models_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.models_path = Some(path.into());
        self
    }

    /// Sets the style renderer implementation.
    pub fn style_renderer(mut self, renderer: Arc<dyn StyleRenderer>) -> Self {
        self.style_renderer = Some(renderer);
        self
    }

    /// Sets the file system implementation.
    pub fn file_system(mut self, fs: Arc<dyn FileSystemAccess>) -> Self {
        self.file_system = Some(fs);
        self
    }

    /// Sets the clock. Default: [`SystemClock`].
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Enables or disables stale-token hints.
    ///
    /// Default: false
    pub fn allow_stale_hints(mut self, enabled: bool) -> Self {
        self.flags.allow_stale_hints = enabled;
        self
    }

    /// Enables or disables strict auth group validation.
    ///
    /// Default: false
    pub fn strict_auth_groups(mut self, enabled: bool) -> Self {
        self.flags.strict_auth_groups = enabled;
        self
    }

    /// Forces unstyled output.
    ///
    /// Default: false
    pub fn plain_output(mut self, enabled: bool) -> Self {
        self.flags.plain_output = enabled;
        self
    }

    /// Sets all flags at once.
    pub fn flags(mut self, flags: OnboardFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Builds the final `OnboardConfig` instance.
    ///
    /// # Returns
    ///
    /// Returns `Ok(OnboardConfig)` on success, or an error if:
    /// - The project root is missing
    /// - A required bridge is missing and no desktop default is available
    /// - Configuration values are invalid
    pub fn build(self) -> Result<OnboardConfig> {
        let project_root = self.project_root.ok_or_else(|| {
            Error::Config("Project root is required. Use .project_root() to set it.".to_string())
        })?;

        let models_path = match self.models_path {
            Some(path) if path.is_absolute() => path,
            Some(path) => project_root.join(path),
            None => project_root.join(DEFAULT_MODELS_PATH),
        };

        let style_renderer: Arc<dyn StyleRenderer> = if self.flags.plain_output {
            Arc::new(PlainStyleRenderer)
        } else {
            match self.style_renderer {
                Some(renderer) => renderer,
                None => provide_default_style_renderer()?,
            }
        };

        let file_system = match self.file_system {
            Some(fs) => fs,
            None => provide_default_file_system(&project_root)?,
        };

        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock),
        };

        let config = OnboardConfig {
            project_root,
            models_path,
            style_renderer,
            file_system,
            clock,
            flags: self.flags,
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::storage::FileMetadata;
    use bridge_traits::{BridgeError, FixedClock, StyleToken};

    struct MockFileSystem;

    impl FileSystemAccess for MockFileSystem {
        fn exists(&self, _path: &Path) -> std::result::Result<bool, BridgeError> {
            Ok(false)
        }

        fn metadata(&self, _path: &Path) -> std::result::Result<FileMetadata, BridgeError> {
            Err(BridgeError::NotAvailable("metadata".to_string()))
        }

        fn read_to_string(&self, _path: &Path) -> std::result::Result<String, BridgeError> {
            Ok(String::new())
        }

        fn write_string(&self, _path: &Path, _contents: &str) -> std::result::Result<(), BridgeError> {
            Ok(())
        }

        fn working_directory(&self) -> std::result::Result<PathBuf, BridgeError> {
            Ok(PathBuf::from("/project"))
        }
    }

    struct MarkerRenderer;

    impl StyleRenderer for MarkerRenderer {
        fn is_rich(&self) -> bool {
            true
        }

        fn colorize(&self, rich: bool, token: StyleToken, text: &str) -> String {
            if rich {
                format!("<{}>{}", token, text)
            } else {
                text.to_string()
            }
        }
    }

    fn builder_with_bridges() -> OnboardConfigBuilder {
        OnboardConfig::builder()
            .project_root("/project")
            .style_renderer(Arc::new(MarkerRenderer))
            .file_system(Arc::new(MockFileSystem))
    }

    #[test]
    fn test_builder_requires_project_root() {
        let result = OnboardConfig::builder()
            .style_renderer(Arc::new(MarkerRenderer))
            .file_system(Arc::new(MockFileSystem))
            .build();

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Project root is required"));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_builder_requires_style_renderer() {
        let result = OnboardConfig::builder()
            .project_root("/project")
            .file_system(Arc::new(MockFileSystem))
            .build();

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("StyleRenderer"));
        assert!(err_msg.contains("PlainStyleRenderer"));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_builder_requires_file_system() {
        let result = OnboardConfig::builder()
            .project_root("/project")
            .style_renderer(Arc::new(MarkerRenderer))
            .build();

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("FileSystemAccess"));
    }

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_build_with_desktop_defaults() {
        let config = OnboardConfig::builder()
            .project_root("/project")
            .build()
            .expect("desktop defaults should succeed");

        assert_eq!(
            config.file_system.working_directory().unwrap(),
            PathBuf::from("/project")
        );
    }

    #[test]
    fn test_default_models_path_is_under_project_root() {
        let config = builder_with_bridges().build().unwrap();
        assert_eq!(
            config.models_path,
            PathBuf::from("/project").join(DEFAULT_MODELS_PATH)
        );
        assert_eq!(config.flags, OnboardFlags::default());
    }

    #[test]
    fn test_relative_models_path_joins_root() {
        let config = builder_with_bridges()
            .models_path("vendor/models.js")
            .build()
            .unwrap();
        assert_eq!(config.models_path, PathBuf::from("/project/vendor/models.js"));
    }

    #[test]
    fn test_absolute_models_path_is_kept() {
        let config = builder_with_bridges()
            .models_path("/opt/models.js")
            .build()
            .unwrap();
        assert_eq!(config.models_path, PathBuf::from("/opt/models.js"));
    }

    #[test]
    fn test_validate_rejects_empty_project_root() {
        let result = builder_with_bridges().project_root("").build();
        assert!(result.unwrap_err().to_string().contains("Project root cannot be empty"));
    }

    #[test]
    fn test_validate_rejects_models_path_without_file_name() {
        let result = builder_with_bridges().models_path("/").build();
        assert!(result.unwrap_err().to_string().contains("Models path must name a file"));
    }

    #[test]
    fn test_plain_output_replaces_renderer() {
        let config = builder_with_bridges().plain_output(true).build().unwrap();
        assert!(!config.style_renderer.is_rich());
        assert_eq!(
            config.style_renderer.colorize(true, StyleToken::Warn, "x"),
            "x"
        );
    }

    #[test]
    fn test_injected_clock_is_used() {
        let config = builder_with_bridges()
            .clock(Arc::new(FixedClock::from_millis(42_000)))
            .build()
            .unwrap();
        assert_eq!(config.clock.unix_timestamp_millis(), 42_000);
    }

    #[test]
    fn test_flags_builder() {
        let config = builder_with_bridges()
            .allow_stale_hints(true)
            .strict_auth_groups(true)
            .build()
            .unwrap();

        assert!(config.flags.allow_stale_hints);
        assert!(config.flags.strict_auth_groups);
        assert!(!config.flags.plain_output);
    }

    #[test]
    fn test_config_debug_hides_bridges() {
        let config = builder_with_bridges().build().unwrap();
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("StyleRenderer { ... }"));
        assert!(rendered.contains("/project"));
    }
}
