//! OS directory resolution.

use std::path::{Path, PathBuf};

use crate::error::AppError;

const APP_NAME: &str = "orrery";

/// Where the app keeps its config and logs.
#[derive(Debug, Clone, PartialEq)]
pub struct AppDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Holds the JSON log of debug builds.
    pub log_dir: PathBuf,
}

impl AppDirs {
    /// Resolve the platform-appropriate directories without creating them.
    pub fn resolve() -> Result<Self, AppError> {
        let base = dirs::config_dir().ok_or(AppError::NoConfigDir)?;
        Ok(Self::with_root(&base))
    }

    /// Directories rooted under `root`.
    pub fn with_root(root: &Path) -> Self {
        let app_dir = root.join(APP_NAME);
        Self {
            config_dir: app_dir.join("config"),
            log_dir: app_dir.join("logs"),
        }
    }

    /// Resolve, honoring an explicit config directory from the command line.
    pub fn resolve_with_override(config_dir: Option<&Path>) -> Result<Self, AppError> {
        match config_dir {
            Some(dir) => Ok(Self {
                config_dir: dir.to_path_buf(),
                log_dir: dir.join("logs"),
            }),
            None => Self::resolve(),
        }
    }

    /// Create every directory on disk.
    pub fn create_dirs(&self) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root_layout() {
        let dirs = AppDirs::with_root(Path::new("base"));
        assert_eq!(dirs.config_dir, Path::new("base").join("orrery").join("config"));
        assert_eq!(dirs.log_dir, Path::new("base").join("orrery").join("logs"));
    }

    #[test]
    fn test_override_uses_given_dir() {
        let dirs = AppDirs::resolve_with_override(Some(Path::new("custom"))).unwrap();
        assert_eq!(dirs.config_dir, Path::new("custom"));
        assert_eq!(dirs.log_dir, Path::new("custom").join("logs"));
    }

    #[test]
    fn test_create_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = AppDirs::with_root(tmp.path());
        dirs.create_dirs().unwrap();
        assert!(dirs.config_dir.is_dir());
        assert!(dirs.log_dir.is_dir());
    }
}
