//! Where the configuration file lives

use std::path::{Path, PathBuf};

use crate::error::{RegistryError, Result};

/// Default name of the configuration file
pub const DEFAULT_FILE_NAME: &str = "config.xml";

/// Per-user application data directory plus file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    dir: PathBuf,
    file_name: String,
}

impl StorageLocation {
    /// Platform directory for `app_name`
    ///
    /// Linux uses the XDG config directory, other platforms a dot directory
    /// in the home directory.
    pub fn for_app(app_name: &str) -> Option<Self> {
        let dir = if cfg!(target_os = "linux") {
            dirs::config_dir()?.join(app_name)
        } else {
            dirs::home_dir()?.join(format!(".{}", app_name))
        };
        Some(Self::in_dir(dir))
    }

    /// Explicit directory, default file name
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the configuration file
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Create the directory if it does not exist yet
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| RegistryError::io(&self.dir, e))?;
            log::info!("Created config directory: {:?}", self.dir);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path() {
        let location = StorageLocation::in_dir("/tmp/app").with_file_name("settings.xml");
        assert_eq!(location.file_path(), PathBuf::from("/tmp/app/settings.xml"));
        assert_eq!(location.dir(), Path::new("/tmp/app"));
    }

    #[test]
    fn test_ensure_dir_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let location = StorageLocation::in_dir(tmp.path().join("a").join("b"));

        location.ensure_dir().unwrap();
        assert!(location.dir().is_dir());

        // second call is a no-op
        location.ensure_dir().unwrap();
    }

    #[test]
    fn test_for_app_ends_with_app_name() {
        if let Some(location) = StorageLocation::for_app("config-registry") {
            let last = location.dir().file_name().unwrap().to_string_lossy().into_owned();
            assert!(last.ends_with("config-registry"));
            assert!(location.file_path().ends_with(DEFAULT_FILE_NAME));
        }
    }
}
