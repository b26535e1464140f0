//! File-backed settings store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::trace;

use super::SettingsStore;
use crate::error::Result;

/// A store that keeps each key in its own file under a base directory.
///
/// Suitable for desktop applications persisting the theme override across
/// runs. A key `k` maps to `<dir>/k.json`; the directory is created on
/// first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store under the platform config directory for `app`,
    /// e.g. `~/.config/<app>` on Linux. Falls back to the current
    /// directory when the platform reports no config location.
    pub fn for_app(app: &str) -> Self {
        let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push(app);
        Self { dir }
    }

    /// The directory records are kept in.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SettingsStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        trace!("wrote {} to {:?}", key, self.dir);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                trace!("removed {} from {:?}", key, self.dir);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
