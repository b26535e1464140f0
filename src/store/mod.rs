//! Key-value persistence for the settings record.
//!
//! This module provides:
//!
//! - [`SettingsStore`]: the persistence seam the resolver writes through
//! - [`MemoryStore`]: an in-process store for tests and ephemeral hosts
//! - [`FileStore`]: a file-per-key store for desktop applications

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Key-value persistence for serialized settings.
///
/// Mirrors a local-storage surface: string keys, string values, absent keys
/// reading back as `None`. The resolver uses exactly one key.
pub trait SettingsStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value under `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
