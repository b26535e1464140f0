//! Operating-system color-scheme source.
//!
//! This module provides:
//!
//! - [`SystemScheme`]: synchronous preference query plus change watching
//! - [`SchemeWatch`]: single-use cancellation guard for an active watch
//! - [`OsScheme`]: the real OS preference, via `dark-light`
//! - [`ManualScheme`]: a programmatic source for tests and embedders

mod manual;
mod os;
mod watch;

pub use manual::ManualScheme;
pub use os::OsScheme;
pub use watch::SchemeWatch;

use std::sync::Arc;

/// Callback invoked with the new "prefers dark" value on each change.
pub type SchemeListener = Arc<dyn Fn(bool) + Send + Sync>;

/// Source of the operating system's color-scheme preference.
pub trait SystemScheme: Send + Sync {
    /// Whether the system currently prefers dark mode.
    ///
    /// Sources that cannot report a preference (headless or unsupported
    /// environments) return `false`.
    fn prefers_dark(&self) -> bool;

    /// Starts watching for preference changes.
    ///
    /// `listener` receives the new value after each change. Cancelling (or
    /// dropping) the returned watch stops delivery; once `cancel` returns,
    /// the listener is not invoked again.
    fn watch(&self, listener: SchemeListener) -> SchemeWatch;
}
