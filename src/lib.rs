//! Dark/light theme resolution with operating-system synchronization.
//!
//! `duskmode` decides whether a UI should render dark or light. An explicit
//! user choice is persisted and wins on every start; with no stored choice
//! the crate follows the operating system's reported color-scheme preference
//! and tracks changes to it live. The decision reaches the rendering layer
//! as a single presentation flag: the light-mode class.
//!
//! This crate provides:
//!
//! - [`ThemeResolver`]: resolves the active mode and keeps it applied
//! - [`SettingsStore`]: persistence seam, with [`MemoryStore`] and [`FileStore`]
//! - [`SystemScheme`]: OS preference seam, with [`OsScheme`] and [`ManualScheme`]
//! - [`RenderSurface`]: presentation seam, with [`ClassSet`]
//!
//! # Example
//!
//! ```rust
//! use duskmode::{ClassSet, ManualScheme, MemoryStore, ThemeResolver};
//!
//! # fn main() -> duskmode::Result<()> {
//! let store = MemoryStore::new();
//! let scheme = ManualScheme::new(true);
//! let classes = ClassSet::new();
//! let resolver = ThemeResolver::new(store, scheme.clone(), classes.clone());
//!
//! // No stored choice: the system preference (dark) wins and stays tracked.
//! resolver.initialize()?;
//! assert!(!classes.contains("light-mode"));
//! scheme.set_dark(false);
//! assert!(classes.contains("light-mode"));
//!
//! // An explicit choice is applied, persisted, and pins the mode.
//! resolver.set_dark_mode()?;
//! assert!(!classes.contains("light-mode"));
//!
//! resolver.shutdown();
//! # Ok(())
//! # }
//! ```

mod error;
mod mode;
mod resolver;
mod scheme;
mod store;
mod surface;

pub use error::{Result, ThemeError};
pub use mode::{ColorMode, ThemePreference, ThemeSettings};
pub use resolver::{ResolverConfig, ThemeResolver, DEFAULT_LIGHT_CLASS, DEFAULT_STORAGE_KEY};
pub use scheme::{ManualScheme, OsScheme, SchemeListener, SchemeWatch, SystemScheme};
pub use store::{FileStore, MemoryStore, SettingsStore};
pub use surface::{ClassSet, RenderSurface};
