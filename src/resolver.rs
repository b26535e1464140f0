//! Theme resolution and OS synchronization.

use std::sync::{Arc, Mutex};

use log::{debug, info};

use crate::error::Result;
use crate::mode::{ColorMode, ThemePreference, ThemeSettings};
use crate::scheme::{SchemeListener, SchemeWatch, SystemScheme};
use crate::store::SettingsStore;
use crate::surface::RenderSurface;

/// Storage key of the persisted settings record.
pub const DEFAULT_STORAGE_KEY: &str = "theme-settings";

/// Class the render layer shows in light mode.
pub const DEFAULT_LIGHT_CLASS: &str = "light-mode";

/// Construction-time knobs for [`ThemeResolver`].
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Key the settings record is stored under.
    pub storage_key: String,
    /// Presentation class representing light mode.
    pub light_class: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            light_class: DEFAULT_LIGHT_CLASS.to_string(),
        }
    }
}

/// Resolves the active color mode and keeps it applied.
///
/// A persisted record pins the mode; with no record the resolver follows
/// the system preference and tracks changes to it until an explicit choice
/// is made or the resolver shuts down. Owned by the application's
/// composition root; one instance per presentation root.
///
/// # Example
///
/// ```rust
/// use duskmode::{ClassSet, ManualScheme, MemoryStore, ThemeResolver};
///
/// # fn main() -> duskmode::Result<()> {
/// let classes = ClassSet::new();
/// let resolver = ThemeResolver::new(
///     MemoryStore::new(),
///     ManualScheme::new(false),
///     classes.clone(),
/// );
/// resolver.initialize()?;
/// assert!(classes.contains("light-mode"));
/// # Ok(())
/// # }
/// ```
pub struct ThemeResolver {
    store: Box<dyn SettingsStore>,
    scheme: Box<dyn SystemScheme>,
    shared: Arc<Shared>,
    storage_key: String,
    watch: Mutex<Option<SchemeWatch>>,
}

/// Everything the watch listener needs to reach.
struct Shared {
    surface: Box<dyn RenderSurface>,
    light_class: String,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    current: Option<ColorMode>,
    preference: Option<ThemePreference>,
}

impl Shared {
    /// Maps a mode onto the light-mode flag. Idempotent; the most recent
    /// apply wins.
    fn apply(&self, mode: ColorMode) {
        let mut state = self.state.lock().unwrap();
        match mode {
            ColorMode::Dark => self.surface.remove_class(&self.light_class),
            ColorMode::Light => self.surface.add_class(&self.light_class),
        }
        state.current = Some(mode);
        debug!("applied {} mode", mode.as_str());
    }
}

impl ThemeResolver {
    /// Creates a resolver with the default storage key and light class.
    pub fn new(
        store: impl SettingsStore + 'static,
        scheme: impl SystemScheme + 'static,
        surface: impl RenderSurface + 'static,
    ) -> Self {
        Self::with_config(store, scheme, surface, ResolverConfig::default())
    }

    pub fn with_config(
        store: impl SettingsStore + 'static,
        scheme: impl SystemScheme + 'static,
        surface: impl RenderSurface + 'static,
        config: ResolverConfig,
    ) -> Self {
        Self {
            store: Box::new(store),
            scheme: Box::new(scheme),
            shared: Arc::new(Shared {
                surface: Box::new(surface),
                light_class: config.light_class,
                state: Mutex::new(State::default()),
            }),
            storage_key: config.storage_key,
            watch: Mutex::new(None),
        }
    }

    /// Resolves and applies the initial mode.
    ///
    /// A persisted record wins and pins the mode without OS
    /// synchronization. With no record, the current system preference is
    /// applied and a change watch starts.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ThemeError::Malformed`] when a stored record does
    /// not deserialize (a broken record is surfaced, never silently
    /// replaced) and [`crate::ThemeError::Io`] when the store cannot be
    /// read.
    pub fn initialize(&self) -> Result<()> {
        match self.store.get_item(&self.storage_key)? {
            Some(raw) => {
                let settings: ThemeSettings = serde_json::from_str(&raw)?;
                let mode = ColorMode::from_dark(settings.dark_mode);
                debug!("initializing from stored record: {} mode", mode.as_str());
                self.stop_watch();
                self.set_preference(ThemePreference::UserDefined(mode));
                self.shared.apply(mode);
                Ok(())
            }
            None => {
                debug!("no stored record, following system preference");
                self.follow_system();
                Ok(())
            }
        }
    }

    /// The current OS preference; `false` when the source cannot report one.
    pub fn is_system_dark(&self) -> bool {
        self.scheme.prefers_dark()
    }

    /// Applies and persists an explicit choice.
    ///
    /// The mode is applied immediately, recorded as the new settings, and
    /// written to the store; any active OS watch stops, so follow-system
    /// behavior ends both now and on the next load.
    pub fn set_user_defined_mode(&self, dark_mode: bool) -> Result<()> {
        let mode = ColorMode::from_dark(dark_mode);
        self.stop_watch();
        self.set_preference(ThemePreference::UserDefined(mode));
        self.shared.apply(mode);
        let record = serde_json::to_string(&ThemeSettings::new(dark_mode))?;
        self.store.set_item(&self.storage_key, &record)?;
        info!("stored explicit {} mode", mode.as_str());
        Ok(())
    }

    /// Equivalent to `set_user_defined_mode(true)`.
    pub fn set_dark_mode(&self) -> Result<()> {
        self.set_user_defined_mode(true)
    }

    /// Equivalent to `set_user_defined_mode(false)`.
    pub fn set_light_mode(&self) -> Result<()> {
        self.set_user_defined_mode(false)
    }

    /// Reverts to following the system preference.
    ///
    /// Applies the current OS preference, restarts the change watch, and
    /// removes the persisted record so the next load follows the system
    /// too.
    pub fn set_system_mode(&self) -> Result<()> {
        self.follow_system();
        self.store.remove_item(&self.storage_key)?;
        info!("reverted to system preference");
        Ok(())
    }

    /// The mode currently applied; `None` before [`ThemeResolver::initialize`].
    pub fn current_mode(&self) -> Option<ColorMode> {
        self.shared.state.lock().unwrap().current
    }

    /// Where the active mode comes from; `None` before [`ThemeResolver::initialize`].
    pub fn preference(&self) -> Option<ThemePreference> {
        self.shared.state.lock().unwrap().preference
    }

    /// The in-memory settings record for the applied mode.
    pub fn settings(&self) -> Option<ThemeSettings> {
        self.current_mode().map(|mode| ThemeSettings::new(mode.is_dark()))
    }

    /// Stops OS synchronization.
    ///
    /// Idempotent, and also runs on drop. After it returns, no watch event
    /// reaches the render surface; explicit setters keep working.
    pub fn shutdown(&self) {
        self.stop_watch();
    }

    fn follow_system(&self) {
        let mode = ColorMode::from_dark(self.scheme.prefers_dark());
        self.set_preference(ThemePreference::FollowSystem);
        self.shared.apply(mode);
        self.start_watch();
    }

    fn start_watch(&self) {
        let shared = Arc::downgrade(&self.shared);
        let listener: SchemeListener = Arc::new(move |dark| {
            if let Some(shared) = shared.upgrade() {
                debug!("system preference changed");
                shared.apply(ColorMode::from_dark(dark));
            }
        });
        let watch = self.scheme.watch(listener);
        // Replacing an active watch cancels it: at most one watch is live.
        *self.watch.lock().unwrap() = Some(watch);
    }

    fn stop_watch(&self) {
        let watch = self.watch.lock().unwrap().take();
        if let Some(watch) = watch {
            watch.cancel();
        }
    }

    fn set_preference(&self, preference: ThemePreference) {
        self.shared.state.lock().unwrap().preference = Some(preference);
    }
}

impl Drop for ThemeResolver {
    fn drop(&mut self) {
        self.stop_watch();
    }
}
