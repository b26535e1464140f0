//! End-to-end lifecycle behavior of the resolver against in-process
//! collaborators.

use std::sync::{Arc, Mutex};

use duskmode::{
    ClassSet, ColorMode, ManualScheme, MemoryStore, RenderSurface, ResolverConfig, SettingsStore,
    ThemePreference, ThemeResolver, DEFAULT_LIGHT_CLASS, DEFAULT_STORAGE_KEY,
};

/// Surface that records every call, for cancellation assertions.
#[derive(Clone, Default)]
struct RecordingSurface {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingSurface {
    fn new() -> Self {
        Self::default()
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl RenderSurface for RecordingSurface {
    fn add_class(&self, class: &str) {
        self.calls.lock().unwrap().push(format!("add {}", class));
    }

    fn remove_class(&self, class: &str) {
        self.calls.lock().unwrap().push(format!("remove {}", class));
    }
}

fn resolver_with(
    store: &MemoryStore,
    scheme: &ManualScheme,
    classes: &ClassSet,
) -> ThemeResolver {
    ThemeResolver::new(store.clone(), scheme.clone(), classes.clone())
}

#[test]
fn test_initialize_without_record_follows_system() {
    let store = MemoryStore::new();
    let scheme = ManualScheme::new(true);
    let classes = ClassSet::new();
    let resolver = resolver_with(&store, &scheme, &classes);

    resolver.initialize().unwrap();
    assert_eq!(resolver.current_mode(), Some(ColorMode::Dark));
    assert_eq!(resolver.preference(), Some(ThemePreference::FollowSystem));
    assert!(!classes.contains(DEFAULT_LIGHT_CLASS));

    // The watch is live: a preference flip lands on the surface.
    scheme.set_dark(false);
    assert_eq!(resolver.current_mode(), Some(ColorMode::Light));
    assert!(classes.contains(DEFAULT_LIGHT_CLASS));
}

#[test]
fn test_initialize_with_record_pins_mode() {
    let store = MemoryStore::new();
    store
        .set_item(DEFAULT_STORAGE_KEY, r#"{"darkMode":false}"#)
        .unwrap();
    let scheme = ManualScheme::new(true);
    let classes = ClassSet::new();
    let resolver = resolver_with(&store, &scheme, &classes);

    resolver.initialize().unwrap();
    assert_eq!(
        resolver.preference(),
        Some(ThemePreference::UserDefined(ColorMode::Light))
    );
    assert!(classes.contains(DEFAULT_LIGHT_CLASS));

    // No watch started: preference flips are ignored.
    scheme.set_dark(false);
    scheme.set_dark(true);
    assert_eq!(resolver.current_mode(), Some(ColorMode::Light));
    assert!(classes.contains(DEFAULT_LIGHT_CLASS));
}

#[test]
fn test_user_defined_mode_round_trips_verbatim() {
    let store = MemoryStore::new();
    let scheme = ManualScheme::new(false);
    let classes = ClassSet::new();
    let resolver = resolver_with(&store, &scheme, &classes);
    resolver.initialize().unwrap();

    resolver.set_user_defined_mode(true).unwrap();
    assert_eq!(
        store.get_item(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some(r#"{"darkMode":true}"#)
    );
    assert!(!classes.contains(DEFAULT_LIGHT_CLASS));
}

#[test]
fn test_set_system_mode_removes_record_and_resumes_tracking() {
    let store = MemoryStore::new();
    store
        .set_item(DEFAULT_STORAGE_KEY, r#"{"darkMode":true}"#)
        .unwrap();
    let scheme = ManualScheme::new(false);
    let classes = ClassSet::new();
    let resolver = resolver_with(&store, &scheme, &classes);
    resolver.initialize().unwrap();
    assert_eq!(resolver.current_mode(), Some(ColorMode::Dark));

    resolver.set_system_mode().unwrap();
    assert_eq!(store.get_item(DEFAULT_STORAGE_KEY).unwrap(), None);
    assert_eq!(resolver.preference(), Some(ThemePreference::FollowSystem));
    assert_eq!(resolver.current_mode(), Some(ColorMode::Light));

    // Tracking resumed.
    scheme.set_dark(true);
    assert_eq!(resolver.current_mode(), Some(ColorMode::Dark));
}

#[test]
fn test_reinitialize_after_revert_behaves_like_first_run() {
    let store = MemoryStore::new();
    let scheme = ManualScheme::new(true);
    let classes = ClassSet::new();

    {
        let resolver = resolver_with(&store, &scheme, &classes);
        resolver.initialize().unwrap();
        resolver.set_dark_mode().unwrap();
        resolver.set_system_mode().unwrap();
    }

    // Next "session": nothing persisted, so the system preference wins.
    let resolver = resolver_with(&store, &scheme, &classes);
    resolver.initialize().unwrap();
    assert_eq!(resolver.preference(), Some(ThemePreference::FollowSystem));
    assert_eq!(resolver.current_mode(), Some(ColorMode::Dark));
    scheme.set_dark(false);
    assert_eq!(resolver.current_mode(), Some(ColorMode::Light));
}

#[test]
fn test_shutdown_stops_watch_delivery() {
    let store = MemoryStore::new();
    let scheme = ManualScheme::new(true);
    let surface = RecordingSurface::new();
    let resolver = ThemeResolver::new(store, scheme.clone(), surface.clone());

    resolver.initialize().unwrap();
    scheme.set_dark(false);
    let before = surface.call_count();
    assert!(before >= 2);

    resolver.shutdown();
    scheme.set_dark(true);
    scheme.set_dark(false);
    assert_eq!(surface.call_count(), before);

    // Shutdown is idempotent.
    resolver.shutdown();
    assert_eq!(surface.call_count(), before);
}

#[test]
fn test_drop_cancels_watch() {
    let scheme = ManualScheme::new(true);
    let surface = RecordingSurface::new();
    let before;
    {
        let resolver = ThemeResolver::new(MemoryStore::new(), scheme.clone(), surface.clone());
        resolver.initialize().unwrap();
        before = surface.call_count();
    }
    scheme.set_dark(false);
    assert_eq!(surface.call_count(), before);
}

#[test]
fn test_convenience_setters_match_explicit_calls() {
    let light = (MemoryStore::new(), MemoryStore::new());
    let dark = (MemoryStore::new(), MemoryStore::new());

    let by_name = resolver_with(&light.0, &ManualScheme::new(false), &ClassSet::new());
    by_name.set_light_mode().unwrap();
    let by_bool = resolver_with(&light.1, &ManualScheme::new(false), &ClassSet::new());
    by_bool.set_user_defined_mode(false).unwrap();
    assert_eq!(
        light.0.get_item(DEFAULT_STORAGE_KEY).unwrap(),
        light.1.get_item(DEFAULT_STORAGE_KEY).unwrap()
    );
    assert_eq!(by_name.current_mode(), by_bool.current_mode());

    let by_name = resolver_with(&dark.0, &ManualScheme::new(false), &ClassSet::new());
    by_name.set_dark_mode().unwrap();
    let by_bool = resolver_with(&dark.1, &ManualScheme::new(false), &ClassSet::new());
    by_bool.set_user_defined_mode(true).unwrap();
    assert_eq!(
        dark.0.get_item(DEFAULT_STORAGE_KEY).unwrap(),
        dark.1.get_item(DEFAULT_STORAGE_KEY).unwrap()
    );
    assert_eq!(by_name.current_mode(), by_bool.current_mode());
}

#[test]
fn test_custom_storage_key_and_class() {
    let store = MemoryStore::new();
    let classes = ClassSet::new();
    let resolver = ThemeResolver::with_config(
        store.clone(),
        ManualScheme::new(false),
        classes.clone(),
        ResolverConfig {
            storage_key: "appearance".to_string(),
            light_class: "theme-light".to_string(),
        },
    );

    resolver.set_light_mode().unwrap();
    assert!(classes.contains("theme-light"));
    assert!(!classes.contains(DEFAULT_LIGHT_CLASS));
    assert_eq!(
        store.get_item("appearance").unwrap().as_deref(),
        Some(r#"{"darkMode":false}"#)
    );
    assert_eq!(store.get_item(DEFAULT_STORAGE_KEY).unwrap(), None);
}
