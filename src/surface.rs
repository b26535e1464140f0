//! Presentation seam between the resolver and the rendering layer.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

/// Receiver of presentation-flag changes on a fixed root.
///
/// The resolver drives exactly one flag through this seam: the class naming
/// light mode. Implementations must be idempotent: re-adding a present
/// class or re-removing an absent one is a no-op.
pub trait RenderSurface: Send + Sync {
    /// Sets `class` on the presentation root.
    fn add_class(&self, class: &str);

    /// Clears `class` from the presentation root.
    fn remove_class(&self, class: &str);
}

/// A shared class list standing in for the presentation root.
///
/// Applications mirror it into their actual renderer; tests assert on it
/// directly. Cloning returns another handle to the same list.
#[derive(Debug, Clone, Default)]
pub struct ClassSet {
    classes: Arc<Mutex<BTreeSet<String>>>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `class` is currently set.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.lock().unwrap().contains(class)
    }

    /// Snapshot of the active classes, in sorted order.
    pub fn classes(&self) -> Vec<String> {
        self.classes.lock().unwrap().iter().cloned().collect()
    }
}

impl RenderSurface for ClassSet {
    fn add_class(&self, class: &str) {
        self.classes.lock().unwrap().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.lock().unwrap().remove(class);
    }
}
