//! Programmatic color-scheme source.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use super::{SchemeListener, SchemeWatch, SystemScheme};

/// A color-scheme source driven by the embedder.
///
/// Hosts that already receive preference events through their own framework
/// feed each one in with [`ManualScheme::set_dark`]; tests use it to script
/// preference changes. Cloning returns another handle to the same source,
/// so one handle can be given to the resolver while the other fires events.
#[derive(Clone)]
pub struct ManualScheme {
    inner: Arc<Inner>,
}

struct Inner {
    dark: Mutex<bool>,
    listeners: Mutex<HashMap<u64, SchemeListener>>,
    next_id: AtomicU64,
}

impl ManualScheme {
    /// Creates a source whose current preference is `dark`.
    pub fn new(dark: bool) -> Self {
        Self {
            inner: Arc::new(Inner {
                dark: Mutex::new(dark),
                listeners: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Updates the preference and notifies active watchers.
    ///
    /// Every call counts as one change event, delivered synchronously on
    /// the calling thread. Delivery holds the listener table locked, so a
    /// `cancel` that has returned strictly happens-after any delivery.
    pub fn set_dark(&self, dark: bool) {
        *self.inner.dark.lock().unwrap() = dark;
        let listeners = self.inner.listeners.lock().unwrap();
        for listener in listeners.values() {
            listener(dark);
        }
    }
}

impl SystemScheme for ManualScheme {
    fn prefers_dark(&self) -> bool {
        *self.inner.dark.lock().unwrap()
    }

    fn watch(&self, listener: SchemeListener) -> SchemeWatch {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().unwrap().insert(id, listener);

        let inner = Arc::clone(&self.inner);
        SchemeWatch::new(move || {
            inner.listeners.lock().unwrap().remove(&id);
        })
    }
}

impl fmt::Debug for ManualScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheme")
            .field("dark", &self.prefers_dark())
            .field("listeners", &self.inner.listeners.lock().unwrap().len())
            .finish()
    }
}
