//! Cancellation guard for scheme watches.

use std::fmt;

/// Handle to an active preference watch.
///
/// Cancellation runs at most once: either through [`SchemeWatch::cancel`]
/// or on drop, whichever comes first.
pub struct SchemeWatch {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl SchemeWatch {
    /// Wraps the action that stops the watch.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stops the watch. When this returns, the listener will not be
    /// invoked again.
    pub fn cancel(mut self) {
        self.cancel_once();
    }

    fn cancel_once(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for SchemeWatch {
    fn drop(&mut self) {
        self.cancel_once();
    }
}

impl fmt::Debug for SchemeWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeWatch")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
