//! OS-reported color scheme via `dark-light`.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use log::debug;

use super::{SchemeListener, SchemeWatch, SystemScheme};

/// Default interval between preference polls while watching.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// The operating system's color-scheme preference.
///
/// Queries go through the `dark-light` detection backends. Platforms that
/// report no preference read as light. The OS exposes no change event to a
/// plain process, so watching polls the preference on a background thread
/// and notifies only on transitions.
#[derive(Debug, Clone)]
pub struct OsScheme {
    poll_interval: Duration,
    detect: fn() -> bool,
}

impl OsScheme {
    pub fn new() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            detect: detect_dark,
        }
    }

    /// Overrides how often the watch thread re-checks the preference.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[cfg(test)]
    fn with_detector(mut self, detect: fn() -> bool) -> Self {
        self.detect = detect;
        self
    }
}

impl Default for OsScheme {
    fn default() -> Self {
        Self::new()
    }
}

fn detect_dark() -> bool {
    // Anything the OS does not report as dark renders light.
    matches!(detect_os_theme(), OsThemeMode::Dark)
}

impl SystemScheme for OsScheme {
    fn prefers_dark(&self) -> bool {
        (self.detect)()
    }

    fn watch(&self, listener: SchemeListener) -> SchemeWatch {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let interval = self.poll_interval;
        let detect = self.detect;
        let mut last = detect();
        debug!("watching OS color scheme (poll every {:?})", interval);

        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    let dark = detect();
                    if dark != last {
                        last = dark;
                        listener(dark);
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        SchemeWatch::new(move || {
            let _ = stop_tx.send(());
            // Joining guarantees no delivery after cancel returns.
            let _ = handle.join();
            debug!("stopped watching OS color scheme");
        })
    }
}
