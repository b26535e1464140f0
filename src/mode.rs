//! Color mode, preference source, and the persisted settings record.

use serde::{Deserialize, Serialize};

/// The two mutually exclusive presentation states of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Maps the wire-level boolean onto a mode.
    pub fn from_dark(dark_mode: bool) -> Self {
        if dark_mode {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Whether this is the dark mode.
    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// Lowercase name, as it appears in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

/// Where the active mode comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    /// Track the operating system's reported preference.
    FollowSystem,
    /// An explicit user choice, persisted across sessions.
    UserDefined(ColorMode),
}

/// The persisted settings record.
///
/// Serialized as `{"darkMode":<bool>}`; the camelCase spelling is part of
/// the storage format, so records written by earlier versions of the host
/// application read back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub dark_mode: bool,
}

impl ThemeSettings {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }
}
