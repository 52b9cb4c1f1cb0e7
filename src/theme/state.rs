//! Theme state and its pure transitions

use std::fmt;
use std::str::FromStr;

/// Color mode of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Every mode class; exactly one of them is active at a time
    pub const CLASSES: [&'static str; 2] = ["light-mode", "dark-mode"];

    /// Value written to the preference slot
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Class applied to the document root
    pub fn class_name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light-mode",
            ThemeMode::Dark => "dark-mode",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Active theme plus the explicit user choice, if any
///
/// Once `explicit` is set, OS color-scheme changes no longer move `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    active: ThemeMode,
    explicit: Option<ThemeMode>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            active: ThemeMode::Light,
            explicit: None,
        }
    }
}

impl ThemeState {
    /// Resolve the starting theme: stored choice, else OS preference, else light
    pub fn initial(stored: Option<ThemeMode>, os_prefers_dark: Option<bool>) -> Self {
        match stored {
            Some(mode) => Self {
                active: mode,
                explicit: Some(mode),
            },
            None => Self {
                active: os_prefers_dark
                    .map(ThemeMode::from_os)
                    .unwrap_or(ThemeMode::Light),
                explicit: None,
            },
        }
    }

    pub fn active(&self) -> ThemeMode {
        self.active
    }

    pub fn explicit(&self) -> Option<ThemeMode> {
        self.explicit
    }

    /// Flip the active mode and record it as the user's choice
    pub fn toggle(self) -> Self {
        apply_theme(self, self.active.opposite())
    }

    /// Follow an OS color-scheme change unless the user has chosen
    pub fn os_changed(self, prefers_dark: bool) -> Self {
        if self.explicit.is_some() {
            self
        } else {
            Self {
                active: ThemeMode::from_os(prefers_dark),
                explicit: None,
            }
        }
    }
}

/// Apply an explicit user preference
///
/// An explicit choice sets both the active mode and the recorded choice, so
/// the resulting state is the same whatever `_state` was. The parameter keeps
/// the transition shape `state -> state'` shared with `toggle` and
/// `os_changed`.
pub fn apply_theme(_state: ThemeState, preference: ThemeMode) -> ThemeState {
    ThemeState {
        active: preference,
        explicit: Some(preference),
    }
}
