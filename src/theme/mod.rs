//! Theme module - dark/light mode state and its document binding

mod controller;
mod state;

pub use controller::{ThemeController, ThemeEvent};
pub use state::{apply_theme, ThemeMode, ThemeState};
