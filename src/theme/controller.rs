//! Theme controller - binds [`ThemeState`] to the document and the preference slot

use super::{ThemeMode, ThemeState};
use crate::config::SiteConfig;
use crate::dom::Document;
use crate::platform::{KeyValueStore, MediaQuery};

/// Events the controller listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEvent {
    /// Click on the toggle control
    ToggleClicked,
    /// OS color-scheme change; `true` when dark is now preferred
    ColorSchemeChanged(bool),
}

/// Owns the theme state for one page load
#[derive(Debug, Clone)]
pub struct ThemeController {
    state: ThemeState,
    storage_key: String,
    toggle_bound: bool,
}

impl ThemeController {
    /// Resolve the starting theme, apply it and bind the listeners
    ///
    /// The click listener is only bound when the toggle control exists.
    pub fn initialize<S, M>(doc: &mut Document, config: &SiteConfig, store: &S, media: &M) -> Self
    where
        S: KeyValueStore + ?Sized,
        M: MediaQuery + ?Sized,
    {
        let stored = store
            .get(&config.storage_key)
            .and_then(|value| match value.parse::<ThemeMode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::warn!("Ignoring stored theme preference: {}", e);
                    None
                }
            });

        let state = ThemeState::initial(stored, media.prefers_dark());
        let toggle_bound = doc.contains_id(&config.dom.theme_toggle);
        if !toggle_bound {
            tracing::debug!("No theme toggle #{} on page", config.dom.theme_toggle);
        }

        let controller = Self {
            state,
            storage_key: config.storage_key.clone(),
            toggle_bound,
        };
        controller.render(doc);
        tracing::debug!(
            "Theme initialized: {} (explicit: {:?})",
            state.active(),
            state.explicit()
        );
        controller
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn toggle_bound(&self) -> bool {
        self.toggle_bound
    }

    /// Dispatch an event; returns whether the active theme changed
    pub fn handle<S>(&mut self, event: ThemeEvent, doc: &mut Document, store: &mut S) -> bool
    where
        S: KeyValueStore + ?Sized,
    {
        let before = self.state.active();

        match event {
            ThemeEvent::ToggleClicked => {
                if !self.toggle_bound {
                    return false;
                }
                self.state = self.state.toggle();
                let mode = self.state.active();
                if let Err(e) = store.set(&self.storage_key, mode.as_str()) {
                    tracing::warn!("Failed to persist theme preference: {}", e);
                }
            }
            ThemeEvent::ColorSchemeChanged(prefers_dark) => {
                self.state = self.state.os_changed(prefers_dark);
            }
        }

        self.render(doc);
        self.state.active() != before
    }

    fn render(&self, doc: &mut Document) {
        doc.set_exclusive_root_class(self.state.active().class_name(), &ThemeMode::CLASSES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::error::StoreError;
    use crate::platform::{FixedScheme, MemoryStore};

    fn page_with_toggle() -> Document {
        Document::with_body(
            "t",
            vec![Element::new("div")
                .attr("id", "darkModeToggleContainer")
                .into()],
        )
    }

    fn active_modes(doc: &Document) -> Vec<&str> {
        ThemeMode::CLASSES
            .iter()
            .copied()
            .filter(|c| doc.has_root_class(c))
            .collect()
    }

    #[test]
    fn test_initialize_uses_stored_choice() {
        let config = SiteConfig::default();
        let mut store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        let mut doc = page_with_toggle();

        let controller =
            ThemeController::initialize(&mut doc, &config, &store, &FixedScheme(Some(false)));
        assert_eq!(controller.state().active(), ThemeMode::Dark);
        assert_eq!(active_modes(&doc), vec!["dark-mode"]);
    }

    #[test]
    fn test_invalid_stored_value_falls_back_to_os() {
        let config = SiteConfig::default();
        let mut store = MemoryStore::new();
        store.set("theme", "blue").unwrap();
        let mut doc = page_with_toggle();

        let controller =
            ThemeController::initialize(&mut doc, &config, &store, &FixedScheme(Some(true)));
        assert_eq!(controller.state().active(), ThemeMode::Dark);
        assert_eq!(controller.state().explicit(), None);
    }

    #[test]
    fn test_toggle_persists_and_pins() {
        let config = SiteConfig::default();
        let mut store = MemoryStore::new();
        let mut doc = page_with_toggle();
        let mut controller =
            ThemeController::initialize(&mut doc, &config, &store, &FixedScheme(None));
        assert_eq!(active_modes(&doc), vec!["light-mode"]);

        assert!(controller.handle(ThemeEvent::ToggleClicked, &mut doc, &mut store));
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(active_modes(&doc), vec!["dark-mode"]);

        assert!(!controller.handle(ThemeEvent::ColorSchemeChanged(false), &mut doc, &mut store));
        assert_eq!(active_modes(&doc), vec!["dark-mode"]);
    }

    #[test]
    fn test_exactly_one_mode_under_event_sequences() {
        let config = SiteConfig::default();
        let mut store = MemoryStore::new();
        let mut doc = page_with_toggle();
        let mut controller =
            ThemeController::initialize(&mut doc, &config, &store, &FixedScheme(Some(true)));

        let events = [
            ThemeEvent::ColorSchemeChanged(false),
            ThemeEvent::ColorSchemeChanged(true),
            ThemeEvent::ToggleClicked,
            ThemeEvent::ColorSchemeChanged(true),
            ThemeEvent::ToggleClicked,
            ThemeEvent::ToggleClicked,
            ThemeEvent::ColorSchemeChanged(false),
        ];
        for event in events {
            controller.handle(event, &mut doc, &mut store);
            assert_eq!(active_modes(&doc).len(), 1);
            assert!(doc.has_root_class(controller.state().active().class_name()));
        }
        assert_eq!(controller.state().active(), ThemeMode::Light);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_missing_toggle_ignores_clicks() {
        let config = SiteConfig::default();
        let mut store = MemoryStore::new();
        let mut doc = Document::new("t");
        let mut controller =
            ThemeController::initialize(&mut doc, &config, &store, &FixedScheme(None));
        assert!(!controller.toggle_bound());

        assert!(!controller.handle(ThemeEvent::ToggleClicked, &mut doc, &mut store));
        assert_eq!(store.get("theme"), None);
        assert!(controller.handle(ThemeEvent::ColorSchemeChanged(true), &mut doc, &mut store));
        assert_eq!(active_modes(&doc), vec!["dark-mode"]);
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn test_store_failure_keeps_toggle() {
        let config = SiteConfig::default();
        let mut store = ReadOnlyStore;
        let mut doc = page_with_toggle();
        let mut controller =
            ThemeController::initialize(&mut doc, &config, &store, &FixedScheme(None));

        assert!(controller.handle(ThemeEvent::ToggleClicked, &mut doc, &mut store));
        assert_eq!(controller.state().active(), ThemeMode::Dark);
        assert_eq!(active_modes(&doc), vec!["dark-mode"]);
    }
}
