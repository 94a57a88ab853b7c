//! Fullscreen toggling independent of the browser's vendor APIs.

use tracing::{info, warn};

use crate::config::FullscreenLabels;
use crate::error::DeckError;

/// Capability-checked access to the platform's fullscreen API
pub trait FullscreenApi {
    fn is_fullscreen(&self) -> bool;
    fn request(&self) -> Result<(), DeckError>;
    fn exit(&self) -> Result<(), DeckError>;
}

/// Page chrome reflecting the fullscreen state
pub trait FullscreenIndicator {
    /// Body-level flag
    fn set_fullscreen_flag(&mut self, on: bool);
    fn set_button_label(&mut self, label: &str);
}

/// Keeps the body flag and button label in step with fullscreen mode
#[derive(Debug, Clone, PartialEq)]
pub struct FullscreenToggle {
    labels: FullscreenLabels,
    active: bool,
}

impl FullscreenToggle {
    pub fn new(labels: FullscreenLabels) -> Self {
        Self { labels, active: false }
    }

    /// Enter fullscreen when windowed, leave it otherwise.
    ///
    /// Platform failures are logged; the chrome still follows the request.
    /// Returns the new flag state.
    pub fn toggle(&mut self, api: &impl FullscreenApi, ui: &mut impl FullscreenIndicator) -> bool {
        if !api.is_fullscreen() {
            if let Err(e) = api.request() {
                warn!(error = %e, "fullscreen request failed");
            }
            self.apply(ui, true);
        } else {
            if let Err(e) = api.exit() {
                warn!(error = %e, "fullscreen exit failed");
            }
            self.apply(ui, false);
        }
        info!(fullscreen = self.active, "fullscreen toggled");
        self.active
    }

    /// Platform reported a change (e.g. Esc pressed); only leaving is mirrored
    pub fn sync(&mut self, api: &impl FullscreenApi, ui: &mut impl FullscreenIndicator) {
        if !api.is_fullscreen() {
            self.apply(ui, false);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn label(&self) -> &str {
        if self.active {
            &self.labels.exit
        } else {
            &self.labels.enter
        }
    }

    fn apply(&mut self, ui: &mut impl FullscreenIndicator, on: bool) {
        self.active = on;
        ui.set_fullscreen_flag(on);
        let label = self.label().to_string();
        ui.set_button_label(&label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeApi {
        fullscreen: Cell<bool>,
        reject: bool,
    }

    impl FullscreenApi for FakeApi {
        fn is_fullscreen(&self) -> bool {
            self.fullscreen.get()
        }

        fn request(&self) -> Result<(), DeckError> {
            if self.reject {
                return Err(DeckError::Fullscreen("denied".to_string()));
            }
            self.fullscreen.set(true);
            Ok(())
        }

        fn exit(&self) -> Result<(), DeckError> {
            self.fullscreen.set(false);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeChrome {
        flag: bool,
        label: String,
    }

    impl FullscreenIndicator for FakeChrome {
        fn set_fullscreen_flag(&mut self, on: bool) {
            self.flag = on;
        }

        fn set_button_label(&mut self, label: &str) {
            self.label = label.to_string();
        }
    }

    #[test]
    fn test_toggle_round_trip() {
        let api = FakeApi::default();
        let mut chrome = FakeChrome::default();
        let mut toggle = FullscreenToggle::new(FullscreenLabels::default());

        assert!(toggle.toggle(&api, &mut chrome));
        assert!(chrome.flag);
        assert_eq!(chrome.label, FullscreenLabels::default().exit);

        assert!(!toggle.toggle(&api, &mut chrome));
        assert!(!chrome.flag);
        assert_eq!(chrome.label, FullscreenLabels::default().enter);
    }

    #[test]
    fn test_rejected_request_is_swallowed() {
        let api = FakeApi {
            reject: true,
            ..FakeApi::default()
        };
        let mut chrome = FakeChrome::default();
        let mut toggle = FullscreenToggle::new(FullscreenLabels::default());

        assert!(toggle.toggle(&api, &mut chrome));
        assert!(chrome.flag);
    }

    #[test]
    fn test_sync_after_escape_restores_enter_label() {
        let api = FakeApi::default();
        let mut chrome = FakeChrome::default();
        let mut toggle = FullscreenToggle::new(FullscreenLabels::default());
        toggle.toggle(&api, &mut chrome);

        // User leaves with Esc: platform state changes underneath us
        api.fullscreen.set(false);
        toggle.sync(&api, &mut chrome);
        assert!(!toggle.is_active());
        assert!(!chrome.flag);
        assert_eq!(chrome.label, FullscreenLabels::default().enter);
    }

    #[test]
    fn test_sync_while_fullscreen_changes_nothing() {
        let api = FakeApi::default();
        let mut chrome = FakeChrome::default();
        let mut toggle = FullscreenToggle::new(FullscreenLabels::default());
        toggle.toggle(&api, &mut chrome);
        toggle.sync(&api, &mut chrome);
        assert!(toggle.is_active());
        assert!(chrome.flag);
    }
}
