//! Deck configuration.
//!
//! Every field has a default matching the stock presentation markup, so a
//! page only needs to embed the values it wants to change:
//!
//! ```json
//! { "cursor_idle_ms": 3000, "keys": { "forward": ["ArrowRight", "PageDown"] } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Top-level configuration for one deck instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// CSS class names used to find and flag elements
    pub classes: ClassNames,
    /// Element ids of the fixed chrome
    pub elements: ElementIds,
    /// Keyboard bindings
    pub keys: KeyBindings,
    /// Selectors whose descendants swallow the click-to-advance gesture
    pub interactive_selectors: Vec<String>,
    /// Fullscreen button labels
    pub fullscreen_labels: FullscreenLabels,
    /// Pointer inactivity before the cursor is hidden in fullscreen
    pub cursor_idle_ms: u32,
    /// `tracing` filter directive for the console logger
    pub log_filter: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            classes: ClassNames::default(),
            elements: ElementIds::default(),
            keys: KeyBindings::default(),
            interactive_selectors: vec![
                ".btn-nav".to_string(),
                "button".to_string(),
                "a".to_string(),
                ".nav-dot".to_string(),
            ],
            fullscreen_labels: FullscreenLabels::default(),
            cursor_idle_ms: 2000,
            log_filter: "info".to_string(),
        }
    }
}

impl DeckConfig {
    /// Parse a (possibly partial) JSON document, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Comma-joined selector list suitable for `Element::closest`
    pub fn interactive_selector(&self) -> String {
        self.interactive_selectors.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub slide: String,
    pub step: String,
    pub active: String,
    pub revealed: String,
    pub nav_dot: String,
    pub body_fullscreen: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            slide: "slide".to_string(),
            step: "step-reveal".to_string(),
            active: "active".to_string(),
            revealed: "revealed".to_string(),
            nav_dot: "nav-dot".to_string(),
            body_fullscreen: "is-fullscreen".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub nav_dots: String,
    pub counter: String,
    pub fullscreen_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            nav_dots: "navDots".to_string(),
            counter: "slideCounter".to_string(),
            fullscreen_button: "fsBtn".to_string(),
        }
    }
}

/// DOM `KeyboardEvent.key` values mapped to forward/backward navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Vec<String>,
    pub backward: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec!["ArrowRight".to_string(), " ".to_string()],
            backward: vec!["ArrowLeft".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullscreenLabels {
    /// Shown while windowed
    pub enter: String,
    /// Shown while fullscreen
    pub exit: String,
}

impl Default for FullscreenLabels {
    fn default() -> Self {
        Self {
            enter: "🖥️ เต็มจอ".to_string(),
            exit: "❌ ออกจากเต็มจอ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_markup() {
        let config = DeckConfig::default();
        assert_eq!(config.classes.slide, "slide");
        assert_eq!(config.classes.step, "step-reveal");
        assert_eq!(config.elements.nav_dots, "navDots");
        assert_eq!(config.elements.counter, "slideCounter");
        assert_eq!(config.cursor_idle_ms, 2000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "cursor_idle_ms": 3500, "keys": { "forward": ["PageDown"] } }"#;
        let config = DeckConfig::from_json(json).unwrap();
        assert_eq!(config.cursor_idle_ms, 3500);
        assert_eq!(config.keys.forward, vec!["PageDown".to_string()]);
        // Untouched nested field falls back to its default
        assert_eq!(config.keys.backward, vec!["ArrowLeft".to_string()]);
        assert_eq!(config.classes, ClassNames::default());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let result = DeckConfig::from_json("{ not json");
        assert!(matches!(result, Err(DeckError::Config(_))));
    }

    #[test]
    fn test_interactive_selector_joins_list() {
        let config = DeckConfig::default();
        assert_eq!(config.interactive_selector(), ".btn-nav, button, a, .nav-dot");
    }
}
