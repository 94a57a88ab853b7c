//! Maps raw input gestures to deck actions.

use crate::config::KeyBindings;

/// Something the deck can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckAction {
    Advance,
    Retreat,
    GoTo(usize),
    ToggleFullscreen,
}

/// Pointer gestures the deck listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    /// Left click anywhere; `on_interactive` when the target sits inside a
    /// button, link, nav control or dot
    PrimaryClick { on_interactive: bool },
    /// Right click / context menu
    ContextMenu,
    /// Click on the indicator dot of a slide
    IndicatorClick(usize),
    FullscreenButton,
}

impl PointerInput {
    /// Whether the browser's default handling must be suppressed
    pub fn suppresses_default(&self) -> bool {
        matches!(self, PointerInput::ContextMenu)
    }
}

/// Key lookup built from the configured bindings
#[derive(Debug, Clone, PartialEq)]
pub struct InputMap {
    bindings: KeyBindings,
}

impl InputMap {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// Action for a `KeyboardEvent.key` value
    pub fn action_for_key(&self, key: &str) -> Option<DeckAction> {
        if self.bindings.forward.iter().any(|k| k == key) {
            Some(DeckAction::Advance)
        } else if self.bindings.backward.iter().any(|k| k == key) {
            Some(DeckAction::Retreat)
        } else {
            None
        }
    }

    pub fn action_for_pointer(&self, input: PointerInput) -> Option<DeckAction> {
        match input {
            PointerInput::PrimaryClick { on_interactive: true } => None,
            PointerInput::PrimaryClick { on_interactive: false } => Some(DeckAction::Advance),
            PointerInput::ContextMenu => Some(DeckAction::Retreat),
            PointerInput::IndicatorClick(slide) => Some(DeckAction::GoTo(slide)),
            PointerInput::FullscreenButton => Some(DeckAction::ToggleFullscreen),
        }
    }
}

impl Default for InputMap {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}
