use deck_shared::{InputMap, PointerInput};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent};

use crate::app::Controls;

/// True when the event target sits inside one of the interactive controls
fn on_interactive(event: &Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| matches!(element.closest(selector), Ok(Some(_))))
        .unwrap_or(false)
}

/// Keyboard, click and context-menu navigation on the whole document
pub fn attach_document(
    document: &Document,
    controls: &Controls,
    input: &InputMap,
    interactive_selector: &str,
) -> Vec<EventListener> {
    let keydown = {
        let controls = controls.clone();
        let input = input.clone();
        EventListener::new(document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(action) = input.action_for_key(&event.key()) {
                controls.perform(action);
            }
        })
    };

    let click = {
        let controls = controls.clone();
        let input = input.clone();
        let selector = interactive_selector.to_string();
        EventListener::new(document, "click", move |event| {
            let gesture = PointerInput::PrimaryClick {
                on_interactive: on_interactive(event, &selector),
            };
            if let Some(action) = input.action_for_pointer(gesture) {
                controls.perform(action);
            }
        })
    };

    let context_menu = {
        let controls = controls.clone();
        let input = input.clone();
        EventListener::new_with_options(
            document,
            "contextmenu",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let gesture = PointerInput::ContextMenu;
                if gesture.suppresses_default() {
                    event.prevent_default();
                    event.stop_propagation();
                }
                if let Some(action) = input.action_for_pointer(gesture) {
                    controls.perform(action);
                }
            },
        )
    };

    vec![keydown, click, context_menu]
}

/// Direct jumps from the indicator dots
pub fn attach_dots(dots: &[Element], controls: &Controls, input: &InputMap) -> Vec<EventListener> {
    dots.iter()
        .enumerate()
        .map(|(slide, dot)| {
            let controls = controls.clone();
            let input = input.clone();
            EventListener::new(dot, "click", move |_| {
                let gesture = PointerInput::IndicatorClick(slide);
                if let Some(action) = input.action_for_pointer(gesture) {
                    controls.perform(action);
                }
            })
        })
        .collect()
}

pub fn attach_fullscreen_button(
    button: &Element,
    controls: &Controls,
    input: &InputMap,
) -> EventListener {
    let controls = controls.clone();
    let input = input.clone();
    EventListener::new(button, "click", move |_| {
        if let Some(action) = input.action_for_pointer(PointerInput::FullscreenButton) {
            controls.perform(action);
        }
    })
}
