use deck_shared::fullscreen::FullscreenIndicator;
use web_sys::{Element, HtmlElement};

use super::slide_surface::set_class;

/// Body flag, fullscreen button label and cursor visibility
pub struct PageChrome {
    body: HtmlElement,
    button: Option<Element>,
    fullscreen_class: String,
}

impl PageChrome {
    pub fn new(body: HtmlElement, button: Option<Element>, fullscreen_class: &str) -> Self {
        Self {
            body,
            button,
            fullscreen_class: fullscreen_class.to_string(),
        }
    }

    pub fn set_cursor_visible(&self, visible: bool) {
        let value = if visible { "default" } else { "none" };
        if let Err(e) = self.body.style().set_property("cursor", value) {
            tracing::warn!(error = ?e, "cursor style update failed");
        }
    }
}

impl FullscreenIndicator for PageChrome {
    fn set_fullscreen_flag(&mut self, on: bool) {
        set_class(&self.body, &self.fullscreen_class, on);
    }

    fn set_button_label(&mut self, label: &str) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(label));
        }
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_flag_and_label() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();
        let button = document.create_element("button").unwrap();
        let mut chrome = PageChrome::new(body.clone(), Some(button.clone()), "is-fullscreen");

        chrome.set_fullscreen_flag(true);
        chrome.set_button_label("exit");
        assert!(body.class_list().contains("is-fullscreen"));
        assert_eq!(button.text_content().unwrap(), "exit");

        chrome.set_fullscreen_flag(false);
        assert!(!body.class_list().contains("is-fullscreen"));
        chrome.set_cursor_visible(true);
    }
}
