use deck_shared::{DeckConfig, DeckError};
use web_sys::Document;

/// Id of the optional inline JSON block carrying deck settings
pub const CONFIG_ELEMENT_ID: &str = "deck-config";

/// Read `<script type="application/json" id="deck-config">` if the page has one.
///
/// `Ok(None)` means the page relies on defaults.
pub fn load_config(document: &Document) -> Result<Option<DeckConfig>, DeckError> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let text = element.text_content().unwrap_or_default();
    parse_inline(&text).map(Some)
}

/// Blank blocks count as an empty object
pub fn parse_inline(text: &str) -> Result<DeckConfig, DeckError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(DeckConfig::default());
    }
    DeckConfig::from_json(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_block_uses_defaults() {
        assert_eq!(parse_inline("  \n ").unwrap(), DeckConfig::default());
    }

    #[test]
    fn test_inline_overrides() {
        let config = parse_inline(r#"{ "log_filter": "deck_shared=debug" }"#).unwrap();
        assert_eq!(config.log_filter, "deck_shared=debug");
        assert_eq!(config.cursor_idle_ms, 2000);
    }

    #[test]
    fn test_malformed_block_is_error() {
        assert!(parse_inline("{ cursor_idle_ms: }").is_err());
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_block_is_none() {
        let document = web_sys::window().unwrap().document().unwrap();
        assert!(load_config(&document).unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_reads_inline_block() {
        let document = web_sys::window().unwrap().document().unwrap();
        let script = document.create_element("script").unwrap();
        script.set_id(CONFIG_ELEMENT_ID);
        script.set_attribute("type", "application/json").unwrap();
        script.set_text_content(Some(r#"{ "cursor_idle_ms": 500 }"#));
        document.body().unwrap().append_child(&script).unwrap();

        let config = load_config(&document).unwrap().unwrap();
        assert_eq!(config.cursor_idle_ms, 500);
        script.remove();
    }
}
