use deck_shared::config::ClassNames;
use deck_shared::DeckError;
use web_sys::{Document, Element};

/// Fill the dot container with one indicator per slide.
///
/// Existing children are cleared so re-booting a page does not double up.
pub fn build_nav_dots(
    document: &Document,
    container: &Element,
    slide_count: usize,
    classes: &ClassNames,
) -> Result<Vec<Element>, DeckError> {
    container.set_inner_html("");
    let mut dots = Vec::with_capacity(slide_count);
    for i in 0..slide_count {
        let dot = document
            .create_element("div")
            .map_err(|_| DeckError::MissingElement("div".to_string()))?;
        dot.set_class_name(&classes.nav_dot);
        // Lets the dot double as an accessible jump target
        if let Err(e) = dot.set_attribute("aria-label", &format!("Slide {}", i + 1)) {
            tracing::warn!(slide = i, error = ?e, "nav dot label failed");
        }
        container
            .append_child(&dot)
            .map_err(|_| DeckError::MissingElement(format!("nav dot {}", i)))?;
        dots.push(dot);
    }
    tracing::debug!(count = dots.len(), "nav dots built");
    Ok(dots)
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_one_dot_per_slide() {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        container.set_inner_html("<div class=\"nav-dot\"></div>");

        let dots = build_nav_dots(&document, &container, 9, &ClassNames::default()).unwrap();
        assert_eq!(dots.len(), 9);
        assert_eq!(container.child_element_count(), 9);
        assert!(dots.iter().all(|dot| dot.class_name() == "nav-dot"));
    }

    #[wasm_bindgen_test]
    fn test_dots_carry_slide_labels() {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();

        let dots = build_nav_dots(&document, &container, 3, &ClassNames::default()).unwrap();
        let labels: Vec<_> = dots
            .iter()
            .filter_map(|dot| dot.get_attribute("aria-label"))
            .collect();
        assert_eq!(labels, vec!["Slide 1", "Slide 2", "Slide 3"]);
    }
}
