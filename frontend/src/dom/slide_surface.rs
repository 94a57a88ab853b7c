use deck_shared::config::ClassNames;
use deck_shared::{DeckError, PresentationSurface, SurfaceTarget};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

/// Add or remove a class, logging the rare DOM refusal
pub fn set_class(element: &Element, class: &str, on: bool) {
    let class_list = element.class_list();
    let result = if on {
        class_list.add_1(class)
    } else {
        class_list.remove_1(class)
    };
    if let Err(e) = result {
        tracing::warn!(class, error = ?e, "class toggle failed");
    }
}

pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The deck's slides, steps, dots and counter in the live document
pub struct DomSurface {
    slides: Vec<Element>,
    steps: Vec<Vec<Element>>,
    dots: Vec<Element>,
    counter: Option<Element>,
    classes: ClassNames,
}

impl DomSurface {
    /// Collect `.slide` containers and their `.step-reveal` children in
    /// document order
    pub fn from_document(
        document: &Document,
        classes: &ClassNames,
        counter_id: &str,
    ) -> Result<Self, DeckError> {
        let slide_selector = format!(".{}", classes.slide);
        let step_selector = format!(".{}", classes.step);

        let slides = document
            .query_selector_all(&slide_selector)
            .map(|list| elements(&list))
            .map_err(|_| DeckError::MissingElement(slide_selector.clone()))?;
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        let steps = slides
            .iter()
            .map(|slide| {
                slide
                    .query_selector_all(&step_selector)
                    .map(|list| elements(&list))
                    .unwrap_or_default()
            })
            .collect();

        let counter = document.get_element_by_id(counter_id);
        if counter.is_none() {
            tracing::warn!(counter_id, "slide counter element missing");
        }

        Ok(Self {
            slides,
            steps,
            dots: Vec::new(),
            counter,
            classes: classes.clone(),
        })
    }

    /// Attach indicator dots, one per slide in order
    pub fn with_dots(mut self, dots: Vec<Element>) -> Self {
        self.dots = dots;
        self
    }

    fn target(&self, target: SurfaceTarget) -> Option<&Element> {
        match target {
            SurfaceTarget::Slide(i) => self.slides.get(i),
            SurfaceTarget::Indicator(i) => self.dots.get(i),
        }
    }
}

impl PresentationSurface for DomSurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn step_count(&self, slide: usize) -> usize {
        self.steps.get(slide).map(Vec::len).unwrap_or(0)
    }

    fn activate(&mut self, target: SurfaceTarget) {
        if let Some(element) = self.target(target) {
            set_class(element, &self.classes.active, true);
        }
    }

    fn deactivate(&mut self, target: SurfaceTarget) {
        if let Some(element) = self.target(target) {
            set_class(element, &self.classes.active, false);
        }
    }

    fn set_text(&mut self, text: &str) {
        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(text));
        }
    }

    fn mark_revealed(&mut self, slide: usize, step: usize, revealed: bool) {
        if let Some(element) = self.steps.get(slide).and_then(|steps| steps.get(step)) {
            set_class(element, &self.classes.revealed, revealed);
        }
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use deck_shared::NavigationController;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture(document: &Document) -> Element {
        let root = document.create_element("div").unwrap();
        root.set_inner_html(
            r#"<section class="slide">
                 <p class="step-reveal">a</p><p class="step-reveal">b</p>
               </section>
               <section class="slide"></section>
               <span id="slideCounter"></span>"#,
        );
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    fn test_surface_reflects_navigation() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = fixture(&document);

        let surface =
            DomSurface::from_document(&document, &ClassNames::default(), "slideCounter").unwrap();
        assert_eq!(surface.slide_count(), 2);
        assert_eq!(surface.step_count(0), 2);
        assert_eq!(surface.step_count(1), 0);

        let mut nav = NavigationController::new(surface).unwrap();
        nav.start();
        nav.advance();

        let first_step = document.query_selector(".step-reveal").unwrap().unwrap();
        assert!(first_step.class_list().contains("revealed"));
        let counter = document.get_element_by_id("slideCounter").unwrap();
        assert_eq!(counter.text_content().unwrap(), "1 / 2");

        root.remove();
    }
}
