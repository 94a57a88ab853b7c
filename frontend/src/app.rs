use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Context};
use deck_shared::cursor::CursorIdle;
use deck_shared::fullscreen::FullscreenToggle;
use deck_shared::{Deck, DeckAction, DeckConfig, InputMap, PresentationSurface};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::Document;

use crate::dom::{build_nav_dots, CanvasChartRenderer, DomSurface, PageChrome};
use crate::listeners;
use crate::services::{load_config, logging, BrowserFullscreen, Logger};

pub type SharedDeck = Rc<RefCell<Deck<DomSurface, CanvasChartRenderer>>>;
pub type SharedFullscreen = Rc<RefCell<FullscreenSession>>;
pub type SharedCursor = Rc<RefCell<CursorSession>>;

/// Fullscreen state plus the platform API and chrome it drives
pub struct FullscreenSession {
    toggle: FullscreenToggle,
    api: BrowserFullscreen,
    chrome: PageChrome,
}

impl FullscreenSession {
    pub fn toggle(&mut self) -> bool {
        self.toggle.toggle(&self.api, &mut self.chrome)
    }

    pub fn sync(&mut self) {
        self.toggle.sync(&self.api, &mut self.chrome);
    }

    pub fn is_active(&self) -> bool {
        self.toggle.is_active()
    }

    pub fn chrome(&self) -> &PageChrome {
        &self.chrome
    }

    pub fn change_event(&self) -> Option<&'static str> {
        self.api.change_event()
    }

    pub fn document(&self) -> &Document {
        self.api.document()
    }
}

pub struct CursorSession {
    pub idle: CursorIdle,
    /// Pending hide; replacing it cancels the old timer
    pub pending: Option<Timeout>,
}

/// Cloneable handle the event listeners act through
#[derive(Clone)]
pub struct Controls {
    deck: SharedDeck,
    fullscreen: SharedFullscreen,
}

impl Controls {
    pub fn perform(&self, action: DeckAction) {
        match action {
            DeckAction::ToggleFullscreen => {
                self.fullscreen.borrow_mut().toggle();
            }
            _ => {
                let outcome = self.deck.borrow_mut().dispatch(action);
                tracing::trace!(?action, ?outcome, "action performed");
            }
        }
    }
}

/// A booted presentation and the listeners keeping it interactive
pub struct Presentation {
    pub deck: SharedDeck,
    pub fullscreen: SharedFullscreen,
    listeners: Vec<EventListener>,
}

impl Presentation {
    /// Keep every listener registered for the rest of the page session
    pub fn run_forever(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

pub fn boot() -> anyhow::Result<Presentation> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;

    let loaded = load_config(&document);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => DeckConfig::default(),
    };
    logging::init(&config.log_filter);
    match &loaded {
        Ok(Some(_)) => Logger::debug_with_component("config", "inline deck-config applied"),
        Ok(None) => Logger::debug_with_component("config", "no deck-config block, using defaults"),
        Err(e) => {
            Logger::warn_with_component("config", &format!("ignoring deck-config block: {}", e))
        }
    }

    boot_with(&document, &config)
}

/// Bind the deck in `document` using `config`
pub fn boot_with(document: &Document, config: &DeckConfig) -> anyhow::Result<Presentation> {
    let surface = DomSurface::from_document(document, &config.classes, &config.elements.counter)
        .context("collecting slides")?;

    let dots = match document.get_element_by_id(&config.elements.nav_dots) {
        Some(container) => {
            build_nav_dots(document, &container, surface.slide_count(), &config.classes)?
        }
        None => {
            Logger::warn_with_component("boot", "nav dot container missing");
            Vec::new()
        }
    };
    let surface = surface.with_dots(dots.clone());

    let renderer = CanvasChartRenderer::new(document.clone());
    let mut deck = Deck::new(surface, renderer)?;
    deck.start();
    let slide_count = deck.navigation().slide_count();
    let deck: SharedDeck = Rc::new(RefCell::new(deck));

    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let button = document.get_element_by_id(&config.elements.fullscreen_button);
    let fullscreen: SharedFullscreen = Rc::new(RefCell::new(FullscreenSession {
        toggle: FullscreenToggle::new(config.fullscreen_labels.clone()),
        api: BrowserFullscreen::new(document.clone()),
        chrome: PageChrome::new(body, button.clone(), &config.classes.body_fullscreen),
    }));
    let cursor: SharedCursor = Rc::new(RefCell::new(CursorSession {
        idle: CursorIdle::new(config.cursor_idle_ms),
        pending: None,
    }));

    let controls = Controls {
        deck: deck.clone(),
        fullscreen: fullscreen.clone(),
    };
    let input = InputMap::new(config.keys.clone());

    let mut registered = listeners::navigation::attach_document(
        document,
        &controls,
        &input,
        &config.interactive_selector(),
    );
    registered.extend(listeners::navigation::attach_dots(&dots, &controls, &input));
    if let Some(button) = &button {
        registered.push(listeners::navigation::attach_fullscreen_button(button, &controls, &input));
    }
    registered.push(listeners::cursor_idle::attach(document, &cursor, &fullscreen));
    registered.extend(listeners::fullscreen::attach(&fullscreen));

    Logger::info_with_component("boot", &format!("deck ready with {} slides", slide_count));

    Ok(Presentation {
        deck,
        fullscreen,
        listeners: registered,
    })
}
