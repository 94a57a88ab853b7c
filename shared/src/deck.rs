//! A running presentation: navigation plus chart activation.

use crate::charts::{ChartActivator, ChartRenderer};
use crate::error::DeckError;
use crate::input::DeckAction;
use crate::navigation::{NavOutcome, NavigationController, PresentationSurface, Transition};

/// Owns the navigation controller and activates charts on every landing
pub struct Deck<S: PresentationSurface, R: ChartRenderer> {
    navigation: NavigationController<S>,
    charts: ChartActivator<R>,
}

impl<S: PresentationSurface, R: ChartRenderer> Deck<S, R> {
    pub fn new(surface: S, renderer: R) -> Result<Self, DeckError> {
        Ok(Self {
            navigation: NavigationController::new(surface)?,
            charts: ChartActivator::new(renderer),
        })
    }

    /// Activate the first slide and build its charts
    pub fn start(&mut self) -> NavOutcome {
        let outcome = self.navigation.start();
        self.after(outcome)
    }

    pub fn advance(&mut self) -> NavOutcome {
        let outcome = self.navigation.advance();
        self.after(outcome)
    }

    pub fn retreat(&mut self) -> NavOutcome {
        let outcome = self.navigation.retreat();
        self.after(outcome)
    }

    pub fn go_to(&mut self, target: usize, transition: Transition) -> NavOutcome {
        let outcome = self.navigation.go_to(target, transition);
        self.after(outcome)
    }

    /// Run a navigation action. Fullscreen is handled outside the deck and
    /// yields [`NavOutcome::Unchanged`].
    pub fn dispatch(&mut self, action: DeckAction) -> NavOutcome {
        match action {
            DeckAction::Advance => self.advance(),
            DeckAction::Retreat => self.retreat(),
            DeckAction::GoTo(slide) => self.go_to(slide, Transition::Forward),
            DeckAction::ToggleFullscreen => NavOutcome::Unchanged,
        }
    }

    pub fn navigation(&self) -> &NavigationController<S> {
        &self.navigation
    }

    pub fn charts(&self) -> &ChartActivator<R> {
        &self.charts
    }

    pub fn current(&self) -> usize {
        self.navigation.current()
    }

    fn after(&mut self, outcome: NavOutcome) -> NavOutcome {
        if let Some(slide) = outcome.landed_on() {
            self.charts.init_charts(slide);
        }
        outcome
    }
}
