//! Slide navigation and progressive step reveal.
//!
//! The controller owns all navigation state and pushes display changes to a
//! [`PresentationSurface`]. Within a slide the revealed steps always form a
//! prefix in document order: `advance` reveals the earliest hidden step and
//! `retreat` hides the last revealed one, so a single count per slide is
//! enough to describe its reveal state.

use tracing::{debug, trace};

use crate::error::DeckError;

/// Element of the surface that carries an "active" flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceTarget {
    /// The slide container itself
    Slide(usize),
    /// The indicator dot representing the slide
    Indicator(usize),
}

/// Rendering environment driven by the controller.
///
/// Implementations only reflect state; they never decide navigation.
pub trait PresentationSurface {
    /// Number of slides, fixed for the lifetime of the surface
    fn slide_count(&self) -> usize;

    /// Number of step elements on `slide`
    fn step_count(&self, slide: usize) -> usize;

    fn activate(&mut self, target: SurfaceTarget);

    fn deactivate(&mut self, target: SurfaceTarget);

    /// Replace the position counter text
    fn set_text(&mut self, text: &str);

    fn mark_revealed(&mut self, slide: usize, step: usize, revealed: bool);
}

/// Direction a slide is entered from; only affects step visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Arrive collapsed, ready for progressive reveal
    #[default]
    Forward,
    /// Arrive fully expanded
    Backward,
}

/// What a navigation operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    StepRevealed { slide: usize, step: usize },
    StepHidden { slide: usize, step: usize },
    Moved { from: usize, to: usize },
    Unchanged,
}

impl NavOutcome {
    /// Slide that was landed on, if the operation changed slides
    pub fn landed_on(&self) -> Option<usize> {
        match self {
            NavOutcome::Moved { to, .. } => Some(*to),
            _ => None,
        }
    }
}

/// Navigation state for one deck
#[derive(Debug, Clone, PartialEq)]
struct NavigationState {
    current: usize,
    current_active: bool,
    step_counts: Vec<usize>,
    revealed: Vec<usize>,
}

impl NavigationState {
    fn new(step_counts: Vec<usize>) -> Self {
        let revealed = vec![0; step_counts.len()];
        Self {
            current: 0,
            current_active: false,
            step_counts,
            revealed,
        }
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.step_counts.len() - 1)
    }

    fn hidden_on_current(&self) -> usize {
        self.step_counts[self.current] - self.revealed[self.current]
    }
}

/// Drives slide activation, step reveal and the counter on a surface
pub struct NavigationController<S: PresentationSurface> {
    surface: S,
    state: NavigationState,
}

impl<S: PresentationSurface> NavigationController<S> {
    /// Snapshot the surface shape. Fails when the surface has no slides.
    pub fn new(surface: S) -> Result<Self, DeckError> {
        let slide_count = surface.slide_count();
        if slide_count == 0 {
            return Err(DeckError::EmptyDeck);
        }
        let step_counts = (0..slide_count).map(|i| surface.step_count(i)).collect();
        Ok(Self {
            surface,
            state: NavigationState::new(step_counts),
        })
    }

    /// Show slide 0 collapsed. Nothing is active before this runs.
    pub fn start(&mut self) -> NavOutcome {
        self.go_to(0, Transition::Forward)
    }

    /// Reveal the next step, or move forward when the slide has none hidden
    pub fn advance(&mut self) -> NavOutcome {
        let slide = self.state.current;
        if self.state.hidden_on_current() > 0 {
            let step = self.state.revealed[slide];
            self.state.revealed[slide] += 1;
            self.surface.mark_revealed(slide, step, true);
            trace!(slide, step, "step revealed");
            return NavOutcome::StepRevealed { slide, step };
        }
        if slide + 1 < self.slide_count() {
            return self.go_to(slide + 1, Transition::Forward);
        }
        NavOutcome::Unchanged
    }

    /// Hide the last revealed step, or move back when nothing is revealed
    pub fn retreat(&mut self) -> NavOutcome {
        let slide = self.state.current;
        if self.state.revealed[slide] > 0 {
            self.state.revealed[slide] -= 1;
            let step = self.state.revealed[slide];
            self.surface.mark_revealed(slide, step, false);
            trace!(slide, step, "step hidden");
            return NavOutcome::StepHidden { slide, step };
        }
        if slide > 0 {
            return self.go_to(slide - 1, Transition::Backward);
        }
        NavOutcome::Unchanged
    }

    /// Jump to `target`, clamped into the deck
    pub fn go_to(&mut self, target: usize, transition: Transition) -> NavOutcome {
        if target == self.state.current && self.state.current_active {
            return NavOutcome::Unchanged;
        }

        let from = self.state.current;
        self.surface.deactivate(SurfaceTarget::Slide(from));
        self.surface.deactivate(SurfaceTarget::Indicator(from));

        let to = self.state.clamp(target);
        self.state.current = to;
        self.state.current_active = true;

        self.surface.activate(SurfaceTarget::Slide(to));
        self.surface.activate(SurfaceTarget::Indicator(to));
        let counter = self.counter_text();
        self.surface.set_text(&counter);

        let revealed = transition == Transition::Backward;
        let steps = self.state.step_counts[to];
        for step in 0..steps {
            self.surface.mark_revealed(to, step, revealed);
        }
        self.state.revealed[to] = if revealed { steps } else { 0 };

        debug!(from, to, ?transition, "slide changed");
        NavOutcome::Moved { from, to }
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    pub fn slide_count(&self) -> usize {
        self.state.step_counts.len()
    }

    /// `"position / total"`, 1-based
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.state.current + 1, self.slide_count())
    }

    pub fn step_count(&self, slide: usize) -> usize {
        self.state.step_counts.get(slide).copied().unwrap_or(0)
    }

    pub fn revealed_count(&self, slide: usize) -> usize {
        self.state.revealed.get(slide).copied().unwrap_or(0)
    }

    pub fn is_step_revealed(&self, slide: usize, step: usize) -> bool {
        step < self.revealed_count(slide)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
