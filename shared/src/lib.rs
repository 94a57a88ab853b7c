//! Platform-free logic for a browser slide presentation.
//!
//! [`deck::Deck`] ties the [`navigation`] controller to the [`charts`]
//! activator. Rendering environments plug in through
//! [`navigation::PresentationSurface`] and [`charts::ChartRenderer`].

pub mod charts;
pub mod config;
pub mod cursor;
pub mod deck;
pub mod error;
pub mod fullscreen;
pub mod input;
pub mod navigation;
pub mod theme;

pub use charts::{ChartActivator, ChartDefinition, ChartKind, ChartMount, ChartRenderer};
pub use config::DeckConfig;
pub use deck::Deck;
pub use error::DeckError;
pub use input::{DeckAction, InputMap, PointerInput};
pub use navigation::{
    NavOutcome, NavigationController, PresentationSurface, SurfaceTarget, Transition,
};
