//! DOM event wiring. Listeners live for the page session.

pub mod cursor_idle;
pub mod fullscreen;
pub mod navigation;
