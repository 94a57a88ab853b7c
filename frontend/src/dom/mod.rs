//! Bindings to the slide markup already present in the page.

pub mod charts;
pub mod nav_dots;
pub mod page_chrome;
pub mod slide_surface;

pub use charts::CanvasChartRenderer;
pub use nav_dots::build_nav_dots;
pub use page_chrome::PageChrome;
pub use slide_surface::DomSurface;
