//! Canvas rendering of the deck's chart catalog with `plotters`.

pub mod canvas_renderer;
pub mod cartesian;
pub mod donut;
pub mod legend;
pub mod style;

pub use canvas_renderer::CanvasChartRenderer;
