use deck_shared::charts::{ChartDefinition, ChartKind, ChartMount, ChartRenderer};
use deck_shared::theme::ChartTheme;
use deck_shared::DeckError;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use super::cartesian::draw_cartesian;
use super::donut::draw_donut;
use super::style::render_error;

/// Fallback drawing size for canvases not laid out yet
const DEFAULT_SIZE: (u32, u32) = (640, 360);

/// Draws chart definitions onto `<canvas>` mount points found by id
pub struct CanvasChartRenderer {
    document: Document,
    rendered: Vec<ChartMount>,
}

impl CanvasChartRenderer {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            rendered: Vec::new(),
        }
    }

    /// Mounts drawn so far, in order
    pub fn rendered(&self) -> &[ChartMount] {
        &self.rendered
    }

    fn canvas(&self, mount: ChartMount) -> Result<HtmlCanvasElement, DeckError> {
        self.document
            .get_element_by_id(mount.element_id())
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| DeckError::MountNotFound(mount.element_id().to_string()))
    }
}

/// Match the drawing buffer to the laid-out size so text stays crisp
fn fit_canvas(canvas: &HtmlCanvasElement) {
    let (width, height) = match (canvas.client_width(), canvas.client_height()) {
        (w, h) if w > 0 && h > 0 => (w as u32, h as u32),
        _ => DEFAULT_SIZE,
    };
    canvas.set_width(width);
    canvas.set_height(height);
}

impl ChartRenderer for CanvasChartRenderer {
    fn render(&mut self, chart: &ChartDefinition, theme: &ChartTheme) -> Result<(), DeckError> {
        let canvas = self.canvas(chart.mount)?;
        fit_canvas(&canvas);

        let backend = CanvasBackend::with_canvas_object(canvas)
            .ok_or_else(|| render_error(chart.mount, "2d context unavailable"))?;
        let root = backend.into_drawing_area();

        let drawn = match chart.kind {
            ChartKind::Donut => draw_donut(&root, chart, theme),
            ChartKind::Bar | ChartKind::Line => draw_cartesian(&root, chart, theme),
        };
        drawn.map_err(|e| render_error(chart.mount, e))?;
        root.present().map_err(|e| render_error(chart.mount, e))?;

        self.rendered.push(chart.mount);
        Ok(())
    }
}
