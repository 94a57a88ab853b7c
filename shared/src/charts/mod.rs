//! Lazy, once-per-slide chart construction.
//!
//! Chart definitions are static data (see [`catalog`]); drawing is delegated
//! to a [`ChartRenderer`] so the activator runs without a canvas.

pub mod catalog;

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::DeckError;
use crate::theme::{ChartTheme, Rgba};

/// Visualization shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Donut,
    Bar,
    Line,
}

/// Named display surface a chart binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartMount {
    AudiencePie,
    CostPie,
    ProfitBar,
    TicketLine,
    RevenueMix,
}

impl ChartMount {
    /// DOM id of the canvas element
    pub fn element_id(&self) -> &'static str {
        match self {
            ChartMount::AudiencePie => "audiencePieChart",
            ChartMount::CostPie => "costPieChart",
            ChartMount::ProfitBar => "profitBarChart",
            ChartMount::TicketLine => "ticketLineChart",
            ChartMount::RevenueMix => "revenueMixChart",
        }
    }
}

/// Sign bucket of a data point, used for per-point coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSign {
    Positive,
    Zero,
    Negative,
}

impl ValueSign {
    pub fn classify(value: f64) -> Self {
        if value > 0.0 {
            ValueSign::Positive
        } else if value == 0.0 {
            ValueSign::Zero
        } else {
            ValueSign::Negative
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPalette {
    pub positive: Rgba,
    pub zero: Rgba,
    pub negative: Rgba,
}

/// How a series picks the color for each point
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// One color per category, cycling when shorter than the data
    PerPoint(Vec<Rgba>),
    BySign(SignPalette),
}

impl Paint {
    pub fn color_at(&self, index: usize, value: f64) -> Rgba {
        match self {
            Paint::Solid(color) => *color,
            Paint::PerPoint(colors) if colors.is_empty() => crate::theme::palette::WHITE_20,
            Paint::PerPoint(colors) => colors[index % colors.len()],
            Paint::BySign(palette) => match ValueSign::classify(value) {
                ValueSign::Positive => palette.positive,
                ValueSign::Zero => palette.zero,
                ValueSign::Negative => palette.negative,
            },
        }
    }
}

/// One numeric series
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: Option<&'static str>,
    pub values: Vec<f64>,
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: f64,
    /// Line charts: shade the area under the line
    pub area: bool,
    /// Line charts: dashed stroke
    pub dashed: bool,
    pub point_radius: u32,
}

impl Dataset {
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
}

/// Value-axis tick label format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    Plain,
    /// `188000` → `"188K"`
    Thousands,
    /// Value followed by a unit, e.g. `"40 คน"`
    Suffix(&'static str),
}

impl TickFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::Plain => format!("{}", value),
            TickFormat::Thousands => format!("{:.0}K", value / 1000.0),
            TickFormat::Suffix(unit) => format!("{}{}", value, unit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub max: Option<f64>,
    pub ticks: TickFormat,
    pub tick_font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartOptions {
    /// Donut hole as a fraction of the radius
    pub cutout: Option<f64>,
    pub legend_position: LegendPosition,
    /// Overrides the theme legend font size
    pub legend_font_size: Option<u32>,
    pub category_font_size: Option<u32>,
    pub value_axis: Option<ValueAxis>,
}

/// Everything needed to draw one visualization
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDefinition {
    pub mount: ChartMount,
    pub kind: ChartKind,
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

/// Draws chart definitions onto their mount points
pub trait ChartRenderer {
    fn render(&mut self, chart: &ChartDefinition, theme: &ChartTheme) -> Result<(), DeckError>;
}

/// Builds each slide's charts at most once per session
pub struct ChartActivator<R: ChartRenderer> {
    renderer: R,
    theme: ChartTheme,
    built: HashSet<usize>,
}

impl<R: ChartRenderer> ChartActivator<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_theme(renderer, ChartTheme::default())
    }

    pub fn with_theme(renderer: R, theme: ChartTheme) -> Self {
        Self {
            renderer,
            theme,
            built: HashSet::new(),
        }
    }

    /// Construct the charts of `slide` unless already done.
    ///
    /// Returns how many charts were drawn by this call. The slide is marked
    /// before drawing, so a chart that fails is logged and not retried.
    pub fn init_charts(&mut self, slide: usize) -> usize {
        if !self.built.insert(slide) {
            return 0;
        }

        let charts = catalog::charts_for_slide(slide);
        if charts.is_empty() {
            debug!(slide, "no charts for slide");
            return 0;
        }

        let mut drawn = 0;
        for chart in &charts {
            match self.renderer.render(chart, &self.theme) {
                Ok(()) => {
                    drawn += 1;
                    info!(slide, mount = chart.mount.element_id(), "chart built");
                }
                Err(e) => {
                    warn!(slide, mount = chart.mount.element_id(), error = %e, "chart failed")
                }
            }
        }
        drawn
    }

    pub fn is_built(&self, slide: usize) -> bool {
        self.built.contains(&slide)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::RecordingRenderer;
    use super::*;
    use crate::theme::palette;

    #[test]
    fn test_init_charts_is_idempotent() {
        let mut charts = ChartActivator::new(RecordingRenderer::default());
        assert_eq!(charts.init_charts(8), 2);
        assert_eq!(charts.init_charts(8), 0);
        assert_eq!(charts.renderer().drawn.len(), 2);
    }

    #[test]
    fn test_cost_slide_builds_single_donut() {
        let mut charts = ChartActivator::new(RecordingRenderer::default());
        assert_eq!(charts.init_charts(6), 1);

        let drawn = &charts.renderer().drawn;
        assert_eq!(drawn.len(), 1);
        let cost = &drawn[0];
        assert_eq!(cost.mount, ChartMount::CostPie);
        assert_eq!(cost.kind, ChartKind::Donut);
        assert_eq!(cost.labels.len(), 3);
        assert_eq!(cost.datasets[0].values.len(), 3);
        assert_eq!(cost.datasets[0].total(), 160_000.0);
    }

    #[test]
    fn test_unknown_slide_is_marked_without_drawing() {
        let mut charts = ChartActivator::new(RecordingRenderer::default());
        assert_eq!(charts.init_charts(0), 0);
        assert_eq!(charts.init_charts(99), 0);
        assert!(charts.is_built(0));
        assert!(charts.is_built(99));
        assert!(charts.renderer().drawn.is_empty());
    }

    #[test]
    fn test_failed_chart_is_not_retried() {
        let renderer = RecordingRenderer {
            fail_on: Some(ChartMount::TicketLine),
            ..RecordingRenderer::default()
        };
        let mut charts = ChartActivator::new(renderer);

        // The revenue mix donut on the same slide still draws
        assert_eq!(charts.init_charts(8), 1);
        assert_eq!(charts.renderer().drawn[0].mount, ChartMount::RevenueMix);

        charts.renderer_mut().fail_on = None;
        assert_eq!(charts.init_charts(8), 0);
    }

    #[test]
    fn test_value_sign_classification() {
        assert_eq!(ValueSign::classify(51_000.0), ValueSign::Positive);
        assert_eq!(ValueSign::classify(0.0), ValueSign::Zero);
        assert_eq!(ValueSign::classify(-0.0), ValueSign::Zero);
        assert_eq!(ValueSign::classify(-1.0), ValueSign::Negative);
    }

    #[test]
    fn test_paint_by_sign_and_per_point() {
        let signs = Paint::BySign(SignPalette {
            positive: palette::GREEN,
            zero: palette::WHITE,
            negative: palette::RED,
        });
        assert_eq!(signs.color_at(0, 10.0), palette::GREEN);
        assert_eq!(signs.color_at(1, 0.0), palette::WHITE);
        assert_eq!(signs.color_at(2, -5.0), palette::RED);

        let slices = Paint::PerPoint(vec![palette::GOLD, palette::MAROON_END]);
        assert_eq!(slices.color_at(0, 1.0), palette::GOLD);
        assert_eq!(slices.color_at(3, 1.0), palette::MAROON_END);
    }

    #[test]
    fn test_tick_formats() {
        assert_eq!(TickFormat::Thousands.format(188_000.0), "188K");
        assert_eq!(TickFormat::Thousands.format(0.0), "0K");
        assert_eq!(TickFormat::Suffix(" คน").format(40.0), "40 คน");
        assert_eq!(TickFormat::Plain.format(12.5), "12.5");
    }
}
