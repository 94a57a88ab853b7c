use deck_shared::charts::{ChartDefinition, LegendPosition};
use deck_shared::theme::ChartTheme;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;

use super::legend::{category_items, Legend};
use super::style::opaque;

/// Gap kept between the ring and the plot edge
const RING_MARGIN: f64 = 8.0;

/// Outer and hole radius for a ring fitted into a `width` x `height` box
pub fn donut_radii(width: u32, height: u32, cutout: Option<f64>) -> (f64, f64) {
    let outer = (width.min(height) as f64 / 2.0 - RING_MARGIN).max(1.0);
    let hole = outer * cutout.unwrap_or(0.0).clamp(0.0, 0.95);
    (outer, hole)
}

pub fn draw_donut<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartDefinition,
    theme: &ChartTheme,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let Some(dataset) = chart.datasets.first() else {
        return Ok(());
    };
    // Slices are flattened onto the page backdrop; the legend reuses those colors
    let fills: Vec<_> = dataset
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| dataset.fill.color_at(i, value).over(theme.backdrop))
        .collect();

    let items = category_items(&chart.labels, |i| fills[i]);
    let font_size = chart.options.legend_font_size.unwrap_or(theme.legend.font_size);
    let legend = Legend::layout(root, &items, theme, font_size);

    let (legend_area, plot_area) = match chart.options.legend_position {
        LegendPosition::Top => root.split_vertically(legend.height()),
        LegendPosition::Bottom => {
            let (_, height) = root.dim_in_pixel();
            let (plot, legend_area) =
                root.split_vertically(height.saturating_sub(legend.height()));
            (legend_area, plot)
        }
    };
    legend.draw(&legend_area)?;

    if dataset.total() <= 0.0 {
        return Ok(());
    }

    let (width, height) = plot_area.dim_in_pixel();
    let (outer, hole) = donut_radii(width, height, chart.options.cutout);
    // Pie takes backend pixels, so it is drawn on the root with an offset center
    let (x0, y0) = plot_area.get_base_pixel();
    let center = (x0 + width as i32 / 2, y0 + height as i32 / 2);
    let colors: Vec<RGBColor> = fills.iter().map(|&color| opaque(color)).collect();
    let labels = vec![""; dataset.values.len()];

    let mut pie = Pie::new(&center, &outer, &dataset.values, &colors, &labels);
    pie.start_angle(-90.0);
    pie.donut_hole(hole);
    root.draw(&pie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_fits_smaller_side() {
        let (outer, hole) = donut_radii(400, 300, Some(0.65));
        assert_eq!(outer, 142.0);
        assert!((hole - 142.0 * 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_missing_cutout_is_a_full_pie() {
        assert_eq!(donut_radii(200, 200, None), (92.0, 0.0));
    }

    #[test]
    fn test_tiny_box_keeps_positive_radius() {
        let (outer, hole) = donut_radii(4, 4, Some(2.0));
        assert_eq!(outer, 1.0);
        assert_eq!(hole, 0.95);
    }
}
