use deck_shared::charts::{ChartDefinition, ChartKind, Dataset, TickFormat};
use deck_shared::theme::ChartTheme;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::legend::{Legend, LegendItem};
use super::style::{rgba, text_style};

/// Share of each category slot covered by its bar group
const BAR_GROUP_WIDTH: f64 = 0.8;
/// Dash and gap length of dashed series, in pixels
const DASH_PX: u32 = 4;
const GAP_PX: u32 = 4;

type Plot<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Upper bound of the value axis: explicit max, else 10% headroom over the data
pub fn value_ceiling(datasets: &[Dataset], explicit: Option<f64>) -> f64 {
    if let Some(max) = explicit {
        return max;
    }
    let peak = datasets
        .iter()
        .flat_map(|d| d.values.iter().copied())
        .fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        1.0
    } else {
        peak * 1.1
    }
}

/// Horizontal extent of bar `series` within category `category`
pub fn bar_span(category: usize, series: usize, series_count: usize) -> (f64, f64) {
    let count = series_count.max(1) as f64;
    let width = BAR_GROUP_WIDTH / count;
    let left = category as f64 + (1.0 - BAR_GROUP_WIDTH) / 2.0 + series as f64 * width;
    (left, left + width)
}

fn legend_items(chart: &ChartDefinition) -> Vec<LegendItem> {
    chart
        .datasets
        .iter()
        .filter_map(|d| {
            let first = d.values.first().copied().unwrap_or(0.0);
            d.label.map(|label| (label.to_string(), rgba(d.stroke.color_at(0, first))))
        })
        .collect()
}

pub fn draw_cartesian<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartDefinition,
    theme: &ChartTheme,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let items = legend_items(chart);
    let legend = Legend::layout(root, &items, theme, theme.legend.font_size);
    let (legend_area, plot_area) = root.split_vertically(legend.height());
    legend.draw(&legend_area)?;

    let categories = chart.labels.len();
    let axis = chart.options.value_axis;
    let ticks = axis.map(|a| a.ticks).unwrap_or(TickFormat::Plain);
    let tick_font = axis.map(|a| a.tick_font_size).unwrap_or(10);
    let y_max = value_ceiling(&chart.datasets, axis.and_then(|a| a.max));

    let x_range = match chart.kind {
        ChartKind::Line => -0.5..(categories as f64 - 0.5),
        _ => 0.0..categories as f64,
    };

    let mut plot = ChartBuilder::on(&plot_area)
        .margin(10)
        .x_label_area_size(28)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range, 0.0..y_max)?;

    let tick_style = text_style(theme, tick_font, theme.tick_color);
    plot.configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|v| ticks.format(*v))
        .y_labels(6)
        .label_style(tick_style)
        .axis_style(&rgba(theme.grid_color))
        .bold_line_style(&rgba(theme.grid_color))
        .light_line_style(&TRANSPARENT)
        .draw()?;

    match chart.kind {
        ChartKind::Bar => draw_bars(&plot, chart)?,
        _ => draw_lines(&mut plot, chart)?,
    }

    draw_category_labels(&plot, root, chart, theme)
}

fn draw_bars<DB: DrawingBackend>(
    plot: &Plot<'_, DB>,
    chart: &ChartDefinition,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let area = plot.plotting_area();
    let series_count = chart.datasets.len();
    for (series, dataset) in chart.datasets.iter().enumerate() {
        for (category, &value) in dataset.values.iter().enumerate() {
            let (left, right) = bar_span(category, series, series_count);
            let corners = [(left, 0.0), (right, value)];
            let fill = rgba(dataset.fill.color_at(category, value));
            let stroke = rgba(dataset.stroke.color_at(category, value));
            area.draw(&Rectangle::new(corners, fill.filled()))?;
            let outline = stroke.stroke_width(dataset.stroke_width.ceil() as u32);
            area.draw(&Rectangle::new(corners, outline))?;
        }
    }
    Ok(())
}

fn draw_lines<DB: DrawingBackend>(
    plot: &mut Plot<'_, DB>,
    chart: &ChartDefinition,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    for dataset in &chart.datasets {
        let points: Vec<(f64, f64)> = dataset
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();
        let stroke = rgba(dataset.stroke.color_at(0, 0.0));
        let line_style = stroke.stroke_width(dataset.stroke_width.ceil() as u32);

        if dataset.area {
            let fill = rgba(dataset.fill.color_at(0, 0.0));
            plot.draw_series(AreaSeries::new(points.iter().copied(), 0.0, fill.filled()))?;
        }

        if dataset.dashed {
            plot.draw_series(DashedLineSeries::new(
                points.iter().copied(),
                DASH_PX,
                GAP_PX,
                line_style,
            ))?;
        } else {
            plot.draw_series(LineSeries::new(points.iter().copied(), line_style))?;
        }

        if dataset.point_radius > 0 {
            plot.draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, dataset.point_radius, stroke.filled())),
            )?;
        }
    }
    Ok(())
}

fn draw_category_labels<DB: DrawingBackend>(
    plot: &Plot<'_, DB>,
    root: &DrawingArea<DB, Shift>,
    chart: &ChartDefinition,
    theme: &ChartTheme,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let font = chart.options.category_font_size.unwrap_or(theme.legend.font_size);
    let style = text_style(theme, font, theme.tick_color).pos(Pos::new(HPos::Center, VPos::Top));
    let (root_x, root_y) = root.get_base_pixel();
    for (i, label) in chart.labels.iter().enumerate() {
        let x = match chart.kind {
            ChartKind::Line => i as f64,
            _ => i as f64 + 0.5,
        };
        let (px, py) = plot.backend_coord(&(x, 0.0));
        root.draw(&Text::new(label.to_string(), (px - root_x, py - root_y + 6), style.clone()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_shared::charts::catalog;

    #[test]
    fn test_value_ceiling_prefers_explicit_max() {
        let chart = &catalog::charts_for_slide(catalog::TICKETS_SLIDE)[0];
        assert_eq!(value_ceiling(&chart.datasets, Some(100.0)), 100.0);
    }

    #[test]
    fn test_value_ceiling_adds_headroom() {
        let chart = &catalog::charts_for_slide(catalog::PROFIT_SLIDE)[0];
        let ceiling = value_ceiling(&chart.datasets, None);
        assert!((ceiling - 334_000.0 * 1.1).abs() < 1e-6);
        assert_eq!(value_ceiling(&[], None), 1.0);
    }

    #[test]
    fn test_bar_spans_stay_inside_category() {
        let (l0, r0) = bar_span(2, 0, 2);
        let (l1, r1) = bar_span(2, 1, 2);
        assert!((l0 - 2.1).abs() < 1e-12);
        assert!((r0 - l1).abs() < 1e-12);
        assert!((r1 - 2.9).abs() < 1e-12);
    }
}
