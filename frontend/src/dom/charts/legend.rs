use deck_shared::theme::{ChartTheme, Rgba};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::style::{rgba, text_style};

const SWATCH: i32 = 12;
const SWATCH_GAP: i32 = 6;
const ITEM_GAP: u32 = 16;

/// Legend entry: label and swatch color
pub type LegendItem = (String, RGBAColor);

/// Greedy left-to-right wrapping of item widths into rows no wider than `max`
pub fn wrap_rows(widths: &[u32], max: u32, gap: u32) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut row_width = 0u32;
    for (i, &width) in widths.iter().enumerate() {
        match rows.last_mut() {
            Some(row) if row_width + gap + width <= max => {
                row.push(i);
                row_width += gap + width;
            }
            _ => {
                rows.push(vec![i]);
                row_width = width;
            }
        }
    }
    rows
}

/// Centered swatch legend, drawn row by row
pub struct Legend<'a> {
    items: &'a [LegendItem],
    widths: Vec<u32>,
    rows: Vec<Vec<usize>>,
    row_height: u32,
    padding: u32,
    style: TextStyle<'static>,
}

impl<'a> Legend<'a> {
    pub fn layout<DB: DrawingBackend>(
        area: &DrawingArea<DB, Shift>,
        items: &'a [LegendItem],
        theme: &ChartTheme,
        font_size: u32,
    ) -> Self {
        let style = text_style(theme, font_size, theme.legend.label_color);
        let widths: Vec<u32> = items
            .iter()
            .map(|(label, _)| {
                let (text_width, _) = area.estimate_text_size(label, &style).unwrap_or((0, 0));
                (SWATCH + SWATCH_GAP) as u32 + text_width
            })
            .collect();
        let (width, _) = area.dim_in_pixel();
        let rows = wrap_rows(&widths, width.saturating_sub(theme.legend.padding * 2), ITEM_GAP);
        Self {
            items,
            widths,
            rows,
            row_height: font_size.max(SWATCH as u32) + 6,
            padding: theme.legend.padding,
            style,
        }
    }

    /// Pixel height the legend strip needs
    pub fn height(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        self.rows.len() as u32 * self.row_height + self.padding
    }

    pub fn draw<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let (width, _) = area.dim_in_pixel();
        let label_style = self.style.pos(Pos::new(HPos::Left, VPos::Center));
        for (row_index, row) in self.rows.iter().enumerate() {
            let gaps = ITEM_GAP * (row.len() as u32 - 1);
            let row_width: u32 = row.iter().map(|&i| self.widths[i]).sum::<u32>() + gaps;
            let mut x = (width.saturating_sub(row_width) / 2) as i32;
            let top = self.padding / 2 + row_index as u32 * self.row_height;
            let y = (top + self.row_height / 2) as i32;
            for &i in row {
                let (label, color) = &self.items[i];
                area.draw(&Rectangle::new(
                    [(x, y - SWATCH / 2), (x + SWATCH, y + SWATCH / 2)],
                    color.filled(),
                ))?;
                let anchor = (x + SWATCH + SWATCH_GAP, y);
                area.draw(&Text::new(label.clone(), anchor, label_style.clone()))?;
                x += (self.widths[i] + ITEM_GAP) as i32;
            }
        }
        Ok(())
    }
}

/// Items for a donut: one per category, colored like its slice
pub fn category_items(labels: &[&str], colors: impl Fn(usize) -> Rgba) -> Vec<LegendItem> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.to_string(), rgba(colors(i))))
        .collect()
}
