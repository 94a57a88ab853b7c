use std::fmt::Display;

use deck_shared::charts::ChartMount;
use deck_shared::theme::{ChartTheme, Rgba};
use deck_shared::DeckError;
use plotters::prelude::*;
use plotters::style::TextStyle;

pub fn rgba(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

/// Drop the alpha of an already flattened color
pub fn opaque(color: Rgba) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

pub fn text_style(theme: &ChartTheme, size: u32, color: Rgba) -> TextStyle<'static> {
    (theme.font_family, size as f64).into_font().color(&rgba(color))
}

pub fn render_error(mount: ChartMount, error: impl Display) -> DeckError {
    DeckError::Render {
        mount: mount.element_id().to_string(),
        reason: error.to_string(),
    }
}
