//! # Chart Theme
//!
//! Centralized palette and chart chrome styling for the deck. Every chart in
//! the catalog draws with these constants so the slides stay visually
//! consistent with the page's maroon/gold stylesheet.
//!
//! ## Usage
//! ```rust
//! use deck_shared::theme::{palette, CHART_THEME};
//!
//! let legend = CHART_THEME.legend.label_color;
//! let accent = palette::GOLD;
//! ```

/// Straight RGBA color with alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Composite onto an opaque `backdrop`, giving an opaque color
    pub fn over(self, backdrop: Rgba) -> Self {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f64 * a + bg as f64 * (1.0 - a)).round() as u8;
        Self::rgb(mix(self.r, backdrop.r), mix(self.g, backdrop.g), mix(self.b, backdrop.b))
    }
}

/// Deck colors the charts draw with, taken from the page stylesheet
pub mod palette {
    use super::Rgba;

    pub const GOLD: Rgba = Rgba::rgb(0xd4, 0xa8, 0x43);
    pub const MAROON: Rgba = Rgba::rgb(0x56, 0x1e, 0x23);
    pub const MAROON_END: Rgba = Rgba::rgb(0xad, 0x5f, 0x6c);
    pub const GREEN: Rgba = Rgba::rgb(0x5c, 0xb8, 0x5c);
    pub const GREEN_LIGHT: Rgba = Rgba::rgb(0x9d, 0xe0, 0x9d);
    pub const RED: Rgba = Rgba::rgb(0xe0, 0x78, 0x78);
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const WHITE_20: Rgba = Rgba::rgba(0xff, 0xff, 0xff, 0.15);
}

/// Chart chrome shared by every visualization
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub font_family: &'static str,
    pub legend: LegendStyle,
    /// Page background behind the canvases; translucent slices are flattened onto it
    pub backdrop: Rgba,
    /// Axis tick labels
    pub tick_color: Rgba,
    pub grid_color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendStyle {
    pub label_color: Rgba,
    pub font_size: u32,
    pub padding: u32,
}

pub const CHART_THEME: ChartTheme = ChartTheme {
    font_family: "Sarabun",
    legend: LegendStyle {
        label_color: Rgba::rgba(255, 255, 255, 0.7),
        font_size: 11,
        padding: 12,
    },
    backdrop: palette::MAROON,
    tick_color: Rgba::rgba(255, 255, 255, 0.6),
    grid_color: Rgba::rgba(255, 255, 255, 0.05),
};

impl Default for ChartTheme {
    fn default() -> Self {
        CHART_THEME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_keeps_channels() {
        let faded = palette::GOLD.with_alpha(0.2);
        assert_eq!((faded.r, faded.g, faded.b), (212, 168, 67));
        assert_eq!(faded.a, 0.2);
    }

    #[test]
    fn test_over_blends_toward_backdrop() {
        let flat = palette::WHITE_20.over(palette::MAROON);
        assert_eq!(flat.a, 1.0);
        // 0.15 * 255 + 0.85 * 0x56
        assert_eq!(flat.r, 111);
        assert_eq!(palette::GOLD.over(palette::MAROON), palette::GOLD);
    }
}
