//! Static chart data for the event-planning deck.
//!
//! Slide indices are zero-based. Figures are in baht unless noted.

use super::{
    ChartDefinition, ChartKind, ChartMount, ChartOptions, Dataset, LegendPosition, Paint,
    SignPalette, TickFormat, ValueAxis,
};
use crate::theme::{palette, Rgba};

pub const AUDIENCE_SLIDE: usize = 3;
pub const COST_SLIDE: usize = 6;
pub const PROFIT_SLIDE: usize = 7;
pub const TICKETS_SLIDE: usize = 8;

/// Charts belonging to `slide`, in construction order
pub fn charts_for_slide(slide: usize) -> Vec<ChartDefinition> {
    match slide {
        AUDIENCE_SLIDE => vec![audience_donut()],
        COST_SLIDE => vec![cost_donut()],
        PROFIT_SLIDE => vec![profit_bars()],
        TICKETS_SLIDE => vec![ticket_lines(), revenue_mix_donut()],
        _ => Vec::new(),
    }
}

/// Slides that carry at least one chart
pub fn chart_slides() -> [usize; 4] {
    [AUDIENCE_SLIDE, COST_SLIDE, PROFIT_SLIDE, TICKETS_SLIDE]
}

fn donut_dataset(values: Vec<f64>, colors: Vec<Rgba>) -> Dataset {
    Dataset {
        label: None,
        values,
        // Slices are filled only
        stroke: Paint::PerPoint(colors.clone()),
        fill: Paint::PerPoint(colors),
        stroke_width: 0.0,
        area: false,
        dashed: false,
        point_radius: 0,
    }
}

fn audience_donut() -> ChartDefinition {
    ChartDefinition {
        mount: ChartMount::AudiencePie,
        kind: ChartKind::Donut,
        labels: vec![
            "Tier 1: ผู้จัดการ/หัวหน้า",
            "Tier 2: SME/พนักงาน",
            "Tier 3: HR/IT/Consultant",
        ],
        datasets: vec![donut_dataset(
            vec![50.0, 35.0, 15.0],
            vec![palette::GOLD, palette::MAROON_END, palette::WHITE_20],
        )],
        options: ChartOptions {
            cutout: Some(0.65),
            ..ChartOptions::default()
        },
    }
}

fn cost_donut() -> ChartDefinition {
    ChartDefinition {
        mount: ChartMount::CostPie,
        kind: ChartKind::Donut,
        labels: vec![
            "Fixed Cost (วิทยากร/การตลาด/สื่อ)",
            "Variable Cost (สถานที่/อาหาร 80 คน)",
            "Contingency",
        ],
        datasets: vec![donut_dataset(
            vec![68_000.0, 82_000.0, 10_000.0],
            vec![palette::MAROON_END, palette::GOLD, palette::WHITE_20],
        )],
        options: ChartOptions {
            cutout: Some(0.60),
            legend_position: LegendPosition::Bottom,
            ..ChartOptions::default()
        },
    }
}

fn profit_bars() -> ChartDefinition {
    ChartDefinition {
        mount: ChartMount::ProfitBar,
        kind: ChartKind::Bar,
        labels: vec!["60 คน", "Break-even (~32)", "80 คน (เป้า)", "100 คน"],
        datasets: vec![
            Dataset {
                label: Some("รายได้คาดการณ์ (บาท)"),
                values: vec![188_000.0, 105_000.0, 266_000.0, 334_000.0],
                fill: Paint::Solid(palette::GOLD.with_alpha(0.2)),
                stroke: Paint::Solid(palette::GOLD),
                stroke_width: 1.5,
                area: false,
                dashed: false,
                point_radius: 0,
            },
            Dataset {
                label: Some("กำไรสุทธิ (บาท)"),
                values: vec![51_000.0, 0.0, 106_000.0, 151_000.0],
                fill: Paint::BySign(SignPalette {
                    positive: Rgba::rgba(92, 184, 92, 0.4),
                    zero: Rgba::rgba(255, 255, 255, 0.2),
                    negative: Rgba::rgba(220, 53, 69, 0.35),
                }),
                stroke: Paint::BySign(SignPalette {
                    positive: palette::GREEN,
                    zero: palette::WHITE,
                    negative: palette::RED,
                }),
                stroke_width: 1.5,
                area: false,
                dashed: false,
                point_radius: 0,
            },
        ],
        options: ChartOptions {
            category_font_size: Some(10),
            value_axis: Some(ValueAxis {
                max: None,
                ticks: TickFormat::Thousands,
                tick_font_size: 10,
            }),
            ..ChartOptions::default()
        },
    }
}

fn ticket_line(
    label: &'static str,
    values: Vec<f64>,
    color: Rgba,
    area: bool,
    dashed: bool,
) -> Dataset {
    Dataset {
        label: Some(label),
        values,
        fill: Paint::Solid(color.with_alpha(0.1)),
        stroke: Paint::Solid(color),
        stroke_width: 2.0,
        area,
        dashed,
        point_radius: 5,
    }
}

fn ticket_lines() -> ChartDefinition {
    ChartDefinition {
        mount: ChartMount::TicketLine,
        kind: ChartKind::Line,
        labels: vec!["มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.(ก่อนงาน)"],
        datasets: vec![
            ticket_line(
                "Super / Early Bird",
                vec![15.0, 40.0, 40.0, 40.0],
                palette::GOLD,
                true,
                false,
            ),
            ticket_line(
                "Regular / Corporate",
                vec![0.0, 5.0, 25.0, 40.0],
                palette::MAROON_END,
                true,
                false,
            ),
            ticket_line(
                "รวมเป้า 80 ใบ",
                vec![15.0, 45.0, 65.0, 80.0],
                palette::GREEN_LIGHT,
                false,
                true,
            ),
        ],
        options: ChartOptions {
            category_font_size: Some(11),
            value_axis: Some(ValueAxis {
                max: Some(100.0),
                ticks: TickFormat::Suffix(" คน"),
                tick_font_size: 10,
            }),
            ..ChartOptions::default()
        },
    }
}

fn revenue_mix_donut() -> ChartDefinition {
    ChartDefinition {
        mount: ChartMount::RevenueMix,
        kind: ChartKind::Donut,
        labels: vec!["Super/Early Bird", "Regular / Corporate"],
        datasets: vec![donut_dataset(
            vec![110_000.0, 156_000.0],
            vec![palette::GOLD, palette::MAROON_END],
        )],
        options: ChartOptions {
            cutout: Some(0.60),
            legend_position: LegendPosition::Bottom,
            legend_font_size: Some(10),
            ..ChartOptions::default()
        },
    }
}
