//! Dashboard Projections
//!
//! Pure derivations from [`InsightsData`] that the dashboard and the CLI
//! render: chart slices, pie geometry, summary cards and number formats.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::models::{AnomalyAlert, InsightsData, Trend};

/// Category colors, cycled by index
pub const PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One pie-chart input
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
    pub color: &'static str,
}

impl ChartSlice {
    /// Label drawn next to the slice
    pub fn label(&self) -> String {
        format!("{}: ${:.0}", self.name, self.value)
    }
}

/// Project the ranked categories into `{name, value}` slices
pub fn chart_slices(insights: &InsightsData) -> Vec<ChartSlice> {
    insights
        .top_categories
        .iter()
        .enumerate()
        .map(|(idx, cat)| ChartSlice {
            name: cat.category.clone(),
            value: cat.total,
            color: color_for(idx),
        })
        .collect()
}

/// Angular extent of a slice, radians clockwise from 12 o'clock
#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub start: f64,
    pub end: f64,
    pub color: &'static str,
    pub label: String,
}

impl PieSegment {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Canvas angles measure from 3 o'clock
    pub fn canvas_angles(&self) -> (f64, f64) {
        (self.start - FRAC_PI_2, self.end - FRAC_PI_2)
    }
}

/// Lay slices around the circle in order. Non-positive values take no
/// space; a zero total yields nothing to draw.
pub fn pie_segments(slices: &[ChartSlice]) -> Vec<PieSegment> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    slices
        .iter()
        .map(|slice| {
            let sweep = slice.value.max(0.0) / total * TAU;
            let segment = PieSegment {
                start: angle,
                end: angle + sweep,
                color: slice.color,
                label: slice.label(),
            };
            angle += sweep;
            segment
        })
        .collect()
}

/// `$` then the amount to two decimals; negatives read `$-3.46`
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// One of the three headline cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
}

pub fn summary_cards(insights: &InsightsData) -> [SummaryCard; 3] {
    [
        SummaryCard {
            title: "Total Spending",
            value: format_money(insights.total_spending),
        },
        SummaryCard {
            title: "Monthly Average",
            value: format_money(insights.monthly_average),
        },
        SummaryCard {
            title: "Anomalies Detected",
            value: insights.anomalies.len().to_string(),
        },
    ]
}

/// Anomalies to list, or `None` when the section is omitted entirely
pub fn anomaly_section(insights: &InsightsData) -> Option<&[AnomalyAlert]> {
    if insights.anomalies.is_empty() {
        None
    } else {
        Some(&insights.anomalies)
    }
}

pub fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↑",
        Trend::Down => "↓",
        Trend::Stable => "→",
    }
}
