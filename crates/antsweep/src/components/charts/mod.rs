//! Chart components for the two report figures.

mod summary;
mod trend;

pub use summary::render_summary_chart;
pub use trend::{render_trend_figure, render_trend_panel};

use antsweep_core::SweepKind;
use ratatui::{
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Dataset, GraphType},
};

use crate::util::format::format_axis_value;

/// Colour used for a sweep's line on the summary chart
pub fn sweep_color(sweep: SweepKind) -> Color {
    match sweep {
        SweepKind::NumberOfAnts => Color::Cyan,
        SweepKind::PRate => Color::Yellow,
        SweepKind::EvaporationRate => Color::Magenta,
    }
}

/// A connected line plus point markers for the same data.
///
/// Neither dataset is named; legends are drawn outside the plot with [`legend_line`].
fn line_with_markers(points: &[(f64, f64)], color: Color) -> [Dataset<'_>; 2] {
    let line = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points);
    let markers = Dataset::default()
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(color))
        .data(points);
    [line, markers]
}

/// Coloured swatch and name per series, optionally led by a title.
///
/// Goes in a block title or a row of its own, never over the plot area.
fn legend_line<'a>(
    title: Option<&'a str>,
    entries: impl IntoIterator<Item = (&'a str, Color)>,
) -> Line<'a> {
    let mut spans = Vec::new();
    if let Some(title) = title {
        spans.push(Span::styled(format!("{title}:"), Style::default().fg(Color::Gray)));
    }
    for (name, color) in entries {
        spans.push(Span::raw(" "));
        spans.push(Span::styled("━━", Style::default().fg(color)));
        spans.push(Span::raw(format!(" {name} ")));
    }
    Line::from(spans)
}

/// Min, mid and max labels for an axis
fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let [lo, hi] = bounds;
    vec![
        format_axis_value(lo),
        format_axis_value((lo + hi) / 2.0),
        format_axis_value(hi),
    ]
}
