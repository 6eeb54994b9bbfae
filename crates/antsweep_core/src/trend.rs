//! Per-sweep trend series: initial vs. final best value against the raw
//! swept parameter.
//!
//! Repeated trials of the same setting are kept as separate points. Averaging
//! only happens in the cross-parameter summary.

use crate::model::{SweepKind, SweepSet, SweepTable, TREND_Y_LABEL};

pub const INITIAL_SERIES_NAME: &str = "Initial Top Value";
pub const TOP_SERIES_NAME: &str = "Top Value";

/// Fraction of the y range added above and below the data
const Y_PADDING_RATIO: f64 = 0.1;
/// Minimum absolute y padding, so flat series stay visible
const MIN_Y_PADDING: f64 = 1.0;
/// Half-width used when every point shares one x value
const DEGENERATE_X_HALF_WIDTH: f64 = 0.5;

/// One named line of a trend panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub name: &'static str,
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw one sweep's trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPanel {
    pub sweep: SweepKind,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub initial: TrendSeries,
    pub top: TrendSeries,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl TrendPanel {
    pub fn from_table(table: &SweepTable) -> Self {
        let sweep = table.kind();

        // Stable sort keeps file order inside groups of equal parameter values
        let mut rows = table.rows().to_vec();
        rows.sort_by(|a, b| a.parameter_value.total_cmp(&b.parameter_value));

        let initial = TrendSeries {
            name: INITIAL_SERIES_NAME,
            points: rows
                .iter()
                .map(|row| (row.parameter_value, row.initial_fitness))
                .collect(),
        };
        let top = TrendSeries {
            name: TOP_SERIES_NAME,
            points: rows
                .iter()
                .map(|row| (row.parameter_value, row.top_fitness))
                .collect(),
        };

        let x_bounds = x_bounds(rows.iter().map(|row| row.parameter_value));
        let y_bounds = y_bounds(
            rows.iter()
                .flat_map(|row| [row.initial_fitness, row.top_fitness]),
        );

        Self {
            sweep,
            title: sweep.title(),
            x_label: sweep.axis_label(),
            y_label: TREND_Y_LABEL,
            initial,
            top,
            x_bounds,
            y_bounds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.points.is_empty()
    }
}

/// The three trend panels of the first figure, side by side in `SweepKind::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendFigure {
    pub panels: Vec<TrendPanel>,
}

impl TrendFigure {
    pub fn from_sweeps(sweeps: &SweepSet) -> Self {
        Self {
            panels: sweeps.iter().map(TrendPanel::from_table).collect(),
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn x_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    match min_max(values) {
        None => [0.0, 1.0],
        Some((lo, hi)) if lo == hi => [lo - DEGENERATE_X_HALF_WIDTH, hi + DEGENERATE_X_HALF_WIDTH],
        Some((lo, hi)) => [lo, hi],
    }
}

/// Pad a y range by 10% of its span (at least `MIN_Y_PADDING`).
pub(crate) fn y_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    match min_max(values) {
        None => [0.0, 1.0],
        Some((lo, hi)) => {
            let padding = ((hi - lo) * Y_PADDING_RATIO).max(MIN_Y_PADDING);
            [lo - padding, hi + padding]
        }
    }
}
