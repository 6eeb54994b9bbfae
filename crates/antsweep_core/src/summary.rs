//! Cross-parameter summary: mean final fitness per configuration step, for
//! every sweep, on one shared categorical axis.

use std::collections::BTreeMap;

use crate::error::{ReportError, Result};
use crate::labels::{ParameterLabel, ParameterLabels};
use crate::model::{CombinedSummary, SummaryRow, SweepKind, SweepSet, SweepTable};
use crate::trend::y_bounds;

pub const SUMMARY_TITLE: &str = "Mean Top Value Across Parameter Changes";
pub const SUMMARY_X_LABEL: &str = "Value per Parameter (all other values at defaults)";
pub const SUMMARY_Y_LABEL: &str = "Mean Top Fitness";
pub const SUMMARY_LEGEND_TITLE: &str = "Parameters Changed";

/// Arithmetic mean of one group's final fitness values.
fn group_mean(sweep: SweepKind, index: i64, values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(ReportError::EmptyGroup { sweep, index });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Group a sweep's runs by `parameter_index` and average `top_fitness`.
///
/// Rows come back in ascending index order regardless of file order.
pub fn summarize_sweep(table: &SweepTable) -> Result<Vec<SummaryRow>> {
    let sweep = table.kind();
    let mut groups: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for row in table.rows() {
        groups
            .entry(row.parameter_index)
            .or_default()
            .push(row.top_fitness);
    }

    groups
        .into_iter()
        .map(|(index, values)| {
            Ok(SummaryRow {
                parameter_index: index,
                mean_top_fitness: group_mean(sweep, index, &values)?,
                sweep,
            })
        })
        .collect()
}

impl CombinedSummary {
    /// Summarize every sweep and concatenate in `SweepKind::ALL` order.
    pub fn from_sweeps(sweeps: &SweepSet) -> Result<Self> {
        let mut rows = Vec::new();
        for table in sweeps.iter() {
            rows.extend(summarize_sweep(table)?);
        }
        tracing::debug!(rows = rows.len(), "Combined sweep summaries");
        Ok(Self::new(rows))
    }
}

/// One sweep's line on the summary chart, in ordinal x coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarySeries {
    pub sweep: SweepKind,
    pub points: Vec<(f64, f64)>,
}

/// Validated, render-ready data for the cross-parameter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryChart {
    pub series: Vec<SummarySeries>,
    /// Tick labels, one per distinct index in ascending order
    pub ticks: Vec<ParameterLabel>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl SummaryChart {
    /// Place every summary row on the shared categorical axis.
    ///
    /// Fails with `LabelMismatch` unless there is exactly one label per
    /// distinct parameter index.
    pub fn new(summary: &CombinedSummary, labels: &ParameterLabels) -> Result<Self> {
        let indices = summary.distinct_indices();
        if indices.len() != labels.len() {
            return Err(ReportError::LabelMismatch {
                indices: indices.len(),
                labels: labels.len(),
            });
        }

        let position_of: BTreeMap<i64, usize> = indices
            .iter()
            .enumerate()
            .map(|(position, &index)| (index, position))
            .collect();

        let series = SweepKind::ALL
            .iter()
            .map(|&sweep| {
                let mut points: Vec<(f64, f64)> = summary
                    .rows_for(sweep)
                    .filter_map(|row| {
                        position_of
                            .get(&row.parameter_index)
                            .map(|&position| (position as f64, row.mean_top_fitness))
                    })
                    .collect();
                points.sort_by(|a, b| a.0.total_cmp(&b.0));
                SummarySeries { sweep, points }
            })
            .collect();

        let last = indices.len().saturating_sub(1) as f64;
        let x_bounds = if last > 0.0 { [0.0, last] } else { [-0.5, 0.5] };
        let y_bounds = y_bounds(summary.rows().iter().map(|row| row.mean_top_fitness));

        Ok(Self {
            series,
            ticks: labels.iter().cloned().collect(),
            x_bounds,
            y_bounds,
        })
    }

    /// Label shown under the `position`-th distinct index
    pub fn tick(&self, position: usize) -> Option<&ParameterLabel> {
        self.ticks.get(position)
    }
}
