//! Both figures, built once from a single load of the sweep tables.

use std::fmt::Write;
use std::path::Path;

use antsweep_core::{
    CombinedSummary, ParameterLabels, SummaryChart, SweepSet, TrendFigure, load_sweep_set,
};

use crate::util::format::format_number;

#[derive(Debug, Clone)]
pub struct Report {
    pub trends: TrendFigure,
    pub summary: CombinedSummary,
    pub chart: SummaryChart,
}

impl Report {
    pub fn build(sweeps: &SweepSet, labels: &ParameterLabels) -> antsweep_core::Result<Self> {
        let trends = TrendFigure::from_sweeps(sweeps);
        let summary = CombinedSummary::from_sweeps(sweeps)?;
        let chart = SummaryChart::new(&summary, labels)?;

        tracing::info!(
            runs = sweeps.total_runs(),
            summary_rows = summary.len(),
            "Report built"
        );
        Ok(Self {
            trends,
            summary,
            chart,
        })
    }

    pub fn load(data_dir: &Path, labels: &ParameterLabels) -> antsweep_core::Result<Self> {
        let sweeps = load_sweep_set(data_dir)?;
        Self::build(&sweeps, labels)
    }

    /// Plain-text table of the combined summary, one line per row.
    pub fn summary_table(&self) -> String {
        let indices = self.summary.distinct_indices();
        let rows: Vec<[String; 4]> = self
            .summary
            .rows()
            .iter()
            .map(|row| {
                let label = indices
                    .binary_search(&row.parameter_index)
                    .ok()
                    .and_then(|position| self.chart.tick(position))
                    .map(|label| label.inline())
                    .unwrap_or_default();
                [
                    row.sweep.to_string(),
                    row.parameter_index.to_string(),
                    label,
                    format_number(row.mean_top_fitness, 2),
                ]
            })
            .collect();

        let header = ["Sweep", "Parameter", "Configuration", "Mean Top Fitness"];
        let mut widths = header.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<w0$}  {:>w1$}  {:<w2$}  {:>w3$}",
            header[0],
            header[1],
            header[2],
            header[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
        for row in &rows {
            let _ = writeln!(
                out,
                "{:<w0$}  {:>w1$}  {:<w2$}  {:>w3$}",
                row[0],
                row[1],
                row[2],
                row[3],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
                w3 = widths[3],
            );
        }
        out
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use antsweep_core::{ParameterLabel, ReportError, ResultRow, SweepKind, SweepTable};

    /// Three sweeps with two runs at each of `steps` parameter indices.
    pub(crate) fn sample_sweeps(steps: i64) -> SweepSet {
        let tables = SweepKind::ALL
            .iter()
            .enumerate()
            .map(|(offset, &kind)| {
                let rows = (1..=steps)
                    .flat_map(|step| {
                        [0.0, 10.0].map(|bump| ResultRow {
                            parameter_value: step as f64,
                            parameter_index: step,
                            initial_fitness: 3_000.0 + bump,
                            top_fitness: 4_000.0 + 100.0 * offset as f64 + step as f64 + bump,
                        })
                    })
                    .collect();
                SweepTable::new(kind, rows)
            })
            .collect();
        SweepSet::from_tables(tables).unwrap()
    }

    pub(crate) fn sample_report() -> Report {
        Report::build(&sample_sweeps(8), &ParameterLabels::default()).unwrap()
    }

    #[test]
    fn test_build_report() {
        let report = sample_report();
        assert_eq!(report.trends.panels.len(), 3);
        assert_eq!(report.summary.len(), 24);
        assert_eq!(report.chart.ticks.len(), 8);
    }

    #[test]
    fn test_build_rejects_mismatched_labels() {
        let labels = ParameterLabels::new([ParameterLabel::parse("only one")]);
        let err = Report::build(&sample_sweeps(3), &labels).unwrap_err();
        assert!(matches!(
            err,
            ReportError::LabelMismatch {
                indices: 3,
                labels: 1
            }
        ));
    }

    #[test]
    fn test_summary_table_lists_every_row() {
        let table = sample_report().summary_table();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 1 + 24);
        assert!(lines[0].starts_with("Sweep"));
        assert!(lines[1].starts_with("Number_Of_Ants"));
        assert!(lines[1].contains("Ants: 2 / Evap: 0.1 / P_rate: .5"));
        assert!(lines[1].trim_end().ends_with("4,006.00"));
        assert!(lines[24].starts_with("Evaporation_Rate"));
    }
}
