use super::SweepKind;

/// Mean final fitness for one `Parameter` step of one sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub parameter_index: i64,
    pub mean_top_fitness: f64,
    pub sweep: SweepKind,
}

/// Long-form concatenation of every sweep's summary rows, tagged by sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedSummary {
    rows: Vec<SummaryRow>,
}

impl CombinedSummary {
    pub fn new(rows: Vec<SummaryRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows belonging to one sweep, in file order
    pub fn rows_for(&self, sweep: SweepKind) -> impl Iterator<Item = &SummaryRow> {
        self.rows.iter().filter(move |row| row.sweep == sweep)
    }

    /// Distinct parameter indices across every sweep, ascending
    pub fn distinct_indices(&self) -> Vec<i64> {
        let mut indices: Vec<i64> = self.rows.iter().map(|row| row.parameter_index).collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}
