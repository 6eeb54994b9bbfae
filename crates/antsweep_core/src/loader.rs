//! Loading optimizer result tables from CSV.
//!
//! The optimizer writes one file per sweep with a header row. Only four columns
//! are read: the sweep's value column, `Parameter`, `Initial_fitness` and
//! `Top_Fitness`. Anything else in the file is ignored.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};
use crate::model::{RESULTS_DIR, ResultRow, SweepKind, SweepSet, SweepTable};

pub const PARAMETER_INDEX_COLUMN: &str = "Parameter";
pub const INITIAL_FITNESS_COLUMN: &str = "Initial_fitness";
pub const TOP_FITNESS_COLUMN: &str = "Top_Fitness";

/// Column positions resolved from the header row
struct ColumnMap {
    value: usize,
    index: usize,
    initial: usize,
    top: usize,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord, kind: SweepKind) -> std::result::Result<Self, String> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| format!("missing column `{name}`"))
        };

        Ok(Self {
            value: find(kind.value_column())?,
            index: find(PARAMETER_INDEX_COLUMN)?,
            initial: find(INITIAL_FITNESS_COLUMN)?,
            top: find(TOP_FITNESS_COLUMN)?,
        })
    }
}

/// Path of a sweep's result file under `data_dir`.
pub fn sweep_path(data_dir: &Path, kind: SweepKind) -> PathBuf {
    data_dir.join(RESULTS_DIR).join(kind.file_name())
}

/// Load a sweep table from a CSV file.
pub fn load_sweep_table(path: &Path, kind: SweepKind) -> Result<SweepTable> {
    let file = File::open(path).map_err(|e| ReportError::data_load(path, e.to_string()))?;
    read_sweep_table(file, kind, path)
}

/// Load a sweep table from any reader. `source` is only used in error messages.
pub fn read_sweep_table<R: Read>(reader: R, kind: SweepKind, source: &Path) -> Result<SweepTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ReportError::data_load(source, e.to_string()))?
        .clone();
    let columns =
        ColumnMap::resolve(&headers, kind).map_err(|reason| ReportError::data_load(source, reason))?;

    let mut rows = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| ReportError::data_load(source, e.to_string()))?;
        let row = parse_row(&record, &columns, kind)
            .map_err(|reason| ReportError::data_load(source, format!("row {}: {reason}", i + 1)))?;
        rows.push(row);
    }

    tracing::debug!(
        sweep = %kind,
        rows = rows.len(),
        source = %source.display(),
        "Loaded sweep table"
    );

    Ok(SweepTable::new(kind, rows))
}

/// Load all three sweeps from `<data_dir>/csv/`, each file exactly once.
pub fn load_sweep_set(data_dir: &Path) -> Result<SweepSet> {
    let tables = SweepKind::ALL
        .iter()
        .map(|&kind| load_sweep_table(&sweep_path(data_dir, kind), kind))
        .collect::<Result<Vec<_>>>()?;

    // One table per kind by construction
    SweepSet::from_tables(tables)
        .ok_or_else(|| ReportError::data_load(data_dir, "incomplete sweep set"))
}

fn parse_row(
    record: &csv::StringRecord,
    columns: &ColumnMap,
    kind: SweepKind,
) -> std::result::Result<ResultRow, String> {
    Ok(ResultRow {
        parameter_value: parse_f64(record, columns.value, kind.value_column())?,
        parameter_index: parse_index(record, columns.index)?,
        initial_fitness: parse_f64(record, columns.initial, INITIAL_FITNESS_COLUMN)?,
        top_fitness: parse_f64(record, columns.top, TOP_FITNESS_COLUMN)?,
    })
}

fn field<'r>(
    record: &'r csv::StringRecord,
    position: usize,
    column: &str,
) -> std::result::Result<&'r str, String> {
    record
        .get(position)
        .ok_or_else(|| format!("no value for column `{column}`"))
}

fn parse_f64(
    record: &csv::StringRecord,
    position: usize,
    column: &str,
) -> std::result::Result<f64, String> {
    let raw = field(record, position, column)?;
    raw.parse::<f64>()
        .map_err(|_| format!("invalid number {raw:?} in column `{column}`"))
}

/// The optimizer writes step indices as either `3` or `3.0`.
fn parse_index(record: &csv::StringRecord, position: usize) -> std::result::Result<i64, String> {
    let raw = field(record, position, PARAMETER_INDEX_COLUMN)?;
    if let Ok(index) = raw.parse::<i64>() {
        return Ok(index);
    }
    // `i64::MAX as f64` rounds up to 2^63, which is out of range
    let in_range = |value: f64| value >= i64::MIN as f64 && value < i64::MAX as f64;
    match raw.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && in_range(value) => Ok(value as i64),
        _ => Err(format!(
            "invalid parameter index {raw:?} in column `{PARAMETER_INDEX_COLUMN}`"
        )),
    }
}
