//! Analysis of ant-colony optimizer parameter sweeps.
//!
//! The optimizer is run elsewhere and writes one CSV per sweep (population
//! size, pheromone deposit rate, evaporation rate). This crate provides:
//! - Loading of those result tables
//! - Per-sweep trend series (initial vs. final best value)
//! - A cross-parameter summary of mean final fitness per configuration step
//! - Generation of synthetic knapsack instances for the optimizer
//!
//! ```ignore
//! use antsweep_core::{CombinedSummary, ParameterLabels, SummaryChart, TrendFigure, load_sweep_set};
//!
//! let sweeps = load_sweep_set(Path::new("."))?;
//! let trends = TrendFigure::from_sweeps(&sweeps);
//! let summary = CombinedSummary::from_sweeps(&sweeps)?;
//! let chart = SummaryChart::new(&summary, &ParameterLabels::default())?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod benchmark;
pub mod error;
pub mod labels;
pub mod loader;
pub mod summary;
pub mod trend;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use benchmark::{BenchmarkItem, BenchmarkSpec, generate_items, write_instance, write_instance_file};
pub use error::{ReportError, Result};
pub use labels::{ParameterLabel, ParameterLabels};
pub use loader::{load_sweep_set, load_sweep_table, read_sweep_table, sweep_path};
pub use model::{CombinedSummary, ResultRow, SummaryRow, SweepKind, SweepSet, SweepTable};
pub use summary::{SummaryChart, SummarySeries, summarize_sweep};
pub use trend::{TrendFigure, TrendPanel, TrendSeries};
