//! Cross-module tests for the analysis pipeline
//!
//! - `pipeline` - CSV files on disk through to both figures
//! - `generator` - Benchmark instance files

mod generator;
