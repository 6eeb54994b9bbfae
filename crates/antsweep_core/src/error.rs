use std::path::PathBuf;

use thiserror::Error;

use crate::model::SweepKind;

/// Errors raised while loading sweep results or building report figures.
///
/// Every variant is fatal for the current run: nothing is rendered once one
/// of these has been produced.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A result file is missing, unreadable, or does not match the expected schema
    #[error("failed to load {}: {reason}", path.display())]
    DataLoad { path: PathBuf, reason: String },

    /// A `Parameter` group ended up with no rows to average
    #[error("sweep {sweep} has no runs for parameter index {index}")]
    EmptyGroup { sweep: SweepKind, index: i64 },

    /// The configured axis labels do not line up with the data
    #[error(
        "summary has {indices} distinct parameter indices but {labels} labels are configured"
    )]
    LabelMismatch { indices: usize, labels: usize },
}

impl ReportError {
    pub(crate) fn data_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ReportError::DataLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_load_message_names_file() {
        let err = ReportError::data_load("csv/results_p_rate.csv", "missing column `Top_Fitness`");
        assert_eq!(
            err.to_string(),
            "failed to load csv/results_p_rate.csv: missing column `Top_Fitness`"
        );
    }

    #[test]
    fn test_empty_group_message_names_sweep() {
        let err = ReportError::EmptyGroup {
            sweep: SweepKind::EvaporationRate,
            index: 4,
        };
        assert_eq!(
            err.to_string(),
            "sweep Evaporation_Rate has no runs for parameter index 4"
        );
    }

    #[test]
    fn test_label_mismatch_message() {
        let err = ReportError::LabelMismatch {
            indices: 5,
            labels: 8,
        };
        assert!(err.to_string().contains("5 distinct parameter indices"));
        assert!(err.to_string().contains("8 labels"));
    }
}
