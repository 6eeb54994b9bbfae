//! Label configuration for the summary chart.
//!
//! Labels default to the built-in experiment configuration. A YAML file can
//! replace them:
//!
//! ```yaml
//! labels:
//!   - ["Ants: 2", "Evap: 0.1", "P_rate: .5"]
//!   - "Ants: 5 / Evap: 0.2 / P_rate: 1"
//! ```

use std::fs;
use std::path::Path;

use antsweep_core::ParameterLabels;
use color_eyre::eyre::WrapErr;

pub fn parse_labels(yaml: &str) -> Result<ParameterLabels, serde_saphyr::Error> {
    serde_saphyr::from_str(yaml)
}

/// Load labels from `path`, or the built-in defaults when no file is given.
pub fn load_labels(path: Option<&Path>) -> color_eyre::Result<ParameterLabels> {
    let Some(path) = path else {
        return Ok(ParameterLabels::default());
    };

    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read labels file {}", path.display()))?;
    let labels = parse_labels(&content)
        .wrap_err_with(|| format!("failed to parse labels file {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        count = labels.len(),
        "Loaded parameter labels"
    );
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_no_file_uses_defaults() {
        let labels = load_labels(None).unwrap();
        assert_eq!(labels, ParameterLabels::default());
    }

    #[test]
    fn test_parse_mixed_label_forms() {
        let yaml = "labels:\n  - [\"Ants: 2\", \"Evap: 0.1\"]\n  - \"Ants: 5 / Evap: 0.2\"\n";
        let labels = parse_labels(yaml).unwrap();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get(0).unwrap().inline(), "Ants: 2 / Evap: 0.1");
        assert_eq!(labels.get(1).unwrap().lines(), ["Ants: 5", "Evap: 0.2"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("labels.yaml");
        fs::write(&path, "labels:\n  - \"a\"\n  - \"b\"\n  - \"c\"\n").unwrap();

        let labels = load_labels(Some(&path)).unwrap();
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_labels(Some(&dir.path().join("missing.yaml"))).unwrap_err();
        assert!(err.to_string().contains("missing.yaml"));
    }
}
