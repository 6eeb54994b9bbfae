//! Human-readable names for the composite configuration steps.
//!
//! Step `k` of every sweep corresponds to the `k`-th label. The list mirrors
//! the configuration the optimizer was run with and has to be kept in sync
//! with it by hand; it is validated against the data before rendering.

use serde::{Deserialize, Serialize};

const LINE_SEPARATOR: &str = " / ";

/// Settings of the experiment configuration the results were produced with.
const DEFAULT_LABELS: [[&str; 3]; 8] = [
    ["Ants: 2", "Evap: 0.1", "P_rate: .5"],
    ["Ants: 5", "Evap: 0.2", "P_rate: 1"],
    ["Ants: 10", "Evap: 0.3", "P_rate: 2"],
    ["Ants: 15", "Evap: 0.4", "P_rate: 3"],
    ["Ants: 20", "Evap: 0.5", "P_rate: 4"],
    ["Ants: 30", "Evap: 0.6", "P_rate: 5"],
    ["Ants: 50", "Evap: 0.7", "P_rate: 6"],
    ["Ants: 100", "Evap: 0.8", "P_rate: 7"],
];

/// Either an explicit list of lines or one string with lines separated by
/// `" / "` or newlines.
#[derive(Deserialize)]
#[serde(untagged)]
enum LabelEntry {
    Lines(Vec<String>),
    Joined(String),
}

/// One composite configuration label, stored line by line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LabelEntry", into = "Vec<String>")]
pub struct ParameterLabel {
    lines: Vec<String>,
}

impl ParameterLabel {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a single string on newlines or `" / "`.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .flat_map(|line| line.split(LINE_SEPARATOR))
                .map(str::trim)
                .filter(|part| !part.is_empty()),
        )
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Single-line rendering for axis ticks and tables
    pub fn inline(&self) -> String {
        self.lines.join(LINE_SEPARATOR)
    }
}

impl From<LabelEntry> for ParameterLabel {
    fn from(entry: LabelEntry) -> Self {
        match entry {
            LabelEntry::Lines(lines) => Self::new(lines),
            LabelEntry::Joined(text) => Self::parse(&text),
        }
    }
}

impl From<ParameterLabel> for Vec<String> {
    fn from(label: ParameterLabel) -> Self {
        label.lines
    }
}

/// Ordered x-axis labels for the cross-parameter summary chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterLabels {
    labels: Vec<ParameterLabel>,
}

impl Default for ParameterLabels {
    fn default() -> Self {
        Self::new(DEFAULT_LABELS.iter().map(|lines| ParameterLabel::new(*lines)))
    }
}

impl ParameterLabels {
    pub fn new(labels: impl IntoIterator<Item = ParameterLabel>) -> Self {
        Self {
            labels: labels.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&ParameterLabel> {
        self.labels.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterLabel> {
        self.labels.iter()
    }
}
