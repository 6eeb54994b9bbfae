use std::fmt;

use serde::{Deserialize, Serialize};

/// Y-axis label shared by every trend panel
pub const TREND_Y_LABEL: &str = "Max Path Value";

/// Directory (relative to the data dir) the optimizer writes its results into
pub const RESULTS_DIR: &str = "csv";

/// One of the three independent parameter sweeps run by the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SweepKind {
    NumberOfAnts,
    PRate,
    EvaporationRate,
}

impl SweepKind {
    /// All sweeps, in the order they are reported and concatenated.
    pub const ALL: [SweepKind; 3] = [
        SweepKind::NumberOfAnts,
        SweepKind::PRate,
        SweepKind::EvaporationRate,
    ];

    /// Identity string, which is also the name of the swept value column.
    pub fn identity(&self) -> &'static str {
        match self {
            SweepKind::NumberOfAnts => "Number_Of_Ants",
            SweepKind::PRate => "p_rate",
            SweepKind::EvaporationRate => "Evaporation_Rate",
        }
    }

    pub fn value_column(&self) -> &'static str {
        self.identity()
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            SweepKind::NumberOfAnts => "results_ant_num.csv",
            SweepKind::PRate => "results_p_rate.csv",
            SweepKind::EvaporationRate => "results_evaporation.csv",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SweepKind::NumberOfAnts => "Effect of Ants Population",
            SweepKind::PRate => "Effect of Pheromone Rate",
            SweepKind::EvaporationRate => "Effect of Evaporation Rate",
        }
    }

    /// Short label suitable for chart axes
    pub fn axis_label(&self) -> &'static str {
        match self {
            SweepKind::NumberOfAnts => "Ants Population",
            SweepKind::PRate => "Pheromone Rate",
            SweepKind::EvaporationRate => "Evaporation Rate",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SweepKind::NumberOfAnts => 0,
            SweepKind::PRate => 1,
            SweepKind::EvaporationRate => 2,
        }
    }
}

impl fmt::Display for SweepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identity())
    }
}
