use std::path::PathBuf;

use super::TabId;
use crate::report::Report;

/// Everything the viewer draws from. The report is immutable once loaded.
#[derive(Debug)]
pub struct AppState {
    pub active_tab: TabId,
    pub report: Report,
    pub data_dir: PathBuf,
    pub exit: bool,
}

impl AppState {
    pub fn new(report: Report, data_dir: PathBuf) -> Self {
        Self {
            active_tab: TabId::default(),
            report,
            data_dir,
            exit: false,
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        if self.active_tab != tab {
            tracing::debug!(tab = tab.name(), "Switched figure");
        }
        self.active_tab = tab;
    }
}
