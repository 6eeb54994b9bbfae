use ratatui::{Frame, layout::Rect};

use super::Screen;
use crate::components::charts::render_summary_chart;
use crate::components::Component;
use crate::state::{AppState, TabId};

/// Second figure: mean final fitness per configuration step for every sweep.
pub struct SummaryScreen;

impl SummaryScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SummaryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SummaryScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        render_summary_chart(frame, area, &state.report.chart);
    }
}

impl Screen for SummaryScreen {
    fn title(&self) -> &str {
        TabId::Summary.name()
    }
}
