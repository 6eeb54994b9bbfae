use ratatui::{Frame, layout::Rect};

use super::Screen;
use crate::components::charts::render_trend_figure;
use crate::components::Component;
use crate::state::{AppState, TabId};

/// First figure: one trend panel per sweep, side by side.
pub struct TrendsScreen;

impl TrendsScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrendsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TrendsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        render_trend_figure(frame, area, &state.report.trends);
    }
}

impl Screen for TrendsScreen {
    fn title(&self) -> &str {
        TabId::Trends.name()
    }
}
