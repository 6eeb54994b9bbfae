use super::Component;
use crate::state::{AppState, TabId};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> &'static str {
        match state.active_tab {
            TabId::Trends => "1-2/Tab: switch figure | raw runs per sweep, repeats plotted separately | q: quit",
            TabId::Summary => "1-2/Tab: switch figure | mean Top_Fitness per parameter step | q: quit",
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = Line::from(vec![
            Span::styled(Self::help_text(state), Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(
                format!("data: {}", state.data_dir.display()),
                Style::default().fg(Color::Cyan),
            ),
        ]);

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
