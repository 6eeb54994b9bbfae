use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::report::Report;
use crate::screens::{Screen, summary::SummaryScreen, trends::TrendsScreen};
use crate::state::{AppState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    trends_screen: TrendsScreen,
    summary_screen: SummaryScreen,
}

impl App {
    pub fn new(report: Report, data_dir: PathBuf) -> Self {
        Self {
            state: AppState::new(report, data_dir),
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            trends_screen: TrendsScreen::new(),
            summary_screen: SummaryScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the viewer's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(screen = self.active_screen().title(), "Viewer started");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn active_screen(&mut self) -> &mut dyn Screen {
        match self.state.active_tab {
            TabId::Trends => &mut self.trends_screen,
            TabId::Summary => &mut self.summary_screen,
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Figure
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);

        let screen: &mut dyn Screen = match self.state.active_tab {
            TabId::Trends => &mut self.trends_screen,
            TabId::Summary => &mut self.summary_screen,
        };
        screen.render(frame, chunks[1], &self.state);

        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            _ => {}
        }

        // The figures are static; only the tab bar reacts to other keys
        if self.tab_bar.handle_key(key_event, &mut self.state) == EventResult::Handled {
            tracing::debug!(screen = self.active_screen().title(), "Active screen");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::charts::tests::buffer_text;
    use crate::report::tests::sample_report;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        App::new(sample_report(), PathBuf::from("runs"))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(180, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_starts_on_trends() {
        let mut app = app();
        let text = render(&mut app);

        assert_eq!(app.state().active_tab, TabId::Trends);
        assert!(text.contains("Effect of Ants Population"));
        assert!(text.contains("Effect of Pheromone Rate"));
        assert!(text.contains("Effect of Evaporation Rate"));
        assert!(text.contains("data: runs"));
    }

    #[test]
    fn test_switch_to_summary() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.state().active_tab, TabId::Summary);

        let text = render(&mut app);
        assert!(text.contains("Mean Top Value Across Parameter Changes"));
        assert!(text.contains("Ants: 100"));

        // Figures are static, so other keys leave the view alone
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state().active_tab, TabId::Summary);
        assert!(!app.state().exit);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().active_tab, TabId::Trends);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.state().active_tab, TabId::Trends);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.state().exit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().exit);

        let mut app = self::app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
    }
}
