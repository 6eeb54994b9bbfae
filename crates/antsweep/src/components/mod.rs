pub mod charts;
pub mod status_bar;
pub mod tab_bar;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::state::AppState;

/// Whether a component consumed a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Handled,
    NotHandled,
}

/// A piece of the viewer that draws into a region of the frame.
///
/// The figures are read-only, so most components ignore keys.
pub trait Component {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
