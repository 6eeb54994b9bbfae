//! Per-sweep trend panels: initial and final best value against the swept parameter.

use antsweep_core::{TrendFigure, TrendPanel};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Axis, Block, Borders, Chart, Paragraph},
};

use super::{axis_labels, legend_line, line_with_markers};

const INITIAL_COLOR: Color = Color::Cyan;
const TOP_COLOR: Color = Color::Green;

/// Render all trend panels side by side with equal widths.
pub fn render_trend_figure(frame: &mut Frame, area: Rect, figure: &TrendFigure) {
    if figure.panels.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, figure.panels.len() as u32); figure.panels.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (panel, column) in figure.panels.iter().zip(columns.iter()) {
        render_trend_panel(frame, *column, panel);
    }
}

pub fn render_trend_panel(frame: &mut Frame, area: Rect, panel: &TrendPanel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", panel.title));

    if panel.is_empty() {
        let msg = Paragraph::new("No runs recorded")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(msg, area);
        return;
    }

    let block = block.title_bottom(
        legend_line(
            None,
            [
                (panel.initial.name, INITIAL_COLOR),
                (panel.top.name, TOP_COLOR),
            ],
        )
        .right_aligned(),
    );

    let datasets: Vec<_> = line_with_markers(&panel.initial.points, INITIAL_COLOR)
        .into_iter()
        .chain(line_with_markers(&panel.top.points, TOP_COLOR))
        .collect();

    let x_axis = Axis::default()
        .title(panel.x_label.dark_gray())
        .bounds(panel.x_bounds)
        .labels(axis_labels(panel.x_bounds));

    let y_axis = Axis::default()
        .title(panel.y_label.dark_gray())
        .bounds(panel.y_bounds)
        .labels(axis_labels(panel.y_bounds));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(None);

    frame.render_widget(chart, area);
}
