//! Cross-parameter summary chart with the configuration labels as x ticks.

use antsweep_core::SummaryChart;
use antsweep_core::summary::{
    SUMMARY_LEGEND_TITLE, SUMMARY_TITLE, SUMMARY_X_LABEL, SUMMARY_Y_LABEL,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Paragraph},
};

use super::{axis_labels, legend_line, line_with_markers, sweep_color};

/// Render the summary chart.
///
/// Legend row on top, plot in the middle, and a tick strip below holding one label per index.
pub fn render_summary_chart(frame: &mut Frame, area: Rect, chart: &SummaryChart) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {SUMMARY_TITLE} "))
        .title_bottom(Line::from(format!(" {SUMMARY_X_LABEL} ")).centered());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let strip_height = chart
        .ticks
        .iter()
        .map(|tick| tick.lines().len())
        .max()
        .unwrap_or(0)
        .max(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(u16::try_from(strip_height).unwrap_or(u16::MAX)),
        ])
        .split(inner);

    let legend = legend_line(
        Some(SUMMARY_LEGEND_TITLE),
        chart
            .series
            .iter()
            .map(|series| (series.sweep.identity(), sweep_color(series.sweep))),
    );
    frame.render_widget(Paragraph::new(legend).alignment(Alignment::Right), rows[0]);

    let datasets: Vec<_> = chart
        .series
        .iter()
        .flat_map(|series| line_with_markers(&series.points, sweep_color(series.sweep)))
        .collect();

    let y_labels = axis_labels(chart.y_bounds);
    let y_label_width = y_labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .map_or(0, |width| u16::try_from(width).unwrap_or(u16::MAX));

    // Blank tick labels keep the x axis line; the real labels go in the strip
    let x_axis = Axis::default()
        .bounds(chart.x_bounds)
        .labels(["", ""]);

    let y_axis = Axis::default()
        .title(SUMMARY_Y_LABEL.dark_gray())
        .bounds(chart.y_bounds)
        .labels(y_labels);

    let widget = Chart::new(datasets)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(None);
    frame.render_widget(widget, rows[1]);

    render_tick_strip(frame, rows[2], chart, y_label_width);
}

/// Columns of the tick strip, aligned with where the chart plots each position.
fn tick_columns(area: Rect, y_label_width: u16, ticks: usize, x_bounds: [f64; 2]) -> Vec<Rect> {
    let Ok(tick_count) = u16::try_from(ticks) else {
        return Vec::new();
    };
    if tick_count == 0 || area.width == 0 {
        return Vec::new();
    }

    // Chart layout: y labels (at most a third of the width), the axis line, then the plot
    let plot_left = area.x + y_label_width.min(area.width / 3) + 1;
    let plot_width = area.right().saturating_sub(plot_left).max(1);
    let column_width = (plot_width / tick_count).max(1);
    let [lo, hi] = x_bounds;

    (0..ticks)
        .map(|position| {
            let fraction = if hi > lo {
                (position as f64 - lo) / (hi - lo)
            } else {
                0.5
            };
            let center = plot_left + (fraction * f64::from(plot_width - 1)).round() as u16;
            let x = center
                .saturating_sub(column_width / 2)
                .clamp(area.x, area.right().saturating_sub(column_width));
            Rect::new(x, area.y, column_width.min(area.width), area.height)
        })
        .collect()
}

fn render_tick_strip(frame: &mut Frame, area: Rect, chart: &SummaryChart, y_label_width: u16) {
    let columns = tick_columns(area, y_label_width, chart.ticks.len(), chart.x_bounds);
    for (tick, column) in chart.ticks.iter().zip(columns) {
        let lines: Vec<Line> = tick.lines().iter().map(|line| Line::from(line.as_str())).collect();
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(paragraph, column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::charts::tests::{buffer_text, marker_count};
    use antsweep_core::{
        CombinedSummary, ParameterLabel, ParameterLabels, SummaryRow, SweepKind,
    };
    use ratatui::{Terminal, backend::TestBackend};

    fn chart(labels: &[&str]) -> SummaryChart {
        let rows = SweepKind::ALL
            .iter()
            .flat_map(|&sweep| {
                (0..labels.len() as i64).map(move |index| SummaryRow {
                    parameter_index: index + 1,
                    mean_top_fitness: 4_000.0 + index as f64 * 10.0,
                    sweep,
                })
            })
            .collect();
        let labels = ParameterLabels::new(labels.iter().map(|l| ParameterLabel::parse(l)));
        SummaryChart::new(&CombinedSummary::new(rows), &labels).unwrap()
    }

    #[test]
    fn test_summary_chart_shows_labels_and_legend() {
        let chart = chart(&["Ants: 2 / Evap: 0.1", "Ants: 5 / Evap: 0.2", "Ants: 10 / Evap: 0.3"]);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| render_summary_chart(frame, frame.area(), &chart))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Mean Top Value Across Parameter Changes"));
        assert!(text.contains("Parameters Changed"));
        assert!(text.contains("Number_Of_Ants"));
        assert!(text.contains("Evaporation_Rate"));
        assert!(text.contains("Ants: 2"));
        assert!(text.contains("Ants: 10"));
        assert!(text.contains("Evap: 0.3"));
    }

    #[test]
    fn test_every_point_visible_when_values_rise() {
        let rows = (1..=8)
            .map(|index| SummaryRow {
                parameter_index: index,
                mean_top_fitness: 4_000.0 + index as f64 * 37.0,
                sweep: SweepKind::NumberOfAnts,
            })
            .collect();
        let chart =
            SummaryChart::new(&CombinedSummary::new(rows), &ParameterLabels::default()).unwrap();

        for (width, height) in [(90, 25), (120, 30), (160, 30), (200, 40)] {
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            terminal
                .draw(|frame| render_summary_chart(frame, frame.area(), &chart))
                .unwrap();
            let buffer = terminal.backend().buffer();

            assert_eq!(marker_count(buffer), 8, "{width}x{height}");
            assert!(buffer_text(buffer).contains("Ants: 100"));
        }
    }

    #[test]
    fn test_tick_columns_span_plot() {
        let area = Rect::new(0, 20, 100, 3);
        let columns = tick_columns(area, 5, 3, [0.0, 2.0]);

        assert_eq!(columns.len(), 3);
        // Plot starts after 5 label cells and the axis line, so ticks sit at 6, 53 and 99
        for (column, tick_x) in columns.iter().zip([6, 53, 99]) {
            assert!(column.x <= tick_x && tick_x < column.right(), "{column:?}");
        }
        assert!(columns.iter().all(|c| c.right() <= area.right()));
    }

    #[test]
    fn test_tick_columns_oversized_count_is_empty() {
        let area = Rect::new(0, 0, 100, 2);
        assert!(tick_columns(area, 4, 70_000, [0.0, 69_999.0]).is_empty());
        assert!(tick_columns(area, 4, 0, [0.0, 1.0]).is_empty());
    }

    #[test]
    fn test_tick_columns_single_tick_centered() {
        let columns = tick_columns(Rect::new(0, 0, 40, 2), 4, 1, [-0.5, 0.5]);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].width, 35);
    }
}
