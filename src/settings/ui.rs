//! Settings overlay rendering.

use super::{ChartStyle, SettingRow, SettingsState};
use crate::shared::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the chart style overlay.
pub fn draw_settings(
    f: &mut Frame<'_>,
    state: &SettingsState,
    style: &ChartStyle,
    colors: &ThemeColors,
) {
    if !state.visible {
        return;
    }

    let area = centered_rect(40, 40, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Chart Style ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = [
        SettingRow::Padding,
        SettingRow::PointColor,
        SettingRow::LineColor,
        SettingRow::Marker,
    ];

    let mut lines = vec![Line::from("")];
    for row in rows {
        let value = match row {
            SettingRow::Padding => format!("{:.0}%", style.padding * 100.0),
            SettingRow::PointColor => style.point_color.name().to_string(),
            SettingRow::LineColor => style.line_color.name().to_string(),
            SettingRow::Marker => style.marker.name().to_string(),
        };

        let selected = state.selected == row;
        let label_style = if selected {
            Style::default()
                .fg(colors.bg0)
                .bg(colors.yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.green)
        };
        let value_text = if selected {
            format!("< {:^12} >", value)
        } else {
            format!("  {:^12}  ", value)
        };
        let value_style = if selected {
            Style::default().fg(colors.yellow)
        } else {
            Style::default().fg(colors.aqua)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {:<13}", row.label()), label_style),
            Span::styled(value_text, value_style),
        ]));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().fg(colors.fg0));
    f.render_widget(paragraph, inner);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
