//! User interface rendering.

use crate::app::App;
use crate::{chart, file_dialog, grid, settings};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub use crate::shared::ThemeColors;
use crate::shared::{draw_keymap, draw_status};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(33), Constraint::Min(20)])
        .split(chunks[0]);

    grid::ui::draw_grid(f, panes[0], &mut app.grid, &app.table, &colors);
    chart::ui::draw_chart(f, panes[1], &app.chart, &app.style, &colors);

    draw_status(
        f,
        chunks[1],
        &app.status,
        app.error_message.as_deref(),
        &colors,
    );

    let dialog_mode = app.file_dialog.visible.then_some(app.file_dialog.mode);
    draw_keymap(
        f,
        chunks[2],
        app.grid.is_editing(),
        app.settings.visible,
        dialog_mode,
        app.help_visible,
        &colors,
    );

    // Overlays render last, on top of the panes
    settings::ui::draw_settings(f, &app.settings, &app.style, &colors);
    file_dialog::ui::draw_file_dialog(f, &mut app.file_dialog, &colors);
    if app.help_visible {
        draw_help(f, &colors);
    }
}

fn draw_help(f: &mut Frame<'_>, colors: &ThemeColors) {
    let area = centered_rect(60, 70, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let bindings: &[(&str, &str)] = &[
        ("j/k, ↑/↓", "move between rows"),
        ("h/l, ←/→, Tab", "switch column"),
        ("gg / G", "first / last row"),
        ("Enter, i", "edit cell (prefilled)"),
        ("0-9 . -", "edit cell (fresh)"),
        ("x, Del", "clear cell"),
        ("D", "clear row"),
        ("y / p", "copy / paste rows as TSV"),
        ("o / s", "open / save data file"),
        ("c", "chart style"),
        ("T", "switch theme"),
        ("?", "this help"),
        ("q", "quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, desc) in bindings {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<14}", key),
                Style::default()
                    .fg(colors.yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*desc, Style::default().fg(colors.fg0)),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
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
