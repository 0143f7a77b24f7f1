//! File dialog UI rendering.

use super::{DialogMode, FileDialogState};
use crate::shared::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Draw the file dialog overlay.
pub fn draw_file_dialog(f: &mut Frame<'_>, state: &mut FileDialogState, colors: &ThemeColors) {
    if !state.visible {
        return;
    }

    let area = centered_rect(60, 60, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let title = format!(" {} - {} ", state.mode.title(), state.current_dir.display());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let (list_area, name_area) = match state.mode {
        DialogMode::Open => (inner, None),
        DialogMode::Save => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(2)])
                .split(inner);
            (chunks[0], Some(chunks[1]))
        }
    };

    // Adjust scroll to keep cursor visible
    let viewport_height = list_area.height as usize;
    state.adjust_scroll(viewport_height);

    let items: Vec<ListItem<'_>> = state
        .entries
        .iter()
        .enumerate()
        .skip(state.scroll)
        .take(viewport_height)
        .map(|(idx, entry)| {
            let icon = if entry.is_dir { "📁" } else { "📄" };
            let text = format!("{} {}", icon, entry.name);

            let style = if idx == state.cursor {
                Style::default()
                    .fg(colors.bg0)
                    .bg(colors.yellow)
                    .add_modifier(Modifier::BOLD)
            } else if entry.is_dir {
                Style::default().fg(colors.blue)
            } else {
                Style::default().fg(colors.fg0)
            };

            ListItem::new(Line::from(text)).style(style)
        })
        .collect();

    f.render_widget(List::new(items), list_area);

    if let Some(name_area) = name_area {
        let line = Line::from(vec![
            Span::styled(" Name: ", Style::default().fg(colors.green)),
            Span::styled(
                state.name_input.as_str(),
                Style::default().fg(colors.yellow),
            ),
        ]);
        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors.bg2)),
        );
        f.render_widget(paragraph, name_area);
    }
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
