//! Data grid rendering.

use super::GridState;
use crate::data::{Column, DataTable, ROW_CAPACITY};
use crate::shared::{format_stat_value, ThemeColors};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{
        Block, Borders, Cell, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
    },
    Frame,
};

/// Draw the data entry grid.
pub fn draw_grid(
    f: &mut Frame<'_>,
    area: Rect,
    state: &mut GridState,
    table: &DataTable,
    colors: &ThemeColors,
) {
    // Account for borders and the header row
    let viewport_height = (area.height as usize).saturating_sub(3);
    state.adjust_scroll(viewport_height);

    let start = state.scroll;
    let end = (start + viewport_height).min(ROW_CAPACITY);

    let mut rows = Vec::new();
    for row_idx in start..end {
        let point = table.rows()[row_idx];
        let partial = point.pair().is_none() && !point.is_empty();

        let mut cells = vec![
            Cell::from(format!("{:>3}", row_idx + 1)).style(Style::default().fg(colors.green)),
        ];

        for col in [Column::X, Column::Y] {
            let is_cursor = row_idx == state.row && col == state.col;

            let text = match (&state.input, is_cursor) {
                (Some(input), true) => format!("{}▏", input),
                _ => table
                    .cell(row_idx, col)
                    .map(format_stat_value)
                    .unwrap_or_default(),
            };

            let style = if is_cursor {
                Style::default()
                    .fg(colors.bg0)
                    .bg(colors.yellow)
                    .add_modifier(Modifier::BOLD)
            } else if partial {
                Style::default().fg(colors.orange)
            } else {
                Style::default().fg(colors.aqua)
            };

            cells.push(Cell::from(text).style(style));
        }

        rows.push(Row::new(cells));
    }

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("X"),
        Cell::from("Y"),
    ])
    .style(
        Style::default()
            .fg(colors.green)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Length(4),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let title = format!(
        " Data - {} of {} rows plotted ",
        table.valid_points().len(),
        ROW_CAPACITY
    );

    let grid = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .style(Style::default().bg(colors.bg0))
                .title(title)
                .title_style(Style::default().fg(colors.yellow)),
        )
        .style(Style::default().fg(colors.fg0));

    f.render_widget(grid, area);

    // Draw scrollbar
    if ROW_CAPACITY > viewport_height {
        let mut scrollbar_state =
            ScrollbarState::new(ROW_CAPACITY.saturating_sub(viewport_height)).position(start);
        f.render_stateful_widget(
            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("^"))
                .end_symbol(Some("v")),
            area,
            &mut scrollbar_state,
        );
    }
}
