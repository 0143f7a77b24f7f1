//! Data grid feature - spreadsheet-style entry of point pairs.
//!
//! This module contains cursor and edit state for the fixed 30-row table.
//! All value changes go through [`DataTable`]; the grid only decides which
//! cell they apply to and carries the in-progress edit text.

pub mod ui;

use crate::data::{Column, DataTable, ROW_CAPACITY};

/// Grid cursor and edit state.
#[derive(Debug)]
pub struct GridState {
    /// Cursor row.
    pub row: usize,
    /// Cursor column.
    pub col: Column,
    /// Scroll offset.
    pub scroll: usize,
    /// Text being edited, when a cell edit is in progress.
    pub input: Option<String>,
}

impl GridState {
    /// Create a new grid state with the cursor on the first cell.
    pub fn new() -> Self {
        Self {
            row: 0,
            col: Column::X,
            scroll: 0,
            input: None,
        }
    }

    /// Is a cell edit in progress.
    pub fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) {
        if self.row + 1 < ROW_CAPACITY {
            self.row += 1;
        }
    }

    /// Jump to the first row.
    pub fn goto_first(&mut self) {
        self.row = 0;
    }

    /// Jump to the last row.
    pub fn goto_last(&mut self) {
        self.row = ROW_CAPACITY - 1;
    }

    /// Switch to the other column.
    pub fn toggle_column(&mut self) {
        self.col = self.col.other();
    }

    /// Start editing the current cell, prefilled with its value.
    pub fn begin_edit(&mut self, table: &DataTable) {
        let text = table
            .cell(self.row, self.col)
            .map(|v| v.to_string())
            .unwrap_or_default();
        self.input = Some(text);
    }

    /// Start editing the current cell with a fresh buffer.
    pub fn begin_edit_with(&mut self, c: char) {
        self.input = Some(c.to_string());
    }

    /// Append a character to the edit buffer.
    pub fn input_push(&mut self, c: char) {
        if let Some(input) = self.input.as_mut() {
            input.push(c);
        }
    }

    /// Remove the last character of the edit buffer.
    pub fn input_pop(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.pop();
        }
    }

    /// Apply the edit buffer to the current cell and leave edit mode.
    pub fn commit_edit(&mut self, table: &mut DataTable) {
        if let Some(text) = self.input.take() {
            table.commit_text(self.row, self.col, &text);
        }
    }

    /// Discard the edit buffer.
    pub fn cancel_edit(&mut self) {
        self.input = None;
    }

    /// All non-empty rows as tab-separated `x<TAB>y` lines.
    ///
    /// Empty cells of a partial row become empty fields, so the output
    /// pastes back to the same table content.
    pub fn yank_tsv(&self, table: &DataTable) -> String {
        let mut out = String::new();
        for point in table.rows() {
            if point.is_empty() {
                continue;
            }
            let x = point.x.map(|v| v.to_string()).unwrap_or_default();
            let y = point.y.map(|v| v.to_string()).unwrap_or_default();
            out.push_str(&format!("{}\t{}\n", x, y));
        }
        out
    }

    /// Paste tabular text into consecutive rows starting at the cursor.
    ///
    /// Each non-blank line fills one row; fields split on tabs, or on any
    /// whitespace for lines without tabs. Unparseable fields leave the
    /// cell as it was, and rows past the table capacity are dropped.
    /// Returns the number of rows written.
    pub fn paste_tsv(&self, table: &mut DataTable, text: &str) -> usize {
        let mut target = self.row;
        let mut written = 0;

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if target >= ROW_CAPACITY {
                break;
            }

            let mut fields = if line.contains('\t') {
                line.split('\t')
            } else {
                line.split(' ')
            }
            .filter(|s| !s.trim().is_empty() || line.contains('\t'));

            if let Some(x) = fields.next() {
                table.commit_text(target, Column::X, x);
            }
            if let Some(y) = fields.next() {
                table.commit_text(target, Column::Y, y);
            }

            target += 1;
            written += 1;
        }

        written
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.row < self.scroll {
            self.scroll = self.row;
        }

        if self.row >= self.scroll + viewport_height {
            self.scroll = self.row.saturating_sub(viewport_height - 1);
        }
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut grid = GridState::new();
        grid.cursor_up();
        assert_eq!(grid.row, 0);

        grid.goto_last();
        grid.cursor_down();
        assert_eq!(grid.row, ROW_CAPACITY - 1);
    }

    #[test]
    fn begin_edit_prefills_the_cell_value() {
        let mut table = DataTable::new();
        table.set_cell(0, Column::X, Some(3.5));

        let mut grid = GridState::new();
        grid.begin_edit(&table);
        assert_eq!(grid.input.as_deref(), Some("3.5"));

        grid.cancel_edit();
        grid.toggle_column();
        grid.begin_edit(&table);
        assert_eq!(grid.input.as_deref(), Some(""));
    }

    #[test]
    fn commit_edit_writes_through_to_the_table() {
        let mut table = DataTable::new();
        let mut grid = GridState::new();

        grid.begin_edit_with('4');
        grid.input_push('2');
        grid.input_push('x');
        grid.input_pop();
        grid.commit_edit(&mut table);

        assert!(!grid.is_editing());
        assert_eq!(table.cell(0, Column::X), Some(42.0));
    }

    #[test]
    fn paste_fills_consecutive_rows_from_the_cursor() {
        let mut table = DataTable::new();
        let mut grid = GridState::new();
        grid.row = 2;

        let written = grid.paste_tsv(&mut table, "1\t2\n3\t4\n");
        assert_eq!(written, 2);
        assert_eq!(table.cell(2, Column::X), Some(1.0));
        assert_eq!(table.cell(2, Column::Y), Some(2.0));
        assert_eq!(table.cell(3, Column::X), Some(3.0));
        assert_eq!(table.cell(3, Column::Y), Some(4.0));
        assert_eq!(table.cell(1, Column::X), None);
    }

    #[test]
    fn paste_accepts_space_separated_lines() {
        let mut table = DataTable::new();
        let grid = GridState::new();

        grid.paste_tsv(&mut table, "1.5  2.5\n");
        assert_eq!(table.cell(0, Column::X), Some(1.5));
        assert_eq!(table.cell(0, Column::Y), Some(2.5));
    }

    #[test]
    fn paste_stops_at_table_capacity() {
        let mut table = DataTable::new();
        let mut grid = GridState::new();
        grid.row = 28;

        let text = "1\t1\n2\t2\n3\t3\n4\t4\n";
        let written = grid.paste_tsv(&mut table, text);
        assert_eq!(written, 2);
        assert_eq!(table.cell(29, Column::X), Some(2.0));
        assert_eq!(table.valid_points().len(), 2);
    }

    #[test]
    fn paste_leaves_cells_with_bad_fields_untouched() {
        let mut table = DataTable::new();
        table.set_cell(0, Column::Y, Some(7.0));
        let grid = GridState::new();

        grid.paste_tsv(&mut table, "1.0\tabc\n");
        assert_eq!(table.cell(0, Column::X), Some(1.0));
        assert_eq!(table.cell(0, Column::Y), Some(7.0));
    }

    #[test]
    fn yank_then_paste_reproduces_the_rows() {
        let mut table = DataTable::new();
        table.set_cell(0, Column::X, Some(1.5));
        table.set_cell(0, Column::Y, Some(-2.0));
        table.set_cell(2, Column::X, Some(3.0));

        let grid = GridState::new();
        let tsv = grid.yank_tsv(&table);
        assert_eq!(tsv, "1.5\t-2\n3\t\n");

        let mut restored = DataTable::new();
        grid.paste_tsv(&mut restored, &tsv);
        assert_eq!(restored.cell(0, Column::X), Some(1.5));
        assert_eq!(restored.cell(0, Column::Y), Some(-2.0));
        assert_eq!(restored.cell(1, Column::X), Some(3.0));
        assert_eq!(restored.cell(1, Column::Y), None);
    }
}
