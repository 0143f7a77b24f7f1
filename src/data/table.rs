//! The fixed-size point table.

use super::point::DataPoint;

/// Number of rows in the entry grid.
///
/// The table always holds exactly this many slots; unused slots are
/// simply empty.
pub const ROW_CAPACITY: usize = 30;

/// The two editable columns of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Domain column.
    X,
    /// Value column.
    Y,
}

impl Column {
    /// The other column.
    pub fn other(self) -> Self {
        match self {
            Column::X => Column::Y,
            Column::Y => Column::X,
        }
    }

    /// Column header text.
    pub fn name(self) -> &'static str {
        match self {
            Column::X => "X",
            Column::Y => "Y",
        }
    }
}

/// The 30-slot table backing the entry grid.
///
/// Every mutation goes through cell-level operations; rows are never
/// inserted or removed, only filled and cleared. Out-of-range row
/// indices are ignored.
#[derive(Debug, Clone)]
pub struct DataTable {
    rows: [DataPoint; ROW_CAPACITY],
}

impl Default for DataTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DataTable {
    /// A table of empty slots.
    pub fn new() -> Self {
        Self {
            rows: [DataPoint::default(); ROW_CAPACITY],
        }
    }

    /// All slots in order, including empty ones.
    pub fn rows(&self) -> &[DataPoint] {
        &self.rows
    }

    /// Value of one cell.
    pub fn cell(&self, row: usize, col: Column) -> Option<f64> {
        let point = self.rows.get(row)?;
        match col {
            Column::X => point.x,
            Column::Y => point.y,
        }
    }

    /// Set one cell.
    pub fn set_cell(&mut self, row: usize, col: Column, value: Option<f64>) {
        if let Some(point) = self.rows.get_mut(row) {
            match col {
                Column::X => point.x = value,
                Column::Y => point.y = value,
            }
        }
    }

    /// Apply edited text to a cell.
    ///
    /// The text is trimmed first. Empty text clears the cell; a finite
    /// number replaces the value; anything else leaves the prior value
    /// untouched, without reporting an error. Non-finite inputs such as
    /// `inf` are rejected like any other bad text so axis bounds stay
    /// finite.
    pub fn commit_text(&mut self, row: usize, col: Column, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.set_cell(row, col, None);
        } else if let Ok(value) = text.parse::<f64>() {
            if value.is_finite() {
                self.set_cell(row, col, Some(value));
            }
        }
    }

    /// Clear one cell.
    pub fn clear_cell(&mut self, row: usize, col: Column) {
        self.set_cell(row, col, None);
    }

    /// Clear both cells of a row.
    pub fn clear_row(&mut self, row: usize) {
        if let Some(point) = self.rows.get_mut(row) {
            *point = DataPoint::default();
        }
    }

    /// The complete points, in slot order.
    ///
    /// Rows with only one cell filled are skipped without disturbing the
    /// order of the rest.
    pub fn valid_points(&self) -> Vec<(f64, f64)> {
        self.rows.iter().filter_map(DataPoint::pair).collect()
    }

    /// Replace the whole table with the given points.
    ///
    /// Every slot is cleared first; then `min(len, ROW_CAPACITY)` points
    /// are copied in order. Extra points are dropped and a short list
    /// leaves the tail empty.
    pub fn replace_all(&mut self, points: &[DataPoint]) {
        self.rows = [DataPoint::default(); ROW_CAPACITY];
        for (slot, point) in self.rows.iter_mut().zip(points) {
            *slot = *point;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_has_thirty_empty_slots() {
        let table = DataTable::new();
        assert_eq!(table.rows().len(), ROW_CAPACITY);
        assert!(table.rows().iter().all(DataPoint::is_empty));
        assert!(table.valid_points().is_empty());
    }

    #[test]
    fn commit_text_parses_and_stores() {
        let mut table = DataTable::new();
        table.commit_text(0, Column::X, "3.5");
        table.commit_text(0, Column::Y, " -2 ");
        assert_eq!(table.cell(0, Column::X), Some(3.5));
        assert_eq!(table.cell(0, Column::Y), Some(-2.0));
    }

    #[test]
    fn commit_text_empty_clears_cell() {
        let mut table = DataTable::new();
        table.set_cell(2, Column::Y, Some(7.0));
        table.commit_text(2, Column::Y, "   ");
        assert_eq!(table.cell(2, Column::Y), None);
    }

    #[test]
    fn commit_text_invalid_keeps_prior_value() {
        let mut table = DataTable::new();
        table.set_cell(1, Column::X, Some(2.0));
        table.commit_text(1, Column::X, "abc");
        assert_eq!(table.cell(1, Column::X), Some(2.0));
    }

    #[test]
    fn commit_text_rejects_non_finite_input() {
        let mut table = DataTable::new();
        table.set_cell(0, Column::X, Some(1.0));
        table.commit_text(0, Column::X, "inf");
        table.commit_text(0, Column::X, "NaN");
        assert_eq!(table.cell(0, Column::X), Some(1.0));
    }

    #[test]
    fn valid_points_skips_partial_rows() {
        let mut table = DataTable::new();
        table.set_cell(0, Column::X, Some(1.0));
        table.set_cell(0, Column::Y, Some(2.0));
        table.set_cell(1, Column::X, Some(9.0));
        table.set_cell(3, Column::Y, Some(9.0));
        table.set_cell(5, Column::X, Some(5.0));
        table.set_cell(5, Column::Y, Some(6.0));
        assert_eq!(table.valid_points(), vec![(1.0, 2.0), (5.0, 6.0)]);
    }

    #[test]
    fn clear_row_clears_both_cells() {
        let mut table = DataTable::new();
        table.set_cell(4, Column::X, Some(1.0));
        table.set_cell(4, Column::Y, Some(2.0));
        table.clear_row(4);
        assert!(table.rows()[4].is_empty());
    }

    #[test]
    fn out_of_range_rows_are_ignored() {
        let mut table = DataTable::new();
        table.set_cell(ROW_CAPACITY, Column::X, Some(1.0));
        table.commit_text(ROW_CAPACITY + 5, Column::Y, "2");
        assert_eq!(table.cell(ROW_CAPACITY, Column::X), None);
        assert!(table.valid_points().is_empty());
    }

    #[test]
    fn replace_all_truncates_at_capacity() {
        let mut table = DataTable::new();
        let points: Vec<_> = (0..35).map(|i| DataPoint::new(i as f64, 0.0)).collect();
        table.replace_all(&points);
        assert_eq!(table.valid_points().len(), ROW_CAPACITY);
        assert_eq!(table.cell(29, Column::X), Some(29.0));
    }

    #[test]
    fn replace_all_clears_slots_past_the_input() {
        let mut table = DataTable::new();
        table.set_cell(29, Column::X, Some(99.0));
        table.set_cell(29, Column::Y, Some(99.0));
        table.replace_all(&[DataPoint::new(1.0, 2.0)]);
        assert_eq!(table.cell(0, Column::X), Some(1.0));
        assert!(table.rows()[29].is_empty());
        assert_eq!(table.valid_points(), vec![(1.0, 2.0)]);
    }

    #[test]
    fn replace_all_with_empty_input_clears_grid() {
        let mut table = DataTable::new();
        table.set_cell(0, Column::X, Some(1.0));
        table.replace_all(&[]);
        assert!(table.rows().iter().all(DataPoint::is_empty));
    }
}
