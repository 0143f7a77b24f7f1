//! JSON persistence for the data table.

use std::fs;
use std::path::Path;

use crate::error::{OrdinateError, Result};

use super::point::DataPoint;
use super::table::DataTable;

/// Write every slot of the table to `path` as a pretty-printed JSON
/// array, one object per slot with empty cells as explicit nulls.
pub fn save_table(path: &Path, table: &DataTable) -> Result<()> {
    let json = serde_json::to_string_pretty(table.rows())?;
    fs::write(path, json).map_err(|e| OrdinateError::file_write(path.to_path_buf(), e))?;
    Ok(())
}

/// Read a JSON array of points from `path`.
///
/// Unreadable files and malformed content map to distinct errors so the
/// status line can tell them apart. Nothing is applied here; the caller
/// replaces its table only on success, so a failed load leaves the
/// current data intact.
pub fn load_points(path: &Path) -> Result<Vec<DataPoint>> {
    let text =
        fs::read_to_string(path).map_err(|e| OrdinateError::file_read(path.to_path_buf(), e))?;
    let points = serde_json::from_str(&text)?;
    Ok(points)
}
