//! Data storage and persistence.
//!
//! This module owns the fixed-size point table the grid edits, and the
//! JSON serialization used to save and restore it.

mod io;
mod point;
mod table;

pub use io::{load_points, save_table};
pub use point::DataPoint;
pub use table::{Column, DataTable, ROW_CAPACITY};
