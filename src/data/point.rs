//! A single table slot.

use serde::{Deserialize, Serialize};

/// One row of the entry grid: two independently optional cells.
///
/// A point takes part in the fit only when both cells are filled.
/// Serialized as `{"x": number|null, "y": number|null}`; empty cells are
/// written as explicit nulls and absent keys read back as empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Domain cell.
    #[serde(default)]
    pub x: Option<f64>,
    /// Value cell.
    #[serde(default)]
    pub y: Option<f64>,
}

impl DataPoint {
    /// A point with both cells filled.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// The coordinate pair, when both cells are filled.
    pub fn pair(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }

    /// Whether both cells are empty.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}
