//! Ordinate - a terminal-based linear regression visualizer.
//!
//! Ordinate provides a spreadsheet-style grid for entering up to 30 (X, Y)
//! coordinate pairs, fits an ordinary least-squares line through the complete
//! pairs, and plots both on a chart that rescales itself to keep everything
//! visible with a padded margin.
//!
//! # Features
//!
//! - 30-row editable data grid with vim-style keyboard navigation
//! - Closed-form least-squares line fitting, recomputed on every edit
//! - Auto-rescaling scatter/line chart with configurable padding
//! - JSON save and load through a built-in file dialog
//! - Adjustable point and line colors and markers
//! - Gruvbox color themes
//! - Clipboard copy and paste of rows as tab-separated text
//!
//! # Example
//!
//! ```
//! use ordinate::regression::LinearFit;
//!
//! let fit = LinearFit::fit(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!((fit.predict(4.0) - 8.0).abs() < 1e-12);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod file_dialog;
pub mod grid;
pub mod regression;
pub mod settings;
pub mod shared;
pub mod ui;

pub use error::{OrdinateError, Result};
