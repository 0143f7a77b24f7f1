//! Chart style settings feature - padding, series colors and markers.
//!
//! This module contains the adjustable chart style and the state for the
//! settings overlay that edits it. The style is plain data; the chart
//! renderer reads it on every draw.

pub mod ui;

use ratatui::style::Color;
use ratatui::symbols::Marker;

/// Padding change for one adjustment keypress.
const PADDING_STEP: f64 = 0.01;
/// Largest selectable padding fraction.
const PADDING_MAX: f64 = 0.50;

/// Color choices for chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    /// Blue.
    Blue,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
}

impl SeriesColor {
    /// Get the next color in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Blue => Self::Red,
            Self::Red => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Magenta,
            Self::Magenta => Self::Cyan,
            Self::Cyan => Self::Blue,
        }
    }

    /// Get the previous color in cycle.
    pub fn prev(self) -> Self {
        match self {
            Self::Blue => Self::Cyan,
            Self::Red => Self::Blue,
            Self::Green => Self::Red,
            Self::Yellow => Self::Green,
            Self::Magenta => Self::Yellow,
            Self::Cyan => Self::Magenta,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Magenta => "Magenta",
            Self::Cyan => "Cyan",
        }
    }

    /// Terminal color for this choice.
    pub fn color(self) -> Color {
        match self {
            Self::Blue => Color::Blue,
            Self::Red => Color::Red,
            Self::Green => Color::Green,
            Self::Yellow => Color::Yellow,
            Self::Magenta => Color::Magenta,
            Self::Cyan => Color::Cyan,
        }
    }
}

/// Marker choices for the scatter series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointMarker {
    /// Single dot per point.
    Dot,
    /// Braille sub-cell dots.
    Braille,
    /// Full block cells.
    Block,
    /// Half block cells.
    HalfBlock,
}

impl PointMarker {
    /// Get the next marker in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Dot => Self::Braille,
            Self::Braille => Self::Block,
            Self::Block => Self::HalfBlock,
            Self::HalfBlock => Self::Dot,
        }
    }

    /// Get the previous marker in cycle.
    pub fn prev(self) -> Self {
        match self {
            Self::Dot => Self::HalfBlock,
            Self::Braille => Self::Dot,
            Self::Block => Self::Braille,
            Self::HalfBlock => Self::Block,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dot => "Dot",
            Self::Braille => "Braille",
            Self::Block => "Block",
            Self::HalfBlock => "Half Block",
        }
    }

    /// Drawing marker for this choice.
    pub fn marker(self) -> Marker {
        match self {
            Self::Dot => Marker::Dot,
            Self::Braille => Marker::Braille,
            Self::Block => Marker::Block,
            Self::HalfBlock => Marker::HalfBlock,
        }
    }
}

/// Adjustable chart appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    /// Axis padding as a fraction of the data span, per side.
    pub padding: f64,
    /// Scatter point color.
    pub point_color: SeriesColor,
    /// Regression line color.
    pub line_color: SeriesColor,
    /// Scatter point marker.
    pub marker: PointMarker,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            padding: 0.10,
            point_color: SeriesColor::Blue,
            line_color: SeriesColor::Red,
            marker: PointMarker::Dot,
        }
    }
}

/// One row of the settings overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingRow {
    /// Axis padding percentage.
    #[default]
    Padding,
    /// Scatter point color.
    PointColor,
    /// Regression line color.
    LineColor,
    /// Scatter point marker.
    Marker,
}

impl SettingRow {
    /// Get the next row in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Padding => Self::PointColor,
            Self::PointColor => Self::LineColor,
            Self::LineColor => Self::Marker,
            Self::Marker => Self::Padding,
        }
    }

    /// Get the previous row in cycle.
    pub fn prev(self) -> Self {
        match self {
            Self::Padding => Self::Marker,
            Self::PointColor => Self::Padding,
            Self::LineColor => Self::PointColor,
            Self::Marker => Self::LineColor,
        }
    }

    /// Row label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Padding => "Padding",
            Self::PointColor => "Point color",
            Self::LineColor => "Line color",
            Self::Marker => "Marker",
        }
    }
}

/// Settings overlay state.
#[derive(Debug, Default)]
pub struct SettingsState {
    /// Is the overlay visible.
    pub visible: bool,
    /// Currently selected row.
    pub selected: SettingRow,
}

impl SettingsState {
    /// Open the overlay on its first row.
    pub fn open(&mut self) {
        self.visible = true;
        self.selected = SettingRow::Padding;
    }

    /// Close the overlay.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    /// Move selection up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Increase the selected option.
    pub fn adjust_up(&self, style: &mut ChartStyle) {
        match self.selected {
            SettingRow::Padding => {
                style.padding = (style.padding + PADDING_STEP).min(PADDING_MAX);
            }
            SettingRow::PointColor => style.point_color = style.point_color.next(),
            SettingRow::LineColor => style.line_color = style.line_color.next(),
            SettingRow::Marker => style.marker = style.marker.next(),
        }
    }

    /// Decrease the selected option.
    pub fn adjust_down(&self, style: &mut ChartStyle) {
        match self.selected {
            SettingRow::Padding => {
                style.padding = (style.padding - PADDING_STEP).max(0.0);
            }
            SettingRow::PointColor => style.point_color = style.point_color.prev(),
            SettingRow::LineColor => style.line_color = style.line_color.prev(),
            SettingRow::Marker => style.marker = style.marker.prev(),
        }
    }
}
