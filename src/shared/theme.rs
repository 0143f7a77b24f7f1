//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Primary text color.
    pub fg0: Color,
    /// Dimmed text color.
    pub fg1: Color,
    /// Background color.
    pub bg0: Color,
    /// Status bar background color.
    pub bg1: Color,
    /// Border color.
    pub bg2: Color,
    /// Highlight and cursor color.
    pub yellow: Color,
    /// Hint and success color.
    pub green: Color,
    /// Value color.
    pub aqua: Color,
    /// Warning color.
    pub orange: Color,
    /// Error color.
    pub red: Color,
    /// Directory color.
    pub blue: Color,
    /// Placeholder color.
    pub gray: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                fg0: Color::Rgb(235, 219, 178),
                fg1: Color::Rgb(168, 153, 132),
                bg0: Color::Rgb(40, 40, 40),
                bg1: Color::Rgb(60, 56, 54),
                bg2: Color::Rgb(102, 92, 84),
                yellow: Color::Rgb(250, 189, 47),
                green: Color::Rgb(184, 187, 38),
                aqua: Color::Rgb(142, 192, 124),
                orange: Color::Rgb(254, 128, 25),
                red: Color::Rgb(251, 73, 52),
                blue: Color::Rgb(131, 165, 152),
                gray: Color::Rgb(146, 131, 116),
            },
            Theme::GruvboxLight => Self {
                fg0: Color::Rgb(60, 56, 54),
                fg1: Color::Rgb(102, 92, 84),
                bg0: Color::Rgb(251, 245, 234),
                bg1: Color::Rgb(235, 219, 178),
                bg2: Color::Rgb(213, 196, 161),
                yellow: Color::Rgb(181, 118, 20),
                green: Color::Rgb(121, 116, 14),
                aqua: Color::Rgb(66, 123, 88),
                orange: Color::Rgb(175, 58, 3),
                red: Color::Rgb(157, 0, 6),
                blue: Color::Rgb(7, 102, 120),
                gray: Color::Rgb(124, 111, 100),
            },
        }
    }
}
