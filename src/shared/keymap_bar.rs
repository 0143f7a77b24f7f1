//! Keymap help bar UI component.

use super::ThemeColors;
use crate::file_dialog::DialogMode;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    editing: bool,
    settings_visible: bool,
    dialog_mode: Option<DialogMode>,
    help_visible: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if help_visible {
        "Esc/?/q:close"
    } else if let Some(mode) = dialog_mode {
        match mode {
            DialogMode::Open => "jk/↑↓:nav | Enter/l:open | h:parent | .:hidden | Esc:cancel",
            DialogMode::Save => "↑↓:nav | Type:filename | Enter:save | Esc:cancel",
        }
    } else if settings_visible {
        "jk/↑↓:option | hl/←→:adjust | Esc/c:close"
    } else if editing {
        "Enter:commit | Esc:cancel | Type a number"
    } else {
        "q:quit | hjkl:move | Enter/i:edit | x:clear | D:row | y/p:copy/paste | o:open | s:save | c:style | T:theme | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.fg0).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
