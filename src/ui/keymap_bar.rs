//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, steps_visible: bool, colors: &ThemeColors) {
    let keymap_text = if steps_visible {
        "Esc/s/q:close"
    } else {
        "Enter:solve | Tab/↑↓:field | s:steps | t:theme | w:style | y:copy | c:clear | ?:help | q:quit"
    };

    let paragraph = Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
