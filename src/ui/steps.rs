//! Worked steps popup.

use super::{centered_rect, panel, ThemeColors};
use crate::app::App;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Draw the steps popup on top of everything else.
pub(super) fn draw_steps(f: &mut Frame<'_>, app: &App, colors: &ThemeColors) {
    if !app.show_steps {
        return;
    }
    let Some(steps) = app.steps() else {
        return;
    };

    let popup = &app.config.popup;
    let area = centered_rect(popup.percent_x, popup.percent_y, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let mut lines: Vec<Line<'_>> = steps
        .into_iter()
        .enumerate()
        .map(|(idx, text)| {
            // Generic formulas are highlighted, substitutions are plain
            let style = if idx % 2 == 0 && idx < 4 {
                Style::default().fg(colors.heading).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(colors.border),
    )));

    let paragraph = Paragraph::new(lines)
        .block(panel(" Steps to Answer ", app.widget_style, colors))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
