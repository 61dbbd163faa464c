//! Coefficient fields and root labels.

use super::{panel, ThemeColors};
use crate::app::App;
use crate::error::Coefficient;
use crate::solver::format_complex;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: u16 = 4;

/// Draw the three input fields and place the cursor in the focused one.
pub(super) fn draw_form(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let focused = app.form.focused();

    let lines: Vec<Line<'_>> = Coefficient::ALL
        .into_iter()
        .map(|coefficient| {
            let value = app.form.value(coefficient);
            let value_style = if coefficient == focused && !app.show_steps {
                Style::default().fg(colors.focus_fg).bg(colors.focus_bg)
            } else {
                Style::default().fg(colors.text)
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", format!("{}:", coefficient), width = LABEL_WIDTH as usize),
                    Style::default().fg(colors.heading).add_modifier(Modifier::BOLD),
                ),
                Span::styled(value.to_string(), value_style),
            ])
        })
        .collect();

    let block = panel(" Enter Coefficients ", app.widget_style, colors);
    let inner = block.inner(area);
    f.render_widget(Paragraph::new(lines).block(block), area);

    if app.show_steps {
        return;
    }

    let row = Coefficient::ALL
        .iter()
        .position(|&c| c == focused)
        .unwrap_or(0) as u16;
    let text_width = app.form.value(focused).width() as u16;
    let x = inner.x + LABEL_WIDTH + text_width;
    let y = inner.y + row;
    if x < inner.right() && y < inner.bottom() {
        f.set_cursor_position((x, y));
    }
}

/// Draw the root labels.
pub(super) fn draw_roots(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let lines = match &app.solution {
        Some(solution) => {
            let roots = solution.roots();
            vec![
                Line::from(format!("Root 1: {}", format_complex(roots.root1()))),
                Line::from(format!("Root 2: {}", format_complex(roots.root2()))),
            ]
        },
        None => vec![Line::from("Root 1: -"), Line::from("Root 2: -")],
    };

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center)
        .block(panel(" Roots ", app.widget_style, colors));

    f.render_widget(paragraph, area);
}
