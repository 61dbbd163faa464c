//! User interface rendering.

mod form;
mod formatters;
mod keymap_bar;
mod plot;
mod status_bar;
mod steps;
mod theme;

use crate::app::{App, WidgetStyle};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

pub use formatters::{axis_labels, format_axis_label};
pub use keymap_bar::draw_keymap;
pub use status_bar::draw_status;
pub use theme::{border_type, ThemeColors};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Coefficient fields
            Constraint::Length(4), // Roots
            Constraint::Min(5),    // Plot
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Key map bar
        ])
        .split(f.area());

    form::draw_form(f, app, chunks[0], &colors);
    form::draw_roots(f, app, chunks[1], &colors);
    plot::draw_plot(f, app, chunks[2], &colors);
    draw_status(f, chunks[3], &app.status, &colors);
    draw_keymap(f, chunks[4], app.show_steps, &colors);

    // Overlays
    steps::draw_steps(f, app, &colors);
}

/// Bordered panel styled for the current theme and widget style.
fn panel(title: &'static str, style: WidgetStyle, colors: &ThemeColors) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(border_type(style))
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg))
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::input::InputForm;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_roots_after_solve() {
        let app = App::new(InputForm::with_values("1", "-3", "2"), Theme::Light);
        let screen = render(&app);
        assert!(screen.contains("Root 1: 1"));
        assert!(screen.contains("Root 2: 2"));
        assert!(screen.contains("Enter Coefficients"));
    }

    #[test]
    fn renders_placeholder_without_solution() {
        let app = App::new(InputForm::new(), Theme::Dark);
        let screen = render(&app);
        assert!(screen.contains("No equation plotted"));
        assert!(screen.contains("Root 1: -"));
    }

    #[test]
    fn renders_steps_popup() {
        let mut app = App::new(InputForm::with_values("1", "0", "1"), Theme::Sepia);
        app.toggle_steps();
        let screen = render(&app);
        assert!(screen.contains("Steps to Answer"));
        assert!(screen.contains("Root 2: 0 + 1 i"));
    }

    #[test]
    fn every_theme_and_style_renders() {
        let mut app = App::new(InputForm::with_values("2", "5", "-3"), Theme::Light);
        for _ in 0..3 {
            for _ in 0..4 {
                render(&app);
                app.cycle_widget_style();
            }
            app.cycle_theme();
        }
    }

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(70, 50, parent);
        assert!(popup.width <= 70 && popup.height <= 20);
        assert!(popup.x >= 15 && popup.y >= 10);
    }
}
