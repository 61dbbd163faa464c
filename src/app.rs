//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clipboard::copy_to_clipboard;
use crate::config::ViewConfig;
use crate::error::{QuadraticError, Result};
use crate::input::InputForm;
use crate::solver::{SampleSeries, Solution};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    /// White background, black text.
    #[default]
    Light,
    /// Near-black background, white text.
    Dark,
    /// Wheat background, brown text.
    Sepia,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Sepia,
            Theme::Sepia => Theme::Light,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Sepia => "Sepia",
        }
    }
}

/// Border style used for every panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetStyle {
    /// Single-line square corners.
    Plain,
    /// Single-line rounded corners.
    #[default]
    Rounded,
    /// Double lines.
    Double,
    /// Heavy lines.
    Thick,
}

impl WidgetStyle {
    /// Get the next style in the cycle.
    pub fn next(self) -> Self {
        match self {
            WidgetStyle::Plain => WidgetStyle::Rounded,
            WidgetStyle::Rounded => WidgetStyle::Double,
            WidgetStyle::Double => WidgetStyle::Thick,
            WidgetStyle::Thick => WidgetStyle::Plain,
        }
    }

    /// Get the style name.
    pub fn name(self) -> &'static str {
        match self {
            WidgetStyle::Plain => "Plain",
            WidgetStyle::Rounded => "Rounded",
            WidgetStyle::Double => "Double",
            WidgetStyle::Thick => "Thick",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Coefficient fields.
    pub form: InputForm,
    /// Last successful solve, if any.
    pub solution: Option<Solution>,
    /// Plot points of the last successful solve.
    pub series: Option<SampleSeries>,
    /// Steps popup visibility.
    pub show_steps: bool,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Current border style.
    pub widget_style: WidgetStyle,
    /// View configuration.
    pub config: ViewConfig,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(form: InputForm, theme: Theme) -> Self {
        let mut app = Self {
            form,
            solution: None,
            series: None,
            show_steps: false,
            status: "Enter coefficients and press Enter".to_string(),
            theme,
            widget_style: WidgetStyle::default(),
            config: ViewConfig::default(),
            should_quit: false,
        };

        if app.form.is_complete() {
            app.solve();
        }

        app
    }

    /// Parse the fields, solve and sample.
    ///
    /// On failure any previous result is discarded.
    pub fn solve(&mut self) {
        let (a, b, c) = self.form.values();
        match Solution::from_text(a, b, c) {
            Ok(solution) => {
                let series = solution.sample(&self.config.plot.range);
                self.status = format!("Solved: {}", solution.roots().kind().describe());
                tracing::info!(
                    a = solution.coefficients().a(),
                    b = solution.coefficients().b(),
                    c = solution.coefficients().c(),
                    discriminant = solution.roots().discriminant(),
                    "Solved equation"
                );
                self.solution = Some(solution);
                self.series = Some(series);
            },
            Err(e) => {
                tracing::warn!("Rejected coefficients: {}", e);
                self.solution = None;
                self.series = None;
                self.show_steps = false;
                self.status = e.to_string();
            },
        }
    }

    /// Lines for the steps popup.
    pub fn steps(&self) -> Option<Vec<String>> {
        self.solution.as_ref().map(Solution::steps)
    }

    /// Toggle the steps popup.
    pub fn toggle_steps(&mut self) {
        if self.show_steps {
            self.show_steps = false;
            return;
        }
        if self.solution.is_none() {
            self.status = "Solve an equation first".to_string();
            return;
        }
        self.show_steps = true;
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
        tracing::debug!("Theme changed to {}", self.theme.name());
    }

    /// Cycle to the next border style.
    pub fn cycle_widget_style(&mut self) {
        self.widget_style = self.widget_style.next();
        self.status = format!("Style: {}", self.widget_style.name());
        tracing::debug!("Style changed to {}", self.widget_style.name());
    }

    /// Clear the fields and the current result.
    pub fn clear(&mut self) {
        self.form.clear();
        self.solution = None;
        self.series = None;
        self.show_steps = false;
        self.status = "Cleared".to_string();
    }

    /// Text copied to the clipboard for the current solution.
    pub fn roots_text(&self) -> Result<String> {
        let solution = self.solution.as_ref().ok_or(QuadraticError::NotSolved)?;
        let (root1, root2) = solution.roots().formatted();
        Ok(format!("Root 1: {}\nRoot 2: {}", root1, root2))
    }

    /// Copy the roots to the clipboard.
    pub fn copy_roots(&self) -> Result<()> {
        copy_to_clipboard(&self.roots_text()?)
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Steps popup - handle separately
        if self.show_steps {
            match key.code {
                KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') | KeyCode::Enter => {
                    self.show_steps = false;
                },
                _ => {},
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Enter => self.solve(),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char('s') => self.toggle_steps(),
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('w') => self.cycle_widget_style(),
            KeyCode::Char('c') => self.clear(),
            KeyCode::Char('y') => match self.copy_roots() {
                Ok(_) => self.status = "Roots copied!".to_string(),
                Err(e) => self.status = format!("Copy failed: {}", e),
            },
            KeyCode::Char('?') => {
                self.status =
                    "Help: Enter=solve, Tab=next field, s=steps, t=theme, w=style, y=copy, c=clear, q=quit"
                        .to_string();
            },
            KeyCode::Char(ch) => {
                if !self.form.input(ch) {
                    self.status = format!("'{}' is not part of a number", ch);
                }
            },
            KeyCode::Esc => self.status = "Ready".to_string(),
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn prefilled_form_is_solved_on_start() {
        let app = App::new(InputForm::with_values("1", "-3", "2"), Theme::Light);
        assert!(app.solution.is_some());
        assert_eq!(app.series.as_ref().map(SampleSeries::len), Some(101));
        assert_eq!(app.status, "Solved: two real roots");
    }

    #[test]
    fn typing_and_solving() {
        let mut app = App::new(InputForm::new(), Theme::Light);
        type_str(&mut app, "1");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "0");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status, "Solved: two complex roots");
        assert_eq!(
            app.roots_text().unwrap(),
            "Root 1: 0 - 1 i\nRoot 2: 0 + 1 i"
        );
    }

    #[test]
    fn failed_solve_discards_previous_result() {
        let mut app = App::new(InputForm::with_values("1", "-3", "2"), Theme::Light);
        assert!(app.solution.is_some());
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status, "Values not entered");
        assert!(app.solution.is_none());
        assert!(app.series.is_none());
    }

    #[test]
    fn malformed_prefill_is_rejected_not_repaired() {
        let app = App::new(InputForm::with_values("1,5", "-3", "2x"), Theme::Light);
        assert!(app.solution.is_none());
        assert!(app.series.is_none());
        assert_eq!(app.status, "Invalid value for 'a': 1,5");
        assert_eq!(app.form.values(), ("1,5", "-3", "2x"));
    }

    #[test]
    fn zero_leading_coefficient_message() {
        let mut app = App::new(InputForm::with_values("0", "2", "3"), Theme::Light);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status, "'a' cannot be zero");
    }

    #[test]
    fn steps_need_a_solution() {
        let mut app = App::new(InputForm::new(), Theme::Light);
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.show_steps);
        assert_eq!(app.status, "Solve an equation first");
        assert!(app.steps().is_none());
    }

    #[test]
    fn steps_popup_opens_and_swallows_keys() {
        let mut app = App::new(InputForm::with_values("1", "-3", "2"), Theme::Light);
        press(&mut app, KeyCode::Char('s'));
        assert!(app.show_steps);
        assert_eq!(app.steps().map(|s| s.len()), Some(6));

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Light);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_steps);
    }

    #[test]
    fn theme_and_style_do_not_touch_results() {
        let mut app = App::new(InputForm::with_values("2", "5", "-3"), Theme::Light);
        let before = app.solution;
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.widget_style, WidgetStyle::Double);
        assert_eq!(app.solution, before);
    }

    #[test]
    fn theme_cycle_returns_to_start() {
        let theme = Theme::Sepia;
        assert_eq!(theme.next().next().next(), theme);
        let style = WidgetStyle::Thick;
        assert_eq!(style.next().next().next().next(), style);
    }

    #[test]
    fn rejected_character_reports_status() {
        let mut app = App::new(InputForm::new(), Theme::Light);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.status, "'x' is not part of a number");
        assert_eq!(app.form.values(), ("", "", ""));
    }

    #[test]
    fn clear_and_quit() {
        let mut app = App::new(InputForm::with_values("1", "2", "1"), Theme::Dark);
        press(&mut app, KeyCode::Char('c'));
        assert!(app.solution.is_none());
        assert!(matches!(app.roots_text(), Err(QuadraticError::NotSolved)));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
