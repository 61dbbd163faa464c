//! Color themes and border styles for the UI.

use crate::app::{Theme, WidgetStyle};
use ratatui::{style::Color, widgets::BorderType};

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Focused field foreground color.
    pub focus_fg: Color,
    /// Focused field background color.
    pub focus_bg: Color,
    /// Chart background color.
    pub plot_bg: Color,
    /// Chart axis color.
    pub axis: Color,
    /// Parabola line color.
    pub curve: Color,
    /// Sample point color.
    pub points: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bg: Color::Rgb(255, 255, 255),
                text: Color::Rgb(0, 0, 0),
                heading: Color::Rgb(0, 0, 0),
                border: Color::Rgb(128, 128, 128),
                focus_fg: Color::Rgb(255, 255, 255),
                focus_bg: Color::Rgb(0, 0, 0),
                plot_bg: Color::Rgb(255, 255, 255),
                axis: Color::Rgb(0, 0, 0),
                curve: Color::Rgb(31, 119, 180),
                points: Color::Rgb(0, 0, 0),
                status_fg: Color::Rgb(0, 0, 0),
                status_bg: Color::Rgb(224, 224, 224),
            },
            Theme::Dark => Self {
                bg: Color::Rgb(18, 18, 18),
                text: Color::Rgb(255, 255, 255),
                heading: Color::Rgb(255, 255, 255),
                border: Color::Rgb(96, 96, 96),
                focus_fg: Color::Rgb(18, 18, 18),
                focus_bg: Color::Rgb(255, 255, 255),
                plot_bg: Color::Rgb(0, 0, 0),
                axis: Color::Rgb(255, 255, 255),
                curve: Color::Rgb(102, 178, 255),
                points: Color::Rgb(255, 255, 255),
                status_fg: Color::Rgb(255, 255, 255),
                status_bg: Color::Rgb(48, 48, 48),
            },
            Theme::Sepia => Self {
                bg: Color::Rgb(245, 222, 179),
                text: Color::Rgb(112, 66, 20),
                heading: Color::Rgb(112, 66, 20),
                border: Color::Rgb(160, 120, 80),
                focus_fg: Color::Rgb(245, 222, 179),
                focus_bg: Color::Rgb(112, 66, 20),
                plot_bg: Color::Rgb(210, 180, 140),
                axis: Color::Rgb(112, 66, 20),
                curve: Color::Rgb(139, 69, 19),
                points: Color::Rgb(112, 66, 20),
                status_fg: Color::Rgb(245, 222, 179),
                status_bg: Color::Rgb(112, 66, 20),
            },
        }
    }
}

/// Border type for a widget style.
pub fn border_type(style: WidgetStyle) -> BorderType {
    match style {
        WidgetStyle::Plain => BorderType::Plain,
        WidgetStyle::Rounded => BorderType::Rounded,
        WidgetStyle::Double => BorderType::Double,
        WidgetStyle::Thick => BorderType::Thick,
    }
}
