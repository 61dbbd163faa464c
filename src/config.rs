//! View configuration for the terminal front-end.

use crate::solver::SampleRange;

/// Configuration for the parabola chart.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Visible x bounds.
    pub x_bounds: [f64; 2],
    /// Visible y bounds.
    pub y_bounds: [f64; 2],
    /// Points sampled for each solve.
    pub range: SampleRange,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_bounds: [-50.0, 50.0],
            y_bounds: [-50.0, 50.0],
            range: SampleRange::default(),
        }
    }
}

/// Configuration for the steps popup.
#[derive(Debug, Clone)]
pub struct PopupConfig {
    /// Popup width as a percentage of the screen.
    pub percent_x: u16,
    /// Popup height as a percentage of the screen.
    pub percent_y: u16,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            percent_x: 70,
            percent_y: 50,
        }
    }
}

/// Combined view configuration.
#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    /// Chart settings.
    pub plot: PlotConfig,
    /// Steps popup settings.
    pub popup: PopupConfig,
}
