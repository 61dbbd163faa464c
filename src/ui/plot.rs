//! Parabola chart.

use super::formatters::axis_labels;
use super::{panel, ThemeColors};
use crate::app::App;
use crate::solver::format_real;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw the chart of the current sample series.
pub(super) fn draw_plot(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let plot = &app.config.plot;
    let block = panel(" Plot ", app.widget_style, colors).style(Style::default().bg(colors.plot_bg));

    let (Some(series), Some(solution)) = (&app.series, &app.solution) else {
        let para = Paragraph::new("No equation plotted")
            .style(Style::default().fg(colors.text).bg(colors.plot_bg))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    };

    let [x_axis_line, y_axis_line] = zero_axes(plot.x_bounds, plot.y_bounds);
    let line = series.to_chart_data();
    let points = series.visible(plot.y_bounds[0], plot.y_bounds[1]);

    let coeffs = solution.coefficients();
    let name = format!(
        "y = ({})x^2 + ({})x + ({})",
        format_real(coeffs.a()),
        format_real(coeffs.b()),
        format_real(coeffs.c())
    );

    let grid = Style::default().fg(colors.border);
    let datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(grid)
            .data(&x_axis_line),
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(grid)
            .data(&y_axis_line),
        Dataset::default()
            .name(name)
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.curve))
            .data(&line),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(colors.points))
            .data(&points),
    ];

    let x_axis = Axis::default()
        .title("x")
        .style(Style::default().fg(colors.axis))
        .bounds(plot.x_bounds)
        .labels(axis_labels(plot.x_bounds));

    let y_axis = Axis::default()
        .title("y")
        .style(Style::default().fg(colors.axis))
        .bounds(plot.y_bounds)
        .labels(axis_labels(plot.y_bounds));

    let chart = Chart::new(datasets)
        .block(block)
        .style(Style::default().fg(colors.text).bg(colors.plot_bg))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Lines along `y = 0` and `x = 0`, clamped to the visible bounds.
fn zero_axes(x_bounds: [f64; 2], y_bounds: [f64; 2]) -> [Vec<(f64, f64)>; 2] {
    let x0 = 0.0_f64.clamp(x_bounds[0], x_bounds[1]);
    let y0 = 0.0_f64.clamp(y_bounds[0], y_bounds[1]);
    [
        vec![(x_bounds[0], y0), (x_bounds[1], y0)],
        vec![(x0, y_bounds[0]), (x0, y_bounds[1])],
    ]
}
