//! Shared formatting utilities for UI components.

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val.fract() == 0.0 {
        format!("{:.0}", val)
    } else {
        format!("{:.1}", val)
    }
}

/// Labels at the minimum, middle and maximum of `bounds`.
pub fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let [min, max] = bounds;
    vec![
        format_axis_label(min),
        format_axis_label((min + max) / 2.0),
        format_axis_label(max),
    ]
}
