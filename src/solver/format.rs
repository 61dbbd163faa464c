//! Display formatting for real and complex values.

use num_complex::Complex64;

/// Format a real number using the shortest representation that round-trips.
///
/// Magnitudes outside `[1e-4, 1e16)` switch to exponent form. Negative zero
/// is printed as `0`.
pub fn format_real(val: f64) -> String {
    if val == 0.0 {
        return "0".to_string();
    }
    if val.is_finite() && !(1e-4..1e16).contains(&val.abs()) {
        format!("{:e}", val)
    } else {
        format!("{}", val)
    }
}

/// Format a complex number as `<real> ± <imag> i`.
///
/// A value with zero imaginary part is printed as a plain real number.
pub fn format_complex(z: Complex64) -> String {
    if z.im == 0.0 {
        return format_real(z.re);
    }
    let sign = if z.im.is_sign_negative() { '-' } else { '+' };
    format!("{} {} {} i", format_real(z.re), sign, format_real(z.im.abs()))
}
