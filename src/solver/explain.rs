//! Worked steps for a solved equation.

use super::format::{format_complex, format_real};
use super::{Coefficients, RootPair};

/// Build the lines of the worked steps popup.
///
/// Substituted values are wrapped in parentheses so that negative inputs
/// read as `-(-5)` rather than `--5`.
pub fn explain(coeffs: &Coefficients, roots: &RootPair) -> Vec<String> {
    let a = format_real(coeffs.a());
    let b = format_real(coeffs.b());
    let c = format_real(coeffs.c());

    vec![
        "ax^2 + bx + c = 0".to_string(),
        format!("({a})x^2 + ({b})x + ({c}) = 0"),
        "x = (-b ± sqrt(b^2 - 4ac)) / 2a".to_string(),
        format!("x = (-({b}) ± sqrt(({b})^2 - 4*({a})*({c}))) / (2*({a}))"),
        format!("Root 1: {}", format_complex(roots.root1())),
        format!("Root 2: {}", format_complex(roots.root2())),
    ]
}
