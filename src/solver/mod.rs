//! Quadratic solver core.
//!
//! Everything in here is a pure function of its inputs: coefficients are
//! validated once by [`parse_coefficients`], roots come from [`solve`], plot
//! points from [`sample`], and the worked steps from [`explain`]. Nothing is
//! cached between calls.

mod explain;
mod format;
mod sample;

pub use explain::explain;
pub use format::{format_complex, format_real};
pub use sample::{sample, SampleRange, SampleSeries};

use crate::error::{Coefficient, ParseError};
use num_complex::Complex64;

/// Validated coefficients of `ax^2 + bx + c`.
///
/// All three values are finite and `a` is non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl Coefficients {
    /// Create coefficients from already-parsed values.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ParseError> {
        for (coefficient, value) in Coefficient::ALL.into_iter().zip([a, b, c]) {
            if !value.is_finite() {
                return Err(ParseError::not_a_number(coefficient, value.to_string()));
            }
        }
        if a == 0.0 {
            return Err(ParseError::ZeroLeadingCoefficient);
        }
        Ok(Self { a, b, c })
    }

    /// Leading coefficient.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Linear coefficient.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Constant term.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// `b^2 - 4ac`.
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Evaluate the polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }
}

/// Parse the three coefficient fields.
///
/// Emptiness is checked for all fields before any of them is parsed, so a
/// blank field always wins over a malformed one.
pub fn parse_coefficients(
    a_text: &str,
    b_text: &str,
    c_text: &str,
) -> Result<Coefficients, ParseError> {
    let texts = [a_text.trim(), b_text.trim(), c_text.trim()];
    if texts.iter().any(|t| t.is_empty()) {
        return Err(ParseError::MissingInput);
    }

    let mut values = [0.0; 3];
    for ((coefficient, text), value) in Coefficient::ALL.into_iter().zip(texts).zip(&mut values) {
        *value = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::not_a_number(coefficient, text))?;
    }

    let [a, b, c] = values;
    Coefficients::new(a, b, c)
}

/// Nature of the roots, decided by the sign of the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    /// Two distinct real roots.
    TwoReal,
    /// One repeated real root.
    RepeatedReal,
    /// A complex-conjugate pair.
    ComplexPair,
    /// The discriminant overflowed, so the nature of the roots is unknown.
    Undetermined,
}

impl RootKind {
    /// Human readable description.
    pub fn describe(self) -> &'static str {
        match self {
            RootKind::TwoReal => "two real roots",
            RootKind::RepeatedReal => "one repeated real root",
            RootKind::ComplexPair => "two complex roots",
            RootKind::Undetermined => "roots out of floating-point range",
        }
    }
}

/// The two roots of a quadratic.
///
/// `root1` takes the minus branch of the square root and `root2` the plus
/// branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootPair {
    root1: Complex64,
    root2: Complex64,
    discriminant: f64,
}

impl RootPair {
    /// Root on the `-sqrt(D)` branch.
    pub fn root1(&self) -> Complex64 {
        self.root1
    }

    /// Root on the `+sqrt(D)` branch.
    pub fn root2(&self) -> Complex64 {
        self.root2
    }

    /// Discriminant the roots were computed from.
    pub fn discriminant(&self) -> f64 {
        self.discriminant
    }

    /// Classify the roots.
    pub fn kind(&self) -> RootKind {
        if self.discriminant.is_nan() {
            RootKind::Undetermined
        } else if self.discriminant > 0.0 {
            RootKind::TwoReal
        } else if self.discriminant == 0.0 {
            RootKind::RepeatedReal
        } else {
            RootKind::ComplexPair
        }
    }

    /// Both roots formatted for display.
    pub fn formatted(&self) -> (String, String) {
        (format_complex(self.root1), format_complex(self.root2))
    }
}

/// Compute both roots with the principal complex square root.
pub fn solve(coeffs: &Coefficients) -> RootPair {
    let discriminant = coeffs.discriminant();
    let sqrt_d = Complex64::new(discriminant, 0.0).sqrt();
    let neg_b = Complex64::new(-coeffs.b, 0.0);
    let two_a = 2.0 * coeffs.a;

    RootPair {
        root1: (neg_b - sqrt_d) / two_a,
        root2: (neg_b + sqrt_d) / two_a,
        discriminant,
    }
}

/// A solved equation: the coefficients together with their roots.
///
/// This is the value a caller keeps around to render the steps popup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    coefficients: Coefficients,
    roots: RootPair,
}

impl Solution {
    /// Solve the given coefficients.
    pub fn new(coefficients: Coefficients) -> Self {
        let roots = solve(&coefficients);
        Self {
            coefficients,
            roots,
        }
    }

    /// Parse and solve in one step.
    pub fn from_text(a_text: &str, b_text: &str, c_text: &str) -> Result<Self, ParseError> {
        parse_coefficients(a_text, b_text, c_text).map(Self::new)
    }

    /// Coefficients of the solved equation.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Roots of the solved equation.
    pub fn roots(&self) -> &RootPair {
        &self.roots
    }

    /// Worked steps for this solution.
    pub fn steps(&self) -> Vec<String> {
        explain(&self.coefficients, &self.roots)
    }

    /// Plot points over `range`.
    pub fn sample(&self, range: &SampleRange) -> SampleSeries {
        sample(&self.coefficients, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn coeffs(a: f64, b: f64, c: f64) -> Coefficients {
        Coefficients::new(a, b, c).unwrap()
    }

    fn residual(c: &Coefficients, r: Complex64) -> f64 {
        (r * r * c.a() + r * c.b() + c.c()).norm()
    }

    #[test]
    fn missing_input_for_each_field() {
        for (a, b, c) in [("", "2", "3"), ("1", "", "3"), ("1", "2", "")] {
            assert_eq!(parse_coefficients(a, b, c), Err(ParseError::MissingInput));
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert_eq!(
            parse_coefficients("  ", "2", "3"),
            Err(ParseError::MissingInput)
        );
    }

    #[test]
    fn missing_input_wins_over_bad_number() {
        assert_eq!(
            parse_coefficients("x", "2", ""),
            Err(ParseError::MissingInput)
        );
    }

    #[test]
    fn not_a_number_names_the_field() {
        assert_eq!(
            parse_coefficients("1", "2", "abc"),
            Err(ParseError::not_a_number(Coefficient::C, "abc"))
        );
    }

    #[test]
    fn non_finite_literals_rejected() {
        assert!(matches!(
            parse_coefficients("inf", "2", "3"),
            Err(ParseError::NotANumber {
                coefficient: Coefficient::A,
                ..
            })
        ));
        assert!(matches!(
            parse_coefficients("1", "NaN", "3"),
            Err(ParseError::NotANumber {
                coefficient: Coefficient::B,
                ..
            })
        ));
    }

    #[test]
    fn zero_leading_coefficient() {
        assert_eq!(
            parse_coefficients("0", "2", "3"),
            Err(ParseError::ZeroLeadingCoefficient)
        );
        assert_eq!(
            parse_coefficients("-0.0", "2", "3"),
            Err(ParseError::ZeroLeadingCoefficient)
        );
    }

    #[test]
    fn parses_trimmed_values() {
        let c = parse_coefficients(" 1.5 ", "-3", "2e1").unwrap();
        assert_eq!((c.a(), c.b(), c.c()), (1.5, -3.0, 20.0));
    }

    #[test]
    fn two_real_roots() {
        let roots = solve(&coeffs(1.0, -3.0, 2.0));
        assert_eq!(roots.discriminant(), 1.0);
        assert_eq!(roots.root1(), Complex64::new(1.0, 0.0));
        assert_eq!(roots.root2(), Complex64::new(2.0, 0.0));
        assert_eq!(roots.kind(), RootKind::TwoReal);
    }

    #[test]
    fn complex_pair() {
        let roots = solve(&coeffs(1.0, 0.0, 1.0));
        assert_eq!(roots.discriminant(), -4.0);
        assert_eq!(roots.root1().re, 0.0);
        assert_eq!(roots.root1().im, -1.0);
        assert_eq!(roots.root2().re, 0.0);
        assert_eq!(roots.root2().im, 1.0);
        assert_eq!(roots.kind(), RootKind::ComplexPair);
    }

    #[test]
    fn repeated_root() {
        let roots = solve(&coeffs(1.0, 2.0, 1.0));
        assert_eq!(roots.kind(), RootKind::RepeatedReal);
        assert_eq!(roots.root1(), roots.root2());
        assert_eq!(roots.root1().re, -1.0);
    }

    #[test]
    fn overflowing_discriminant_is_undetermined() {
        let roots = solve(&coeffs(1e200, 1e200, 1e200));
        assert!(roots.discriminant().is_nan());
        assert_eq!(roots.kind(), RootKind::Undetermined);
        assert_eq!(roots.kind().describe(), "roots out of floating-point range");
    }

    #[test]
    fn roots_satisfy_equation() {
        let cases = [
            (1.0, -3.0, 2.0),
            (2.0, 5.0, -3.0),
            (-4.0, 1.5, 7.25),
            (0.5, 0.0, 8.0),
            (3.0, -7.0, 11.0),
            (-1.0, -1.0, -1.0),
            (1e-3, 2.0, 1.0),
        ];
        for (a, b, c) in cases {
            let co = coeffs(a, b, c);
            let roots = solve(&co);
            let scale = 1.0 + a.abs() + b.abs() + c.abs();
            assert!(residual(&co, roots.root1()) < EPS * scale * 1e3, "{a} {b} {c}");
            assert!(residual(&co, roots.root2()) < EPS * scale * 1e3, "{a} {b} {c}");
        }
    }

    #[test]
    fn solve_is_bit_identical_across_calls() {
        let co = coeffs(3.3, -1.7, 0.2);
        let first = solve(&co);
        let second = solve(&co);
        assert_eq!(first.root1().re.to_bits(), second.root1().re.to_bits());
        assert_eq!(first.root1().im.to_bits(), second.root1().im.to_bits());
        assert_eq!(first.root2().re.to_bits(), second.root2().re.to_bits());
        assert_eq!(first.root2().im.to_bits(), second.root2().im.to_bits());
    }

    #[test]
    fn negative_leading_coefficient_keeps_branch_convention() {
        // With a < 0 the minus branch yields the larger root.
        let roots = solve(&coeffs(-1.0, 3.0, -2.0));
        assert_eq!(roots.root1().re, 2.0);
        assert_eq!(roots.root2().re, 1.0);
        assert_eq!(roots.root1().im, 0.0);
    }

    #[test]
    fn solution_carries_coefficients_and_roots() {
        let solution = Solution::from_text("1", "-3", "2").unwrap();
        assert_eq!(solution.coefficients().b(), -3.0);
        assert_eq!(solution.roots().formatted(), ("1".into(), "2".into()));
        assert_eq!(solution.steps().len(), 6);
    }
}
