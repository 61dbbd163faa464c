//! Error types for the quadratic solver.
//!
//! Input validation failures are reported as [`ParseError`]. Everything the
//! application shell can run into is collected in [`QuadraticError`].

use std::fmt;
use thiserror::Error;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, QuadraticError>;

/// One of the three coefficients of `ax^2 + bx + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    /// Leading coefficient.
    A,
    /// Linear coefficient.
    B,
    /// Constant term.
    C,
}

impl Coefficient {
    /// All coefficients in input order.
    pub const ALL: [Coefficient; 3] = [Coefficient::A, Coefficient::B, Coefficient::C];

    /// Single-letter name of the coefficient.
    pub fn name(self) -> &'static str {
        match self {
            Coefficient::A => "a",
            Coefficient::B => "b",
            Coefficient::C => "c",
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons a set of coefficient strings can be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// One or more fields were left empty.
    #[error("Values not entered")]
    MissingInput,

    /// A field does not hold a finite real number.
    #[error("Invalid value for '{coefficient}': {text}")]
    NotANumber {
        /// Field that failed to parse.
        coefficient: Coefficient,
        /// Text as entered.
        text: String,
    },

    /// The equation would not be quadratic.
    #[error("'a' cannot be zero")]
    ZeroLeadingCoefficient,
}

impl ParseError {
    /// Create a NotANumber error.
    pub fn not_a_number(coefficient: Coefficient, text: impl Into<String>) -> Self {
        Self::NotANumber {
            coefficient,
            text: text.into(),
        }
    }
}

/// Errors that can occur in the application shell.
#[derive(Debug, Error)]
pub enum QuadraticError {
    /// Coefficients were rejected.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Action needs a solved equation.
    #[error("No equation solved yet")]
    NotSolved,

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Terminal IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
