//! Quadratic - a terminal quadratic equation solver.
//!
//! The [`solver`] module is a pure library: it validates coefficient text,
//! computes both roots with complex arithmetic, samples the parabola for
//! plotting and produces the worked steps. The remaining modules form the
//! terminal front-end built on top of it.
//!
//! # Features
//!
//! - Real and complex roots via the principal square root
//! - Worked steps popup
//! - Braille parabola plot over x, y in [-50, 50]
//! - Light, dark and sepia themes with switchable border styles
//! - Clipboard integration
//!
//! # Example
//!
//! ```
//! use quadratic::solver::{parse_coefficients, sample, solve, SampleRange};
//!
//! let coeffs = parse_coefficients("1", "-3", "2").unwrap();
//! let roots = solve(&coeffs);
//! assert_eq!(roots.root1().re, 1.0);
//! assert_eq!(roots.root2().re, 2.0);
//!
//! let series = sample(&coeffs, &SampleRange::new(-2, 2, 1));
//! assert_eq!(series.len(), 5);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod input;
pub mod solver;
pub mod ui;

pub use error::{ParseError, QuadraticError, Result};
