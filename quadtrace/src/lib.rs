//! # quadtrace
//!
//! Definite integrals of discrete, possibly irregularly spaced samples by
//! the composite trapezoidal, Simpson 1/3 and Simpson 3/8 rules, each
//! result accompanied by the ordered steps of its derivation.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `qt-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use quadtrace::math::integrals::IntegrationCalculator;
//!
//! let x = [0.0, 1.0, 2.0];
//! let y = [0.0, 1.0, 4.0];
//! let calc = IntegrationCalculator::new(&x, &y)?;
//!
//! let result = calc.calculate("simpson_1_3")?;
//! assert_abs_diff_eq!(result.value(), 8.0 / 3.0, epsilon = 1e-12);
//! assert_eq!(result.method_name(), "Simpson's 1/3 Rule");
//! for step in result.steps() {
//!     println!("{step}");
//! }
//!
//! let comparison = calc.compare_all();
//! assert_eq!(comparison.len(), 3);
//! # Ok::<(), quadtrace::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, settings, and error definitions.
pub use qt_core as core;

/// Quadrature engine: samples, runs, rule kernels, composition.
pub use qt_math as math;
