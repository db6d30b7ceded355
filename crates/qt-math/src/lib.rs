//! # qt-math
//!
//! Adaptive composite quadrature over discrete, possibly irregularly
//! spaced samples, with a step-by-step derivation of every result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Numerical integration of discrete samples.
pub mod integrals;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, widths_match};
pub use integrals::{
    calculate, compare_all, ComparisonResult, IntegrationCalculator, IntegrationResult, Rule,
    SampleSet, Scheme,
};
