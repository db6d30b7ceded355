//! Data formatting helpers.
//!
//! The step trace prints every quantity with a fixed number of decimals so
//! that a derivation reads the same regardless of magnitude.

use crate::{Real, Size};

/// Format a real number with the given number of decimal places.
pub fn format_real(value: Real, decimals: Size) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Format a list of terms as `a + b + c`.
///
/// An empty list formats as `0`, the value of an empty sum.
pub fn format_terms(values: &[Real], decimals: Size) -> String {
    if values.is_empty() {
        return format_real(0.0, decimals);
    }
    values
        .iter()
        .map(|&v| format_real(v, decimals))
        .collect::<Vec<_>>()
        .join(" + ")
}
