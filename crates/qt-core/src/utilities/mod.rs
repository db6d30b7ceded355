//! Miscellaneous utilities.

/// Number formatting helpers used in derivation traces.
pub mod data_formatters;
