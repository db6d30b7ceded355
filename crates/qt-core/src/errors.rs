//! Error types for quadtrace.
//!
//! Every failure the engine can report is a variant of the single
//! `thiserror`-derived [`Error`] enum.  Validation failures abort the call
//! that raised them; the `ensure!` and `fail!` macros defined here return
//! early with a given variant.

use thiserror::Error;

use crate::{Real, Size};

/// The top-level error type used throughout quadtrace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The abscissa and ordinate sequences differ in length.
    #[error("x and y must have the same length (x: {x_len}, y: {y_len})")]
    ShapeMismatch {
        /// Number of abscissae supplied.
        x_len: Size,
        /// Number of ordinates supplied.
        y_len: Size,
    },

    /// Fewer than two samples were supplied.
    #[error("at least 2 data points are required, got {0}")]
    InsufficientPoints(Size),

    /// The abscissae decrease somewhere.
    #[error("x values must be in ascending order: x[{index}] = {left} > x[{next}] = {right}", next = .index + 1)]
    NotMonotonic {
        /// Index of the left sample of the offending pair.
        index: Size,
        /// `x[index]`.
        left: Real,
        /// `x[index + 1]`.
        right: Real,
    },

    /// A sample coordinate is NaN or infinite.
    #[error("{axis}[{index}] is not a finite number")]
    NonFinite {
        /// `'x'` or `'y'`.
        axis: char,
        /// Position of the offending sample.
        index: Size,
    },

    /// The requested integration method identifier is not supported.
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// A rule kernel was invoked on a range it cannot integrate.
    ///
    /// The composer only hands eligible ranges to the kernels, so this
    /// variant surfacing from a full calculation indicates a composer defect.
    #[error("{rule}: cannot integrate points {start}..={end}: {reason}")]
    InvalidIntervalCount {
        /// Display name of the rule.
        rule: &'static str,
        /// First point index of the range.
        start: Size,
        /// Last point index of the range.
        end: Size,
        /// Which precondition failed.
        reason: String,
    },

    /// Invalid argument (settings validation).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout quadtrace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function if `$cond` is false.
///
/// # Example
/// ```
/// use qt_core::{ensure, errors::Error};
/// fn at_least_two(len: usize) -> qt_core::errors::Result<usize> {
///     ensure!(len >= 2, Error::InsufficientPoints(len));
///     Ok(len - 1)
/// }
/// assert_eq!(at_least_two(5), Ok(4));
/// assert_eq!(at_least_two(1), Err(Error::InsufficientPoints(1)));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Return `Err($err)` immediately.
///
/// # Example
/// ```
/// use qt_core::{fail, errors::Error};
/// fn lookup(id: &str) -> qt_core::errors::Result<u8> {
///     match id {
///         "one" => Ok(1),
///         other => fail!(Error::UnknownMethod(other.to_string())),
///     }
/// }
/// assert!(lookup("two").is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr) => {
        return Err($err)
    };
}
