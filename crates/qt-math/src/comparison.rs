//! Floating-point comparison utilities.

use qt_core::Real;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if two interval widths are equal within the absolute
/// tolerance `atol`.
///
/// Widths come from subtracting neighbouring abscissae, so each already
/// carries a rounding error of a few ulps of its own magnitude; that
/// allowance is added to `atol`.  Without it `1.0000000001 - 1.0`
/// (`1.00000008e-10` once rounded) would fail a `1e-10` tolerance.
///
/// `atol` stays absolute.  Far from the origin the subtraction alone can
/// round by more than `1e-10` (near `1e6` widths move in steps of about
/// `1.16e-10`), so a grid such as `1e6 + i * 0.1` splits into several
/// runs under the default; widen it with
/// `IntegrationSettings::with_run_tolerance` for such data.
#[inline]
pub fn widths_match(a: Real, b: Real, atol: Real) -> bool {
    let rounding = 4.0 * Real::EPSILON * a.abs().max(b.abs());
    close(a, b, atol + rounding)
}
