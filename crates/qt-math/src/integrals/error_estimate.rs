//! Truncation-error estimates from finite differences.
//!
//! Only defined for uniform spacing.  The estimates bound the leading
//! error term of each composite rule using the largest finite difference
//! of the ordinates as a proxy for the derivative:
//!
//! * trapezoidal: $-\frac{h^3}{12}\max|\Delta^2 y|\,n$, needs `n >= 2`;
//! * Simpson 1/3: $-\frac{h^5}{90}\max|\Delta^4 y|\,(x_n - x_0)$, needs more than 4 points;
//! * Simpson 3/8: $-\frac{3h^5}{80}\max|\Delta^4 y|\,(x_n - x_0)$, needs more than 4 points.

use qt_core::{Real, Size};

use super::{intervals::Spacing, method::Rule, samples::SampleSet};

/// `order`-th forward differences of `values`, by repeated first differencing.
///
/// Yields `values.len() - order` entries, or none if `order >= values.len()`.
pub fn finite_differences(values: &[Real], order: Size) -> Vec<Real> {
    let mut diffs = values.to_vec();
    for _ in 0..order {
        if diffs.len() < 2 {
            return Vec::new();
        }
        diffs = diffs.windows(2).map(|w| w[1] - w[0]).collect();
    }
    diffs
}

/// Estimated truncation error of `rule` on `samples`, or `None` when the
/// estimate is unavailable (irregular spacing or too few points).
pub fn estimate(samples: &SampleSet, rule: Rule, spacing: &Spacing) -> Option<Real> {
    let h = match spacing {
        Spacing::Uniform(run) => run.width(),
        Spacing::Irregular(_) => return None,
    };
    let n = samples.intervals();
    match rule {
        Rule::Trapezoidal => {
            if n < 2 {
                return None;
            }
            let m = max_abs(&finite_differences(samples.y(), 2))?;
            Some(-(h.powi(3) / 12.0) * m * n as Real)
        }
        Rule::SimpsonOneThird | Rule::SimpsonThreeEighths => {
            if samples.len() <= 4 {
                return None;
            }
            let m = max_abs(&finite_differences(samples.y(), 4))?;
            let c = match rule {
                Rule::SimpsonOneThird => h.powi(5) / 90.0,
                _ => 3.0 * h.powi(5) / 80.0,
            };
            Some(-c * m * samples.span())
        }
    }
}

fn max_abs(values: &[Real]) -> Option<Real> {
    values.iter().map(|v| v.abs()).reduce(Real::max)
}
