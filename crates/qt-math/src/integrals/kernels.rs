//! Rule kernels over a contiguous range of a [`SampleSet`].
//!
//! Each kernel integrates the samples between the inclusive point indices
//! `start` and `end`, appends its derivation (width, partial sums, the
//! instantiated formula and the contribution) to the trace, and returns the
//! contribution.  The Simpson kernels require `end - start` to be a multiple
//! of their group size and all widths in the range to be equal; violations
//! are reported as `InvalidIntervalCount`.

use qt_core::{
    ensure,
    errors::{Error, Result},
    Real, Size,
};

use super::{method::Rule, samples::SampleSet, trace::StepTrace};
use crate::comparison::widths_match;

/// Integrate points `start..=end` with `rule`.
pub fn apply(
    rule: Rule,
    samples: &SampleSet,
    start: Size,
    end: Size,
    atol: Real,
    trace: &mut StepTrace,
) -> Result<Real> {
    match rule {
        Rule::Trapezoidal => trapezoidal(samples, start, end, atol, trace),
        Rule::SimpsonOneThird => simpson_one_third(samples, start, end, atol, trace),
        Rule::SimpsonThreeEighths => simpson_three_eighths(samples, start, end, atol, trace),
    }
}

// ── Trapezoidal ───────────────────────────────────────────────────────────────

/// Composite trapezoidal rule over points `start..=end`, any spacing:
///
/// $$\sum_{k=start}^{end-1} \tfrac{w_k}{2} (y_k + y_{k+1}).$$
///
/// `atol` only decides how the derivation is written: a uniform range is
/// explained with the closed form, an irregular one interval by interval.
pub fn trapezoidal(
    samples: &SampleSet,
    start: Size,
    end: Size,
    atol: Real,
    trace: &mut StepTrace,
) -> Result<Real> {
    check_range(Rule::Trapezoidal, samples, start, end)?;
    let w = samples.widths();
    let y = samples.y();

    let mut value = 0.0;
    for k in start..end {
        value += w[k] / 2.0 * (y[k] + y[k + 1]);
    }

    if !trace.is_enabled() {
        return Ok(value);
    }
    if end - start == 1 {
        trace.detail(format!(
            "Trapezoidal interval {}: ({}/2) × ({} + {}) = {}",
            start + 1,
            trace.num(w[start]),
            trace.num(y[start]),
            trace.num(y[end]),
            trace.num(value)
        ));
    } else if let Some(h) = uniform_width(samples, start, end, atol) {
        let interior = &y[start + 1..end];
        let twice_interior = 2.0 * interior.iter().sum::<Real>();
        trace.detail(format!("Interval width h = {}", trace.num(h)));
        trace.detail(format!(
            "Interior ordinates × 2: 2 × ({}) = {}",
            trace.terms(interior),
            trace.num(twice_interior)
        ));
        trace.detail(format!(
            "Apply formula: ({}/2) × ({} + {} + {}) = {}",
            trace.num(h),
            trace.num(y[start]),
            trace.num(twice_interior),
            trace.num(y[end]),
            trace.num(value)
        ));
    } else {
        for k in start..end {
            let area = w[k] / 2.0 * (y[k] + y[k + 1]);
            trace.detail(format!(
                "Trapezoidal interval {}: ({}/2) × ({} + {}) = {}",
                k + 1,
                trace.num(w[k]),
                trace.num(y[k]),
                trace.num(y[k + 1]),
                trace.num(area)
            ));
        }
        trace.detail(format!(
            "Trapezoidal sum over points {start} to {end} = {}",
            trace.num(value)
        ));
    }
    Ok(value)
}

// ── Simpson 1/3 ───────────────────────────────────────────────────────────────

/// Composite Simpson 1/3 rule over points `start..=end`:
///
/// $$\tfrac{h}{3}\Big(y_{start} + y_{end} + 4\sum_{odd} y + 2\sum_{even} y\Big),$$
///
/// with odd/even offsets counted from `start`.
pub fn simpson_one_third(
    samples: &SampleSet,
    start: Size,
    end: Size,
    atol: Real,
    trace: &mut StepTrace,
) -> Result<Real> {
    let rule = Rule::SimpsonOneThird;
    let h = check_grouped(rule, samples, start, end, atol)?;
    let m = end - start;
    let y = &samples.y()[start..=end];

    let odd: Vec<Real> = y[1..m].iter().step_by(2).copied().collect();
    let even: Vec<Real> = y[2..m].iter().step_by(2).copied().collect();
    let ends = y[0] + y[m];
    let odd_sum: Real = odd.iter().sum();
    let even_sum: Real = even.iter().sum();
    let weighted = ends + 4.0 * odd_sum + 2.0 * even_sum;
    let value = h / 3.0 * weighted;

    if trace.is_enabled() {
        trace.detail(format!("Interval width h = {}", trace.num(h)));
        trace.detail(format!(
            "End ordinates: {} + {} = {}",
            trace.num(y[0]),
            trace.num(y[m]),
            trace.num(ends)
        ));
        trace.detail(format!(
            "Odd-offset ordinates × 4: 4 × ({}) = {}",
            trace.terms(&odd),
            trace.num(4.0 * odd_sum)
        ));
        if !even.is_empty() {
            trace.detail(format!(
                "Even-offset ordinates × 2: 2 × ({}) = {}",
                trace.terms(&even),
                trace.num(2.0 * even_sum)
            ));
        }
        trace.detail(format!(
            "Apply formula: ({}/3) × {} = {}",
            trace.num(h),
            trace.num(weighted),
            trace.num(value)
        ));
    }
    Ok(value)
}

// ── Simpson 3/8 ───────────────────────────────────────────────────────────────

/// Composite Simpson 3/8 rule over points `start..=end`:
///
/// $$\tfrac{3h}{8}\Big(y_{start} + y_{end} + 3\sum_{p \not\equiv 0} y + 2\sum_{p \equiv 0} y\Big),$$
///
/// where `p` is the interior offset from `start` taken modulo 3.
pub fn simpson_three_eighths(
    samples: &SampleSet,
    start: Size,
    end: Size,
    atol: Real,
    trace: &mut StepTrace,
) -> Result<Real> {
    let rule = Rule::SimpsonThreeEighths;
    let h = check_grouped(rule, samples, start, end, atol)?;
    let m = end - start;
    let y = &samples.y()[start..=end];

    let (boundary, inner): (Vec<(Size, Real)>, Vec<(Size, Real)>) = y[1..m]
        .iter()
        .enumerate()
        .map(|(i, &v)| (i + 1, v))
        .partition(|&(p, _)| p % 3 == 0);
    let inner: Vec<Real> = inner.into_iter().map(|(_, v)| v).collect();
    let boundary: Vec<Real> = boundary.into_iter().map(|(_, v)| v).collect();

    let ends = y[0] + y[m];
    let inner_sum: Real = inner.iter().sum();
    let boundary_sum: Real = boundary.iter().sum();
    let weighted = ends + 3.0 * inner_sum + 2.0 * boundary_sum;
    let value = 3.0 * h / 8.0 * weighted;

    if trace.is_enabled() {
        trace.detail(format!("Interval width h = {}", trace.num(h)));
        trace.detail(format!(
            "End ordinates: {} + {} = {}",
            trace.num(y[0]),
            trace.num(y[m]),
            trace.num(ends)
        ));
        trace.detail(format!(
            "Ordinates × 3: 3 × ({}) = {}",
            trace.terms(&inner),
            trace.num(3.0 * inner_sum)
        ));
        if !boundary.is_empty() {
            trace.detail(format!(
                "Group-boundary ordinates × 2: 2 × ({}) = {}",
                trace.terms(&boundary),
                trace.num(2.0 * boundary_sum)
            ));
        }
        trace.detail(format!(
            "Apply formula: (3 × {}/8) × {} = {}",
            trace.num(h),
            trace.num(weighted),
            trace.num(value)
        ));
    }
    Ok(value)
}

// ── Preconditions ─────────────────────────────────────────────────────────────

fn invalid(rule: Rule, start: Size, end: Size, reason: String) -> Error {
    Error::InvalidIntervalCount {
        rule: rule.name(),
        start,
        end,
        reason,
    }
}

fn check_range(rule: Rule, samples: &SampleSet, start: Size, end: Size) -> Result<()> {
    let n = samples.intervals();
    ensure!(
        start < end && end <= n,
        invalid(
            rule,
            start,
            end,
            format!("range must hold at least one of the {n} intervals")
        )
    );
    Ok(())
}

/// Check the Simpson preconditions and return the common width `h`.
fn check_grouped(
    rule: Rule,
    samples: &SampleSet,
    start: Size,
    end: Size,
    atol: Real,
) -> Result<Real> {
    check_range(rule, samples, start, end)?;
    let g = rule.group_size();
    let m = end - start;
    ensure!(
        m % g == 0,
        invalid(
            rule,
            start,
            end,
            format!("interval count {m} is not a multiple of {g}")
        )
    );
    uniform_width(samples, start, end, atol)
        .ok_or_else(|| invalid(rule, start, end, "interval widths are not equal".into()))
}

/// The width of the first interval if every interval in range matches it.
fn uniform_width(samples: &SampleSet, start: Size, end: Size, atol: Real) -> Option<Real> {
    let w = &samples.widths()[start..end];
    let h = w[0];
    w.iter().all(|&wk| widths_match(wk, h, atol)).then_some(h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ATOL: Real = 1e-10;

    fn squares() -> SampleSet {
        // y = (x + 1)^2 on 0..=4
        SampleSet::from_slices(&[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0, 4.0, 9.0, 16.0, 25.0]).unwrap()
    }

    fn sampled(x: &[Real], f: impl Fn(Real) -> Real) -> SampleSet {
        let y: Vec<Real> = x.iter().map(|&xi| f(xi)).collect();
        SampleSet::from_slices(x, &y).unwrap()
    }

    #[test]
    fn trapezoid_uniform() {
        let mut t = StepTrace::new(6);
        let v = trapezoidal(&squares(), 0, 4, ATOL, &mut t).unwrap();
        assert_abs_diff_eq!(v, 42.0, epsilon = 1e-12);
        assert_eq!(t.len(), 3);
        assert!(t.steps()[0].contains("h = 1.000000"));
        assert!(t.steps()[1].contains("4.000000 + 9.000000 + 16.000000"));
        assert!(t.steps()[2].ends_with("= 42.000000"));
    }

    #[test]
    fn trapezoid_single_interval() {
        let mut t = StepTrace::new(6);
        let v = trapezoidal(&squares(), 3, 4, ATOL, &mut t).unwrap();
        assert_abs_diff_eq!(v, 20.5, epsilon = 1e-15);
        assert_eq!(
            t.steps(),
            &["Step 1: Trapezoidal interval 4: (1.000000/2) × (16.000000 + 25.000000) = 20.500000"]
        );
    }

    #[test]
    fn trapezoid_irregular_range() {
        let s = SampleSet::from_slices(&[0.0, 1.0, 2.0, 4.0], &[0.0, 1.0, 4.0, 16.0]).unwrap();
        let mut t = StepTrace::new(6);
        let v = trapezoidal(&s, 0, 3, ATOL, &mut t).unwrap();
        assert_abs_diff_eq!(v, 23.0, epsilon = 1e-12);
        // one line per interval plus the sum
        assert_eq!(t.len(), 4);
        assert!(t.steps()[3].ends_with("= 23.000000"));
    }

    #[test]
    fn trapezoid_linear_is_exact() {
        let s = sampled(&[0.0, 0.1, 0.35, 0.4, 1.0], |x| 3.0 * x - 1.0);
        let v = trapezoidal(&s, 0, 4, ATOL, &mut StepTrace::disabled()).unwrap();
        assert_abs_diff_eq!(v, 0.5, epsilon = 1e-14);
    }

    #[test]
    fn simpson_one_third_three_points() {
        let s = SampleSet::from_slices(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        let mut t = StepTrace::new(6);
        let v = simpson_one_third(&s, 0, 2, ATOL, &mut t).unwrap();
        assert_abs_diff_eq!(v, 8.0 / 3.0, epsilon = 1e-14);
        // no even-offset interior ordinates with a single pair
        assert_eq!(t.len(), 4);
        assert!(t.steps()[2].contains("4 × (1.000000) = 4.000000"));
        assert!(t.steps()[3].ends_with("= 2.666667"));
    }

    #[test]
    fn simpson_one_third_closed_form() {
        let s = squares();
        let mut t = StepTrace::new(6);
        let v = simpson_one_third(&s, 0, 4, ATOL, &mut t).unwrap();
        let y = s.y();
        let expected = 1.0 / 3.0 * (y[0] + y[4] + 4.0 * (y[1] + y[3]) + 2.0 * y[2]);
        assert_abs_diff_eq!(v, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(v, 124.0 / 3.0, epsilon = 1e-12);
        assert!(t.steps().iter().any(|s| s.contains("Even-offset ordinates × 2: 2 × (9.000000)")));
    }

    #[test]
    fn simpson_one_third_sub_range() {
        let v = simpson_one_third(&squares(), 1, 3, ATOL, &mut StepTrace::disabled()).unwrap();
        assert_abs_diff_eq!(v, 56.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson_one_third_rejects_odd_count() {
        let err = simpson_one_third(&squares(), 0, 3, ATOL, &mut StepTrace::disabled()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidIntervalCount { start: 0, end: 3, .. }
        ));
    }

    #[test]
    fn simpson_rejects_unequal_widths() {
        let s = SampleSet::from_slices(&[0.0, 1.0, 3.0], &[0.0, 1.0, 9.0]).unwrap();
        let err = simpson_one_third(&s, 0, 2, ATOL, &mut StepTrace::disabled()).unwrap_err();
        match err {
            Error::InvalidIntervalCount { reason, .. } => assert!(reason.contains("not equal")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn kernels_reject_bad_ranges() {
        let s = squares();
        let mut t = StepTrace::disabled();
        assert!(trapezoidal(&s, 2, 2, ATOL, &mut t).is_err());
        assert!(trapezoidal(&s, 0, 5, ATOL, &mut t).is_err());
        assert!(simpson_three_eighths(&s, 3, 1, ATOL, &mut t).is_err());
    }

    #[test]
    fn simpson_three_eighths_cubic_is_exact() {
        let x: Vec<Real> = (0..=6).map(|i| i as Real).collect();
        let s = sampled(&x, |x| x * x * x);
        let mut t = StepTrace::new(6);
        let v = simpson_three_eighths(&s, 0, 6, ATOL, &mut t).unwrap();
        assert_abs_diff_eq!(v, 324.0, epsilon = 1e-9);
        // positions 1, 2, 4, 5 weighted 3; position 3 weighted 2
        assert!(t.steps()[2].contains("3 × (1.000000 + 8.000000 + 64.000000 + 125.000000)"));
        assert!(t.steps()[3].contains("2 × (27.000000)"));
    }

    #[test]
    fn simpson_three_eighths_single_group() {
        let mut t = StepTrace::new(6);
        let v = simpson_three_eighths(&squares(), 0, 3, ATOL, &mut t).unwrap();
        // 3/8 × (1 + 16 + 3 × (4 + 9))
        assert_abs_diff_eq!(v, 21.0, epsilon = 1e-12);
        assert!(!t.steps().iter().any(|s| s.contains("Group-boundary")));
    }

    #[test]
    fn simpson_three_eighths_rejects_count() {
        let err = simpson_three_eighths(&squares(), 0, 4, ATOL, &mut StepTrace::disabled()).unwrap_err();
        assert!(err.to_string().contains("not a multiple of 3"));
    }

    #[test]
    fn apply_dispatches() {
        let s = squares();
        let mut t = StepTrace::disabled();
        for rule in Rule::ALL {
            let g = rule.group_size();
            let direct = match rule {
                Rule::Trapezoidal => trapezoidal(&s, 0, g, ATOL, &mut t),
                Rule::SimpsonOneThird => simpson_one_third(&s, 0, g, ATOL, &mut t),
                Rule::SimpsonThreeEighths => simpson_three_eighths(&s, 0, g, ATOL, &mut t),
            };
            assert_eq!(apply(rule, &s, 0, g, ATOL, &mut t), direct);
        }
    }
}
