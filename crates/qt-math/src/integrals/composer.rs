//! Rule composition over runs of equal-width intervals.
//!
//! A rule with group size `g` is laid over each run of a [`Spacing`]: a
//! run whose interval count is a multiple of `g` is integrated by the rule
//! in one piece, anything else is finished with the trapezoidal rule.  How
//! the leftover is finished depends on the layout:
//!
//! * a run spanning the whole domain (uniform spacing) keeps the rule on
//!   its longest divisible head and peels the remaining `n % g` intervals
//!   off the tail for the trapezoidal rule ([`Scheme::Hybrid`]);
//! * a run inside an irregular layout is integrated interval by interval
//!   with the trapezoidal rule ([`Scheme::Adaptive`]).
//!
//! Run contributions are summed left to right in plain floating-point
//! arithmetic.

use qt_core::{errors::Result, Real, Size};
use tracing::debug;

use super::{
    intervals::{Run, Spacing},
    kernels,
    method::{Rule, Scheme},
    samples::SampleSet,
    trace::StepTrace,
};

/// Outcome of laying a rule over a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    /// Integral over the whole domain.
    pub value: Real,
    /// How the rule was applied.
    pub scheme: Scheme,
}

/// What to do with the intervals of a run that do not fill a whole group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Remainder {
    /// Rule on the divisible head, trapezoidal on the tail.
    PeelTail,
    /// Trapezoidal on every interval of the run.
    FillTrapezoidal,
}

/// Integrate `samples` with `rule` over the run layout `spacing`.
///
/// `spacing` must describe `samples`, as produced by [`Spacing::analyze`]
/// with the same `atol`.
pub fn compose(
    samples: &SampleSet,
    rule: Rule,
    spacing: &Spacing,
    atol: Real,
    trace: &mut StepTrace,
) -> Result<Composition> {
    let g = rule.group_size();
    let composition = match spacing {
        Spacing::Uniform(run) => {
            let n = run.intervals();
            trace.step(format!(
                "All intervals are equal (h = {}, n = {n})",
                trace.num(run.width())
            ));
            let scheme = if n % g == 0 {
                if g == 1 {
                    trace.step(format!("Applying {} to all {n} intervals", rule.name()));
                } else {
                    trace.step(format!(
                        "n = {n} is a multiple of {g}: applying {} to all intervals",
                        rule.name()
                    ));
                }
                Scheme::Plain
            } else {
                let head = n - n % g;
                trace.step(format!(
                    "n = {n} is not a multiple of {g}: {} on the first {head} intervals, \
                     Trapezoidal on the last {}",
                    rule.short_name(),
                    n - head
                ));
                Scheme::Hybrid
            };
            let value = compose_run(samples, rule, run, Remainder::PeelTail, atol, trace)?;
            if scheme == Scheme::Plain {
                trace.step(format!("Result = {}", trace.num(value)));
            }
            Composition { value, scheme }
        }
        Spacing::Irregular(runs) => {
            trace.step(format!(
                "Intervals are unequal: {} runs of equal width, {} applied run by run",
                runs.len(),
                rule.name()
            ));
            let mut value = 0.0;
            for (r, run) in runs.iter().enumerate() {
                let eligible = run.intervals() % g == 0;
                trace.step(format!(
                    "Run {}: points {} to {} (h = {}, {} intervals) → {}",
                    r + 1,
                    run.start(),
                    run.end(),
                    trace.num(run.width()),
                    run.intervals(),
                    if eligible {
                        rule.name()
                    } else {
                        "Trapezoidal Rule on each interval"
                    }
                ));
                value += compose_run(samples, rule, run, Remainder::FillTrapezoidal, atol, trace)?;
            }
            trace.step(format!("Total result = {}", trace.num(value)));
            Composition {
                value,
                scheme: Scheme::Adaptive,
            }
        }
    };
    debug!(
        rule = rule.id(),
        scheme = ?composition.scheme,
        value = composition.value,
        "composed rule over sample set"
    );
    Ok(composition)
}

/// Integrate one run with `rule`, finishing any leftover per `remainder`.
fn compose_run(
    samples: &SampleSet,
    rule: Rule,
    run: &Run,
    remainder: Remainder,
    atol: Real,
    trace: &mut StepTrace,
) -> Result<Real> {
    let g = rule.group_size();
    let (start, end) = (run.start(), run.end());
    if run.intervals() % g == 0 {
        return kernels::apply(rule, samples, start, end, atol, trace);
    }

    match remainder {
        Remainder::PeelTail => {
            let split: Size = end - run.intervals() % g;
            let head = if split > start {
                trace.step(format!("{} part (points {start} to {split})", rule.name()));
                kernels::apply(rule, samples, start, split, atol, trace)?
            } else {
                trace.step(format!(
                    "{} part: no complete group of {g} intervals, contributes {}",
                    rule.name(),
                    trace.num(0.0)
                ));
                0.0
            };
            trace.step(format!("Trapezoidal part (points {split} to {end})"));
            let tail = kernels::trapezoidal(samples, split, end, atol, trace)?;
            let value = head + tail;
            trace.step(format!(
                "Total result = {} + {} = {}",
                trace.num(head),
                trace.num(tail),
                trace.num(value)
            ));
            Ok(value)
        }
        Remainder::FillTrapezoidal => {
            let mut value = 0.0;
            for k in start..end {
                value += kernels::trapezoidal(samples, k, k + 1, atol, trace)?;
            }
            if run.intervals() > 1 {
                trace.detail(format!("Run contribution = {}", trace.num(value)));
            }
            Ok(value)
        }
    }
}
