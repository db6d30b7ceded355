//! Numerical integration of discrete samples.
//!
//! Composite trapezoidal, Simpson 1/3 and Simpson 3/8 rules over sample
//! sets whose spacing may change along the domain.  The pipeline is:
//!
//! 1. [`samples`] validates the `(x, y)` data;
//! 2. [`intervals`] partitions the interval widths into runs of equal width;
//! 3. [`composer`] lays the requested rule over the runs, calling the
//!    [`kernels`] and falling back to the trapezoidal rule where a run
//!    cannot be grouped;
//! 4. [`error_estimate`] adds a truncation-error estimate under uniform
//!    spacing;
//! 5. [`calculator`] ties it together and records the [`trace`].

pub mod calculator;
pub mod composer;
pub mod error_estimate;
pub mod intervals;
pub mod kernels;
pub mod method;
pub mod samples;
pub mod trace;

pub use calculator::{calculate, compare_all, ComparisonResult, IntegrationCalculator, IntegrationResult};
pub use intervals::{find_runs, Run, Spacing};
pub use method::{Rule, Scheme};
pub use samples::SampleSet;
pub use trace::StepTrace;
