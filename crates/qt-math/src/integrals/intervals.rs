//! Interval analysis: partitioning interval widths into runs of equal width.

use qt_core::{
    ensure,
    errors::{Error, Result},
    Real, Size,
};
use tracing::debug;

use super::samples::SampleSet;
use crate::comparison::widths_match;

/// A maximal contiguous range of equal-width intervals.
///
/// `start` and `end` are inclusive *point* indices, so the run covers the
/// intervals `start..end` and holds `end - start >= 1` of them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    start: Size,
    end: Size,
    width: Real,
}

impl Run {
    /// A run over points `start..=end` whose first interval has width `width`.
    pub fn new(start: Size, end: Size, width: Real) -> Self {
        debug_assert!(end > start, "a run holds at least one interval");
        Self { start, end, width }
    }

    /// First point index.
    pub fn start(&self) -> Size {
        self.start
    }

    /// Last point index.
    pub fn end(&self) -> Size {
        self.end
    }

    /// Width of the run's first interval, the reference width `h`.
    pub fn width(&self) -> Real {
        self.width
    }

    /// Number of intervals in the run.
    pub fn intervals(&self) -> Size {
        self.end - self.start
    }
}

/// Partition `widths` into maximal runs of equal width.
///
/// A single greedy left-to-right scan: the current run is extended while
/// the next width is within `atol` of the run's *first* width, otherwise
/// the run is closed and a new one starts at that interval.  Closed runs
/// are never revisited.
///
/// The result covers `0..widths.len()` exactly, in order, without overlap.
/// An empty slice yields no runs.
pub fn find_runs(widths: &[Real], atol: Real) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut start = 0;
    while start < widths.len() {
        let h = widths[start];
        let mut end = start + 1;
        while end < widths.len() && widths_match(widths[end], h, atol) {
            end += 1;
        }
        runs.push(Run::new(start, end, h));
        start = end;
    }
    debug!(intervals = widths.len(), runs = runs.len(), "partitioned interval widths");
    runs
}

/// How the intervals of a sample set are laid out.
///
/// Built by [`Spacing::analyze`] or [`Spacing::from_runs`]; a layout with exactly one run is
/// always [`Spacing::Uniform`], so an irregular layout holds two or more.
#[derive(Debug, Clone, PartialEq)]
pub enum Spacing {
    /// A single run spans every interval.
    Uniform(Run),
    /// Two or more runs.
    Irregular(Vec<Run>),
}

impl Spacing {
    /// Classify a run partition.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `runs` is empty.
    pub fn from_runs(runs: Vec<Run>) -> Result<Self> {
        ensure!(
            !runs.is_empty(),
            Error::InvalidArgument("a run partition holds at least one run".into())
        );
        Ok(Self::classify(runs))
    }

    /// Partition the interval widths of `samples` and classify the result.
    pub fn analyze(samples: &SampleSet, atol: Real) -> Self {
        // a sample set holds at least one interval, hence at least one run
        Self::classify(find_runs(samples.widths(), atol))
    }

    fn classify(mut runs: Vec<Run>) -> Self {
        if runs.len() == 1 {
            Spacing::Uniform(runs.remove(0))
        } else {
            Spacing::Irregular(runs)
        }
    }

    /// `true` for a single run spanning the whole domain.
    pub fn is_uniform(&self) -> bool {
        matches!(self, Spacing::Uniform(_))
    }

    /// The runs, in order.
    pub fn runs(&self) -> &[Run] {
        match self {
            Spacing::Uniform(run) => std::slice::from_ref(run),
            Spacing::Irregular(runs) => runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATOL: Real = 1e-10;

    fn bounds(runs: &[Run]) -> Vec<(Size, Size)> {
        runs.iter().map(|r| (r.start(), r.end())).collect()
    }

    #[test]
    fn single_interval() {
        let runs = find_runs(&[0.5], ATOL);
        assert_eq!(bounds(&runs), vec![(0, 1)]);
        assert_eq!(runs[0].width(), 0.5);
        assert_eq!(runs[0].intervals(), 1);
    }

    #[test]
    fn uniform_widths_form_one_run() {
        let runs = find_runs(&[0.25; 8], ATOL);
        assert_eq!(bounds(&runs), vec![(0, 8)]);
    }

    #[test]
    fn near_equal_widths_merge() {
        let runs = find_runs(&[1.0, 1.0, 1.000_000_000_1, 2.0], ATOL);
        assert_eq!(bounds(&runs), vec![(0, 3), (3, 4)]);
        assert_eq!(runs[1].width(), 2.0);
    }

    #[test]
    fn comparison_is_against_first_width() {
        // Each step drifts by 0.6e-10, so neighbours match but the third
        // interval is 1.2e-10 away from the first.
        let w = [1.0, 1.0 + 0.6e-10, 1.0 + 1.2e-10];
        assert_eq!(bounds(&find_runs(&w, ATOL)), vec![(0, 2), (2, 3)]);
    }

    #[test]
    fn alternating_widths() {
        let runs = find_runs(&[1.0, 2.0, 1.0, 2.0], ATOL);
        assert_eq!(bounds(&runs), vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn mixed_runs() {
        let runs = find_runs(&[1.0, 1.0, 2.0, 0.5, 0.5, 0.5], ATOL);
        assert_eq!(bounds(&runs), vec![(0, 2), (2, 3), (3, 6)]);
        assert_eq!(runs.iter().map(Run::intervals).sum::<Size>(), 6);
    }

    #[test]
    fn zero_widths_form_their_own_run() {
        let runs = find_runs(&[1.0, 0.0, 0.0, 1.0], ATOL);
        assert_eq!(bounds(&runs), vec![(0, 1), (1, 3), (3, 4)]);
    }

    #[test]
    fn empty_widths() {
        assert!(find_runs(&[], ATOL).is_empty());
    }

    #[test]
    fn grid_far_from_origin_splits_under_default_tolerance() {
        // subtracting abscissae near 1e6 rounds to multiples of ~1.16e-10,
        // which already exceeds the absolute tolerance
        let x: Vec<Real> = (0..=20).map(|i| 1e6 + i as Real * 0.1).collect();
        let w: Vec<Real> = x.windows(2).map(|p| p[1] - p[0]).collect();
        assert!(find_runs(&w, ATOL).len() > 1);
        assert_eq!(bounds(&find_runs(&w, 1e-8)), vec![(0, 20)]);
    }

    fn samples(x: &[Real]) -> SampleSet {
        SampleSet::from_slices(x, &vec![0.0; x.len()]).unwrap()
    }

    #[test]
    fn spacing_classification() {
        let uniform = Spacing::analyze(&samples(&[0.0, 1.0, 2.0, 3.0]), ATOL);
        assert!(uniform.is_uniform());
        assert_eq!(uniform.runs().len(), 1);

        let irregular = Spacing::analyze(&samples(&[0.0, 1.0, 2.0, 4.0]), ATOL);
        assert!(!irregular.is_uniform());
        assert_eq!(bounds(irregular.runs()), vec![(0, 2), (2, 3)]);
    }

    #[test]
    fn single_run_is_always_uniform() {
        let spacing = Spacing::from_runs(vec![Run::new(0, 5, 0.2)]).unwrap();
        assert_eq!(spacing, Spacing::Uniform(Run::new(0, 5, 0.2)));
    }

    #[test]
    fn empty_partition_is_rejected() {
        assert!(matches!(
            Spacing::from_runs(Vec::new()),
            Err(Error::InvalidArgument(_))
        ));
    }
}
