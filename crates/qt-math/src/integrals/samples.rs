//! Validated sample data.

use qt_core::{
    ensure,
    errors::{Error, Result},
    Real, Size,
};

/// An ordered, validated set of `(x, y)` samples.
///
/// Invariants established by [`SampleSet::new`]:
/// * `x.len() == y.len() >= 2`;
/// * every coordinate is finite;
/// * `x` is non-decreasing (ties are allowed).
///
/// The interval widths `x[i+1] - x[i]` are computed once on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    x: Vec<Real>,
    y: Vec<Real>,
    widths: Vec<Real>,
}

impl SampleSet {
    /// Validate and take ownership of the abscissae `x` and ordinates `y`.
    ///
    /// # Errors
    /// * `ShapeMismatch` if the lengths differ;
    /// * `InsufficientPoints` if fewer than two samples are given;
    /// * `NonFinite` if any coordinate is NaN or infinite;
    /// * `NotMonotonic` if some `x[i] > x[i+1]`.
    pub fn new(x: Vec<Real>, y: Vec<Real>) -> Result<Self> {
        ensure!(
            x.len() == y.len(),
            Error::ShapeMismatch {
                x_len: x.len(),
                y_len: y.len(),
            }
        );
        ensure!(x.len() >= 2, Error::InsufficientPoints(x.len()));
        for (axis, values) in [('x', &x), ('y', &y)] {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(Error::NonFinite { axis, index });
            }
        }
        if let Some(index) = x.windows(2).position(|w| w[0] > w[1]) {
            return Err(Error::NotMonotonic {
                index,
                left: x[index],
                right: x[index + 1],
            });
        }

        let widths = x.windows(2).map(|w| w[1] - w[0]).collect();
        Ok(Self { x, y, widths })
    }

    /// Validate copies of the given slices.
    pub fn from_slices(x: &[Real], y: &[Real]) -> Result<Self> {
        Self::new(x.to_vec(), y.to_vec())
    }

    /// Number of samples.
    pub fn len(&self) -> Size {
        self.x.len()
    }

    /// Always `false`: a validated set holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of intervals, `len() - 1`.
    pub fn intervals(&self) -> Size {
        self.widths.len()
    }

    /// Abscissae.
    pub fn x(&self) -> &[Real] {
        &self.x
    }

    /// Ordinates.
    pub fn y(&self) -> &[Real] {
        &self.y
    }

    /// Interval widths, `widths()[i] = x[i+1] - x[i]`.
    pub fn widths(&self) -> &[Real] {
        &self.widths
    }

    /// Distance between the first and last abscissa.
    pub fn span(&self) -> Real {
        self.x[self.x.len() - 1] - self.x[0]
    }
}
