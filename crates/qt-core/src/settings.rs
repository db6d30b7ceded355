//! Engine settings.
//!
//! [`IntegrationSettings`] is a plain value handed to each calculation.
//! Nothing here is global: two calculations running side by side with
//! different settings never observe each other.

use crate::{ensure, errors::Error, Real, Result, Size};

/// Absolute tolerance under which two interval widths count as equal.
pub const RUN_TOLERANCE: Real = 1e-10;

/// Decimal places used when numbers are written into a step trace.
pub const DEFAULT_DECIMALS: Size = 6;

/// Most decimal places that still carry information for an `f64`.
pub const MAX_DECIMALS: Size = 17;

/// Tunables for a single integration request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationSettings {
    run_tolerance: Real,
    decimals: Size,
    record_steps: bool,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            run_tolerance: RUN_TOLERANCE,
            decimals: DEFAULT_DECIMALS,
            record_steps: true,
        }
    }
}

impl IntegrationSettings {
    /// Settings with the default tolerance, six decimals, and step recording on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the width tolerance used for run detection.
    ///
    /// # Errors
    /// `InvalidArgument` if `tolerance` is negative, NaN, or infinite.
    pub fn with_run_tolerance(mut self, tolerance: Real) -> Result<Self> {
        ensure!(
            tolerance.is_finite() && tolerance >= 0.0,
            Error::InvalidArgument(format!(
                "run tolerance must be finite and non-negative, got {tolerance}"
            ))
        );
        self.run_tolerance = tolerance;
        Ok(self)
    }

    /// Replace the number of decimals written into the step trace.
    ///
    /// # Errors
    /// `InvalidArgument` if `decimals` exceeds [`MAX_DECIMALS`].
    pub fn with_decimals(mut self, decimals: Size) -> Result<Self> {
        ensure!(
            decimals <= MAX_DECIMALS,
            Error::InvalidArgument(format!(
                "decimals must be at most {MAX_DECIMALS}, got {decimals}"
            ))
        );
        self.decimals = decimals;
        Ok(self)
    }

    /// Turn derivation-step recording on or off.
    pub fn with_record_steps(mut self, record: bool) -> Self {
        self.record_steps = record;
        self
    }

    /// Absolute width tolerance.
    pub fn run_tolerance(&self) -> Real {
        self.run_tolerance
    }

    /// Decimal places in the step trace.
    pub fn decimals(&self) -> Size {
        self.decimals
    }

    /// Whether derivation steps are recorded.
    pub fn record_steps(&self) -> bool {
        self.record_steps
    }
}
