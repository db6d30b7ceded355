//! Ordered derivation trace.
//!
//! The composer writes numbered steps (`Step 3: ...`), the rule kernels
//! write details under the current step (`Step 3.2: ...`), and anything
//! else goes in as an unnumbered note.  Entries are only ever appended.

use std::fmt::Display;

use qt_core::{
    utilities::data_formatters::{format_real, format_terms},
    IntegrationSettings, Real, Size,
};

/// Append-only sequence of human-readable derivation steps.
#[derive(Debug, Clone)]
pub struct StepTrace {
    steps: Vec<String>,
    enabled: bool,
    decimals: Size,
    step: Size,
    detail: Size,
}

impl StepTrace {
    /// An empty, recording trace that prints numbers with `decimals` places.
    pub fn new(decimals: Size) -> Self {
        Self {
            steps: Vec::new(),
            enabled: true,
            decimals,
            step: 0,
            detail: 0,
        }
    }

    /// A trace that discards everything written to it.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(0)
        }
    }

    /// A trace configured from `settings`.
    pub fn from_settings(settings: &IntegrationSettings) -> Self {
        if settings.record_steps() {
            Self::new(settings.decimals())
        } else {
            Self::disabled()
        }
    }

    /// Whether entries are being kept.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Format a number with the trace's precision.
    pub fn num(&self, value: Real) -> String {
        format_real(value, self.decimals)
    }

    /// Format `values` as a sum of terms with the trace's precision.
    pub fn terms(&self, values: &[Real]) -> String {
        format_terms(values, self.decimals)
    }

    /// Append a new numbered step.
    pub fn step(&mut self, text: impl Display) {
        if !self.enabled {
            return;
        }
        self.step += 1;
        self.detail = 0;
        self.steps.push(format!("Step {}: {}", self.step, text));
    }

    /// Append a detail under the current step.
    ///
    /// With no step open yet the detail becomes a step of its own.
    pub fn detail(&mut self, text: impl Display) {
        if !self.enabled {
            return;
        }
        if self.step == 0 {
            self.step(text);
            return;
        }
        self.detail += 1;
        self.steps
            .push(format!("Step {}.{}: {}", self.step, self.detail, text));
    }

    /// Append an unnumbered line.
    pub fn note(&mut self, text: impl Display) {
        if self.enabled {
            self.steps.push(text.to_string());
        }
    }

    /// Number of recorded entries.
    pub fn len(&self) -> Size {
        self.steps.len()
    }

    /// `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The recorded entries, in derivation order.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Consume the trace, yielding its entries.
    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }
}
