//! Integration façade: validate, analyse, compose, estimate, narrate.

use qt_core::{
    errors::{Error, Result},
    IntegrationSettings, Real, Size,
};
use tracing::{debug, warn};

use super::{
    composer::compose,
    error_estimate::estimate,
    intervals::Spacing,
    method::{Rule, Scheme},
    samples::SampleSet,
    trace::StepTrace,
};

/// A finished integration: value, optional error estimate, and the
/// derivation that produced them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegrationResult {
    value: Real,
    error_estimate: Option<Real>,
    rule: Rule,
    scheme: Scheme,
    method_name: String,
    steps: Vec<String>,
}

impl IntegrationResult {
    /// The integral.
    pub fn value(&self) -> Real {
        self.value
    }

    /// Estimated truncation error; `None` when unavailable.
    pub fn error_estimate(&self) -> Option<Real> {
        self.error_estimate
    }

    /// The requested rule.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// How the rule was laid over the samples.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Reported method name, e.g. `Simpson's 3/8 + Trapezoidal (Hybrid)`.
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Derivation steps in the order they were produced.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}

/// Results of every rule on the same samples, in [`Rule::ALL`] order.
///
/// A failing rule is recorded as an error entry; it never hides the
/// results of the others.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    entries: Vec<(Rule, Result<IntegrationResult>)>,
}

impl ComparisonResult {
    /// The outcome for `rule`.
    pub fn get(&self, rule: Rule) -> Option<&Result<IntegrationResult>> {
        self.entries
            .iter()
            .find(|(r, _)| *r == rule)
            .map(|(_, outcome)| outcome)
    }

    /// Entries in comparison order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, &Result<IntegrationResult>)> + '_ {
        self.entries.iter().map(|(r, outcome)| (*r, outcome))
    }

    /// Successful results, in comparison order.
    pub fn successes(&self) -> impl Iterator<Item = &IntegrationResult> + '_ {
        self.entries.iter().filter_map(|(_, outcome)| outcome.as_ref().ok())
    }

    /// Number of entries.
    pub fn len(&self) -> Size {
        self.entries.len()
    }

    /// `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ComparisonResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        #[derive(serde::Serialize)]
        struct Failure {
            error: String,
        }

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (rule, outcome) in &self.entries {
            match outcome {
                Ok(result) => map.serialize_entry(rule.id(), result)?,
                Err(e) => map.serialize_entry(
                    rule.id(),
                    &Failure {
                        error: e.to_string(),
                    },
                )?,
            }
        }
        map.end()
    }
}

/// Integrates one validated sample set.
///
/// The run layout is analysed once on construction; each call then builds
/// its own trace, so calls share nothing but read-only data.
#[derive(Debug, Clone)]
pub struct IntegrationCalculator {
    samples: SampleSet,
    spacing: Spacing,
    settings: IntegrationSettings,
}

impl IntegrationCalculator {
    /// Validate `x`/`y` and prepare a calculator with default settings.
    ///
    /// # Errors
    /// Any validation error of [`SampleSet::new`].
    pub fn new(x: &[Real], y: &[Real]) -> Result<Self> {
        Self::with_settings(x, y, IntegrationSettings::default())
    }

    /// Validate `x`/`y` and prepare a calculator with `settings`.
    pub fn with_settings(x: &[Real], y: &[Real], settings: IntegrationSettings) -> Result<Self> {
        Ok(Self::from_samples(SampleSet::from_slices(x, y)?, settings))
    }

    /// Prepare a calculator for an already validated sample set.
    pub fn from_samples(samples: SampleSet, settings: IntegrationSettings) -> Self {
        let spacing = Spacing::analyze(&samples, settings.run_tolerance());
        debug!(
            points = samples.len(),
            uniform = spacing.is_uniform(),
            runs = spacing.runs().len(),
            "prepared sample set"
        );
        Self {
            samples,
            spacing,
            settings,
        }
    }

    /// The validated samples.
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// The run layout of the samples.
    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    /// The settings in use.
    pub fn settings(&self) -> &IntegrationSettings {
        &self.settings
    }

    /// Integrate with the method named by `method`
    /// (`trapezoidal`, `simpson_1_3`, or `simpson_3_8`).
    ///
    /// # Errors
    /// `UnknownMethod` for any other identifier.
    pub fn calculate(&self, method: &str) -> Result<IntegrationResult> {
        let rule: Rule = method.parse()?;
        self.integrate(rule)
    }

    /// Integrate with `rule`.
    pub fn integrate(&self, rule: Rule) -> Result<IntegrationResult> {
        debug!(rule = rule.id(), "integrating");
        let mut trace = StepTrace::from_settings(&self.settings);
        let composition = compose(
            &self.samples,
            rule,
            &self.spacing,
            self.settings.run_tolerance(),
            &mut trace,
        )?;
        let error_estimate = estimate(&self.samples, rule, &self.spacing);
        if let Some(e) = error_estimate {
            trace.note(format!("Error Estimate: ≈ {}", trace.num(e)));
        }
        Ok(IntegrationResult {
            value: composition.value,
            error_estimate,
            rule,
            scheme: composition.scheme,
            method_name: composition.scheme.method_name(rule),
            steps: trace.into_steps(),
        })
    }

    /// Integrate with every rule, capturing failures per rule.
    pub fn compare_all(&self) -> ComparisonResult {
        let entries = Rule::ALL
            .into_iter()
            .map(|rule| {
                let outcome = self.integrate(rule);
                if let Err(e) = &outcome {
                    warn!(rule = rule.id(), error = %e, "method failed during comparison");
                }
                (rule, outcome)
            })
            .collect();
        ComparisonResult { entries }
    }
}

/// Validate `x`/`y` and integrate with `method` using default settings.
pub fn calculate(x: &[Real], y: &[Real], method: &str) -> Result<IntegrationResult> {
    IntegrationCalculator::new(x, y)?.calculate(method)
}

/// Validate `x`/`y` and integrate with every rule using default settings.
///
/// Validation errors abort the comparison; per-rule failures do not.
pub fn compare_all(x: &[Real], y: &[Real]) -> Result<ComparisonResult, Error> {
    Ok(IntegrationCalculator::new(x, y)?.compare_all())
}
