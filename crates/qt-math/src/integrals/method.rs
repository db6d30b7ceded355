//! Method identifiers and reported method names.

use std::fmt;
use std::str::FromStr;

use qt_core::{errors::Error, Size};

/// A composite quadrature rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    /// Composite trapezoidal rule, any spacing.
    #[cfg_attr(feature = "serde", serde(rename = "trapezoidal"))]
    Trapezoidal,
    /// Composite Simpson 1/3 rule, pairs of equal-width intervals.
    #[cfg_attr(feature = "serde", serde(rename = "simpson_1_3"))]
    SimpsonOneThird,
    /// Composite Simpson 3/8 rule, triples of equal-width intervals.
    #[cfg_attr(feature = "serde", serde(rename = "simpson_3_8"))]
    SimpsonThreeEighths,
}

impl Rule {
    /// Every rule, in comparison order.
    pub const ALL: [Rule; 3] = [
        Rule::Trapezoidal,
        Rule::SimpsonOneThird,
        Rule::SimpsonThreeEighths,
    ];

    /// Method identifier (`trapezoidal`, `simpson_1_3`, `simpson_3_8`).
    pub fn id(self) -> &'static str {
        match self {
            Rule::Trapezoidal => "trapezoidal",
            Rule::SimpsonOneThird => "simpson_1_3",
            Rule::SimpsonThreeEighths => "simpson_3_8",
        }
    }

    /// Number of intervals one application of the rule consumes.
    pub fn group_size(self) -> Size {
        match self {
            Rule::Trapezoidal => 1,
            Rule::SimpsonOneThird => 2,
            Rule::SimpsonThreeEighths => 3,
        }
    }

    /// Display name, e.g. `Simpson's 1/3 Rule`.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Trapezoidal => "Trapezoidal Rule",
            Rule::SimpsonOneThird => "Simpson's 1/3 Rule",
            Rule::SimpsonThreeEighths => "Simpson's 3/8 Rule",
        }
    }

    /// Name without the `Rule` suffix, used in hybrid labels.
    pub fn short_name(self) -> &'static str {
        match self {
            Rule::Trapezoidal => "Trapezoidal",
            Rule::SimpsonOneThird => "Simpson's 1/3",
            Rule::SimpsonThreeEighths => "Simpson's 3/8",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.id() == s)
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}

/// How a rule was laid over the sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Scheme {
    /// Uniform spacing, the rule covers every interval.
    Plain,
    /// Uniform spacing, the rule covers a head and the trapezoidal rule the
    /// non-divisible tail.
    Hybrid,
    /// Irregular spacing, the rule is chosen run by run.
    Adaptive,
}

impl Scheme {
    /// The method name reported for `rule` applied with this scheme.
    pub fn method_name(self, rule: Rule) -> String {
        match self {
            Scheme::Plain => rule.name().to_string(),
            Scheme::Hybrid => format!("{} + Trapezoidal (Hybrid)", rule.short_name()),
            Scheme::Adaptive => format!("{} (Adaptive)", rule.name()),
        }
    }
}
