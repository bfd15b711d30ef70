//! Classification of a single measurement against its reference range
//!
//! Comparison is strict: a value equal to either bound is normal and
//! produces no finding.

use crate::error::Result;
use crate::reference;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory used for every high reading
pub const HIGH_ADVICE: &str = "Adjust diet and consult physician";

/// Direction of a deviation from the reference range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Severity {
    Low,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::High => write!(f, "High"),
        }
    }
}

/// A measurement outside its reference range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    /// Parameter name as it appears in the reference table
    pub parameter: String,

    /// Measured value (non-finite values are strings in JSON)
    #[serde(with = "crate::measurement::json_number")]
    #[schemars(with = "f64")]
    pub value: f64,

    /// Low or High
    pub severity: Severity,

    /// Recommendation message, e.g. `Low Calcium: Consume dairy products...`
    pub message: String,
}

impl Finding {
    /// Build a finding, filling the message template for the given severity
    pub(crate) fn new(parameter: &str, value: f64, severity: Severity) -> Result<Self> {
        let entry = reference::lookup(parameter)?;
        let advice = match severity {
            Severity::Low => entry.recommendation,
            Severity::High => HIGH_ADVICE,
        };

        Ok(Self {
            parameter: parameter.to_string(),
            value,
            severity,
            message: format!("{} {}: {}", severity, parameter, advice),
        })
    }

    /// Export line: `{parameter}: {value} | Recommendation: {message}`
    pub fn to_line(&self) -> String {
        format!(
            "{}: {} | Recommendation: {}",
            self.parameter, self.value, self.message
        )
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Classify one measurement
///
/// Returns `Ok(None)` when the value is inside `[low, high]`, a Low or
/// High finding otherwise, and `Error::UnknownParameter` when the
/// parameter is not in the reference table.
pub fn classify(parameter: &str, value: f64) -> Result<Option<Finding>> {
    let (low, high) = reference::bounds_of(parameter)?;

    let severity = if value < low {
        Severity::Low
    } else if value > high {
        Severity::High
    } else {
        return Ok(None);
    };

    Finding::new(parameter, value, severity).map(Some)
}
