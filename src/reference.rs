//! Reference ranges — the fixed parameter table
//!
//! Every parameter nutridose understands is listed here with its closed
//! normal interval `[low, high]` and the recommendation shown when a
//! measurement falls below `low`. The table is compiled in and never
//! changes at runtime.
//!
//! | Parameter   | Low   | High  |
//! |-------------|-------|-------|
//! | Hemoglobin  | 12.0  | 17.5  |
//! | Vitamin D   | 20.0  | 50.0  |
//! | Calcium     | 8.5   | 10.5  |
//! | Iron        | 60.0  | 170.0 |
//! | Vitamin B12 | 200.0 | 900.0 |
//! | Magnesium   | 1.7   | 2.2   |

use crate::error::{Error, Result};
use serde::Serialize;

/// One row of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceEntry {
    /// Parameter name (unique key)
    pub name: &'static str,

    /// Lowest normal value (inclusive)
    pub low: f64,

    /// Highest normal value (inclusive)
    pub high: f64,

    /// Advice for a measurement below `low`
    pub recommendation: &'static str,
}

impl ReferenceEntry {
    /// Normal interval as `(low, high)`
    pub fn bounds(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// True when `value` lies inside the closed interval
    pub fn is_normal(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// The fixed reference table, in prompt order
pub static REFERENCE_TABLE: [ReferenceEntry; 6] = [
    ReferenceEntry {
        name: "Hemoglobin",
        low: 12.0,
        high: 17.5,
        recommendation: "Take Iron supplements 15 mg/day",
    },
    ReferenceEntry {
        name: "Vitamin D",
        low: 20.0,
        high: 50.0,
        recommendation: "Take Vitamin D3 2000 IU/day or sunlight exposure",
    },
    ReferenceEntry {
        name: "Calcium",
        low: 8.5,
        high: 10.5,
        recommendation: "Consume dairy products and calcium supplements",
    },
    ReferenceEntry {
        name: "Iron",
        low: 60.0,
        high: 170.0,
        recommendation: "Eat iron-rich foods like spinach, red meat",
    },
    ReferenceEntry {
        name: "Vitamin B12",
        low: 200.0,
        high: 900.0,
        recommendation: "Take Vitamin B12 supplement or consume eggs/meat",
    },
    ReferenceEntry {
        name: "Magnesium",
        low: 1.7,
        high: 2.2,
        recommendation: "Eat magnesium-rich foods like nuts, leafy greens",
    },
];

/// Look up a parameter by exact name
pub fn lookup(parameter: &str) -> Result<&'static ReferenceEntry> {
    REFERENCE_TABLE
        .iter()
        .find(|entry| entry.name == parameter)
        .ok_or_else(|| Error::UnknownParameter(parameter.to_string()))
}

/// True when the parameter is in the table
pub fn is_known(parameter: &str) -> bool {
    lookup(parameter).is_ok()
}

/// Normal interval for a parameter
pub fn bounds_of(parameter: &str) -> Result<(f64, f64)> {
    lookup(parameter).map(ReferenceEntry::bounds)
}

/// Recommendation text used when the parameter is low
pub fn recommendation_of(parameter: &str) -> Result<&'static str> {
    lookup(parameter).map(|entry| entry.recommendation)
}

/// Parameter names in table order
pub fn parameters() -> impl Iterator<Item = &'static str> {
    REFERENCE_TABLE.iter().map(|entry| entry.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bounds_of_known_parameters() {
        assert_eq!(bounds_of("Hemoglobin").unwrap(), (12.0, 17.5));
        assert_eq!(bounds_of("Calcium").unwrap(), (8.5, 10.5));
        assert_eq!(bounds_of("Vitamin B12").unwrap(), (200.0, 900.0));
    }

    #[test]
    fn test_recommendation_of() {
        assert_eq!(
            recommendation_of("Iron").unwrap(),
            "Eat iron-rich foods like spinach, red meat"
        );
    }

    #[test]
    fn test_unknown_parameter() {
        let err = bounds_of("Zinc").unwrap_err();
        assert!(matches!(err, Error::UnknownParameter(ref name) if name == "Zinc"));
        assert!(recommendation_of("hemoglobin").is_err()); // case sensitive
        assert!(!is_known(""));
    }

    #[test]
    fn test_table_is_well_formed() {
        let names: HashSet<_> = parameters().collect();
        assert_eq!(names.len(), REFERENCE_TABLE.len());

        for entry in &REFERENCE_TABLE {
            assert!(entry.low < entry.high, "{} has inverted bounds", entry.name);
            assert!(!entry.recommendation.is_empty());
        }
    }

    #[test]
    fn test_is_normal_is_inclusive() {
        let entry = lookup("Magnesium").unwrap();
        assert!(entry.is_normal(1.7));
        assert!(entry.is_normal(2.2));
        assert!(!entry.is_normal(1.69));
        assert!(!entry.is_normal(2.21));
    }
}
