//! Measurement sets — caller-supplied parameter values for one pass
//!
//! A `MeasurementSet` keeps parameters in the order they were first
//! inserted. Inserting a parameter again replaces its value but keeps
//! its original position, so a file that repeats a line evaluates in
//! first-seen order with the last value. Deserialized sets go through the
//! same insertion, so repeated names collapse there too.
//!
//! In JSON a set is an array of `[name, value]` pairs. Infinite and NaN
//! values are written as the strings `"inf"`, `"-inf"` and `"NaN"`.

use schemars::JsonSchema;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered mapping from parameter name to measured value
#[derive(Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(transparent)]
pub struct MeasurementSet {
    entries: Vec<(String, f64)>,
}

impl MeasurementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value; returns the previous value if any
    pub fn insert(&mut self, parameter: impl Into<String>, value: f64) -> Option<f64> {
        let parameter = parameter.into();
        match self.entries.iter_mut().find(|(name, _)| *name == parameter) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((parameter, value));
                None
            }
        }
    }

    pub fn get(&self, parameter: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == parameter)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(entry_ref)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for MeasurementSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut set = MeasurementSet::new();
        set.extend(iter);
        set
    }
}

impl<K: Into<String>> Extend<(K, f64)> for MeasurementSet {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (parameter, value) in iter {
            self.insert(parameter, value);
        }
    }
}

impl<'a> IntoIterator for &'a MeasurementSet {
    type Item = (&'a str, f64);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, f64)>,
        fn(&'a (String, f64)) -> (&'a str, f64),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(entry_ref as fn(&'a (String, f64)) -> (&'a str, f64))
    }
}

fn entry_ref((name, value): &(String, f64)) -> (&str, f64) {
    (name.as_str(), *value)
}

impl Serialize for MeasurementSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            seq.serialize_element(&(name, JsonNumber(*value)))?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for MeasurementSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let pairs = Vec::<(String, JsonNumber)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().map(|(name, value)| (name, value.0)).collect())
    }
}

/// `f64` that keeps non-finite values intact through JSON
#[derive(Debug, Clone, Copy, PartialEq)]
struct JsonNumber(f64);

impl Serialize for JsonNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_str(&self.0.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for JsonNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(JsonNumber(value)),
            Repr::Text(text) => text
                .parse::<f64>()
                .map(JsonNumber)
                .map_err(|_| serde::de::Error::custom(format!("invalid number: '{}'", text))),
        }
    }
}

/// `#[serde(with = ...)]` adapter for single measured values
pub(crate) mod json_number {
    use super::JsonNumber;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        JsonNumber(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        JsonNumber::deserialize(deserializer).map(|n| n.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let set: MeasurementSet = [("Iron", 55.0), ("Calcium", 7.8), ("Hemoglobin", 10.5)]
            .into_iter()
            .collect();

        let names: Vec<_> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Iron", "Calcium", "Hemoglobin"]);
    }

    #[test]
    fn test_reinsert_overwrites_in_place() {
        let mut set = MeasurementSet::new();
        assert_eq!(set.insert("Iron", 55.0), None);
        set.insert("Calcium", 7.8);
        assert_eq!(set.insert("Iron", 65.0), Some(55.0));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Iron"), Some(65.0));
        assert_eq!(set.iter().next(), Some(("Iron", 65.0)));
    }

    #[test]
    fn test_deserialize_collapses_repeated_names() {
        let set: MeasurementSet =
            serde_json::from_str(r#"[["Iron",1.0],["Calcium",7.0],["Iron",2.0]]"#).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Iron"), Some(2.0));
        assert_eq!(set.iter().next(), Some(("Iron", 2.0)));
    }

    #[test]
    fn test_json_keeps_non_finite_values() {
        let set: MeasurementSet = [
            ("Iron", f64::INFINITY),
            ("Calcium", f64::NEG_INFINITY),
            ("Magnesium", 1.5),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[["Iron","inf"],["Calcium","-inf"],["Magnesium",1.5]]"#);

        let back: MeasurementSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);

        let nan: MeasurementSet = serde_json::from_str(r#"[["Iron","NaN"]]"#).unwrap();
        assert!(nan.get("Iron").unwrap().is_nan());
        assert!(serde_json::from_str::<MeasurementSet>(r#"[["Iron","lots"]]"#).is_err());
    }

    #[test]
    fn test_empty() {
        let set = MeasurementSet::new();
        assert!(set.is_empty());
        assert_eq!(set.get("Iron"), None);
        assert_eq!((&set).into_iter().count(), 0);
    }
}
