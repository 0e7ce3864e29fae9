//! Decoded raw records handed over by the recording collaborator.
//!
//! A variable group either has structured data (absolute name to value)
//! or nothing at all for a given iteration. That is modelled as
//! `Option<RecordValues>` rather than an empty-but-present record.

use std::collections::{btree_map, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Recorded values of one variable group, keyed by absolute name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordValues(BTreeMap<String, Value>);

impl RecordValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        absolute: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.0.insert(absolute.into(), value.into())
    }

    pub fn get(&self, absolute: &str) -> Option<&Value> {
        self.0.get(absolute)
    }

    pub fn contains(&self, absolute: &str) -> bool {
        self.0.contains_key(absolute)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Absolute names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for RecordValues
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a RecordValues {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Raw groups of one driver iteration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverRecord {
    #[serde(default)]
    pub desvars: Option<RecordValues>,
    #[serde(default)]
    pub responses: Option<RecordValues>,
    #[serde(default)]
    pub objectives: Option<RecordValues>,
    #[serde(default)]
    pub constraints: Option<RecordValues>,
    #[serde(default)]
    pub sysincludes: Option<RecordValues>,
}

/// Raw groups of one system iteration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemRecord {
    #[serde(default)]
    pub inputs: Option<RecordValues>,
    #[serde(default)]
    pub outputs: Option<RecordValues>,
    #[serde(default)]
    pub residuals: Option<RecordValues>,
}

/// Raw groups of one solver iteration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverRecord {
    pub abs_err: f64,
    pub rel_err: f64,
    #[serde(default)]
    pub outputs: Option<RecordValues>,
    #[serde(default)]
    pub residuals: Option<RecordValues>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_values_from_iter() {
        let values: RecordValues = [("comp.x", 3.5), ("comp.y", 1.0)].into_iter().collect();
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("comp.x"), Some(&Value::Float(3.5)));
        assert!(!values.contains("comp.z"));
        assert_eq!(values.names().collect::<Vec<_>>(), vec!["comp.x", "comp.y"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut values = RecordValues::new();
        assert!(values.is_empty());
        assert!(values.insert("a.b", 1.0).is_none());
        assert_eq!(values.insert("a.b", 2.0), Some(Value::Float(1.0)));
    }

    #[test]
    fn test_driver_record_missing_groups_are_none() {
        let record: DriverRecord =
            serde_json::from_str(r#"{"desvars": {"px.x": [1.0, 2.0]}}"#).unwrap();
        assert!(record.desvars.is_some());
        assert!(record.responses.is_none());
        assert!(record.sysincludes.is_none());
    }

    #[test]
    fn test_null_group_is_none() {
        let record: SystemRecord =
            serde_json::from_str(r#"{"inputs": null, "outputs": {"c.y": 2.0}}"#).unwrap();
        assert!(record.inputs.is_none());
        assert_eq!(record.outputs.unwrap().get("c.y"), Some(&Value::Float(2.0)));
    }

    #[test]
    fn test_solver_record_requires_errors() {
        let err = serde_json::from_str::<SolverRecord>(r#"{"outputs": {}}"#);
        assert!(err.is_err());

        let record: SolverRecord =
            serde_json::from_str(r#"{"abs_err": 1e-6, "rel_err": 1e-3}"#).unwrap();
        assert!(record.outputs.is_none());
        assert!((record.abs_err - 1e-6).abs() < f64::EPSILON);
    }
}
