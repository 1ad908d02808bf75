//! Render parameters: an open string-keyed map of JSON values.
//!
//! The core *takes* the reserved keys it understands (removing them from the
//! map); whatever is left is the pass-through styling for the selected renderer.

use crate::error::{PlotError, Result};
use serde_json::{Map, Value};

/// Keys consumed by generic post-processing for every plot kind
pub const TITLE: &str = "title";
pub const XLABEL: &str = "xlabel";
pub const YLABEL: &str = "ylabel";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderParams {
    values: Map<String, Value>,
}

impl RenderParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Remove and return a raw value
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Remove a value that must be text. Numbers and booleans are stringified.
    pub fn take_string(&mut self, key: &str) -> Result<Option<String>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(_) => Err(PlotError::invalid_param(key, "expected a string")),
        }
    }

    /// Remove a value that must be numeric. Numeric strings are accepted.
    pub fn take_f64(&mut self, key: &str) -> Result<Option<f64>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| PlotError::invalid_param(key, "number out of range")),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| PlotError::invalid_param(key, format!("'{s}' is not a number"))),
            Some(_) => Err(PlotError::invalid_param(key, "expected a number")),
        }
    }

    /// Remove a list of labels. A single scalar is treated as a one-element list.
    pub fn take_string_list(&mut self, key: &str) -> Result<Option<Vec<String>>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    Value::Number(n) => Ok(n.to_string()),
                    Value::Bool(b) => Ok(b.to_string()),
                    _ => Err(PlotError::invalid_param(key, "list items must be scalars")),
                })
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Some(Value::String(s)) => Ok(Some(vec![s])),
            Some(_) => Err(PlotError::invalid_param(key, "expected a list")),
        }
    }
}

impl From<Map<String, Value>> for RenderParams {
    fn from(values: Map<String, Value>) -> Self {
        Self::from_map(values)
    }
}

/// Title and axis descriptions taken from the parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labels {
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
}

impl Labels {
    pub fn take_from(params: &mut RenderParams) -> Result<Self> {
        Ok(Self {
            title: params.take_string(TITLE)?,
            xlabel: params.take_string(XLABEL)?,
            ylabel: params.take_string(YLABEL)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_take_removes_key() {
        let mut params = RenderParams::new().with("title", "Sales").with("hue", "region");
        assert_eq!(params.take_string("title").unwrap().as_deref(), Some("Sales"));
        assert!(!params.contains("title"));
        assert!(params.contains("hue"));
    }

    #[test]
    fn test_take_f64_accepts_numeric_strings() {
        let mut params = RenderParams::new().with("s", "12.5").with("alpha", 0.3);
        assert_eq!(params.take_f64("s").unwrap(), Some(12.5));
        assert_eq!(params.take_f64("alpha").unwrap(), Some(0.3));
        assert_eq!(params.take_f64("missing").unwrap(), None);
    }

    #[test]
    fn test_take_f64_rejects_objects() {
        let mut params = RenderParams::new().with("s", json!({"a": 1}));
        let err = params.take_f64("s").unwrap_err();
        assert!(err.to_string().contains("'s'"));
    }

    #[test]
    fn test_take_string_list() {
        let mut params = RenderParams::new().with("labels", json!(["X", 2, true]));
        assert_eq!(
            params.take_string_list("labels").unwrap(),
            Some(vec!["X".to_string(), "2".to_string(), "true".to_string()])
        );
    }

    #[test]
    fn test_labels_take_from() {
        let mut params = RenderParams::new()
            .with("title", "T")
            .with("ylabel", "Y")
            .with("x", "col");
        let labels = Labels::take_from(&mut params).unwrap();
        assert_eq!(labels.title.as_deref(), Some("T"));
        assert_eq!(labels.xlabel, None);
        assert_eq!(labels.ylabel.as_deref(), Some("Y"));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["x"]);
    }
}
