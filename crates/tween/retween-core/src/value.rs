//! Generic property values as seen by the host scheduler.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Text,
}

/// One property value in a tween's property bag.
///
/// `Number` is interpolated linearly by the default write path; `Text` is
/// opaque to it (held at the previous value until ratio reaches 1).
/// Plugins may intercept either kind via their `change` hook.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(s) => Some(s.as_str()),
        }
    }

    /// Raw string rendition, as a style-like target would receive it.
    pub fn to_raw(&self) -> String {
        match self {
            Value::Number(n) => n.to_string(),
            Value::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_data_tagging() {
        let v = serde_json::to_value(Value::Number(0.75)).unwrap();
        assert_eq!(v, serde_json::json!({"type": "number", "data": 0.75}));
        let v = serde_json::to_value(Value::Text("10px".into())).unwrap();
        assert_eq!(v, serde_json::json!({"type": "text", "data": "10px"}));
    }

    #[test]
    fn to_raw_renders_integral_numbers_without_decimals() {
        assert_eq!(Value::Number(25.0).to_raw(), "25");
        assert_eq!(Value::Number(2.5).to_raw(), "2.5");
        assert_eq!(Value::Text("red".into()).to_raw(), "red");
    }
}
