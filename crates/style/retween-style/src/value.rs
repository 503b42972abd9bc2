//! Structured style values and per-property unit metadata.

use serde::{Deserialize, Serialize};

use crate::transform::TransformValue;

/// A parsed style value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum StyleValue {
    /// Single numeric value with an opaque unit suffix (`"10px"`).
    Scalar { number: f64, unit: String },
    /// Ordered transform operation list.
    Transform(TransformValue),
    /// Anything that matches neither grammar; passed through verbatim,
    /// never numerically interpolated.
    Opaque(String),
}

/// One PropertyUnitTable entry: what the plugin learned about a property
/// at first initialization. Fixed for the tween's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum PropertyUnit {
    /// Numeric property with this unit suffix (possibly empty).
    Scalar(String),
    /// Composite transform property.
    Composite,
    /// Non-numeric value, reused literally on write.
    Opaque,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_data_tagging() {
        let v = serde_json::to_value(PropertyUnit::Scalar("px".into())).unwrap();
        assert_eq!(v, serde_json::json!({"type": "scalar", "data": "px"}));
        let v = serde_json::to_value(PropertyUnit::Composite).unwrap();
        assert_eq!(v, serde_json::json!({"type": "composite"}));
        let v = serde_json::to_value(StyleValue::Opaque("red".into())).unwrap();
        assert_eq!(v, serde_json::json!({"type": "opaque", "data": "red"}));
    }
}
