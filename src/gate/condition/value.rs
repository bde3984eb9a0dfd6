// SPDX-License-Identifier: MIT

//! Runtime value model for condition operands

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::borrow::Cow;

/// A single document leaf as seen by the evaluator.
///
/// Composite nodes (arrays, objects) are never compared structurally; they are
/// carried as their compact JSON serialization in [`DynamicValue::Opaque`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DynamicValue {
    #[default]
    Null,
    Text(String),
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f64),
    Opaque(String),
}

impl DynamicValue {
    /// Convert an optional node; absence and JSON null both become `Null`
    pub fn from_node(node: Option<&Value>) -> Self {
        node.map(Self::from).unwrap_or(Self::Null)
    }

    /// Parse JSON text and convert the resulting node.
    ///
    /// Blank or invalid text yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        serde_json::from_str::<Value>(text)
            .ok()
            .map(|node| Self::from(&node))
    }

    fn from_number(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            return match i32::try_from(i) {
                Ok(small) => Self::Int(small),
                Err(_) => Self::Long(i),
            };
        }
        if n.is_f64() {
            if let Some(f) = n.as_f64() {
                return Self::Float(f);
            }
        }
        // u64 beyond i64::MAX
        Self::Opaque(n.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Long(_) | Self::Float(_))
    }

    /// Widen a numeric value to f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(f64::from(*i)),
            Self::Long(l) => Some(*l as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Integral value, if this is an `Int` or `Long`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(i64::from(*i)),
            Self::Long(l) => Some(*l),
            _ => None,
        }
    }

    /// Textual form used by `contains` and mixed-kind comparison
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Text(s) | Self::Opaque(s) => Cow::Borrowed(s.as_str()),
            Self::Bool(b) => Cow::Owned(b.to_string()),
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Long(l) => Cow::Owned(l.to_string()),
            Self::Float(f) => Cow::Owned(
                Number::from_f64(*f)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| f.to_string()),
            ),
        }
    }

    /// Short name of the variant, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Opaque(_) => "opaque",
        }
    }

    /// Convert back to a JSON node
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Text(s) => Value::String(s.clone()),
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::from(*i),
            Self::Long(l) => Value::from(*l),
            Self::Float(f) => Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Opaque(s) => {
                serde_json::from_str(s).unwrap_or_else(|_| Value::String(s.clone()))
            }
        }
    }
}

impl From<&Value> for DynamicValue {
    fn from(node: &Value) -> Self {
        match node {
            Value::Null => Self::Null,
            Value::String(s) => Self::Text(s.clone()),
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::from_number(n),
            composite => Self::Opaque(composite.to_string()),
        }
    }
}

impl From<Value> for DynamicValue {
    fn from(node: Value) -> Self {
        match node {
            Value::String(s) => Self::Text(s),
            other => Self::from(&other),
        }
    }
}

impl From<&str> for DynamicValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl std::fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            other => write!(f, "{}", other.as_text()),
        }
    }
}

impl Serialize for DynamicValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_and_null() {
        assert_eq!(DynamicValue::from_node(None), DynamicValue::Null);
        assert_eq!(DynamicValue::from(&json!(null)), DynamicValue::Null);
    }

    #[test]
    fn test_text_is_not_trimmed() {
        assert_eq!(
            DynamicValue::from(&json!("  padded ")),
            DynamicValue::Text("  padded ".to_string())
        );
    }

    #[test]
    fn test_numeric_widths() {
        assert_eq!(DynamicValue::from(&json!(42)), DynamicValue::Int(42));
        assert_eq!(
            DynamicValue::from(&json!(i32::MIN)),
            DynamicValue::Int(i32::MIN)
        );
        assert_eq!(
            DynamicValue::from(&json!(3_000_000_000i64)),
            DynamicValue::Long(3_000_000_000)
        );
        assert_eq!(DynamicValue::from(&json!(2.5)), DynamicValue::Float(2.5));
        assert_eq!(
            DynamicValue::from(&json!(u64::MAX)),
            DynamicValue::Opaque(u64::MAX.to_string())
        );
    }

    #[test]
    fn test_composites_keep_source_order() {
        let node = json!({"zeta": 1, "alpha": [3, 2, 1], "mid": {"b": true, "a": null}});
        assert_eq!(
            DynamicValue::from(&node),
            DynamicValue::Opaque(r#"{"zeta":1,"alpha":[3,2,1],"mid":{"b":true,"a":null}}"#.to_string())
        );
    }

    #[test]
    fn test_text_forms() {
        assert_eq!(DynamicValue::Null.as_text(), "");
        assert_eq!(DynamicValue::Bool(true).as_text(), "true");
        assert_eq!(DynamicValue::Long(-7).as_text(), "-7");
        assert_eq!(DynamicValue::Float(5.0).as_text(), "5.0");
        assert_eq!(DynamicValue::Float(0.25).as_text(), "0.25");
    }

    #[test]
    fn test_scalar_round_trip() {
        let values = [
            DynamicValue::Text("APPROVED".to_string()),
            DynamicValue::Bool(false),
            DynamicValue::Int(-12),
            DynamicValue::Long(9_000_000_000),
            DynamicValue::Float(5.0),
            DynamicValue::Float(-0.125),
        ];
        for value in values {
            let serialized = serde_json::to_string(&value).unwrap();
            assert_eq!(DynamicValue::parse(&serialized), Some(value));
        }
    }

    #[test]
    fn test_parse_rejects_blank_and_invalid() {
        assert_eq!(DynamicValue::parse("   "), None);
        assert_eq!(DynamicValue::parse("{not json"), None);
        assert_eq!(DynamicValue::parse("null"), Some(DynamicValue::Null));
    }

    #[test]
    fn test_deserialize_from_document() {
        let value: DynamicValue = serde_json::from_value(json!([1, "two"])).unwrap();
        assert_eq!(value, DynamicValue::Opaque(r#"[1,"two"]"#.to_string()));
    }
}
