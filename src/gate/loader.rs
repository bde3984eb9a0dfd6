// SPDX-License-Identifier: MIT

//! Document loader - JSON and YAML condition/data files
//!
//! Condition lists and step data may be authored in either format; both are
//! read into a `serde_json::Value` so evaluation sees one document model.

use super::condition::Condition;
use super::error::GateError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads rule documents from files or strings
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a document, choosing YAML for `.yaml`/`.yml` files and JSON otherwise
    pub fn load_document<P: AsRef<Path>>(&self, path: P) -> Result<Value, GateError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml");

        if is_yaml {
            log::debug!("Loading YAML document from {}", path.display());
            Self::parse_yaml(&content)
        } else {
            log::debug!("Loading JSON document from {}", path.display());
            Self::parse_json(&content)
        }
    }

    /// Parse a document from a JSON string
    pub fn parse_json(content: &str) -> Result<Value, GateError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a document from a YAML string
    pub fn parse_yaml(content: &str) -> Result<Value, GateError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Decode every element of a condition list document.
    ///
    /// Unlike evaluation, which fails closed, this reports the first element
    /// that cannot be decoded or is missing a required field.
    pub fn parse_conditions(doc: &Value) -> Result<Vec<Condition>, GateError> {
        let elements = match doc {
            Value::Array(elements) => elements,
            Value::Null => return Ok(Vec::new()),
            _ => {
                return Err(GateError::invalid_argument(
                    "condition list must be an array",
                ))
            }
        };

        elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let condition: Condition = serde_json::from_value(element.clone())
                    .map_err(|e| GateError::malformed(index, e.to_string()))?;
                condition.validate(index)?;
                Ok(condition)
            })
            .collect()
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::condition::DynamicValue;

    #[test]
    fn test_parse_yaml_conditions() {
        let yaml = r#"
- stepRef: review
  fieldRef: decision
  operator: equals
  value: APPROVED
- stepRef: quote
  fieldRef: amount
  operator: ">="
  value: 1500
"#;
        let doc = DocumentLoader::parse_yaml(yaml).unwrap();
        let conditions = DocumentLoader::parse_conditions(&doc).unwrap();

        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0].step_ref.as_deref(), Some("review"));
        assert_eq!(conditions[0].expected, DynamicValue::Text("APPROVED".to_string()));
        assert_eq!(conditions[1].operator.as_deref(), Some(">="));
        assert_eq!(conditions[1].expected, DynamicValue::Int(1500));
    }

    #[test]
    fn test_parse_json_conditions() {
        let json = r#"[{"stepRef": "s1", "fieldRef": "flag", "operator": "==", "value": true}]"#;
        let doc = DocumentLoader::parse_json(json).unwrap();
        let conditions = DocumentLoader::parse_conditions(&doc).unwrap();
        assert_eq!(conditions[0].expected, DynamicValue::Bool(true));
    }

    #[test]
    fn test_parse_conditions_reports_malformed_element() {
        let doc = DocumentLoader::parse_json(
            r#"[{"stepRef": "s1", "fieldRef": "a", "operator": "=="},
                {"stepRef": "s1", "fieldRef": "", "operator": "=="}]"#,
        )
        .unwrap();
        let err = DocumentLoader::parse_conditions(&doc).unwrap_err();
        assert!(matches!(err, GateError::MalformedCondition { index: 1, .. }));
    }

    #[test]
    fn test_parse_conditions_shapes() {
        assert!(DocumentLoader::parse_conditions(&Value::Null)
            .unwrap()
            .is_empty());
        assert!(DocumentLoader::parse_conditions(&serde_json::json!({"a": 1})).is_err());
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            DocumentLoader::parse_json("{oops"),
            Err(GateError::Json(_))
        ));
        assert!(matches!(
            DocumentLoader::parse_yaml("a: [unclosed"),
            Err(GateError::Yaml(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = DocumentLoader::new().load_document("does/not/exist.yaml");
        assert!(matches!(result, Err(GateError::Io(_))));
    }
}
