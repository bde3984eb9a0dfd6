// SPDX-License-Identifier: MIT

//! Dot-path lookup inside JSON documents
//!
//! Only object keys are followed; arrays are never indexed.

use crate::gate::condition::DynamicValue;
use serde_json::Value;

/// Get a nested node using dot notation (e.g. `"result.data.intent"`).
///
/// Returns `None` when the root is absent, the path is blank, or any segment
/// is missing. An explicit JSON null at the end of the path is returned as
/// `Some(&Value::Null)`.
pub fn get_by_path<'a>(root: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    let root = root?;
    if path.trim().is_empty() {
        return None;
    }

    path.split('.')
        .try_fold(root, |current, segment| current.as_object()?.get(segment))
}

/// Parse `text` as JSON and look up `path` in it.
///
/// Blank or invalid text is treated as "not found".
pub fn get_by_path_str(text: &str, path: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    let root: Value = match serde_json::from_str(text) {
        Ok(root) => root,
        Err(e) => {
            log::debug!("Document is not valid JSON: {}", e);
            return None;
        }
    };
    get_by_path(Some(&root), path).cloned()
}

/// Look up `path` and convert the node for comparison
pub fn value_at_path(root: Option<&Value>, path: &str) -> Option<DynamicValue> {
    get_by_path(root, path).map(DynamicValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_by_path() {
        let doc = json!({"a": {"b": {"c": 999}}});

        assert_eq!(get_by_path(Some(&doc), "a.b.c"), Some(&json!(999)));
        assert_eq!(get_by_path(Some(&doc), "a.b"), Some(&json!({"c": 999})));
        assert_eq!(get_by_path(Some(&doc), "a.x.c"), None);
        assert_eq!(get_by_path(Some(&doc), "a.b.c.d"), None);
    }

    #[test]
    fn test_absent_root_or_blank_path() {
        let doc = json!({"a": 1});
        assert_eq!(get_by_path(None, "a"), None);
        assert_eq!(get_by_path(Some(&doc), ""), None);
        assert_eq!(get_by_path(Some(&doc), "   "), None);
    }

    #[test]
    fn test_explicit_null_is_found() {
        let doc = json!({"result": {"error": null}});
        assert_eq!(get_by_path(Some(&doc), "result.error"), Some(&Value::Null));
        assert_eq!(
            value_at_path(Some(&doc), "result.error"),
            Some(DynamicValue::Null)
        );
        assert_eq!(value_at_path(Some(&doc), "result.missing"), None);
    }

    #[test]
    fn test_arrays_are_not_indexed() {
        let doc = json!({"items": [{"id": 1}]});
        assert_eq!(get_by_path(Some(&doc), "items.0.id"), None);
        assert_eq!(
            value_at_path(Some(&doc), "items"),
            Some(DynamicValue::Opaque(r#"[{"id":1}]"#.to_string()))
        );
    }

    #[test]
    fn test_get_by_path_str() {
        let text = r#"{"order": {"total": 12.5, "status": "OPEN"}}"#;
        assert_eq!(get_by_path_str(text, "order.total"), Some(json!(12.5)));
        assert_eq!(get_by_path_str(text, "order.owner"), None);
        assert_eq!(get_by_path_str("", "order"), None);
        assert_eq!(get_by_path_str("{broken", "order"), None);
    }
}
