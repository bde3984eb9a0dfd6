// SPDX-License-Identifier: MIT

//! Redirection target lookup across both document shapes
//!
//! Current shape: `{"parameters": {"name": "...", "targetStep": "..."}}`
//! Legacy shape:  `{"name": "...", "targetStep": "..."}`
//!
//! The current shape always wins; values are never merged between shapes.

use serde_json::Value;

/// Name reported when neither shape carries one
pub const UNKNOWN_NAME: &str = "Unknown";

/// Read-only view over a redirection document
#[derive(Debug, Clone, Copy, Default)]
pub struct RedirectionSpec<'a> {
    doc: Option<&'a Value>,
}

impl<'a> RedirectionSpec<'a> {
    pub fn new(doc: Option<&'a Value>) -> Self {
        Self { doc }
    }

    /// Redirection name, or [`UNKNOWN_NAME`]
    pub fn name(&self) -> &'a str {
        self.field("name").unwrap_or(UNKNOWN_NAME)
    }

    /// Step to redirect to, if any
    pub fn target_step(&self) -> Option<&'a str> {
        self.field("targetStep")
    }

    /// Whether the document uses the `parameters` shape
    pub fn has_parameters(&self) -> bool {
        self.doc
            .and_then(|doc| doc.get("parameters"))
            .is_some_and(Value::is_object)
    }

    fn field(&self, key: &str) -> Option<&'a str> {
        let doc = self.doc?;
        doc.get("parameters")
            .and_then(|params| params.get(key))
            .and_then(Value::as_str)
            .or_else(|| doc.get(key).and_then(Value::as_str))
    }
}

impl<'a> From<&'a Value> for RedirectionSpec<'a> {
    fn from(doc: &'a Value) -> Self {
        Self::new(Some(doc))
    }
}
