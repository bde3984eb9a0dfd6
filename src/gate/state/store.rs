// SPDX-License-Identifier: MIT

//! In-memory store of step outputs

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::gate::error::{BoxError, GateError};
use crate::gate::path::get_by_path;
use crate::gate::resolver::ValueResolver;

/// Step outputs keyed by step, then by field
#[derive(Debug, Clone, Default)]
pub struct StepStore {
    steps: HashMap<String, Value>,
}

impl StepStore {
    /// Create an empty StepStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a document shaped `{"<step>": {"<field>": ...}}`
    pub fn from_json(doc: Value) -> Result<Self, GateError> {
        let Value::Object(steps) = doc else {
            return Err(GateError::invalid_argument(
                "step data must be an object keyed by step",
            ));
        };

        let mut store = Self::new();
        for (step, data) in steps {
            if !data.is_object() {
                return Err(GateError::invalid_argument(format!(
                    "data for step '{}' must be an object",
                    step
                )));
            }
            store.set_step(&step, data);
        }
        Ok(store)
    }

    /// Replace everything recorded for a step
    pub fn set_step(&mut self, step: &str, data: Value) {
        self.steps.insert(step.to_string(), data);
    }

    /// Set a single field on a step
    pub fn update(&mut self, step: &str, field: &str, value: Value) {
        let data = self
            .steps
            .entry(step.to_string())
            .or_insert(Value::Object(Map::new()));
        if !data.is_object() {
            *data = Value::Object(Map::new());
        }
        if let Value::Object(fields) = data {
            fields.insert(field.to_string(), value);
        }
    }

    /// Merge an object into a step, overwriting existing keys.
    ///
    /// Both the incoming value and any data already stored for the step must
    /// be objects; otherwise the step is left unchanged.
    pub fn merge(&mut self, step: &str, value: Value) -> Result<(), GateError> {
        let Value::Object(new_obj) = value else {
            return Err(GateError::invalid_argument(format!(
                "merge into step '{}' requires an object",
                step
            )));
        };
        let current = self
            .steps
            .entry(step.to_string())
            .or_insert(Value::Object(Map::new()));
        let Value::Object(current_obj) = current else {
            return Err(GateError::invalid_argument(format!(
                "data for step '{}' is not an object",
                step
            )));
        };
        for (k, v) in new_obj {
            current_obj.insert(k, v);
        }
        Ok(())
    }

    /// Get a top-level field of a step
    pub fn get(&self, step: &str, field: &str) -> Option<&Value> {
        self.steps.get(step)?.get(field)
    }

    /// Get a nested field of a step using dot notation (e.g. "result.intent")
    pub fn get_path(&self, step: &str, path: &str) -> Option<&Value> {
        get_by_path(self.steps.get(step), path)
    }

    /// Convert the store to a JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.steps
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Get all step names
    pub fn steps(&self) -> impl Iterator<Item = &String> {
        self.steps.keys()
    }
}

impl ValueResolver for StepStore {
    fn resolve(&self, field_ref: &str, step_ref: &str) -> Result<Option<String>, BoxError> {
        let text = match self.get_path(step_ref, field_ref) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        Ok(text)
    }
}
