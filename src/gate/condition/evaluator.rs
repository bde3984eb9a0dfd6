// SPDX-License-Identifier: MIT

//! Conjunctive evaluation of condition lists

use super::operator::{self, Operator};
use super::value::DynamicValue;
use crate::gate::error::GateError;
use crate::gate::resolver::ValueResolver;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// One rule element: `<stepRef>.<fieldRef> <operator> <value>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(default)]
    pub step_ref: Option<String>,
    #[serde(default)]
    pub field_ref: Option<String>,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default, rename = "value")]
    pub expected: DynamicValue,
}

impl Condition {
    pub fn new(
        step_ref: impl Into<String>,
        field_ref: impl Into<String>,
        operator: impl Into<String>,
        expected: impl Into<DynamicValue>,
    ) -> Self {
        Self {
            step_ref: Some(step_ref.into()),
            field_ref: Some(field_ref.into()),
            operator: Some(operator.into()),
            expected: expected.into(),
        }
    }

    /// Check that step, field and operator are all present and non-blank
    pub fn validate(&self, index: usize) -> Result<(&str, &str, &str), GateError> {
        let step_ref = required(&self.step_ref, index, "stepRef")?;
        let field_ref = required(&self.field_ref, index, "fieldRef")?;
        let operator = required(&self.operator, index, "operator")?;
        Ok((step_ref, field_ref, operator))
    }
}

fn required<'a>(
    value: &'a Option<String>,
    index: usize,
    name: &str,
) -> Result<&'a str, GateError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(GateError::malformed(index, format!("{} is blank", name))),
        None => Err(GateError::malformed(index, format!("{} is missing", name))),
    }
}

/// How resolver text is interpreted before it meets the expected value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Coercion {
    /// Resolved text is always a `Text` value, so `"true"` never equals `true`
    #[default]
    Text,
    /// Resolved text is re-read as the expected value's kind when it parses
    MatchExpected,
}

impl Coercion {
    fn apply(self, resolved: String, expected: &DynamicValue) -> DynamicValue {
        if self == Coercion::Text {
            return DynamicValue::Text(resolved);
        }
        match expected {
            DynamicValue::Bool(_) => match resolved.trim().to_ascii_lowercase().as_str() {
                "true" => DynamicValue::Bool(true),
                "false" => DynamicValue::Bool(false),
                _ => DynamicValue::Text(resolved),
            },
            DynamicValue::Int(_) | DynamicValue::Long(_) | DynamicValue::Float(_) => {
                let trimmed = resolved.trim();
                if let Ok(i) = trimmed.parse::<i64>() {
                    match i32::try_from(i) {
                        Ok(small) => DynamicValue::Int(small),
                        Err(_) => DynamicValue::Long(i),
                    }
                } else if let Some(f) = trimmed.parse::<f64>().ok().filter(|f| f.is_finite()) {
                    DynamicValue::Float(f)
                } else {
                    DynamicValue::Text(resolved)
                }
            }
            _ => DynamicValue::Text(resolved),
        }
    }
}

impl FromStr for Coercion {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Coercion::Text),
            "match-expected" | "match_expected" => Ok(Coercion::MatchExpected),
            other => Err(GateError::config(format!("unknown coercion mode: {}", other))),
        }
    }
}

/// Evaluates condition lists with AND semantics, failing closed
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionEvaluator {
    coercion: Coercion,
}

impl ConditionEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coercion(mut self, coercion: Coercion) -> Self {
        self.coercion = coercion;
        self
    }

    pub fn coercion(&self) -> Coercion {
        self.coercion
    }

    /// Evaluate typed conditions.
    ///
    /// An absent or empty list is vacuously true. Otherwise a resolver is
    /// required, and the first condition that is malformed, unresolvable or
    /// false stops evaluation with `false`.
    pub fn evaluate_all(
        &self,
        conditions: Option<&[Condition]>,
        resolver: Option<&dyn ValueResolver>,
    ) -> bool {
        let conditions = match conditions {
            Some(c) if !c.is_empty() => c,
            _ => return true,
        };
        let Some(resolver) = resolver else {
            log::warn!("No value resolver supplied for {} conditions", conditions.len());
            return false;
        };

        conditions
            .iter()
            .enumerate()
            .all(|(index, condition)| self.check(index, condition, resolver))
    }

    /// Evaluate a condition list document (a JSON array of condition objects).
    ///
    /// Anything other than a non-empty array is vacuously true. Elements are
    /// decoded lazily, so an element after the first failing one is never read.
    pub fn evaluate_document(
        &self,
        document: Option<&Value>,
        resolver: Option<&dyn ValueResolver>,
    ) -> bool {
        let elements = match document {
            Some(Value::Array(elements)) if !elements.is_empty() => elements,
            _ => return true,
        };
        let Some(resolver) = resolver else {
            log::warn!("No value resolver supplied for {} conditions", elements.len());
            return false;
        };

        elements.iter().enumerate().all(|(index, element)| {
            match Condition::deserialize(element) {
                Ok(condition) => self.check(index, &condition, resolver),
                Err(e) => {
                    log::warn!("{}", GateError::malformed(index, e.to_string()));
                    false
                }
            }
        })
    }

    fn check(&self, index: usize, condition: &Condition, resolver: &dyn ValueResolver) -> bool {
        let (step_ref, field_ref, op) = match condition.validate(index) {
            Ok(parts) => parts,
            Err(e) => {
                log::warn!("{}", e);
                return false;
            }
        };

        let resolved = match resolver.resolve(field_ref, step_ref) {
            Ok(Some(value)) => value,
            Ok(None) => {
                log::debug!("No value for {}.{}, condition fails", step_ref, field_ref);
                return false;
            }
            Err(e) => {
                log::warn!(
                    "Resolver failed for {}.{}: {}",
                    step_ref,
                    field_ref,
                    GateError::from(e)
                );
                return false;
            }
        };

        let current = self.coercion.apply(resolved, &condition.expected);
        if self.coercion == Coercion::MatchExpected
            && condition.expected.is_numeric()
            && !current.is_numeric()
            && Operator::lookup(op).is_some_and(Operator::is_ordering)
        {
            log::debug!(
                "{}.{} is not a finite number ({}), cannot order against {}",
                step_ref,
                field_ref,
                current,
                condition.expected
            );
            return false;
        }
        let result = operator::evaluate(&current, Some(op), &condition.expected);
        log::debug!(
            "Condition {}: {}.{} ({}) {} {} ({}) -> {}",
            index,
            step_ref,
            field_ref,
            current,
            op,
            condition.expected,
            condition.expected.kind(),
            result
        );
        result
    }
}

/// Evaluate typed conditions with the default text coercion
pub fn evaluate_all(conditions: Option<&[Condition]>, resolver: Option<&dyn ValueResolver>) -> bool {
    ConditionEvaluator::new().evaluate_all(conditions, resolver)
}

/// Evaluate a condition list document with the default text coercion
pub fn evaluate_document(document: Option<&Value>, resolver: Option<&dyn ValueResolver>) -> bool {
    ConditionEvaluator::new().evaluate_document(document, resolver)
}
