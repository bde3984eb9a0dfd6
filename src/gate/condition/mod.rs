// SPDX-License-Identifier: MIT

//! Condition evaluation for step branching
//!
//! A condition list is a JSON array such as:
//! - `{"stepRef": "review", "fieldRef": "decision", "operator": "equals", "value": "APPROVED"}`
//! - `{"stepRef": "quote", "fieldRef": "amount", "operator": ">=", "value": 1500}`
//!
//! All conditions must hold. Anything that prevents a decision (malformed
//! element, missing value, resolver failure) makes the whole list `false`.

mod compare;
mod evaluator;
mod operator;
mod value;

pub use compare::{compare, values_equal};
pub use evaluator::{evaluate_all, evaluate_document, Coercion, Condition, ConditionEvaluator};
pub use operator::{evaluate, Operator};
pub use value::DynamicValue;
