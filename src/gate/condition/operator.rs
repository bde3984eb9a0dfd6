// SPDX-License-Identifier: MIT

//! Operator table and per-condition evaluation

use super::compare::{compare, values_equal};
use super::value::DynamicValue;
use crate::gate::error::GateError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::str::FromStr;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// equals, ==
    Equals,
    /// notequals, !=
    NotEquals,
    /// contains (textual substring)
    Contains,
    /// greaterthan, >
    GreaterThan,
    /// lessthan, <
    LessThan,
    /// greaterorequal, >=
    GreaterOrEqual,
    /// lessorequal, <=
    LessOrEqual,
}

/// Word forms are stored lowercase; symbols are matched as written.
static OPERATORS: Lazy<HashMap<&'static str, Operator>> = Lazy::new(|| {
    HashMap::from([
        ("equals", Operator::Equals),
        ("==", Operator::Equals),
        ("notequals", Operator::NotEquals),
        ("!=", Operator::NotEquals),
        ("contains", Operator::Contains),
        ("greaterthan", Operator::GreaterThan),
        (">", Operator::GreaterThan),
        ("lessthan", Operator::LessThan),
        ("<", Operator::LessThan),
        ("greaterorequal", Operator::GreaterOrEqual),
        (">=", Operator::GreaterOrEqual),
        ("lessorequal", Operator::LessOrEqual),
        ("<=", Operator::LessOrEqual),
    ])
});

impl Operator {
    /// Look up an operator token, ignoring case
    pub fn lookup(token: &str) -> Option<Self> {
        OPERATORS.get(token.to_lowercase().as_str()).copied()
    }

    /// Whether the operator orders its operands (`>`, `<`, `>=`, `<=`)
    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            Operator::GreaterThan
                | Operator::LessThan
                | Operator::GreaterOrEqual
                | Operator::LessOrEqual
        )
    }

    /// Apply the operator to a pair of values
    pub fn apply(self, current: &DynamicValue, expected: &DynamicValue) -> bool {
        match self {
            Operator::Equals => values_equal(current, expected),
            Operator::NotEquals => !values_equal(current, expected),
            Operator::Contains => {
                !current.is_null() && current.as_text().contains(expected.as_text().as_ref())
            }
            Operator::GreaterThan => ordered(current, expected, |o| o.is_gt()),
            Operator::LessThan => ordered(current, expected, |o| o.is_lt()),
            Operator::GreaterOrEqual => ordered(current, expected, |o| o.is_ge()),
            Operator::LessOrEqual => ordered(current, expected, |o| o.is_le()),
        }
    }
}

fn ordered<F>(current: &DynamicValue, expected: &DynamicValue, check: F) -> bool
where
    F: Fn(std::cmp::Ordering) -> bool,
{
    match compare(current, expected) {
        Ok(ordering) => check(ordering),
        Err(e) => {
            log::debug!("Comparison failed, treating as false: {}", e);
            false
        }
    }
}

impl FromStr for Operator {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| GateError::UnknownOperator(s.to_string()))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Equals => write!(f, "equals"),
            Operator::NotEquals => write!(f, "notequals"),
            Operator::Contains => write!(f, "contains"),
            Operator::GreaterThan => write!(f, "greaterthan"),
            Operator::LessThan => write!(f, "lessthan"),
            Operator::GreaterOrEqual => write!(f, "greaterorequal"),
            Operator::LessOrEqual => write!(f, "lessorequal"),
        }
    }
}

/// Evaluate `current <operator> expected`.
///
/// A missing or unknown operator evaluates to `false`, as does any comparison
/// involving a null operand.
pub fn evaluate(current: &DynamicValue, operator: Option<&str>, expected: &DynamicValue) -> bool {
    let Some(token) = operator else {
        return false;
    };
    match Operator::lookup(token) {
        Some(op) => op.apply(current, expected),
        None => {
            log::warn!("Unknown operator '{}'", token);
            false
        }
    }
}
