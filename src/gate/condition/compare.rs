// SPDX-License-Identifier: MIT

//! Typed ordering between two runtime values

use super::value::DynamicValue;
use crate::gate::error::GateError;
use std::cmp::Ordering;

/// Order `actual` relative to `expected`.
///
/// - both numeric: compared as f64 after widening
/// - same kind: natural order of that kind
/// - anything else: textual forms compared lexicographically
///
/// Fails with [`GateError::InvalidArgument`] when either side is `Null`;
/// callers are expected to check presence first.
pub fn compare(actual: &DynamicValue, expected: &DynamicValue) -> Result<Ordering, GateError> {
    if actual.is_null() {
        return Err(GateError::invalid_argument("actual value is null"));
    }
    if expected.is_null() {
        return Err(GateError::invalid_argument("expected value is null"));
    }

    if let (Some(a), Some(b)) = (actual.as_f64(), expected.as_f64()) {
        // -0.0 and 0.0 are equal; total_cmp only settles NaN
        return Ok(a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b)));
    }

    let ordering = match (actual, expected) {
        (DynamicValue::Text(a), DynamicValue::Text(b)) => a.cmp(b),
        (DynamicValue::Opaque(a), DynamicValue::Opaque(b)) => a.cmp(b),
        (DynamicValue::Bool(a), DynamicValue::Bool(b)) => a.cmp(b),
        (a, b) => a.as_text().cmp(&b.as_text()),
    };
    Ok(ordering)
}

/// Kind-aware equality; numeric kinds are equal when their values are.
pub fn values_equal(current: &DynamicValue, expected: &DynamicValue) -> bool {
    match (current, expected) {
        (DynamicValue::Null, DynamicValue::Null) => true,
        (DynamicValue::Null, _) | (_, DynamicValue::Null) => false,
        (a, b) if a.is_numeric() && b.is_numeric() => match (a.as_i64(), b.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => a.as_f64() == b.as_f64(),
        },
        (a, b) => a == b,
    }
}
