// SPDX-License-Identifier: MIT

use crate::gate::error::BoxError;

/// Caller-supplied data source for the current value of a field.
///
/// Implementations return the value as text, `Ok(None)` when the field has no
/// value, or an error when the lookup itself failed. The evaluator treats both
/// of the latter as "cannot decide".
pub trait ValueResolver {
    fn resolve(&self, field_ref: &str, step_ref: &str) -> Result<Option<String>, BoxError>;
}

impl<F> ValueResolver for F
where
    F: Fn(&str, &str) -> Result<Option<String>, BoxError>,
{
    fn resolve(&self, field_ref: &str, step_ref: &str) -> Result<Option<String>, BoxError> {
        self(field_ref, step_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_resolver() {
        let resolver = |field: &str, step: &str| -> Result<Option<String>, BoxError> {
            Ok(Some(format!("{}/{}", step, field)))
        };
        assert_eq!(
            resolver.resolve("status", "review").unwrap(),
            Some("review/status".to_string())
        );
    }

    #[test]
    fn test_closure_resolver_error() {
        let resolver =
            |_: &str, _: &str| -> Result<Option<String>, BoxError> { Err("down".into()) };
        assert_eq!(resolver.resolve("a", "b").unwrap_err().to_string(), "down");
    }
}
