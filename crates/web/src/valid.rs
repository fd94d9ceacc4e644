//! Flattening of structured validation outcomes.

use std::collections::HashMap;

use validator::{ValidationErrors, ValidationErrorsKind};

/// Message substituted when a validation error carries none.
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// Flatten a validation outcome into a `field -> message` map.
///
/// `None` or an outcome without field-level errors yields an empty map.
/// Each field keeps one message: the error's own if present, else
/// [`UNKNOWN_ERROR_MESSAGE`]; when a field has several errors the last
/// one iterated wins. Nested struct and list error kinds are not
/// field-level and are skipped.
pub fn field_errors_to_map(outcome: Option<&ValidationErrors>) -> HashMap<String, String> {
    let Some(errors) = outcome else {
        return HashMap::new();
    };
    let mut map = HashMap::new();
    for (field, kind) in errors.errors() {
        let ValidationErrorsKind::Field(field_errors) = kind else {
            continue;
        };
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
            map.insert(field.to_string(), message);
        }
    }
    map
}
