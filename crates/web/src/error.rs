//! Binding failure types.
//!
//! Every variant names the offending struct field so rejections read
//! like validation messages, not parser internals. The binder never
//! catches these; they propagate to the extractor rejection (or the
//! caller of [`BindParams::bind`](crate::BindParams::bind)) via `?`.

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;

/// Failure to coerce a single raw string into a field's type.
///
/// Wraps the concrete parse error so the source chain stays intact.
#[derive(Debug, thiserror::Error)]
pub enum CoerceError {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error(transparent)]
    Bool(#[from] ParseBoolError),

    #[error(transparent)]
    Char(#[from] std::char::ParseCharError),

    #[error(transparent)]
    Decimal(#[from] rust_decimal::Error),

    #[error(transparent)]
    Date(#[from] chrono::ParseError),
}

/// Failure to bind a parameter map to a target struct.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// A required field had no supplied value and no default.
    #[error("field `{field}` is required but was not supplied")]
    MissingRequired { field: &'static str },

    /// A scalar field received more than one value for its key.
    #[error("field `{field}` is not a repeated field, but {count} values were supplied")]
    MultipleValues { field: &'static str, count: usize },

    /// A raw value failed numeric/decimal/date/bool coercion.
    #[error("field `{field}`: cannot parse `{value}`: {source}")]
    Coerce {
        field: &'static str,
        value: String,
        #[source]
        source: CoerceError,
    },

    /// A JSON-encoded field held malformed or mistyped JSON.
    #[error("field `{field}`: invalid JSON: {source}")]
    Json {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl BindError {
    /// The struct field this error is about.
    pub fn field(&self) -> &'static str {
        match self {
            BindError::MissingRequired { field }
            | BindError::MultipleValues { field, .. }
            | BindError::Coerce { field, .. }
            | BindError::Json { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = BindError::MissingRequired { field: "user_id" };
        assert_eq!(
            err.to_string(),
            "field `user_id` is required but was not supplied"
        );
        assert_eq!(err.field(), "user_id");

        let err = BindError::MultipleValues {
            field: "page",
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "field `page` is not a repeated field, but 3 values were supplied"
        );
    }

    #[test]
    fn coerce_error_keeps_source_chain() {
        use std::error::Error as _;

        let source = "abc".parse::<i32>().unwrap_err();
        let err = BindError::Coerce {
            field: "page",
            value: "abc".into(),
            source: CoerceError::Int(source),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("`abc`"));
    }
}
