//! Error types for the Structomap core library
//!
//! Every failure is local and synchronous. Field access is deferred until a
//! projector runs, so field-related errors surface from `transform` and
//! `transform_batch` rather than from the builder methods.

use thiserror::Error;

/// Main error type for projection operations
#[derive(Error, Debug)]
pub enum Error {
    /// A pick or convert step named a field the record does not have
    #[error("No such field: `{field}` on {type_name}")]
    NoSuchField {
        field: String,
        type_name: &'static str,
    },

    /// The record could not be introspected as a set of named fields
    #[error("Unsupported record type {type_name}: {message}")]
    UnsupportedType {
        type_name: &'static str,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Batch transform was handed something that is not a sequence
    #[error("Batch transform given a non-sequence value: {found}")]
    NotASequence {
        found: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn no_such_field<T: ?Sized>(field: &str) -> Self {
        Error::NoSuchField {
            field: field.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub(crate) fn unsupported_type<T: ?Sized>(
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Error::UnsupportedType {
            type_name: std::any::type_name::<T>(),
            message: message.into(),
            source,
        }
    }
}

/// Short name of a JSON value's kind, used in error messages
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_such_field_names_type() {
        let err = Error::no_such_field::<u32>("Email");
        let message = err.to_string();
        assert!(message.contains("Email"));
        assert!(message.contains("u32"));
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&json!(1)), "number");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!({})), "object");
        assert_eq!(value_kind(&json!(null)), "null");
    }

    #[test]
    fn test_not_a_sequence_message() {
        let err = Error::NotASequence { found: "number".to_string() };
        assert!(err.to_string().contains("non-sequence"));
    }
}
