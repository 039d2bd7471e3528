//! Error types for match key generation.
//!
//! This module provides the [`FormatError`] type raised when an input document
//! cannot be loaded as a MARC-in-JSON record, and the [`Result`] convenience
//! type.
//!
//! Only structural problems are errors. A record that loads successfully always
//! produces a key: absent or unusable field data falls back to each segment's
//! default instead.

use thiserror::Error;

/// Structural failure while loading a MARC-in-JSON record.
///
/// Every variant names the expectation that failed, so the message can be
/// shown to whoever supplied the record.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The input is not parseable JSON.
    #[error("Input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document (or its `marc` envelope) is not a JSON object.
    #[error("MARC record must be a JSON object")]
    NotAnObject,

    /// The `fields` member is absent.
    #[error("MARC fields array is missing")]
    MissingFields,

    /// The `fields` member is present but is not an array.
    #[error("MARC fields is not an array")]
    FieldsNotArray,

    /// The `fields` array has no first element to validate.
    #[error("MARC fields array is empty")]
    EmptyFields,

    /// The keys of `fields[0]` are not a numeric tag.
    #[error("MARC fields[0] key is not numeric: {0:?}")]
    NonNumericTag(String),

    /// The `leader` member is absent, empty, or not a string.
    #[error("MARC leader field is missing")]
    MissingLeader,
}

/// Convenience type alias for [`std::result::Result`] with [`FormatError`].
pub type Result<T> = std::result::Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failed_member() {
        assert!(FormatError::MissingFields.to_string().contains("fields"));
        assert!(FormatError::FieldsNotArray.to_string().contains("fields"));
        assert!(FormatError::EmptyFields.to_string().contains("fields"));
        assert!(FormatError::MissingLeader.to_string().contains("leader"));

        let err = FormatError::NonNumericTag("title".to_string());
        assert!(err.to_string().contains("fields[0]"));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FormatError = parse_err.into();
        assert!(matches!(err, FormatError::Json(_)));
        assert!(err.to_string().starts_with("Input is not valid JSON"));
    }
}
