//! Errors raised while loading phrases or localizing a response.

use thiserror::Error;

/// Boxed error returned by a fallible response handler.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Defines errors that may occur while localizing a response payload
#[derive(Error, Debug)]
pub enum LocalizeError {
    /// The response stage was built without a phrase store.
    #[error("A phrase store must be attached to the response stage before handling requests")]
    MissingLocalizer,

    /// A static field held something other than a template string.
    #[error("Field '{key}' cannot be localized: expected a string, found {found}")]
    UnsupportedFieldType {
        /// Offending top-level key
        key: String,
        /// JSON type name of the value
        found: &'static str,
    },

    /// Error when failing to read the phrase file
    #[error("Failed to read phrase file: {0}")]
    Io(#[from] std::io::Error),

    /// Error when the phrase file is not a `key -> language -> text` mapping
    #[error("Failed to parse phrase file: {0}")]
    PhraseFile(#[from] serde_json::Error),

    /// Error returned by the wrapped handler itself
    #[error("Response handler failed: {0}")]
    Handler(#[source] HandlerError),
}

/// JSON type name used in error messages.
#[must_use]
pub const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
