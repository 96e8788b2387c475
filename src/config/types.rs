use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::response::{
    LocalizeMode,
    LocalizeOptions,
};

/// Settings file looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = ".response-localizer.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "fields[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizeSettings {
    /// Language the templates and bare fields are written in.
    pub default_language: String,
    /// Language the response is localized into.
    pub desired_language: String,

    /// Fields to localize.
    ///
    /// - `None` / `[]`: every top-level key
    /// - `Some([...])`: only the listed keys, in this order
    pub fields: Option<Vec<String>>,

    pub mode: LocalizeMode,

    /// Phrase file, relative to the workspace root.
    /// Static mode without one translates against an empty store.
    pub static_data_path: Option<String>,

    /// Written in place of placeholders with no translation.
    /// If unset, the placeholder key itself is written.
    pub missing_phrase_text: Option<String>,
}

impl LocalizeSettings {
    /// # Errors
    /// - Empty or whitespace-containing language code
    /// - Same default and desired language
    /// - Empty or duplicated field name
    /// - Empty path or default text
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (field_path, code) in [
            ("defaultLanguage", &self.default_language),
            ("desiredLanguage", &self.desired_language),
        ] {
            if code.is_empty() {
                errors.push(ValidationError::new(
                    field_path,
                    "The language code cannot be empty. Example: \"en\"",
                ));
            } else if code.chars().any(char::is_whitespace) {
                errors.push(ValidationError::new(
                    field_path,
                    format!("Invalid language code '{code}': whitespace is not allowed"),
                ));
            }
        }

        if !self.default_language.is_empty() && self.default_language == self.desired_language {
            errors.push(ValidationError::new(
                "desiredLanguage",
                format!(
                    "The desired language must differ from the default language ('{}')",
                    self.default_language
                ),
            ));
        }

        let mut seen = HashSet::new();
        for (index, field) in self.fields.iter().flatten().enumerate() {
            if field.is_empty() {
                errors.push(ValidationError::new(
                    format!("fields[{index}]"),
                    "The field name cannot be empty",
                ));
            } else if !seen.insert(field.as_str()) {
                errors.push(ValidationError::new(
                    format!("fields[{index}]"),
                    format!("Duplicate field '{field}'"),
                ));
            }
        }

        if let Some(path) = &self.static_data_path
            && path.is_empty()
        {
            errors.push(ValidationError::new(
                "staticDataPath",
                "The path cannot be empty. Please specify a phrase file (e.g., \"static/static_data.json\"), or remove this field",
            ));
        }

        if let Some(text) = &self.missing_phrase_text
            && text.is_empty()
        {
            errors.push(ValidationError::new(
                "missingPhraseText",
                "The text cannot be empty. Remove this field to fall back to the phrase key",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Route options for the response stage.
    #[must_use]
    pub fn options(&self) -> LocalizeOptions {
        LocalizeOptions {
            default_language: self.default_language.clone(),
            desired_language: self.desired_language.clone(),
            fields: self.fields.clone(),
            mode: self.mode,
        }
    }
}

impl Default for LocalizeSettings {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            desired_language: "es".to_string(),
            fields: None,
            mode: LocalizeMode::Static,
            static_data_path: None,
            missing_phrase_text: None,
        }
    }
}
