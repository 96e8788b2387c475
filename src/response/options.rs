//! Per-route localization options, fixed when the stage is built.

use serde::{
    Deserialize,
    Serialize,
};

/// Which merger the stage applies to a handler's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LocalizeMode {
    /// Template fields translated through the phrase store
    #[default]
    Static,
    /// Per-language fields already present in the payload
    Database,
}

/// Languages and field selection for one localized route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizeOptions {
    /// Source language code (e.g. "en")
    pub default_language: String,
    /// Target language code (e.g. "es")
    pub desired_language: String,
    /// Fields to localize. `None` or empty selects every key.
    pub fields: Option<Vec<String>>,
    pub mode: LocalizeMode,
}

impl LocalizeOptions {
    #[must_use]
    pub fn new(
        default_language: impl Into<String>,
        desired_language: impl Into<String>,
        mode: LocalizeMode,
    ) -> Self {
        Self {
            default_language: default_language.into(),
            desired_language: desired_language.into(),
            fields: None,
            mode,
        }
    }

    /// Restricts localization to the given fields.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// The explicit field selection, or `None` when every key is eligible.
    #[must_use]
    pub fn selected_fields(&self) -> Option<&[String]> {
        self.fields.as_deref().filter(|fields| !fields.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn empty_field_list_selects_everything() {
        let options = LocalizeOptions::new("en", "es", LocalizeMode::Static)
            .with_fields(Vec::<String>::new());

        expect_that!(options.selected_fields(), none());
    }

    #[googletest::test]
    fn explicit_fields_are_kept_in_order() {
        let options =
            LocalizeOptions::new("en", "es", LocalizeMode::Database).with_fields(["title", "body"]);

        let expected = ["title".to_string(), "body".to_string()];
        assert_eq!(options.selected_fields(), Some(expected.as_slice()));
    }

    #[googletest::test]
    fn mode_deserializes_from_camel_case() {
        let mode: std::result::Result<LocalizeMode, _> = serde_json::from_str("\"database\"");

        expect_that!(mode.ok(), some(eq(LocalizeMode::Database)));
    }
}
