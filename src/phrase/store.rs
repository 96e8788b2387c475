//! In-memory phrase dictionary and template translation.

use std::collections::{
    BTreeSet,
    HashMap,
};
use std::path::Path;

use super::template::{
    Segment,
    segments,
};
use crate::error::LocalizeError;

/// Translations of a single phrase, keyed by language code.
pub type PhraseTranslations = HashMap<String, String>;

/// Phrase dictionary: `phrase key -> language code -> text`.
///
/// Built once at startup and shared read-only (e.g. behind an `Arc`) by every
/// request afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseStore {
    /// Phrase key to per-language text
    phrases: HashMap<String, PhraseTranslations>,
    /// Text used for unresolved placeholders instead of the key itself
    default_text: Option<String>,
}

impl PhraseStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a phrase file of the form `{"greeting": {"en": "Hello", "es": "Hola"}}`.
    ///
    /// # Errors
    /// - The file cannot be read
    /// - The content is not a `key -> language -> string` mapping
    pub fn from_file(path: &Path) -> Result<Self, LocalizeError> {
        tracing::debug!("Loading phrases from: {:?}", path);

        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&content)?;

        tracing::debug!(phrases = store.len(), languages = ?store.languages(), "Phrases loaded");
        Ok(store)
    }

    /// Parses phrases from JSON text.
    ///
    /// # Errors
    /// Returns [`LocalizeError::PhraseFile`] when the JSON is malformed or has the wrong shape.
    pub fn from_json_str(content: &str) -> Result<Self, LocalizeError> {
        let phrases: HashMap<String, PhraseTranslations> = serde_json::from_str(content)?;
        Ok(Self { phrases, default_text: None })
    }

    /// Uses `text` for placeholders that cannot be resolved, instead of the key.
    #[must_use]
    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = Some(text.into());
        self
    }

    /// Adds or replaces one translation.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        language: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.phrases.entry(key.into()).or_default().insert(language.into(), text.into());
    }

    /// Merges a nested phrase map into the store. Existing translations are replaced.
    pub fn extend(&mut self, phrases: HashMap<String, PhraseTranslations>) {
        for (key, translations) in phrases {
            self.phrases.entry(key).or_default().extend(translations);
        }
    }

    /// Looks up one translation.
    #[must_use]
    pub fn phrase(&self, key: &str, language: &str) -> Option<&str> {
        self.phrases.get(key)?.get(language).map(String::as_str)
    }

    /// Whether `key` has an entry, in any language.
    ///
    /// # Examples
    /// ```
    /// use response_localizer::phrase::PhraseStore;
    ///
    /// let mut store = PhraseStore::new();
    /// store.insert("greeting", "es", "Hola");
    ///
    /// assert!(store.contains_key("greeting"));
    /// assert!(!store.contains_key("{greeting}"));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.phrases.contains_key(key)
    }

    /// Number of phrase keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether no phrase key has been loaded.
    ///
    /// # Examples
    /// ```
    /// use response_localizer::phrase::PhraseStore;
    ///
    /// assert!(PhraseStore::new().is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Language codes used by any phrase, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.phrases
            .values()
            .flat_map(HashMap::keys)
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Replaces every `{key}` placeholder with its translation for `language`.
    ///
    /// Unknown keys and keys lacking `language` are not an error: the key text
    /// (or the configured default text) is written instead.
    ///
    /// # Examples
    /// ```
    /// use response_localizer::phrase::PhraseStore;
    ///
    /// let mut store = PhraseStore::new();
    /// store.insert("greeting", "es", "Hola");
    ///
    /// assert_eq!(store.translate("{greeting} Mark {test}", "es"), "Hola Mark test");
    /// ```
    #[must_use]
    pub fn translate(&self, template: &str, language: &str) -> String {
        let mut output = String::with_capacity(template.len());

        for segment in segments(template) {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Placeholder(key) => {
                    if let Some(text) = self.phrase(key, language) {
                        output.push_str(text);
                    } else {
                        tracing::trace!(key, language, "No phrase found, using fallback");
                        output.push_str(self.default_text.as_deref().unwrap_or(key));
                    }
                }
            }
        }

        output
    }
}
