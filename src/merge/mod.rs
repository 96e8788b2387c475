//! Field mergers that rewrite response objects into `<field>_<lang>` keys.

/// Renormalizes per-language fields already present in the data
mod dynamic_fields;
/// Translates template fields through the phrase store
mod static_fields;

pub use dynamic_fields::translate_dynamic;
pub use static_fields::translate_static;

/// Response object shape handled by the mergers.
pub type Object = serde_json::Map<String, serde_json::Value>;

/// Builds the language-suffixed key, e.g. `message` + `es` -> `message_es`.
#[must_use]
pub fn localized_key(field: &str, language: &str) -> String {
    format!("{field}_{language}")
}

/// Returns true if `key` already ends in `_<language>` for one of the given languages.
#[must_use]
pub fn is_localized_key(key: &str, languages: &[&str]) -> bool {
    languages.iter().any(|language| {
        key.strip_suffix(*language)
            .and_then(|base| base.strip_suffix('_'))
            .is_some_and(|base| !base.is_empty())
    })
}
