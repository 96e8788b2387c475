//! Static fields: template strings translated against the phrase store.

use serde_json::Value;

use super::{
    Object,
    is_localized_key,
    localized_key,
};
use crate::error::{
    LocalizeError,
    json_type_name,
};
use crate::phrase::PhraseStore;

/// Translates every field of `object` into `<field>_<default>` and `<field>_<desired>`.
///
/// The bare key is not part of the output. Keys that already carry one of the
/// two language suffixes are copied through unchanged, so feeding the output
/// back in returns it as-is instead of producing `message_en_en`. When a copied
/// key collides with a translated one, the translation wins regardless of key order.
///
/// # Errors
/// Returns [`LocalizeError::UnsupportedFieldType`] for a field whose value is not a string.
///
/// # Examples
/// ```
/// use response_localizer::merge::translate_static;
/// use response_localizer::phrase::PhraseStore;
/// use serde_json::json;
///
/// let mut store = PhraseStore::new();
/// store.insert("greeting", "en", "Hello");
/// store.insert("greeting", "es", "Hola");
///
/// let object = json!({"message": "{greeting}"});
/// let merged = translate_static(&store, object.as_object().unwrap(), "en", "es").unwrap();
///
/// assert_eq!(serde_json::Value::Object(merged), json!({"message_en": "Hello", "message_es": "Hola"}));
/// ```
pub fn translate_static(
    store: &PhraseStore,
    object: &Object,
    default_language: &str,
    desired_language: &str,
) -> Result<Object, LocalizeError> {
    let languages = [default_language, desired_language];
    let mut result = Object::new();

    for (key, value) in object {
        if is_localized_key(key, &languages) {
            result.insert(key.clone(), value.clone());
        }
    }

    for (key, value) in object {
        if is_localized_key(key, &languages) {
            continue;
        }

        let Value::String(template) = value else {
            return Err(LocalizeError::UnsupportedFieldType {
                key: key.clone(),
                found: json_type_name(value),
            });
        };

        for language in languages {
            result.insert(
                localized_key(key, language),
                Value::String(store.translate(template, language)),
            );
        }
    }

    Ok(result)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::{
        fixture,
        rstest,
    };
    use serde_json::json;

    use super::*;

    #[fixture]
    fn store() -> PhraseStore {
        let mut store = PhraseStore::new();
        store.insert("greeting", "en", "Hello");
        store.insert("greeting", "es", "Hola");
        store.insert("test", "en", "Test");
        store.insert("test", "es", "Prueba");
        store
    }

    fn object(value: Value) -> Object {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[rstest]
    fn translates_into_both_languages(store: PhraseStore) {
        let input = object(json!({"message": "{greeting} {test}"}));

        let result = translate_static(&store, &input, "en", "es").unwrap();

        assert_eq!(
            Value::Object(result),
            json!({"message_en": "Hello Test", "message_es": "Hola Prueba"})
        );
    }

    #[rstest]
    fn drops_bare_keys_and_keeps_order(store: PhraseStore) {
        let input = object(json!({"title": "{test}", "message": "{greeting}"}));

        let result = translate_static(&store, &input, "en", "es").unwrap();

        let keys: Vec<&str> = result.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title_en", "title_es", "message_en", "message_es"]);
    }

    #[rstest]
    fn missing_phrase_falls_back_to_key(store: PhraseStore) {
        let input = object(json!({"message": "{greeting} {unknown}"}));

        let result = translate_static(&store, &input, "en", "es").unwrap();

        assert_eq!(result.get("message_en"), Some(&json!("Hello unknown")));
        assert_eq!(result.get("message_es"), Some(&json!("Hola unknown")));
    }

    #[rstest]
    #[case::number(json!({"count": 3}), "count", "number")]
    #[case::null(json!({"title": "{test}", "note": null}), "note", "null")]
    #[case::nested(json!({"meta": {"a": "b"}}), "meta", "object")]
    fn non_string_value_is_rejected(
        store: PhraseStore,
        #[case] input: Value,
        #[case] expected_key: &str,
        #[case] expected_type: &str,
    ) {
        let result = translate_static(&store, &object(input), "en", "es");

        let Err(LocalizeError::UnsupportedFieldType { key, found }) = result else {
            panic!("expected UnsupportedFieldType, got {result:?}");
        };
        assert_that!(key, eq(expected_key));
        assert_that!(found, eq(expected_type));
    }

    #[rstest]
    fn reapplying_to_output_is_a_no_op(store: PhraseStore) {
        let input = object(json!({"message": "{greeting} {test}"}));
        let once = translate_static(&store, &input, "en", "es").unwrap();

        let twice = translate_static(&store, &once, "en", "es").unwrap();

        assert_eq!(twice, once);
        assert_that!(twice.contains_key("message_en_en"), eq(false));
    }

    #[rstest]
    #[case::bare_key_first(json!({"message": "{greeting}", "message_es": "custom"}))]
    #[case::suffixed_key_first(json!({"message_es": "custom", "message": "{greeting}"}))]
    fn translation_wins_over_stored_suffixed_key(store: PhraseStore, #[case] input: Value) {
        let result = translate_static(&store, &object(input), "en", "es").unwrap();

        assert_eq!(result.get("message_es"), Some(&json!("Hola")));
        assert_eq!(result.get("message_en"), Some(&json!("Hello")));
        assert_that!(result.len(), eq(2));
    }

    #[rstest]
    fn empty_object_yields_empty_object(store: PhraseStore) {
        let result = translate_static(&store, &Object::new(), "en", "es").unwrap();

        assert_that!(result.is_empty(), eq(true));
    }
}
