//! Dynamic fields: per-language values already stored in the data.

use super::{
    Object,
    localized_key,
};

/// Renames `<field>` into `<field>_<default>` while keeping `<field>_<desired>` as stored.
///
/// Nothing is translated here. The bare key and every other entry stay in the
/// output; a missing `<field>_<desired>` is left missing.
#[must_use]
pub fn translate_dynamic(
    object: &Object,
    fields: &[String],
    default_language: &str,
    desired_language: &str,
) -> Object {
    let mut result = object.clone();

    for field in fields {
        let Some(value) = object.get(field) else {
            continue;
        };

        result.insert(localized_key(field, default_language), value.clone());

        if !object.contains_key(&localized_key(field, desired_language)) {
            tracing::debug!(field = %field, language = desired_language, "No stored translation");
        }
    }

    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{
        Value,
        json,
    };

    use super::*;

    fn object(value: &Value) -> Object {
        value.as_object().cloned().unwrap_or_default()
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[googletest::test]
    fn derives_default_key_and_keeps_desired() {
        let input = object(&json!({"field": "value", "field_es": "valor"}));

        let result = translate_dynamic(&input, &fields(&["field"]), "en", "es");

        assert_eq!(
            Value::Object(result),
            json!({"field": "value", "field_es": "valor", "field_en": "value"})
        );
    }

    #[googletest::test]
    fn does_not_fabricate_missing_desired_value() {
        let input = object(&json!({"name": "Widget"}));

        let result = translate_dynamic(&input, &fields(&["name"]), "en", "es");

        expect_that!(result.get("name_en"), some(eq(&json!("Widget"))));
        expect_that!(result.contains_key("name_es"), eq(false));
    }

    #[rstest]
    #[case::unknown_field(&["missing"])]
    #[case::no_fields(&[])]
    fn untouched_when_nothing_matches(#[case] names: &[&str]) {
        let input = object(&json!({"field": "value", "id": 7}));

        let result = translate_dynamic(&input, &fields(names), "en", "es");

        assert_eq!(result, input);
    }

    #[googletest::test]
    fn overwrites_stale_default_value() {
        let input = object(&json!({"field": "new", "field_en": "old"}));

        let result = translate_dynamic(&input, &fields(&["field"]), "en", "es");

        expect_that!(result.get("field_en"), some(eq(&json!("new"))));
    }

    #[googletest::test]
    fn copies_non_string_values() {
        let input = object(&json!({"price": 9.5, "price_es": 9.5}));

        let result = translate_dynamic(&input, &fields(&["price"]), "en", "es");

        expect_that!(result.get("price_en"), some(eq(&json!(9.5))));
    }
}
