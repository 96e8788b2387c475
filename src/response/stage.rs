//! Post-processing stage that localizes whatever a route handler returns.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use super::options::{
    LocalizeMode,
    LocalizeOptions,
};
use crate::error::{
    HandlerError,
    LocalizeError,
};
use crate::merge::{
    Object,
    is_localized_key,
    translate_dynamic,
    translate_static,
};
use crate::phrase::PhraseStore;

/// Localizes handler payloads for one route.
///
/// The routing layer builds one stage per localized route, injects the shared
/// [`PhraseStore`], and hands each request's handler future to [`Self::respond`].
///
/// # Examples
/// ```
/// # tokio_test::block_on(async {
/// use std::sync::Arc;
///
/// use response_localizer::phrase::PhraseStore;
/// use response_localizer::response::LocalizeResponse;
/// use serde_json::json;
///
/// let mut store = PhraseStore::new();
/// store.insert("greeting", "en", "Hello");
/// store.insert("greeting", "es", "Hola");
///
/// let stage = LocalizeResponse::static_fields("en", "es", Some(vec!["message".to_string()]))
///     .with_localizer(Arc::new(store));
///
/// let body = stage.respond(async { json!({"message": "{greeting}", "id": 1}) }).await.unwrap();
/// assert_eq!(body, json!({"id": 1, "message_en": "Hello", "message_es": "Hola"}));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct LocalizeResponse {
    /// Languages, fields and merger for this route
    options: LocalizeOptions,
    /// Phrase store shared by every request
    localizer: Option<Arc<PhraseStore>>,
}

impl LocalizeResponse {
    /// Creates a stage without a phrase store; attach one with [`Self::with_localizer`].
    #[must_use]
    pub const fn new(options: LocalizeOptions) -> Self {
        Self { options, localizer: None }
    }

    /// Stage translating template fields through the phrase store.
    #[must_use]
    pub fn static_fields(
        default_language: impl Into<String>,
        desired_language: impl Into<String>,
        fields: Option<Vec<String>>,
    ) -> Self {
        let mut options =
            LocalizeOptions::new(default_language, desired_language, LocalizeMode::Static);
        options.fields = fields;
        Self::new(options)
    }

    /// Stage renaming per-language fields loaded from the database.
    #[must_use]
    pub fn database_fields(
        default_language: impl Into<String>,
        desired_language: impl Into<String>,
        fields: Option<Vec<String>>,
    ) -> Self {
        let mut options =
            LocalizeOptions::new(default_language, desired_language, LocalizeMode::Database);
        options.fields = fields;
        Self::new(options)
    }

    /// Attaches the phrase store shared by every request on this route.
    #[must_use]
    pub fn with_localizer(mut self, localizer: Arc<PhraseStore>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    /// Options this stage was built with.
    #[must_use]
    pub const fn options(&self) -> &LocalizeOptions {
        &self.options
    }

    /// Awaits `handler` and localizes its payload.
    ///
    /// The phrase store is checked before the handler is polled, so a
    /// misconfigured stage never runs the handler.
    ///
    /// # Errors
    /// - [`LocalizeError::MissingLocalizer`] when no phrase store is attached
    /// - [`LocalizeError::UnsupportedFieldType`] for a non-string static field
    pub async fn respond<F>(&self, handler: F) -> Result<Value, LocalizeError>
    where
        F: Future<Output = Value>,
    {
        let store = self.localizer()?;
        let payload = handler.await;
        self.localize_with(store, payload)
    }

    /// Same as [`Self::respond`] for handlers that can fail.
    ///
    /// # Errors
    /// Handler errors are returned as [`LocalizeError::Handler`]; otherwise as [`Self::respond`].
    pub async fn try_respond<F, E>(&self, handler: F) -> Result<Value, LocalizeError>
    where
        F: Future<Output = Result<Value, E>>,
        E: Into<HandlerError>,
    {
        let store = self.localizer()?;
        let payload = handler.await.map_err(|e| LocalizeError::Handler(e.into()))?;
        self.localize_with(store, payload)
    }

    /// Localizes an already produced payload.
    ///
    /// # Errors
    /// Same as [`Self::respond`].
    pub fn localize_payload(&self, payload: Value) -> Result<Value, LocalizeError> {
        let store = self.localizer()?;
        self.localize_with(store, payload)
    }

    /// Returns the attached phrase store or the configuration error.
    fn localizer(&self) -> Result<&PhraseStore, LocalizeError> {
        self.localizer.as_deref().ok_or_else(|| {
            tracing::error!("Response stage used without a phrase store");
            LocalizeError::MissingLocalizer
        })
    }

    /// Dispatches on the payload shape.
    fn localize_with(&self, store: &PhraseStore, payload: Value) -> Result<Value, LocalizeError> {
        tracing::debug!(
            mode = ?self.options.mode,
            fields = ?self.options.fields,
            "Localizing response"
        );

        match payload {
            Value::Object(object) => Ok(Value::Object(self.localize_object(store, object)?)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| self.localize_item(store, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            other => {
                tracing::debug!("Payload is neither an object nor a list, passing through");
                Ok(other)
            }
        }
    }

    /// Localizes one list element; anything but an object is kept as-is.
    fn localize_item(&self, store: &PhraseStore, item: Value) -> Result<Value, LocalizeError> {
        match item {
            Value::Object(object) => Ok(Value::Object(self.localize_object(store, object)?)),
            other => {
                tracing::warn!("Skipping non-object list element: {}", other);
                Ok(other)
            }
        }
    }

    /// Applies the merger for the current mode to one object.
    fn localize_object(
        &self,
        store: &PhraseStore,
        object: Object,
    ) -> Result<Object, LocalizeError> {
        let default_language = self.options.default_language.as_str();
        let desired_language = self.options.desired_language.as_str();

        match self.options.mode {
            LocalizeMode::Static => {
                self.localize_static_object(store, object, default_language, desired_language)
            }
            LocalizeMode::Database => {
                // The merger keeps every key, so it sees `<field>_<desired>` siblings too.
                let candidates: Vec<String> = self.options.selected_fields().map_or_else(
                    || {
                        let languages = [default_language, desired_language];
                        object
                            .keys()
                            .filter(|key| !is_localized_key(key, &languages))
                            .cloned()
                            .collect()
                    },
                    <[String]>::to_vec,
                );
                Ok(translate_dynamic(&object, &candidates, default_language, desired_language))
            }
        }
    }

    /// Translates the selected keys and puts the rest back untouched.
    fn localize_static_object(
        &self,
        store: &PhraseStore,
        object: Object,
        default_language: &str,
        desired_language: &str,
    ) -> Result<Object, LocalizeError> {
        let Some(fields) = self.options.selected_fields() else {
            return translate_static(store, &object, default_language, desired_language);
        };

        let selected: Object = fields
            .iter()
            .filter_map(|field| object.get(field).map(|value| (field.clone(), value.clone())))
            .collect();
        let mut merged: Object =
            object.into_iter().filter(|(key, _)| !fields.contains(key)).collect();

        merged.extend(translate_static(store, &selected, default_language, desired_language)?);
        Ok(merged)
    }
}
