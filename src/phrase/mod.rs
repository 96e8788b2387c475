//! Phrase dictionary and `{key}` template translation.

/// Phrase storage and lookup
mod store;
/// Template scanning
mod template;

pub use store::{
    PhraseStore,
    PhraseTranslations,
};
pub use template::{
    Segment,
    placeholders,
    segments,
};
