//! response-localizer
//!
//! Web レスポンスの JSON ペイロードを `<field>_<lang>` 形式にローカライズする後処理ステージ

pub mod config;
pub mod error;
pub mod merge;
pub mod phrase;
pub mod response;

pub use error::LocalizeError;
pub use phrase::PhraseStore;
pub use response::LocalizeResponse;
