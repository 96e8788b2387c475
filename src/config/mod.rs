//! 設定ファイルの読み込みとバリデーション
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use types::{
    CONFIG_FILE_NAME,
    ConfigError,
    LocalizeSettings,
    ValidationError,
};
