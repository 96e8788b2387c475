//! 設定ファイルの探索と読み込み

use std::path::{
    Path,
    PathBuf,
};

use super::{
    CONFIG_FILE_NAME,
    ConfigError,
    LocalizeSettings,
};

/// ワークスペース直下の `.response-localizer.json` を探す
///
/// 通常ファイルとして存在しない場合は `None`
pub(super) fn find_config_file(workspace_root: &Path) -> Option<PathBuf> {
    let candidate = workspace_root.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        Some(candidate)
    } else {
        tracing::debug!(path = %candidate.display(), "No configuration file in workspace");
        None
    }
}

/// 指定されたファイルから設定を読み込む
///
/// 省略されたフィールドはデフォルト値で埋まる。バリデーションは呼び出し側で行う
///
/// # Errors
/// - `ConfigError::IoError`: ファイルが読めない
/// - `ConfigError::ParseError`: JSON として不正、または型が合わない
pub(super) fn read_config_file(path: &Path) -> Result<LocalizeSettings, ConfigError> {
    tracing::debug!(path = %path.display(), "Reading configuration");

    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
