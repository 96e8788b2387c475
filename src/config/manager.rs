//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    LocalizeSettings,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: LocalizeSettings,

    /// ワークスペースのルートパス
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: LocalizeSettings::default(), workspace_root: None }
    }

    /// 設定を読み込む
    ///
    /// # Arguments
    /// * `workspace_root` - ワークスペースのルートパス
    ///
    /// # Returns
    /// - `Ok(())`: 設定の読み込みとバリデーション成功
    /// - `Err(ConfigError)`: エラー
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        // 設定ファイルがなければデフォルト値
        let settings = workspace_root
            .as_deref()
            .and_then(loader::find_config_file)
            .map(|path| loader::read_config_file(&path))
            .transpose()?
            .unwrap_or_default();

        self.apply(settings, workspace_root)
    }

    /// 明示されたファイルから設定を読み込む
    ///
    /// 相対パスの `staticDataPath` はファイルのあるディレクトリを基準に解決する
    ///
    /// # Errors
    /// - ファイルが存在しない、または読み込めない
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings_from_file(&mut self, config_path: &Path) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings from file: {:?}", config_path);

        let settings = loader::read_config_file(config_path)?;
        let base_dir = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf);

        self.apply(settings, base_dir)
    }

    /// バリデーションに通った設定だけを保存する
    fn apply(
        &mut self,
        settings: LocalizeSettings,
        workspace_root: Option<PathBuf>,
    ) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.workspace_root = workspace_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &LocalizeSettings {
        &self.current_settings
    }

    /// ワークスペースルートを取得
    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }

    /// フレーズファイルのパスを取得
    ///
    /// 相対パスはワークスペースルートを基準に解決する
    #[must_use]
    pub fn static_data_path(&self) -> Option<PathBuf> {
        let path = PathBuf::from(self.current_settings.static_data_path.as_ref()?);
        match &self.workspace_root {
            Some(root) if path.is_relative() => Some(root.join(path)),
            _ => Some(path),
        }
    }
}
