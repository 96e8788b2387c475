//! Entry point: localizes one JSON payload read from stdin and writes it to stdout.

use std::path::PathBuf;
use std::sync::Arc;

use response_localizer::config::ConfigManager;
use response_localizer::response::LocalizeMode;
use response_localizer::{
    LocalizeResponse,
    PhraseStore,
};
use tokio::io::{
    AsyncReadExt,
    AsyncWriteExt,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // stdout にはレスポンスだけを書くので、ログは stderr へ
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 引数はワークスペースのディレクトリか設定ファイルそのもの
    let target = std::env::args_os()
        .nth(1)
        .map_or_else(std::env::current_dir, |path| Ok(PathBuf::from(path)))?;

    let mut config_manager = ConfigManager::new();
    if target.is_file() {
        config_manager.load_settings_from_file(&target)?;
    } else {
        config_manager.load_settings(Some(target))?;
    }
    let settings = config_manager.get_settings();

    let mut store = if let Some(path) = config_manager.static_data_path() {
        PhraseStore::from_file(&path)?
    } else {
        if settings.mode == LocalizeMode::Static {
            tracing::warn!("No staticDataPath configured; placeholders will not be translated");
        }
        PhraseStore::new()
    };
    if let Some(text) = &settings.missing_phrase_text {
        store = store.with_default_text(text.clone());
    }

    let stage = LocalizeResponse::new(settings.options()).with_localizer(Arc::new(store));

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;

    let body = stage
        .try_respond(async { serde_json::from_str::<serde_json::Value>(&input) })
        .await?;

    let mut output = serde_json::to_vec_pretty(&body)?;
    output.push(b'\n');

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await?;
    stdout.flush().await?;

    Ok(())
}
