//! Configuration loader for PersonaBio.
//!
//! Reads `config.toml` from the data directory (`~/.personabio/` by default)
//! and deserializes it into [`AppConfig`]. The lenient loader falls back to
//! the built-in script when the file is missing or malformed; the strict
//! loader reports what went wrong.

use std::path::{Path, PathBuf};

use personabio_types::config::AppConfig;
use personabio_types::error::ConfigError;

use crate::paths::CONFIG_FILE_NAME;

/// Path of the config file inside `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Load `{data_dir}/config.toml`, reporting read and parse failures.
///
/// Returns `Ok(None)` when the file does not exist.
pub async fn try_load_app_config(data_dir: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    toml::from_str::<AppConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path,
            message: err.message().to_string(),
        })
}

/// Load `{data_dir}/config.toml`, falling back to defaults.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file cannot be read or parsed, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_app_config(data_dir: &Path) -> AppConfig {
    match try_load_app_config(data_dir).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path(data_dir).display()
            );
            AppConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_app_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_app_config(tmp.path()).await;
        assert_eq!(config.script.questions.len(), 4);
        assert!(try_load_app_config(tmp.path()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn load_app_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            config_path(tmp.path()),
            r#"
[script]
questions = ["Who?", "Why?"]
closing = "Done."
"#,
        )
        .await
        .unwrap();

        let config = load_app_config(tmp.path()).await;
        assert_eq!(config.script.questions, vec!["Who?", "Why?"]);
        assert_eq!(config.script.closing, "Done.");
        assert_eq!(config.script.draft.labels.len(), 4);
    }

    #[tokio::test]
    async fn load_app_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(config_path(tmp.path()), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_app_config(tmp.path()).await;
        assert_eq!(config.script.questions.len(), 4);
    }

    #[tokio::test]
    async fn try_load_app_config_reports_parse_error() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(config_path(tmp.path()), "[script]\nquestions = 3\n")
            .await
            .unwrap();

        let err = try_load_app_config(tmp.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[tokio::test]
    async fn try_load_app_config_reports_read_error() {
        let tmp = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as a string.
        tokio::fs::create_dir(config_path(tmp.path())).await.unwrap();

        let err = try_load_app_config(tmp.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
