//! Application state shared by every `pbio` command.

use std::path::PathBuf;

use anyhow::Context;

use personabio_core::dashboard::Dashboard;
use personabio_core::interview::script::InterviewScript;
use personabio_core::interview::session::InterviewSession;
use personabio_infra::config::load_app_config;
use personabio_infra::paths::resolve_data_dir;
use personabio_types::config::AppConfig;

/// Loaded configuration plus the validated script built from it.
pub struct AppState {
    pub data_dir: PathBuf,
    pub config: AppConfig,
    pub script: InterviewScript,
}

impl AppState {
    /// Resolve the data directory, load `config.toml`, and validate the script.
    pub async fn init(data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir(data_dir);
        let config = load_app_config(&data_dir).await;
        Self::from_config(data_dir, config)
    }

    pub fn from_config(data_dir: PathBuf, config: AppConfig) -> anyhow::Result<Self> {
        let script = InterviewScript::from_config(&config.script)
            .context("Invalid interview script in config.toml")?;
        Ok(Self {
            data_dir,
            config,
            script,
        })
    }

    /// A fresh interview session over the configured script.
    pub fn new_session(&self) -> InterviewSession {
        InterviewSession::new(self.script.clone())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::from_config(&self.config.dashboard)
    }
}
