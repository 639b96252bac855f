//! `pbio config`: validate and print the effective configuration.

use anyhow::Context;
use console::style;

use personabio_core::interview::script::InterviewScript;
use personabio_infra::config::{config_path, try_load_app_config};

use crate::state::AppState;

/// Strictly re-read `config.toml` so parse errors surface instead of
/// silently falling back to defaults.
pub async fn check_config(state: &AppState, json: bool) -> anyhow::Result<()> {
    let path = config_path(&state.data_dir);
    let loaded = try_load_app_config(&state.data_dir)
        .await
        .context("config.toml is not usable")?;
    let source = if loaded.is_some() { "file" } else { "defaults" };
    let config = loaded.unwrap_or_default();
    InterviewScript::from_config(&config.script).context("Invalid interview script")?;

    if json {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "source": source,
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("✓").green().bold(), style("Configuration is valid").bold());
    println!("  {}  {}", style("Path:").bold(), style(path.display()).dim());
    println!("  {}  {}", style("Source:").bold(), source);
    println!(
        "  {}  {}",
        style("Questions:").bold(),
        config.script.questions.len()
    );
    println!(
        "  {}  {}",
        style("Chapters:").bold(),
        config.dashboard.chapters.len()
    );
    println!();
    Ok(())
}
