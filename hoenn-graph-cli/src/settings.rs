//! Settings file handling.
//!
//! The settings file is `~/.config/hoenn-graph/settings.toml` unless
//! `--config` points elsewhere. Only the `[pipeline]` table is read; other
//! tables are left alone.

use std::path::{Path, PathBuf};

use hoenn_graph_import::PipelineConfig;
use serde::Serialize;

use crate::error::CliError;

/// Canonical path to the settings file: `~/.config/hoenn-graph/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("hoenn-graph").join("settings.toml")
}

/// Resolve the settings file: CLI override first, then the default location.
pub(crate) fn resolve_settings_path(cli_override: Option<PathBuf>) -> PathBuf {
    cli_override.unwrap_or_else(settings_path)
}

/// Load the `[pipeline]` table, falling back to defaults when the file or
/// the table is missing.
pub(crate) fn load_pipeline_config(path: &Path) -> Result<PipelineConfig, CliError> {
    if !path.exists() {
        log::debug!("No settings file at {}; using defaults", path.display());
        return Ok(PipelineConfig::default());
    }
    let contents = std::fs::read_to_string(path)?;
    parse_pipeline_config(&contents)
        .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
}

fn parse_pipeline_config(contents: &str) -> Result<PipelineConfig, toml::de::Error> {
    let doc: toml::Table = toml::from_str(contents)?;
    match doc.get("pipeline") {
        Some(table) => table.clone().try_into(),
        None => Ok(PipelineConfig::default()),
    }
}

#[derive(Serialize)]
struct SettingsFile<'a> {
    pipeline: &'a PipelineConfig,
}

/// Render a configuration the way it is stored on disk.
pub(crate) fn render_settings(config: &PipelineConfig) -> Result<String, CliError> {
    toml::to_string_pretty(&SettingsFile { pipeline: config })
        .map_err(|e| CliError::config(e.to_string()))
}

/// Write `config` as a fresh settings file.
pub(crate) fn save_settings(path: &Path, config: &PipelineConfig) -> Result<(), CliError> {
    let serialized = render_settings(config)?;

    // Write atomically
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}
