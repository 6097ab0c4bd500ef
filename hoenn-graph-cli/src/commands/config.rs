use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hoenn_graph_import::PipelineConfig;

use crate::error::CliError;
use crate::settings::{load_pipeline_config, render_settings, save_settings};

/// Show the effective pipeline configuration and where it came from.
pub(crate) fn run_config_show(path: &Path) -> Result<(), CliError> {
    let config = load_pipeline_config(path)?;

    if path.exists() {
        log::info!(
            "Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    for line in render_settings(&config)?.lines() {
        log::info!("{}", line);
    }
    Ok(())
}

pub(crate) fn run_config_path(path: &Path) {
    log::info!("{}", path.display());
}

/// Write the default configuration to the settings file.
pub(crate) fn run_config_init(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    save_settings(path, &PipelineConfig::default())?;
    log::info!(
        "{} Wrote default settings to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    Ok(())
}
