//! hoenn-graph CLI
//!
//! Command-line interface for turning a raw map data dump into the base
//! location graph.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands, ConfigAction};
use commands::build::run_build;
use commands::config::{run_config_init, run_config_path, run_config_show};
use error::CliError;
use settings::{load_pipeline_config, resolve_settings_path};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = resolve_settings_path(cli.config);

    match cli.command {
        Commands::Build(args) => {
            let config = load_pipeline_config(&settings)?;
            run_build(args, config)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(&settings),
            ConfigAction::Path => {
                run_config_path(&settings);
                Ok(())
            }
            ConfigAction::Init { force } => run_config_init(&settings, force),
        },
    }
}

/// Plain messages by default; level and timestamp prefixes with `--verbose`.
/// `RUST_LOG` overrides the level chosen by the flags.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.parse_default_env();
    builder.init();
}
