//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hoenn-graph")]
#[command(about = "Build the location graph from a raw map data dump", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Normalize the raw dump and build the location graph
    Build(BuildArgs),

    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `build`.
#[derive(Args, Clone, Debug)]
pub(crate) struct BuildArgs {
    /// Path to the base data directory
    #[arg(long, default_value = "hoenn_data_raw/")]
    pub base_data_path: PathBuf,

    /// Write the normalized locations, warps and connections to simplified_data.json
    #[arg(short = 'l', long)]
    pub log_simplified_data: bool,

    /// Write the graph as node-link JSON to hoenn_base_graph.json
    #[arg(short, long)]
    pub json: bool,

    /// Directory for output files (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Fail instead of skipping warps whose origin map has no location
    #[arg(long)]
    pub reject_unresolved_warps: bool,

    /// Override the synthetic id prefix (e.g., HOE)
    #[arg(long)]
    pub id_prefix: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective pipeline configuration
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with the default configuration
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}
