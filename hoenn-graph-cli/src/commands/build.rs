use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hoenn_graph_catalog::write_json_pretty;
use hoenn_graph_import::{
    LogProgress, PipelineConfig, PipelineStats, UnresolvedWarpPolicy, run_from_dir,
};

use crate::cli_types::BuildArgs;
use crate::error::CliError;

/// Output file for the normalized collections.
pub(crate) const SIMPLIFIED_DATA_FILE: &str = "simplified_data.json";

/// Output file for the node-link graph.
pub(crate) const GRAPH_FILE: &str = "hoenn_base_graph.json";

/// Apply command-line overrides on top of the settings file.
pub(crate) fn effective_config(mut config: PipelineConfig, args: &BuildArgs) -> PipelineConfig {
    if args.reject_unresolved_warps {
        config.unresolved_warps = UnresolvedWarpPolicy::Reject;
    }
    if let Some(ref prefix) = args.id_prefix {
        config.id_prefix = prefix.clone();
    }
    config
}

/// Run the pipeline and write the requested outputs.
///
/// Nothing is written unless every stage succeeds.
pub(crate) fn run_build(args: BuildArgs, config: PipelineConfig) -> Result<(), CliError> {
    let config = effective_config(config, &args);
    log::debug!("Pipeline config: {:?}", config);

    let output = run_from_dir(&args.base_data_path, &config, &LogProgress)?;

    if args.log_simplified_data || args.json {
        std::fs::create_dir_all(&args.out_dir)?;
    }

    if args.log_simplified_data {
        let path = args.out_dir.join(SIMPLIFIED_DATA_FILE);
        log::info!("Logging simplified data to {}...", path.display());
        write_json_pretty(&path, &output.simplified)?;
    }

    if args.json {
        let path = args.out_dir.join(GRAPH_FILE);
        log::info!("Exporting graph data...");
        write_json_pretty(&path, &output.graph.to_node_link())?;
        log::info!(
            "Graph data exported as {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    print_summary(&output.stats);
    Ok(())
}

fn print_summary(stats: &PipelineStats) {
    log::info!("");
    log::info!("{}", "Summary".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  Locations:   {}",
        stats.raw_locations.if_supports_color(Stdout, |t| t.green()),
    );
    log::info!(
        "  Warps:       {} ({} duplicate rows dropped, {} unresolved origins, {} unresolved targets)",
        stats.warps.if_supports_color(Stdout, |t| t.green()),
        stats.duplicate_warps,
        stats.unresolved_warp_origins,
        stats.unresolved_warp_targets,
    );
    log::info!(
        "  Connections: {} ({} candidates, {} duplicates, {} unresolved)",
        stats.connections.if_supports_color(Stdout, |t| t.green()),
        stats.connection_candidates,
        stats.duplicate_connections,
        stats.unresolved_connections,
    );
    log::info!(
        "  Graph:       {} nodes, {} edges",
        stats.graph_nodes.if_supports_color(Stdout, |t| t.bold()),
        stats.graph_edges.if_supports_color(Stdout, |t| t.bold()),
    );
    if stats.skipped_warps > 0 {
        log::warn!(
            "  {} {} warps left out of the graph (origin map has no location)",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            stats.skipped_warps,
        );
    }
}
