//! One-shot pipeline: raw dump → normalized records → graph.
//!
//! Every stage runs to completion before the next starts, and any failure
//! aborts the run without producing a graph.

use std::path::Path;

use hoenn_graph_catalog::{
    CatalogError, Connection, Location, RawLocation, RawWarp, Warp, load_raw_locations,
    load_warp_table,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::PipelineConfig;
use crate::connections::normalize_connections;
use crate::graph::{AssembleError, LocationGraph, assemble_graph};
use crate::locations::normalize_locations;
use crate::progress::ImportProgress;
use crate::warps::{deduplicate_warps, normalize_warps};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Loading map descriptors failed: {0}")]
    LoadLocations(#[source] CatalogError),
    #[error("Loading warp table failed: {0}")]
    LoadWarps(#[source] CatalogError),
    #[error("Graph assembly failed: {0}")]
    Assemble(#[from] AssembleError),
}

/// Counters for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineStats {
    pub raw_locations: usize,
    pub raw_warps: usize,
    pub duplicate_warps: usize,
    pub warps: usize,
    pub unresolved_warp_origins: usize,
    pub unresolved_warp_targets: usize,
    pub connection_candidates: usize,
    pub unresolved_connections: usize,
    pub duplicate_connections: usize,
    pub connections: usize,
    pub skipped_warps: usize,
    pub graph_nodes: usize,
    pub graph_edges: usize,
}

/// The three normalized collections, as dumped for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimplifiedData {
    pub locations: Vec<Location>,
    pub warps: Vec<Warp>,
    pub connections: Vec<Connection>,
}

#[derive(Debug)]
pub struct PipelineOutput {
    pub simplified: SimplifiedData,
    pub graph: LocationGraph,
    pub stats: PipelineStats,
}

/// Load the dump below `base_data_path` and run the pipeline over it.
pub fn run_from_dir(
    base_data_path: &Path,
    config: &PipelineConfig,
    progress: &dyn ImportProgress,
) -> Result<PipelineOutput, PipelineError> {
    progress.on_phase("Importing raw location data...");
    let raw_locations = load_raw_locations(&base_data_path.join(&config.maps_dir))
        .map_err(PipelineError::LoadLocations)?;
    let raw_warps = load_warp_table(&base_data_path.join(&config.warp_table))
        .map_err(PipelineError::LoadWarps)?;

    run_pipeline(&raw_locations, &raw_warps, config, progress)
}

/// Normalize raw records and assemble the graph.
pub fn run_pipeline(
    raw_locations: &[RawLocation],
    raw_warps: &[RawWarp],
    config: &PipelineConfig,
    progress: &dyn ImportProgress,
) -> Result<PipelineOutput, PipelineError> {
    let mut stats = PipelineStats {
        raw_locations: raw_locations.len(),
        raw_warps: raw_warps.len(),
        ..Default::default()
    };

    progress.on_phase("Importing simplified location data...");
    let normalized = normalize_locations(raw_locations, &config.id_prefix, &config.games);
    progress.on_count("locations", normalized.locations.len());

    progress.on_phase("Importing deduped and simplified warp data...");
    let unique_warps = deduplicate_warps(raw_warps);
    stats.duplicate_warps = raw_warps.len() - unique_warps.len();
    let warps = normalize_warps(&unique_warps, &normalized.index, &config.id_prefix);
    stats.warps = warps.len();
    stats.unresolved_warp_origins = warps.iter().filter(|w| w.origin_id.is_none()).count();
    stats.unresolved_warp_targets = warps
        .iter()
        .filter(|w| w.standard_target_id.is_none())
        .count();
    progress.on_count("warps", warps.len());

    progress.on_phase("Importing connection data...");
    let connections = normalize_connections(
        raw_locations,
        &normalized.index,
        &config.connection_pass(),
    );
    stats.connection_candidates = connections.candidates;
    stats.unresolved_connections = connections.unresolved;
    stats.duplicate_connections = connections.duplicates;
    stats.connections = connections.connections.len();
    progress.on_count("connections", connections.connections.len());

    progress.on_phase("Generating graph...");
    let (graph, report) = assemble_graph(
        &normalized.locations,
        &warps,
        &connections.connections,
        config.unresolved_warps,
    )?;
    stats.skipped_warps = report.skipped_warps.len();
    stats.graph_nodes = graph.node_count();
    stats.graph_edges = graph.edge_count();
    progress.on_complete("Graph initialization complete.");

    Ok(PipelineOutput {
        simplified: SimplifiedData {
            locations: normalized.locations,
            warps,
            connections: connections.connections,
        },
        graph,
        stats,
    })
}
