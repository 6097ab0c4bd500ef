//! Turn a raw map dump into a location graph.
//!
//! This crate owns the normalization logic: minting synthetic ids for maps
//! and warps, collapsing duplicate warps and connections, resolving raw map
//! ids, and assembling the final graph.

pub mod config;
pub mod connections;
pub mod graph;
pub mod ids;
pub mod locations;
pub mod pipeline;
pub mod progress;
pub mod warps;

pub use config::PipelineConfig;
pub use connections::{ConnectionPass, NormalizedConnections, normalize_connections};
pub use graph::{
    AssembleError, AssembleReport, GraphEdge, GraphNode, LocationGraph, NodeLink, NodeLinkGraph,
    UnresolvedWarpPolicy, WARP_EDGE_TYPE, WARP_EDGE_WEIGHT, assemble_graph,
};
pub use ids::{IdKind, IdSequence, LocationIndex};
pub use locations::{NormalizedLocations, normalize_locations};
pub use pipeline::{
    PipelineError, PipelineOutput, PipelineStats, SimplifiedData, run_from_dir, run_pipeline,
};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use warps::{deduplicate_warps, normalize_warps};
