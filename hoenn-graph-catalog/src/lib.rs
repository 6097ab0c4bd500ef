//! Location graph data model and JSON I/O.
//!
//! This crate defines the raw records read from a game data dump (map
//! descriptors and the warp table) and the normalized records produced by
//! `hoenn-graph-import`, together with the file loading and writing helpers
//! used by the CLI.

pub mod json;
pub mod types;

pub use json::{CatalogError, load_raw_locations, load_warp_table, write_json_pretty};
pub use types::*;
