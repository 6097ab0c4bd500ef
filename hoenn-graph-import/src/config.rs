//! Pipeline configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::connections::ConnectionPass;
use crate::graph::UnresolvedWarpPolicy;

/// Settings for one pipeline run. Every field has a default, so a partial
/// `[pipeline]` table in `settings.toml` is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Prefix of every synthetic id (`HOE` → `HOE-L-0000`).
    pub id_prefix: String,
    /// Game tags stamped on every location.
    pub games: BTreeSet<String>,
    pub connection_type: String,
    pub connection_weight: u32,
    pub unresolved_warps: UnresolvedWarpPolicy,
    /// Directory of map descriptors, relative to the base data path.
    pub maps_dir: String,
    /// Warp table file, relative to the base data path.
    pub warp_table: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let pass = ConnectionPass::default();
        Self {
            id_prefix: "HOE".to_string(),
            games: BTreeSet::from(["EMRL".to_string()]),
            connection_type: pass.connection_type,
            connection_weight: pass.weight,
            unresolved_warps: UnresolvedWarpPolicy::default(),
            maps_dir: "maps".to_string(),
            warp_table: "warpMap.json".to_string(),
        }
    }
}

impl PipelineConfig {
    /// The single connection pass this configuration runs.
    pub fn connection_pass(&self) -> ConnectionPass {
        ConnectionPass {
            connection_type: self.connection_type.clone(),
            weight: self.connection_weight,
        }
    }
}
