//! Data model types for the location graph.
//!
//! Raw types mirror the JSON written by the game data dump (map descriptors
//! and the warp table). Normalized types are what the import pipeline emits:
//! locations and warps carrying synthetic ids, and undirected connections
//! between locations.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ── Raw identifiers ─────────────────────────────────────────────────────────

/// A raw map identifier as it appears in the dump.
///
/// Map descriptors name maps with constants (`"MAP_ROUTE101"`) while some
/// tables use plain numbers. A number never equals a name, even if the name
/// spells the same digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MapId {
    Number(i64),
    Name(String),
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for MapId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for MapId {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<String> for MapId {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

// ── Raw records ─────────────────────────────────────────────────────────────

/// One `map.json` descriptor. Fields the pipeline does not read are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLocation {
    pub id: MapId,
    pub name: String,
    /// Declared map-edge neighbours. `null` in the dump is treated like an
    /// absent list.
    #[serde(default)]
    pub connections: Option<Vec<RawConnection>>,
}

impl RawLocation {
    /// Adjacency entries, empty when none were declared.
    pub fn adjacent(&self) -> &[RawConnection] {
        self.connections.as_deref().unwrap_or_default()
    }
}

/// An adjacency entry inside a map descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawConnection {
    pub map: MapId,
}

/// One row of the warp table (`warpMap.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawWarp {
    pub map_id: MapId,
    pub destination_map: MapId,
    pub is_locked: bool,
}

// ── Normalized records ──────────────────────────────────────────────────────

/// A location with a synthetic id, one per raw map descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(rename = "MapId")]
    pub map_id: MapId,
    pub name: String,
    pub games: BTreeSet<String>,
}

/// A warp point with a synthetic id.
///
/// `origin_id` and `standard_target_id` are `None` when the raw map id did not
/// match any known location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warp {
    pub id: String,
    pub origin: MapId,
    pub origin_id: Option<String>,
    pub standard_target: MapId,
    pub standard_target_id: Option<String>,
    pub is_locked: bool,
}

/// A symmetric adjacency between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(rename = "type")]
    pub connection_type: String,
    /// Location ids in discovery order: the declared neighbour first, then
    /// the declaring location.
    pub nodes: [String; 2],
    pub weight: u32,
}

impl Connection {
    /// The endpoint pair with order removed, for duplicate detection.
    pub fn unordered_key(&self) -> (&str, &str) {
        let [a, b] = &self.nodes;
        if a <= b {
            (a.as_str(), b.as_str())
        } else {
            (b.as_str(), a.as_str())
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
