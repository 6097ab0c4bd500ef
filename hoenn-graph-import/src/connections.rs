//! Static map-to-map connections from descriptor adjacency lists.
//!
//! Adjacency is normally declared from both sides (Route 101 lists Littleroot
//! Town and Littleroot Town lists Route 101). Each pass collapses those
//! declarations into a single undirected connection.

use std::collections::HashSet;

use hoenn_graph_catalog::{Connection, RawLocation};

use crate::ids::LocationIndex;

/// Connection kind and edge weight applied to every connection of one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPass {
    pub connection_type: String,
    pub weight: u32,
}

impl Default for ConnectionPass {
    fn default() -> Self {
        Self {
            connection_type: "static".to_string(),
            weight: 1,
        }
    }
}

/// Result of one connection pass.
#[derive(Debug, Clone, Default)]
pub struct NormalizedConnections {
    pub connections: Vec<Connection>,
    /// Adjacency entries examined.
    pub candidates: usize,
    /// Candidates dropped because an endpoint had no location.
    pub unresolved: usize,
    /// Candidates dropped because their unordered pair was already kept.
    pub duplicates: usize,
}

/// Build one connection per unordered pair of adjacent locations.
///
/// Candidates are visited descriptor by descriptor, adjacency entry by
/// adjacency entry. A candidate's nodes are `[neighbour, declaring
/// location]`. It is dropped if either end is unresolved, or if a connection
/// with the same two ends (in either order) was kept earlier.
pub fn normalize_connections(
    raw_locations: &[RawLocation],
    index: &LocationIndex,
    pass: &ConnectionPass,
) -> NormalizedConnections {
    let mut result = NormalizedConnections::default();
    let mut kept: HashSet<(String, String)> = HashSet::new();

    for raw in raw_locations {
        let own = index.resolve(&raw.id);
        for adjacency in raw.adjacent() {
            result.candidates += 1;

            let (Some(neighbour), Some(own)) = (index.resolve(&adjacency.map), own) else {
                log::debug!(
                    "Dropping {} connection {} -> {}: unresolved endpoint",
                    pass.connection_type,
                    raw.id,
                    adjacency.map
                );
                result.unresolved += 1;
                continue;
            };

            let connection = Connection {
                connection_type: pass.connection_type.clone(),
                nodes: [neighbour.to_string(), own.to_string()],
                weight: pass.weight,
            };
            let (a, b) = connection.unordered_key();
            if !kept.insert((a.to_string(), b.to_string())) {
                result.duplicates += 1;
                continue;
            }
            result.connections.push(connection);
        }
    }

    result
}
