//! Graph assembly and node-link export.
//!
//! Uses an undirected `petgraph` multigraph with a side index from node id to
//! `NodeIndex`. Parallel edges are kept: a warp edge and a connection edge
//! between the same endpoints coexist, told apart by their `type`.

use std::collections::HashMap;

use hoenn_graph_catalog::{Connection, Location, MapId, Warp};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Edge type for the link between a warp and the location it sits in.
pub const WARP_EDGE_TYPE: &str = "warp";

/// Weight of every warp edge.
pub const WARP_EDGE_WEIGHT: u32 = 1;

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("Warp {warp_id} has no location for origin map {origin}")]
    UnresolvedWarpOrigin { warp_id: String, origin: MapId },
    #[error("Node {0} was added twice")]
    DuplicateNode(String),
    #[error("Edge {edge_type} {source_id} -- {target_id} references unknown node {missing}")]
    UnknownEndpoint {
        edge_type: String,
        source_id: String,
        target_id: String,
        missing: String,
    },
}

/// What to do with a warp whose origin map has no location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedWarpPolicy {
    /// Leave the warp out of the graph (no node, no edge) and report it.
    #[default]
    Skip,
    /// Abort assembly with [`AssembleError::UnresolvedWarpOrigin`].
    Reject,
}

/// A graph node: the full normalized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GraphNode {
    Location(Location),
    Warp(Warp),
}

impl GraphNode {
    pub fn id(&self) -> &str {
        match self {
            Self::Location(location) => &location.id,
            Self::Warp(warp) => &warp.id,
        }
    }
}

/// Attributes carried by every edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    #[serde(rename = "type")]
    pub edge_type: String,
    /// The endpoint pair exactly as passed when the edge was created.
    pub nodes: [String; 2],
    pub weight: u32,
}

impl From<&Connection> for GraphEdge {
    fn from(connection: &Connection) -> Self {
        Self {
            edge_type: connection.connection_type.clone(),
            nodes: connection.nodes.clone(),
            weight: connection.weight,
        }
    }
}

/// Locations and warps joined by warp and connection edges.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    graph: UnGraph<GraphNode, GraphEdge>,
    node_index: HashMap<String, NodeIndex>,
}

impl LocationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Ids must be unique.
    pub fn add_node(&mut self, node: GraphNode) -> Result<NodeIndex, AssembleError> {
        if self.node_index.contains_key(node.id()) {
            return Err(AssembleError::DuplicateNode(node.id().to_string()));
        }
        let id = node.id().to_string();
        let idx = self.graph.add_node(node);
        self.node_index.insert(id, idx);
        Ok(idx)
    }

    /// Add an edge between two existing nodes. Parallel edges are allowed.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        edge: GraphEdge,
    ) -> Result<EdgeIndex, AssembleError> {
        let lookup = |id: &str| {
            self.node_index
                .get(id)
                .copied()
                .ok_or_else(|| AssembleError::UnknownEndpoint {
                    edge_type: edge.edge_type.clone(),
                    source_id: source.to_string(),
                    target_id: target.to_string(),
                    missing: id.to_string(),
                })
        };
        let a = lookup(source)?;
        let b = lookup(target)?;
        Ok(self.graph.add_edge(a, b, edge))
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index.get(id).map(|&idx| &self.graph[idx])
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        match self.node(id)? {
            GraphNode::Location(location) => Some(location),
            GraphNode::Warp(_) => None,
        }
    }

    pub fn warp(&self, id: &str) -> Option<&Warp> {
        match self.node(id)? {
            GraphNode::Warp(warp) => Some(warp),
            GraphNode::Location(_) => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Edges in insertion order as `(source id, target id, attributes)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &GraphEdge)> + '_ {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].id(),
                self.graph[e.target()].id(),
                e.weight(),
            )
        })
    }

    /// All edges joining `a` and `b`, in either direction.
    pub fn edges_between(&self, a: &str, b: &str) -> Vec<&GraphEdge> {
        let (Some(&ia), Some(&ib)) = (self.node_index.get(a), self.node_index.get(b)) else {
            return Vec::new();
        };
        self.graph
            .edges_connecting(ia, ib)
            .map(|e| e.weight())
            .collect()
    }

    /// Ids of nodes adjacent to `id`.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        let mut ids: Vec<&str> = self
            .graph
            .neighbors(idx)
            .map(|n| self.graph[n].id())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// The networkx-compatible node-link representation.
    pub fn to_node_link(&self) -> NodeLinkGraph<'_> {
        NodeLinkGraph {
            directed: false,
            multigraph: true,
            graph: serde_json::Map::new(),
            nodes: self.nodes().collect(),
            links: self
                .edges()
                .map(|(source, target, attrs)| NodeLink {
                    source,
                    target,
                    attrs,
                })
                .collect(),
        }
    }
}

/// Node-link document: `{"directed", "multigraph", "graph", "nodes", "links"}`.
#[derive(Debug, Serialize)]
pub struct NodeLinkGraph<'a> {
    pub directed: bool,
    pub multigraph: bool,
    pub graph: serde_json::Map<String, serde_json::Value>,
    pub nodes: Vec<&'a GraphNode>,
    pub links: Vec<NodeLink<'a>>,
}

#[derive(Debug, Serialize)]
pub struct NodeLink<'a> {
    pub source: &'a str,
    pub target: &'a str,
    #[serde(flatten)]
    pub attrs: &'a GraphEdge,
}

/// Outcome of [`assemble_graph`] beyond the graph itself.
#[derive(Debug, Clone, Default)]
pub struct AssembleReport {
    /// Ids of warps left out because their origin was unresolved.
    pub skipped_warps: Vec<String>,
}

/// Compose locations, warps and connections into one graph.
///
/// Nodes: every location, then every warp with a resolved origin. Edges: one
/// `warp` edge `[originId, warp id]` per assembled warp, then one edge per
/// connection. Warps with an unresolved origin are handled per `policy`.
pub fn assemble_graph(
    locations: &[Location],
    warps: &[Warp],
    connections: &[Connection],
    policy: UnresolvedWarpPolicy,
) -> Result<(LocationGraph, AssembleReport), AssembleError> {
    let mut graph = LocationGraph::new();
    let mut report = AssembleReport::default();

    for location in locations {
        graph.add_node(GraphNode::Location(location.clone()))?;
    }

    for warp in warps {
        let Some(origin_id) = warp.origin_id.as_deref() else {
            if policy == UnresolvedWarpPolicy::Reject {
                return Err(AssembleError::UnresolvedWarpOrigin {
                    warp_id: warp.id.clone(),
                    origin: warp.origin.clone(),
                });
            }
            log::warn!(
                "Skipping warp {}: origin map {} has no location",
                warp.id,
                warp.origin
            );
            report.skipped_warps.push(warp.id.clone());
            continue;
        };

        graph.add_node(GraphNode::Warp(warp.clone()))?;
        graph.add_edge(
            origin_id,
            &warp.id,
            GraphEdge {
                edge_type: WARP_EDGE_TYPE.to_string(),
                nodes: [origin_id.to_string(), warp.id.clone()],
                weight: WARP_EDGE_WEIGHT,
            },
        )?;
    }

    for connection in connections {
        let [a, b] = &connection.nodes;
        graph.add_edge(a, b, GraphEdge::from(connection))?;
    }

    Ok((graph, report))
}

#[cfg(test)]
#[path = "tests/graph_tests.rs"]
mod tests;
