//! `{ "nodes": [...], "edges": [...] }` bodies returned by the graph endpoints.

use serde::{Deserialize, Serialize};

use super::{
  Account, DirectedGraph, EdgeIdentity, Hotspot, NodeIdentity, PaymentEdge, Received, WitnessEdge,
};
use crate::adapters::build_graph;
use crate::error::Result;

/// Parallel node and edge lists, consumed positionally by the adapter.
///
/// Each record keeps the object it was decoded from; those objects become the graph attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
  deserialize = "N: serde::de::DeserializeOwned, E: serde::de::DeserializeOwned",
  serialize = ""
))]
pub struct GraphResponse<N, E> {
  pub nodes: Vec<Received<N>>,
  pub edges: Vec<Received<E>>,
}

/// Hotspots plus witness edges.
pub type WitnessGraph = GraphResponse<Hotspot, WitnessEdge>;
/// Accounts plus payment edges.
pub type PaymentGraph = GraphResponse<Account, PaymentEdge>;

impl<N: NodeIdentity, E: EdgeIdentity> GraphResponse<N, E> {
  /// Builds a [`DirectedGraph`] from the node and edge lists.
  pub fn to_graph(&self, name: Option<&str>) -> Result<DirectedGraph> {
    build_graph(&self.nodes, &self.edges, name)
  }
}
