//! Graph adapter: node/edge record lists → [`DirectedGraph`].

use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::types::{DirectedGraph, EdgeRecord, NodeRecord};

/// Builds a directed graph from node and edge records.
///
/// Each node is keyed by its identifier and carries the record as received; a repeated
/// key replaces the earlier attribute set. Each edge becomes an arc `source → target` carrying
/// the whole record; a repeated ordered pair keeps only the last record. Edge endpoints are not
/// checked against the node list.
#[instrument(level = "trace", skip(nodes, edges))]
pub fn build_graph<N, E>(nodes: &[N], edges: &[E], name: Option<&str>) -> Result<DirectedGraph>
where
  N: NodeRecord,
  E: EdgeRecord,
{
  let mut graph = DirectedGraph::new(name.map(String::from));
  for node in nodes {
    let key = node
      .node_key()
      .ok_or(Error::MissingKey { field: "address" })?
      .to_string();
    graph.add_node(key, node.node_attributes());
  }
  for edge in edges {
    let source = edge.source().ok_or(Error::MissingKey { field: "_from" })?;
    let target = edge.target().ok_or(Error::MissingKey { field: "_to" })?;
    graph.add_edge(source, target, edge.edge_attributes());
  }
  debug!(
    nodes = graph.node_count(),
    edges = graph.edge_count(),
    "built graph"
  );
  Ok(graph)
}
