//! Directed graph of attributed nodes keyed by address.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;

use super::Attributes;
use crate::error::{Error, Result};

/// A node: its key plus every attribute of the record it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
  pub key: String,
  pub attributes: Attributes,
}

/// Borrowed view of one arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeView<'a> {
  pub source: &'a str,
  pub target: &'a str,
  pub attributes: &'a Attributes,
}

/// Which entity set [`DirectedGraph::set_attribute_from_existing`] works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeTarget {
  Nodes,
  Edges,
}

/// Simple directed graph: at most one arc per ordered `(source, target)` pair.
///
/// Nodes iterate in first-insertion order. Arcs are grouped by source in node order, then by
/// target position, which is also the row-major order of the adjacency matrix. Re-inserting a
/// node key or an ordered pair replaces its attributes in place.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
  name: Option<String>,
  graph: DiGraph<GraphNode, Attributes>,
  index: HashMap<String, NodeIndex>,
}

impl DirectedGraph {
  pub fn new(name: Option<String>) -> Self {
    Self {
      name,
      graph: DiGraph::new(),
      index: HashMap::new(),
    }
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  pub fn node_count(&self) -> usize {
    self.graph.node_count()
  }

  pub fn edge_count(&self) -> usize {
    self.graph.edge_count()
  }

  pub fn contains_node(&self, key: &str) -> bool {
    self.index.contains_key(key)
  }

  /// Inserts a node, or replaces the attributes of an existing one.
  pub fn add_node(&mut self, key: impl Into<String>, attributes: Attributes) {
    let key = key.into();
    match self.index.get(&key) {
      Some(&idx) => self.graph[idx].attributes = attributes,
      None => {
        let idx = self.graph.add_node(GraphNode {
          key: key.clone(),
          attributes,
        });
        self.index.insert(key, idx);
      }
    }
  }

  /// Inserts an arc, or replaces the attributes of the existing `(source, target)` arc.
  ///
  /// Unknown endpoints become bare nodes with no attributes.
  pub fn add_edge(&mut self, source: &str, target: &str, attributes: Attributes) {
    let a = self.ensure_node(source);
    let b = self.ensure_node(target);
    self.graph.update_edge(a, b, attributes);
  }

  fn ensure_node(&mut self, key: &str) -> NodeIndex {
    if let Some(&idx) = self.index.get(key) {
      return idx;
    }
    let idx = self.graph.add_node(GraphNode {
      key: key.to_string(),
      attributes: Attributes::new(),
    });
    self.index.insert(key.to_string(), idx);
    idx
  }

  pub fn node(&self, key: &str) -> Option<&Attributes> {
    self.index.get(key).map(|&idx| &self.graph[idx].attributes)
  }

  pub fn edge(&self, source: &str, target: &str) -> Option<&Attributes> {
    let a = *self.index.get(source)?;
    let b = *self.index.get(target)?;
    self.graph.find_edge(a, b).map(|e| &self.graph[e])
  }

  /// Position of a node in iteration order.
  pub fn position(&self, key: &str) -> Option<usize> {
    self.index.get(key).map(|idx| idx.index())
  }

  /// Nodes in insertion order.
  pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
    self.graph.node_indices().map(move |idx| &self.graph[idx])
  }

  /// Arcs ordered by `(source position, target position)`.
  pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> + '_ {
    self
      .sorted_edge_refs()
      .into_iter()
      .map(move |e| self.view(e))
  }

  /// `(source position, target position)` for every arc, in arc order.
  pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    self
      .sorted_edge_refs()
      .into_iter()
      .map(|e| (e.source().index(), e.target().index()))
  }

  fn sorted_edge_refs(&self) -> Vec<EdgeReference<'_, Attributes>> {
    let mut refs: Vec<_> = self.graph.edge_references().collect();
    refs.sort_by_key(|e| (e.source().index(), e.target().index()));
    refs
  }

  /// Number of distinct successors.
  pub fn out_degree(&self, key: &str) -> usize {
    self
      .index
      .get(key)
      .map(|&idx| {
        self
          .graph
          .neighbors_directed(idx, Direction::Outgoing)
          .count()
      })
      .unwrap_or(0)
  }

  pub fn out_edges(&self, key: &str) -> Vec<EdgeView<'_>> {
    self.edges_directed(key, Direction::Outgoing)
  }

  pub fn in_edges(&self, key: &str) -> Vec<EdgeView<'_>> {
    self.edges_directed(key, Direction::Incoming)
  }

  fn edges_directed(&self, key: &str, direction: Direction) -> Vec<EdgeView<'_>> {
    let Some(&idx) = self.index.get(key) else {
      return Vec::new();
    };
    let mut edges: Vec<_> = self
      .graph
      .edges_directed(idx, direction)
      .map(|e| (e.id(), self.view(e)))
      .collect();
    // petgraph walks adjacency lists newest-first
    edges.sort_by_key(|(id, _)| *id);
    edges.into_iter().map(|(_, view)| view).collect()
  }

  fn view<'a>(&'a self, e: EdgeReference<'a, Attributes>) -> EdgeView<'a> {
    EdgeView {
      source: &self.graph[e.source()].key,
      target: &self.graph[e.target()].key,
      attributes: e.weight(),
    }
  }

  /// Copies `in_attr` to a new attribute `out_attr` on every node or every edge.
  ///
  /// Fails without modifying the graph if any entity lacks `in_attr`.
  pub fn set_attribute_from_existing(
    &mut self,
    in_attr: &str,
    out_attr: &str,
    target: AttributeTarget,
  ) -> Result<()> {
    match target {
      AttributeTarget::Nodes => {
        let mut values = Vec::with_capacity(self.graph.node_count());
        for idx in self.graph.node_indices() {
          let node = &self.graph[idx];
          let value = node
            .attributes
            .get(in_attr)
            .ok_or_else(|| Error::missing_node_attribute(&node.key, in_attr))?;
          values.push((idx, value.clone()));
        }
        for (idx, value) in values {
          self.graph[idx]
            .attributes
            .insert(out_attr.to_string(), value);
        }
      }
      AttributeTarget::Edges => {
        let mut values = Vec::with_capacity(self.graph.edge_count());
        for e in self.sorted_edge_refs() {
          let value = e.weight().get(in_attr).ok_or_else(|| {
            Error::missing_edge_attribute(
              &self.graph[e.source()].key,
              &self.graph[e.target()].key,
              in_attr,
            )
          })?;
          values.push((e.id(), value.clone()));
        }
        for (id, value) in values {
          self.graph[id].insert(out_attr.to_string(), value);
        }
      }
    }
    Ok(())
  }
}
