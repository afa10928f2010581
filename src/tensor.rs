//! Tensor projection: a [`DirectedGraph`] as dense feature matrices plus a sparse adjacency.
//!
//! Requested attributes are read in node/edge iteration order, so row `k` of `e` is the arc in
//! column `k` of [`SparseAdjacency::edge_index`]. Values that are not plain numbers
//! (strings, booleans, null, arrays, objects) become 0.0; an absent attribute is an error.

use ndarray::{Array1, Array2};
use tracing::{debug, instrument};

use crate::adapters::build_graph;
use crate::error::{Error, Result};
use crate::types::{Attributes, DirectedGraph, EdgeRecord, NodeRecord, numeric_or_zero};

/// Square adjacency matrix in compressed sparse row form.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseAdjacency {
  n: usize,
  indptr: Vec<usize>,
  indices: Vec<usize>,
  data: Vec<f64>,
}

impl SparseAdjacency {
  /// Builds an `n × n` matrix with 1.0 at every `(row, col)` arc.
  ///
  /// Duplicate arcs are stored once. Column indices are sorted within each row.
  pub fn from_arcs(n: usize, arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
    let mut arcs: Vec<(usize, usize)> = arcs
      .into_iter()
      .filter(|&(row, col)| row < n && col < n)
      .collect();
    arcs.sort_unstable();
    arcs.dedup();

    let mut indptr = vec![0usize; n + 1];
    for &(row, _) in &arcs {
      indptr[row + 1] += 1;
    }
    for i in 0..n {
      indptr[i + 1] += indptr[i];
    }
    let indices: Vec<usize> = arcs.iter().map(|&(_, col)| col).collect();
    let data = vec![1.0; indices.len()];
    Self {
      n,
      indptr,
      indices,
      data,
    }
  }

  pub fn shape(&self) -> (usize, usize) {
    (self.n, self.n)
  }

  /// Number of stored entries.
  pub fn nnz(&self) -> usize {
    self.indices.len()
  }

  pub fn indptr(&self) -> &[usize] {
    &self.indptr
  }

  pub fn indices(&self) -> &[usize] {
    &self.indices
  }

  pub fn data(&self) -> &[f64] {
    &self.data
  }

  /// Column indices of the non-zero entries in `row`.
  pub fn row(&self, row: usize) -> &[usize] {
    if row >= self.n {
      return &[];
    }
    &self.indices[self.indptr[row]..self.indptr[row + 1]]
  }

  pub fn get(&self, row: usize, col: usize) -> f64 {
    if row >= self.n {
      return 0.0;
    }
    let start = self.indptr[row];
    match self.row(row).binary_search(&col) {
      Ok(pos) => self.data[start + pos],
      Err(_) => 0.0,
    }
  }

  /// Coordinate form: row 0 holds sources, row 1 targets.
  pub fn edge_index(&self) -> Array2<usize> {
    let mut out = Array2::zeros((2, self.nnz()));
    let mut k = 0;
    for row in 0..self.n {
      for &col in self.row(row) {
        out[[0, k]] = row;
        out[[1, k]] = col;
        k += 1;
      }
    }
    out
  }

  pub fn to_dense(&self) -> Array2<f64> {
    let mut out = Array2::zeros((self.n, self.n));
    for row in 0..self.n {
      let start = self.indptr[row];
      for (offset, &col) in self.row(row).iter().enumerate() {
        out[[row, col]] = self.data[start + offset];
      }
    }
    out
  }
}

/// Node features `x`, adjacency `a`, edge features `e` and optional node targets `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorGraph {
  pub x: Array2<f64>,
  pub a: SparseAdjacency,
  pub e: Array2<f64>,
  pub y: Option<Array1<f64>>,
}

impl TensorGraph {
  pub fn num_nodes(&self) -> usize {
    self.x.nrows()
  }

  pub fn num_edges(&self) -> usize {
    self.e.nrows()
  }

  pub fn num_node_features(&self) -> usize {
    self.x.ncols()
  }

  pub fn num_edge_features(&self) -> usize {
    self.e.ncols()
  }
}

/// Which attributes become features, and which node attribute (if any) becomes the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TensorProjection {
  pub node_attrs: Vec<String>,
  pub edge_attrs: Vec<String>,
  pub target: Option<String>,
}

impl TensorProjection {
  pub fn new<N, E>(node_attrs: N, edge_attrs: E) -> Self
  where
    N: IntoIterator,
    N::Item: Into<String>,
    E: IntoIterator,
    E::Item: Into<String>,
  {
    Self {
      node_attrs: node_attrs.into_iter().map(Into::into).collect(),
      edge_attrs: edge_attrs.into_iter().map(Into::into).collect(),
      target: None,
    }
  }

  pub fn with_target(mut self, target: impl Into<String>) -> Self {
    self.target = Some(target.into());
    self
  }

  /// Projects `graph`. The graph is only read.
  #[instrument(level = "trace", skip(self, graph))]
  pub fn project(&self, graph: &DirectedGraph) -> Result<TensorGraph> {
    let x = node_features(graph, &self.node_attrs)?;
    let e = edge_features(graph, &self.edge_attrs)?;
    let a = SparseAdjacency::from_arcs(graph.node_count(), graph.arcs());
    let y = match &self.target {
      Some(target) => {
        let column = node_features(graph, std::slice::from_ref(target))?;
        Some(column.column(0).to_owned())
      }
      None => None,
    };
    debug!(
      nodes = x.nrows(),
      edges = e.nrows(),
      node_features = x.ncols(),
      edge_features = e.ncols(),
      "projected graph"
    );
    Ok(TensorGraph { x, a, e, y })
  }
}

fn node_features<S: AsRef<str>>(graph: &DirectedGraph, attrs: &[S]) -> Result<Array2<f64>> {
  let mut x = Array2::zeros((graph.node_count(), attrs.len()));
  for (i, node) in graph.nodes().enumerate() {
    for (j, attr) in attrs.iter().enumerate() {
      let attr = attr.as_ref();
      x[[i, j]] = feature(&node.attributes, attr)
        .ok_or_else(|| Error::missing_node_attribute(&node.key, attr))?;
    }
  }
  Ok(x)
}

fn edge_features<S: AsRef<str>>(graph: &DirectedGraph, attrs: &[S]) -> Result<Array2<f64>> {
  let mut e = Array2::zeros((graph.edge_count(), attrs.len()));
  for (i, edge) in graph.edges().enumerate() {
    for (j, attr) in attrs.iter().enumerate() {
      let attr = attr.as_ref();
      e[[i, j]] = feature(edge.attributes, attr)
        .ok_or_else(|| Error::missing_edge_attribute(edge.source, edge.target, attr))?;
    }
  }
  Ok(e)
}

fn feature(attributes: &Attributes, attr: &str) -> Option<f64> {
  attributes.get(attr).map(numeric_or_zero)
}

/// Projects `graph` onto the named node and edge attributes, without a target.
pub fn to_tensor_graph(
  graph: &DirectedGraph,
  node_attrs: &[&str],
  edge_attrs: &[&str],
) -> Result<TensorGraph> {
  TensorProjection::new(node_attrs.iter().copied(), edge_attrs.iter().copied()).project(graph)
}

/// Builds a graph from raw records and projects it in one step.
pub fn make_tensor_graph<N, E>(
  nodes: &[N],
  edges: &[E],
  projection: &TensorProjection,
) -> Result<TensorGraph>
where
  N: NodeRecord,
  E: EdgeRecord,
{
  let graph = build_graph(nodes, edges, None)?;
  projection.project(&graph)
}
