//! Witness topology figure: hotspots at their coordinates, coloured by outgoing witness links.

use std::path::PathBuf;

use serde_json::Value;
use tracing::instrument;

use super::figure::{Figure, Marker, PlotLayout, ScatterTrace};
use super::layout::coordinate_layout;
use crate::error::Result;
use crate::types::DirectedGraph;

pub const WITNESS_TITLE: &str = "<br>Hotspot Witness Graph";

/// Builds the witness figure. Every node needs coordinates.
#[instrument(level = "trace", skip(graph))]
pub fn witness_figure(graph: &DirectedGraph) -> Result<Figure> {
  let positions = coordinate_layout(graph)?;
  let edges = ScatterTrace::edges(graph, &positions);

  let mut marker = Marker::scaled("Node Connections");
  marker.color = graph
    .nodes()
    .map(|node| Some(graph.out_degree(&node.key) as f64))
    .collect();
  let text = graph
    .nodes()
    .map(|node| {
      node
        .attributes
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(&node.key)
        .to_string()
    })
    .collect();
  let nodes = ScatterTrace::nodes(&positions, text, marker);

  Ok(Figure {
    data: vec![edges, nodes],
    layout: PlotLayout::network(WITNESS_TITLE),
  })
}

/// Builds the witness figure and opens it.
pub fn plot_witness_graph(graph: &DirectedGraph) -> Result<PathBuf> {
  witness_figure(graph)?.show()
}
