//! Generic interactive network page rendered with vis-network.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use super::figure::{script_safe, write_page};
use super::viewer;
use crate::error::Result;
use crate::types::{Attributes, DirectedGraph};

const VIS_NETWORK_JS: &str =
  "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";

#[derive(Debug, Serialize)]
struct VisNode<'a> {
  id: &'a str,
  label: &'a str,
  title: String,
}

#[derive(Debug, Serialize)]
struct VisEdge<'a> {
  from: &'a str,
  to: &'a str,
  arrows: &'static str,
  title: String,
}

#[derive(Debug, Serialize)]
struct VisData<'a> {
  nodes: Vec<VisNode<'a>>,
  edges: Vec<VisEdge<'a>>,
}

/// Hover text: one `name: value` line per attribute.
fn hover_text(attributes: &Attributes) -> String {
  attributes
    .iter()
    .map(|(k, v)| match v {
      Value::String(s) => format!("{k}: {s}"),
      other => format!("{k}: {other}"),
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// vis-network node and edge lists as JSON. Nodes are labelled by key.
pub fn network_json(graph: &DirectedGraph) -> Result<String> {
  let data = VisData {
    nodes: graph
      .nodes()
      .map(|node| VisNode {
        id: &node.key,
        label: &node.key,
        title: hover_text(&node.attributes),
      })
      .collect(),
    edges: graph
      .edges()
      .map(|edge| VisEdge {
        from: edge.source,
        to: edge.target,
        arrows: "to",
        title: hover_text(edge.attributes),
      })
      .collect(),
  };
  Ok(serde_json::to_string(&data)?)
}

/// Standalone page drawing `graph` with physics enabled.
pub fn network_html(graph: &DirectedGraph) -> Result<String> {
  let data = script_safe(&network_json(graph)?);
  let title = graph.name().unwrap_or("graph");
  Ok(format!(
    r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{VIS_NETWORK_JS}"></script>
<style>#network {{ width: 100%; height: 95vh; border: 1px solid lightgray; }}</style>
</head>
<body>
<div id="network"></div>
<script>
const data = {data};
const network = new vis.Network(
  document.getElementById("network"),
  {{ nodes: new vis.DataSet(data.nodes), edges: new vis.DataSet(data.edges) }},
  {{ physics: {{ enabled: true }} }}
);
</script>
</body>
</html>
"#,
    title = title.replace('<', "&lt;"),
  ))
}

pub fn write_network_html(graph: &DirectedGraph, path: &Path) -> Result<()> {
  write_page(path, &network_html(graph)?)
}

/// Writes the network page to the temp directory and opens it.
#[instrument(level = "trace", skip(graph))]
pub fn plot_graph_simple(graph: &DirectedGraph) -> Result<PathBuf> {
  let path = viewer::temp_page_path("network");
  write_network_html(graph, &path)?;
  viewer::open(&path)?;
  Ok(path)
}
