//! Tests for the witness figure.

use serde_json::json;

use super::figure::MarkerSize;
use super::witness::{WITNESS_TITLE, witness_figure};
use crate::types::{Attributes, DirectedGraph};

fn attrs(value: serde_json::Value) -> Attributes {
  match value {
    serde_json::Value::Object(map) => map,
    _ => panic!("expected object"),
  }
}

fn witness_graph() -> DirectedGraph {
  let mut g = DirectedGraph::new(Some("hex".to_string()));
  g.add_node(
    "A",
    attrs(json!({"address": "A", "name": "big-maroon-ant", "coordinates": [-79.9, 40.4]})),
  );
  g.add_node(
    "B",
    attrs(json!({"address": "B", "geo_location": {"type": "Point", "coordinates": [-80.0, 40.5]}})),
  );
  g.add_node(
    "C",
    attrs(json!({"address": "C", "name": "tiny-red-fox", "coordinates": [-80.1, 40.6]})),
  );
  g.add_edge("A", "B", Attributes::new());
  g.add_edge("A", "C", Attributes::new());
  g.add_edge("C", "A", Attributes::new());
  g
}

#[test]
fn nodes_sit_at_their_coordinates() {
  let fig = witness_figure(&witness_graph()).unwrap();
  let nodes = fig.node_trace().unwrap();
  assert_eq!(nodes.x, vec![Some(-79.9), Some(-80.0), Some(-80.1)]);
  assert_eq!(nodes.y, vec![Some(40.4), Some(40.5), Some(40.6)]);
}

#[test]
fn colour_counts_outgoing_links() {
  let fig = witness_figure(&witness_graph()).unwrap();
  let marker = fig.node_trace().unwrap().marker.as_ref().unwrap();
  assert_eq!(marker.color, vec![Some(2.0), Some(0.0), Some(1.0)]);
  assert_eq!(marker.size, MarkerSize::Uniform(10.0));
  assert_eq!(marker.colorbar.title.text, "Node Connections");
}

#[test]
fn hover_text_is_name_or_key() {
  let fig = witness_figure(&witness_graph()).unwrap();
  assert_eq!(
    fig.node_trace().unwrap().text,
    vec!["big-maroon-ant", "B", "tiny-red-fox"]
  );
}

#[test]
fn one_segment_per_arc() {
  let fig = witness_figure(&witness_graph()).unwrap();
  assert_eq!(fig.title(), WITNESS_TITLE);
  let edges = &fig.data[0];
  assert_eq!(edges.x.len(), 9);
  assert_eq!(edges.x[0..3], [Some(-79.9), Some(-80.0), None]);
}

#[test]
fn missing_coordinates_fail() {
  let mut g = witness_graph();
  g.add_edge("C", "ghost", Attributes::new());
  assert!(witness_figure(&g).is_err());
}
