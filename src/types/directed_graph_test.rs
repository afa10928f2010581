//! Tests for `DirectedGraph`.

use serde_json::json;

use super::{AttributeTarget, Attributes, DirectedGraph};
use crate::error::Error;

fn attrs(value: serde_json::Value) -> Attributes {
  match value {
    serde_json::Value::Object(map) => map,
    _ => panic!("expected object"),
  }
}

fn triangle() -> DirectedGraph {
  let mut g = DirectedGraph::new(Some("triangle".to_string()));
  g.add_node("a", attrs(json!({"address": "a", "balance": 10})));
  g.add_node("b", attrs(json!({"address": "b", "balance": 20})));
  g.add_node("c", attrs(json!({"address": "c", "balance": 30})));
  g.add_edge("a", "b", attrs(json!({"_from": "a", "_to": "b", "total_amount": 1.0})));
  g.add_edge("a", "c", attrs(json!({"_from": "a", "_to": "c", "total_amount": 2.0})));
  g.add_edge("b", "c", attrs(json!({"_from": "b", "_to": "c", "total_amount": 3.0})));
  g
}

#[test]
fn name_and_counts() {
  let g = triangle();
  assert_eq!(g.name(), Some("triangle"));
  assert_eq!(g.node_count(), 3);
  assert_eq!(g.edge_count(), 3);
}

#[test]
fn nodes_iterate_in_insertion_order() {
  let g = triangle();
  let keys: Vec<&str> = g.nodes().map(|n| n.key.as_str()).collect();
  assert_eq!(keys, vec!["a", "b", "c"]);
  assert_eq!(g.position("c"), Some(2));
  assert_eq!(g.position("zzz"), None);
}

#[test]
fn re_adding_node_replaces_attributes_in_place() {
  let mut g = triangle();
  g.add_node("a", attrs(json!({"address": "a", "elevation": 3})));
  assert_eq!(g.node_count(), 3);
  assert_eq!(g.position("a"), Some(0));
  let a = g.node("a").unwrap();
  assert_eq!(a.get("elevation"), Some(&json!(3)));
  assert!(a.get("balance").is_none());
}

#[test]
fn parallel_edge_keeps_last_attributes() {
  let mut g = triangle();
  g.add_edge("a", "b", attrs(json!({"_from": "a", "_to": "b", "total_amount": 9.0})));
  assert_eq!(g.edge_count(), 3);
  assert_eq!(g.edge("a", "b").unwrap().get("total_amount"), Some(&json!(9.0)));
  let first = g.edges().next().unwrap();
  assert_eq!((first.source, first.target), ("a", "b"));
}

#[test]
fn reverse_pair_is_a_distinct_arc() {
  let mut g = triangle();
  g.add_edge("b", "a", Attributes::new());
  assert_eq!(g.edge_count(), 4);
  assert!(g.edge("b", "a").is_some());
}

#[test]
fn dangling_endpoint_creates_bare_node() {
  let mut g = triangle();
  g.add_edge("c", "ghost", Attributes::new());
  assert!(g.contains_node("ghost"));
  assert_eq!(g.node("ghost"), Some(&Attributes::new()));
  assert_eq!(g.node_count(), 4);
}

#[test]
fn degree_and_directed_edges() {
  let g = triangle();
  assert_eq!(g.out_degree("a"), 2);
  assert_eq!(g.out_degree("c"), 0);
  assert_eq!(g.out_degree("missing"), 0);

  let out: Vec<&str> = g.out_edges("a").iter().map(|e| e.target).collect();
  assert_eq!(out, vec!["b", "c"]);
  let incoming: Vec<&str> = g.in_edges("c").iter().map(|e| e.source).collect();
  assert_eq!(incoming, vec!["a", "b"]);
  assert!(g.in_edges("missing").is_empty());
}

#[test]
fn arcs_are_positions_in_arc_order() {
  let g = triangle();
  let arcs: Vec<(usize, usize)> = g.arcs().collect();
  assert_eq!(arcs, vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn arcs_group_by_source_regardless_of_insertion_order() {
  let mut g = DirectedGraph::new(None);
  g.add_node("a", Attributes::new());
  g.add_node("b", Attributes::new());
  g.add_node("c", Attributes::new());
  g.add_edge("c", "a", attrs(json!({"w": 1})));
  g.add_edge("a", "c", attrs(json!({"w": 2})));
  g.add_edge("b", "a", attrs(json!({"w": 3})));
  g.add_edge("a", "b", attrs(json!({"w": 4})));

  let arcs: Vec<(usize, usize)> = g.arcs().collect();
  assert_eq!(arcs, vec![(0, 1), (0, 2), (1, 0), (2, 0)]);
  let pairs: Vec<(&str, &str)> = g.edges().map(|e| (e.source, e.target)).collect();
  assert_eq!(pairs, vec![("a", "b"), ("a", "c"), ("b", "a"), ("c", "a")]);
  let weights: Vec<_> = g.edges().map(|e| e.attributes["w"].clone()).collect();
  assert_eq!(weights, vec![json!(4), json!(2), json!(3), json!(1)]);
}

#[test]
fn copy_node_attribute() {
  let mut g = triangle();
  g.set_attribute_from_existing("balance", "size", AttributeTarget::Nodes)
    .unwrap();
  for node in g.nodes() {
    assert_eq!(node.attributes.get("size"), node.attributes.get("balance"));
  }
}

#[test]
fn copy_edge_attribute() {
  let mut g = triangle();
  g.set_attribute_from_existing("total_amount", "weight", AttributeTarget::Edges)
    .unwrap();
  assert_eq!(g.edge("b", "c").unwrap().get("weight"), Some(&json!(3.0)));
  assert_eq!(g.edge("a", "c").unwrap().get("weight"), Some(&json!(2.0)));
}

#[test]
fn copy_missing_attribute_fails_and_leaves_graph_untouched() {
  let mut g = triangle();
  g.add_node("d", attrs(json!({"address": "d"})));
  let err = g
    .set_attribute_from_existing("balance", "size", AttributeTarget::Nodes)
    .unwrap_err();
  match err {
    Error::MissingAttribute { entity, key, attribute } => {
      assert_eq!(entity, "node");
      assert_eq!(key, "d");
      assert_eq!(attribute, "balance");
    }
    other => panic!("expected MissingAttribute, got {other:?}"),
  }
  assert!(g.nodes().all(|n| !n.attributes.contains_key("size")));
}
