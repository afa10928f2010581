//! Tests for decoding graph endpoint bodies.

use serde_json::json;

use super::{PaymentGraph, WitnessGraph};
use crate::error::Error;
use crate::tensor::to_tensor_graph;

#[test]
fn witness_graph_decodes_typed_and_extra_fields() {
  let body = json!({
    "nodes": [{
      "_key": "112nUEtr",
      "_id": "hotspots/112nUEtr",
      "address": "112nUEtr",
      "name": "big-maroon-ant",
      "elevation": 0,
      "gain": 12,
      "reward_scale": null,
      "mode": "GatewayMode.full",
      "witnesses": {},
      "geo_location": {"coordinates": [-79.93777048403096, 40.411233460016334], "type": "Point"}
    }],
    "edges": [{
      "_from": "112nUEtr",
      "_to": "11rraiss",
      "snr": 0,
      "rssi": -108,
      "distance_m": 4332.713990650966
    }]
  });
  let graph: WitnessGraph = serde_json::from_value(body).unwrap();
  let hotspot = &graph.nodes[0];
  assert_eq!(hotspot.name.as_deref(), Some("big-maroon-ant"));
  assert_eq!(hotspot.gain, Some(12.0));
  assert_eq!(hotspot.reward_scale, None);
  assert_eq!(hotspot.extra.get("_key"), Some(&json!("112nUEtr")));
  assert_eq!(hotspot.extra.get("witnesses"), Some(&json!({})));
  let geo = hotspot.geo_location.as_ref().unwrap();
  assert_eq!(geo.kind.as_deref(), Some("Point"));
  assert_eq!(geo.lon_lat(), Some((-79.93777048403096, 40.411233460016334)));
  assert_eq!(graph.edges[0].rssi, Some(-108.0));
}

#[test]
fn witness_graph_to_graph_keeps_record_fields_as_attributes() {
  let body = json!({
    "nodes": [
      {"address": "A", "name": "a-hotspot", "elevation": 10, "gain": 5, "_rev": "_x"},
      {"address": "B", "name": "b-hotspot", "elevation": 20, "gain": 7}
    ],
    "edges": [{"_from": "A", "_to": "B", "snr": 3, "rssi": -100}]
  });
  let response: WitnessGraph = serde_json::from_value(body).unwrap();
  let g = response.to_graph(Some("pittsburgh")).unwrap();
  assert_eq!(g.name(), Some("pittsburgh"));
  assert_eq!(g.node_count(), 2);
  assert_eq!(g.edge_count(), 1);

  let a = g.node("A").unwrap();
  assert_eq!(a.get("address"), Some(&json!("A")));
  assert_eq!(a.get("_rev"), Some(&json!("_x")));
  assert_eq!(a.get("elevation"), Some(&json!(10)));
  // schema fields the server left out stay absent
  assert!(!a.contains_key("reward_scale"));
  assert_eq!(a.len(), 5);

  let edge = g.edge("A", "B").unwrap();
  assert_eq!(edge.get("_from"), Some(&json!("A")));
  assert_eq!(edge.get("rssi"), Some(&json!(-100)));
  assert!(!edge.contains_key("distance_m"));
}

#[test]
fn node_without_requested_attribute_fails_projection() {
  let body = json!({
    "nodes": [
      {"address": "A", "elevation": 10, "reward_scale": null},
      {"address": "B", "elevation": 20, "gain": 7, "reward_scale": null}
    ],
    "edges": [{"_from": "A", "_to": "B", "snr": 3}]
  });
  let response: WitnessGraph = serde_json::from_value(body).unwrap();
  let g = response.to_graph(None).unwrap();

  let err = to_tensor_graph(&g, &["gain"], &[]).unwrap_err();
  assert!(matches!(
    err,
    Error::MissingAttribute { ref key, ref attribute, .. } if key == "A" && attribute == "gain"
  ));
  let err = to_tensor_graph(&g, &["elevation"], &["rssi"]).unwrap_err();
  assert!(matches!(err, Error::MissingAttribute { ref attribute, .. } if attribute == "rssi"));

  // present null is a value, not a missing key
  let tensors = to_tensor_graph(&g, &["elevation", "reward_scale"], &["snr"]).unwrap();
  assert_eq!(tensors.x, ndarray::arr2(&[[10.0, 0.0], [20.0, 0.0]]));
  assert_eq!(tensors.e, ndarray::arr2(&[[3.0]]));
}

#[test]
fn payment_graph_decodes_accounts_and_payments() {
  let body = json!({
    "nodes": [{
      "address": "13ucSyoF",
      "balance": 55300000000000u64,
      "dc_balance": 0,
      "_key": "13ucSyoF"
    }],
    "edges": [{
      "_to": "13A7h7ob",
      "_from": "14Kr1J64",
      "total_amount": 61920100000000.0,
      "num_payments": 70
    }]
  });
  let graph: PaymentGraph = serde_json::from_value(body).unwrap();
  assert_eq!(graph.nodes[0].balance, Some(55300000000000));
  assert_eq!(graph.edges[0].from, "14Kr1J64");
  assert_eq!(graph.edges[0].num_payments, Some(70));

  let g = graph.to_graph(None).unwrap();
  // both payment endpoints are absent from the node list
  assert_eq!(g.node_count(), 3);
  assert_eq!(g.node("14Kr1J64").map(|a| a.len()), Some(0));
}

#[test]
fn missing_edges_key_is_a_decode_error() {
  let body = json!({"nodes": []});
  assert!(serde_json::from_value::<WitnessGraph>(body).is_err());
}
