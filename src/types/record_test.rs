//! Tests for record identity and received attributes.

use serde_json::json;

use super::{
  Attributes, EdgeIdentity, EdgeRecord, Hotspot, NodeIdentity, NodeRecord, Received, WitnessEdge,
};

fn attrs(value: serde_json::Value) -> Attributes {
  match value {
    serde_json::Value::Object(map) => map,
    _ => panic!("expected object"),
  }
}

#[test]
fn address_is_preferred_node_key() {
  let record = attrs(json!({
    "_key": "13ucSyoF",
    "_id": "accounts/13ucSyoF",
    "address": "13ucSyoF-address",
  }));
  assert_eq!(record.node_key(), Some("13ucSyoF-address"));
}

#[test]
fn falls_back_to_key_then_id() {
  let with_key = attrs(json!({"_key": "k1", "_id": "hotspots/k1"}));
  assert_eq!(with_key.node_key(), Some("k1"));
  let with_id = attrs(json!({"_id": "hotspots/k2"}));
  assert_eq!(with_id.node_key(), Some("hotspots/k2"));
}

#[test]
fn non_string_identifier_is_not_a_key() {
  let record = attrs(json!({"address": 42}));
  assert_eq!(record.node_key(), None);
}

#[test]
fn edge_endpoints_from_from_and_to() {
  let record = attrs(json!({"_from": "A", "_to": "B", "snr": 3}));
  assert_eq!(record.source(), Some("A"));
  assert_eq!(record.target(), Some("B"));
  let missing = attrs(json!({"_from": "A"}));
  assert_eq!(missing.target(), None);
}

#[test]
fn raw_records_are_their_own_attributes() {
  let record = attrs(json!({"_from": "A", "_to": "B", "snr": 3, "rssi": -100}));
  assert_eq!(record.edge_attributes(), record);
  assert_eq!(record.node_attributes(), record);
}

#[test]
fn received_hotspot_keeps_the_object_as_sent() {
  let body = json!({"address": "A", "elevation": 10, "reward_scale": null});
  let hotspot: Received<Hotspot> = serde_json::from_value(body.clone()).unwrap();
  assert_eq!(hotspot.node_key(), Some("A"));
  assert_eq!(hotspot.elevation, Some(10.0));
  assert_eq!(hotspot.gain, None);

  let attributes = hotspot.node_attributes();
  assert_eq!(attributes, attrs(body.clone()));
  assert_eq!(attributes.get("elevation"), Some(&json!(10)));
  assert_eq!(attributes.get("reward_scale"), Some(&json!(null)));
  assert!(!attributes.contains_key("gain"));
  assert_eq!(serde_json::to_value(&hotspot).unwrap(), body);
}

#[test]
fn received_edge_uses_typed_endpoints() {
  let edge: Received<WitnessEdge> =
    serde_json::from_value(json!({"_from": "A", "_to": "B", "rssi": -90})).unwrap();
  assert_eq!(edge.source(), Some("A"));
  assert_eq!(edge.target(), Some("B"));
  let (record, attributes) = edge.into_parts();
  assert_eq!(record.rssi, Some(-90.0));
  assert_eq!(attributes.get("rssi"), Some(&json!(-90)));
}

#[test]
fn received_rejects_what_the_typed_record_rejects() {
  let err = serde_json::from_value::<Received<WitnessEdge>>(json!({"_from": "A"}));
  assert!(err.is_err());
  let not_an_object = serde_json::from_value::<Received<Hotspot>>(json!("A"));
  assert!(not_an_object.is_err());
}
