//! Record traits: anything that can become a graph node or a graph edge.
//!
//! A typed record knows which node or arc it describes; the attributes attached to the graph
//! always come from the JSON object as it was received. [`Received`] pairs the two, and a raw
//! [`Attributes`] map is both at once.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::Attributes;

/// Field names tried, in order, when a raw record is used as a node.
pub const NODE_KEY_FIELDS: [&str; 3] = ["address", "_key", "_id"];
pub const EDGE_SOURCE_FIELD: &str = "_from";
pub const EDGE_TARGET_FIELD: &str = "_to";

/// Which node a record describes.
pub trait NodeIdentity {
  /// Identifier used as the node key.
  fn node_key(&self) -> Option<&str>;
}

/// Which arc a record describes.
pub trait EdgeIdentity {
  fn source(&self) -> Option<&str>;
  fn target(&self) -> Option<&str>;
}

/// A record that becomes one graph node.
pub trait NodeRecord: NodeIdentity {
  /// Attributes attached to the node, exactly as received.
  fn node_attributes(&self) -> Attributes;
}

/// A record that becomes one directed graph edge.
pub trait EdgeRecord: EdgeIdentity {
  /// Attributes attached to the arc, exactly as received.
  fn edge_attributes(&self) -> Attributes;
}

impl NodeIdentity for Attributes {
  fn node_key(&self) -> Option<&str> {
    NODE_KEY_FIELDS
      .iter()
      .find_map(|field| self.get(*field).and_then(Value::as_str))
  }
}

impl NodeRecord for Attributes {
  fn node_attributes(&self) -> Attributes {
    self.clone()
  }
}

impl EdgeIdentity for Attributes {
  fn source(&self) -> Option<&str> {
    self.get(EDGE_SOURCE_FIELD).and_then(Value::as_str)
  }

  fn target(&self) -> Option<&str> {
    self.get(EDGE_TARGET_FIELD).and_then(Value::as_str)
  }
}

impl EdgeRecord for Attributes {
  fn edge_attributes(&self) -> Attributes {
    self.clone()
  }
}

/// A typed record together with the JSON object it was decoded from.
///
/// Derefs to the typed record. Serializes back to the received object, so absent fields stay
/// absent and integers stay integers.
#[derive(Debug, Clone, PartialEq)]
pub struct Received<T> {
  record: T,
  attributes: Attributes,
}

impl<T> Received<T> {
  pub fn record(&self) -> &T {
    &self.record
  }

  /// The object as received.
  pub fn attributes(&self) -> &Attributes {
    &self.attributes
  }

  pub fn into_parts(self) -> (T, Attributes) {
    (self.record, self.attributes)
  }
}

impl<T: DeserializeOwned> Received<T> {
  /// Decodes `attributes` into the typed record, keeping the map.
  pub fn from_attributes(attributes: Attributes) -> serde_json::Result<Self> {
    let record = T::deserialize(Value::Object(attributes.clone()))?;
    Ok(Self { record, attributes })
  }
}

impl<T> Deref for Received<T> {
  type Target = T;

  fn deref(&self) -> &T {
    &self.record
  }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Received<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let attributes = Attributes::deserialize(deserializer)?;
    Self::from_attributes(attributes).map_err(serde::de::Error::custom)
  }
}

impl<T> Serialize for Received<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.attributes.serialize(serializer)
  }
}

impl<T: NodeIdentity> NodeIdentity for Received<T> {
  fn node_key(&self) -> Option<&str> {
    self.record.node_key()
  }
}

impl<T: NodeIdentity> NodeRecord for Received<T> {
  fn node_attributes(&self) -> Attributes {
    self.attributes.clone()
  }
}

impl<T: EdgeIdentity> EdgeIdentity for Received<T> {
  fn source(&self) -> Option<&str> {
    self.record.source()
  }

  fn target(&self) -> Option<&str> {
    self.record.target()
  }
}

impl<T: EdgeIdentity> EdgeRecord for Received<T> {
  fn edge_attributes(&self) -> Attributes {
    self.attributes.clone()
  }
}
