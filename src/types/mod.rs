//! Records returned by the analytics service and the graph they are adapted into.
//!
//! Typed records name the fields each endpoint documents; anything else lands in their
//! flattened `extra` map. Responses wrap each typed record in [`Received`] so the graph sees the
//! object as sent. A raw [`Attributes`] map works wherever a received record does.

mod account;
mod attributes;
mod directed_graph;
#[cfg(test)]
mod directed_graph_test;
mod graph_response;
#[cfg(test)]
mod graph_response_test;
mod hotspot;
mod payment_edge;
mod payment_summary;
mod receipt;
mod record;
#[cfg(test)]
mod record_test;
mod witness_edge;

pub use account::Account;
pub use attributes::{Attributes, numeric_or_zero};
pub(crate) use attributes::as_point;
pub use directed_graph::{AttributeTarget, DirectedGraph, EdgeView, GraphNode};
pub use graph_response::{GraphResponse, PaymentGraph, WitnessGraph};
pub use hotspot::{GeoPoint, Hotspot};
pub use payment_edge::PaymentEdge;
pub use payment_summary::PaymentSummary;
pub use receipt::{ReceiptSample, WitnessReceipt};
pub use record::{
  EDGE_SOURCE_FIELD, EDGE_TARGET_FIELD, EdgeIdentity, EdgeRecord, NODE_KEY_FIELDS, NodeIdentity,
  NodeRecord, Received,
};
pub use witness_edge::WitnessEdge;
