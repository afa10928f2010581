//! Raw witness receipts from `/hotspots/receipts`.

use serde::{Deserialize, Serialize};

use super::{Attributes, EdgeIdentity, Received};

/// One witness receipt. `_from`/`_to` carry the collection prefix (`hotspots/<address>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessReceipt {
  #[serde(rename = "_key", default)]
  pub key: Option<String>,
  #[serde(rename = "_id", default)]
  pub id: Option<String>,
  #[serde(rename = "_from")]
  pub from: String,
  #[serde(rename = "_to")]
  pub to: String,
  #[serde(default)]
  pub time: Option<i64>,
  /// Nanosecond timestamp reported by the witness.
  #[serde(default)]
  pub timestamp: Option<u64>,
  #[serde(default)]
  pub snr: Option<f64>,
  #[serde(default)]
  pub signal: Option<f64>,
  #[serde(default)]
  pub channel: Option<i64>,
  #[serde(default)]
  pub frequency: Option<f64>,
  #[serde(default)]
  pub datarate: Option<String>,
  #[serde(default)]
  pub gateway: Option<String>,
  #[serde(default)]
  pub owner: Option<String>,
  #[serde(default)]
  pub location: Option<String>,
  #[serde(default)]
  pub packet_hash: Option<String>,
  #[serde(flatten)]
  pub extra: Attributes,
}

impl EdgeIdentity for WitnessReceipt {
  fn source(&self) -> Option<&str> {
    Some(&self.from)
  }

  fn target(&self) -> Option<&str> {
    Some(&self.to)
  }
}

/// Body of `/hotspots/receipts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptSample {
  pub receipts: Vec<Received<WitnessReceipt>>,
}
