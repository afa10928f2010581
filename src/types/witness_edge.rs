//! A witness edge: `_from` was heard by `_to`.

use serde::{Deserialize, Serialize};

use super::{Attributes, EdgeIdentity};

/// Signal details of one witness relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessEdge {
  #[serde(rename = "_from")]
  pub from: String,
  #[serde(rename = "_to")]
  pub to: String,
  #[serde(default)]
  pub snr: Option<f64>,
  #[serde(default)]
  pub rssi: Option<f64>,
  #[serde(default)]
  pub distance_m: Option<f64>,
  #[serde(flatten)]
  pub extra: Attributes,
}

impl EdgeIdentity for WitnessEdge {
  fn source(&self) -> Option<&str> {
    Some(&self.from)
  }

  fn target(&self) -> Option<&str> {
    Some(&self.to)
  }
}
