//! A payment edge: aggregated token flow from `_from` to `_to`.

use serde::{Deserialize, Serialize};

use super::{Attributes, EdgeIdentity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEdge {
  #[serde(rename = "_from")]
  pub from: String,
  #[serde(rename = "_to")]
  pub to: String,
  /// Total paid over the queried window, in bones.
  #[serde(default)]
  pub total_amount: Option<f64>,
  #[serde(default)]
  pub num_payments: Option<u64>,
  #[serde(flatten)]
  pub extra: Attributes,
}

impl EdgeIdentity for PaymentEdge {
  fn source(&self) -> Option<&str> {
    Some(&self.from)
  }

  fn target(&self) -> Option<&str> {
    Some(&self.to)
  }
}
