//! A ledger account as returned by the payment graph endpoints.

use serde::{Deserialize, Serialize};

use super::{Attributes, NodeIdentity};

/// An account sending or receiving token payments. Balances are raw ledger integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
  pub address: String,
  #[serde(default)]
  pub balance: Option<u64>,
  #[serde(default)]
  pub dc_balance: Option<u64>,
  #[serde(default)]
  pub security_balance: Option<u64>,
  #[serde(default)]
  pub staked_balance: Option<u64>,
  #[serde(default)]
  pub nonce: Option<u64>,
  #[serde(default)]
  pub dc_nonce: Option<u64>,
  #[serde(default)]
  pub first_block: Option<u64>,
  #[serde(default)]
  pub last_block: Option<u64>,
  #[serde(flatten)]
  pub extra: Attributes,
}

impl NodeIdentity for Account {
  fn node_key(&self) -> Option<&str> {
    Some(&self.address)
  }
}
