//! Flat payment aggregates (payments from/to an account, top totals/counts, top payers/payees).

use serde::{Deserialize, Serialize};

use super::Attributes;

/// One aggregate row. Which of `payer`/`payee`/`address` is set depends on the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
  #[serde(default)]
  pub payer: Option<String>,
  #[serde(default)]
  pub payee: Option<String>,
  #[serde(default)]
  pub address: Option<String>,
  #[serde(default)]
  pub total_amount: Option<f64>,
  #[serde(default)]
  pub num_payments: Option<u64>,
  #[serde(flatten)]
  pub extra: Attributes,
}
