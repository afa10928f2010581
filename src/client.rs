//! Blocking client for the analytics HTTP service.
//!
//! One GET per call. Any status other than 200 is reported as [`Error::RequestFailed`]; nothing
//! is retried or cached.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::types::{Attributes, PaymentGraph, PaymentSummary, ReceiptSample, WitnessGraph};

/// Row limit used when the caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 100;

/// Time window and row limit for the payment endpoints.
///
/// Unset fields resolve at call time: `limit` to [`DEFAULT_LIMIT`], `min_time` to 0, `max_time`
/// to the current UTC epoch second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentWindow {
  pub limit: Option<u32>,
  pub min_time: Option<i64>,
  pub max_time: Option<i64>,
}

impl PaymentWindow {
  /// Payments in the last `seconds` seconds, ending now.
  pub fn last(seconds: i64) -> Self {
    let now = chrono::Utc::now().timestamp();
    Self {
      limit: None,
      min_time: Some(now.saturating_sub(seconds)),
      max_time: Some(now),
    }
  }

  pub fn with_limit(mut self, limit: u32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub(crate) fn resolve(&self, now: i64) -> PaymentParams {
    PaymentParams {
      limit: self.limit.unwrap_or(DEFAULT_LIMIT),
      min_time: self.min_time.unwrap_or(0),
      max_time: self.max_time.unwrap_or(now),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct PaymentParams {
  pub limit: u32,
  pub min_time: i64,
  pub max_time: i64,
}

/// Centre point and hotspot limit for [`AnalyticsClient::witness_graph_near_coords`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordsQuery {
  pub lat: f64,
  pub lon: f64,
  pub limit: u32,
}

impl CoordsQuery {
  pub fn new(lat: f64, lon: f64) -> Self {
    Self {
      lat,
      lon,
      limit: DEFAULT_LIMIT,
    }
  }

  pub fn with_limit(mut self, limit: u32) -> Self {
    self.limit = limit;
    self
  }
}

/// Filters for [`AnalyticsClient::recent_witness_receipts`]; unset fields are left off the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReceiptQuery {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub address: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub limit: Option<u32>,
}

#[derive(Serialize)]
struct HexParams<'a> {
  hex: &'a str,
}

/// Client for one analytics service instance.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
  base_url: String,
  http: reqwest::blocking::Client,
}

impl AnalyticsClient {
  /// Creates a client for `base_url`; trailing slashes are dropped.
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    let http = reqwest::blocking::Client::builder()
      .timeout(None::<Duration>)
      .build()?;
    Ok(Self { base_url, http })
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Full URL for `path`, with `params` encoded as the query string.
  pub(crate) fn url_for<P: Serialize>(&self, path: &str, params: Option<&P>) -> Result<String> {
    let mut url = format!("{}{}", self.base_url, path);
    if let Some(params) = params {
      let query = serde_urlencoded::to_string(params)?;
      if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
      }
    }
    Ok(url)
  }

  fn get_json<P: Serialize, R: DeserializeOwned>(
    &self,
    path: &str,
    params: Option<&P>,
  ) -> Result<R> {
    let url = self.url_for(path, params)?;
    debug!(url = %url, "GET");
    let resp = self.http.get(&url).send()?;
    let status = resp.status();
    if status != reqwest::StatusCode::OK {
      warn!(url = %url, status = status.as_u16(), "analytics request failed");
      return Err(Error::RequestFailed {
        status: status.as_u16(),
        url,
      });
    }
    let text = resp.text()?;
    Ok(serde_json::from_str(&text)?)
  }

  fn get_payments<R: DeserializeOwned>(&self, path: &str, window: &PaymentWindow) -> Result<R> {
    let params = window.resolve(chrono::Utc::now().timestamp());
    self.get_json(path, Some(&params))
  }

  /// Payments sent by `address`.
  #[instrument(level = "trace", skip(self))]
  pub fn payments_from_account(
    &self,
    address: &str,
    window: &PaymentWindow,
  ) -> Result<Vec<PaymentSummary>> {
    self.get_payments(&format!("/payments/{address}/from"), window)
  }

  /// Payments received by `address`.
  #[instrument(level = "trace", skip(self))]
  pub fn payments_to_account(
    &self,
    address: &str,
    window: &PaymentWindow,
  ) -> Result<Vec<PaymentSummary>> {
    self.get_payments(&format!("/payments/{address}/to"), window)
  }

  /// Largest payer/payee pairs by total amount.
  #[instrument(level = "trace", skip(self))]
  pub fn top_payment_totals(&self, window: &PaymentWindow) -> Result<Vec<PaymentSummary>> {
    self.get_payments("/payments/totals", window)
  }

  /// Largest payer/payee pairs by number of payments.
  #[instrument(level = "trace", skip(self))]
  pub fn top_payment_counts(&self, window: &PaymentWindow) -> Result<Vec<PaymentSummary>> {
    self.get_payments("/payments/counts", window)
  }

  #[instrument(level = "trace", skip(self))]
  pub fn top_payers(&self, window: &PaymentWindow) -> Result<Vec<PaymentSummary>> {
    self.get_payments("/payments/payers", window)
  }

  #[instrument(level = "trace", skip(self))]
  pub fn top_payees(&self, window: &PaymentWindow) -> Result<Vec<PaymentSummary>> {
    self.get_payments("/payments/payees", window)
  }

  /// Payment graph around the top payers.
  #[instrument(level = "trace", skip(self))]
  pub fn top_payers_graph(&self, window: &PaymentWindow) -> Result<PaymentGraph> {
    self.get_payments("/payments/payers/graph", window)
  }

  /// Payment graph around the top payees.
  #[instrument(level = "trace", skip(self))]
  pub fn top_payees_graph(&self, window: &PaymentWindow) -> Result<PaymentGraph> {
    self.get_payments("/payments/payees/graph", window)
  }

  /// Witness graph of the `limit` hotspots nearest a point.
  #[instrument(level = "trace", skip(self))]
  pub fn witness_graph_near_coords(&self, query: &CoordsQuery) -> Result<WitnessGraph> {
    self.get_json("/hotspots/coords/graph", Some(query))
  }

  /// Witness graph of the hotspots inside an h3 cell.
  #[instrument(level = "trace", skip(self))]
  pub fn witness_graph_in_hex(&self, hex: &str) -> Result<WitnessGraph> {
    self.get_json("/hotspots/hex/graph", Some(&HexParams { hex }))
  }

  /// Hotspots witnessed by `address`.
  #[instrument(level = "trace", skip(self))]
  pub fn outbound_witnesses(&self, address: &str) -> Result<Vec<Attributes>> {
    self.get_json::<(), _>(&format!("/hotspots/{address}/outbound"), None)
  }

  /// Hotspots that witnessed `address`.
  #[instrument(level = "trace", skip(self))]
  pub fn inbound_witnesses(&self, address: &str) -> Result<Vec<Attributes>> {
    self.get_json::<(), _>(&format!("/hotspots/{address}/inbound"), None)
  }

  #[instrument(level = "trace", skip(self))]
  pub fn recent_witness_receipts(&self, query: &ReceiptQuery) -> Result<ReceiptSample> {
    self.get_json("/hotspots/receipts", Some(query))
  }
}
