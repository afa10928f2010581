//! A hotspot node as returned by the witness graph endpoints.

use serde::{Deserialize, Serialize};

use super::{Attributes, NodeIdentity};

/// GeoJSON point; `coordinates` is `[lon, lat]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
  #[serde(rename = "type", default)]
  pub kind: Option<String>,
  #[serde(default)]
  pub coordinates: Vec<f64>,
}

impl GeoPoint {
  /// `(lon, lat)` when both coordinates are present.
  pub fn lon_lat(&self) -> Option<(f64, f64)> {
    match self.coordinates.as_slice() {
      [lon, lat, ..] => Some((*lon, *lat)),
      _ => None,
    }
  }
}

/// A physical wireless relay device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
  pub address: String,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub owner: Option<String>,
  /// Asserted location as an h3 cell.
  #[serde(default)]
  pub location: Option<String>,
  #[serde(default)]
  pub location_hex: Option<String>,
  #[serde(default)]
  pub elevation: Option<f64>,
  #[serde(default)]
  pub gain: Option<f64>,
  #[serde(default)]
  pub reward_scale: Option<f64>,
  #[serde(default)]
  pub status: Option<String>,
  #[serde(default)]
  pub mode: Option<String>,
  #[serde(default)]
  pub first_block: Option<u64>,
  #[serde(default)]
  pub last_block: Option<u64>,
  #[serde(default)]
  pub nonce: Option<u64>,
  #[serde(default)]
  pub geo_location: Option<GeoPoint>,
  /// Fields the schema does not name (`_key`, `_rev`, `witnesses`, ...).
  #[serde(flatten)]
  pub extra: Attributes,
}

impl NodeIdentity for Hotspot {
  fn node_key(&self) -> Option<&str> {
    Some(&self.address)
  }
}
