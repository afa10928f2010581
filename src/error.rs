//! Crate error type.

/// Errors raised by the client, the graph adapter, the tensor projector and the plotting layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The analytics service answered with something other than 200 OK.
  #[error(
    "request to {url} failed with status {status}; check the query parameters and make sure the HTTP API is online"
  )]
  RequestFailed { status: u16, url: String },

  /// Transport-level failure (connection refused, reset, ...).
  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),

  /// Response body did not match the expected shape.
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  /// Query parameters could not be encoded.
  #[error("query encoding error: {0}")]
  Query(#[from] serde_urlencoded::ser::Error),

  /// A requested attribute is absent from a node or edge.
  #[error("{entity} {key} has no attribute '{attribute}'")]
  MissingAttribute {
    entity: &'static str,
    key: String,
    attribute: String,
  },

  /// A record lacks the field used to identify it in the graph.
  #[error("record has no {field} field")]
  MissingKey { field: &'static str },

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

impl Error {
  pub(crate) fn missing_node_attribute(key: &str, attribute: &str) -> Self {
    Error::MissingAttribute {
      entity: "node",
      key: key.to_string(),
      attribute: attribute.to_string(),
    }
  }

  pub(crate) fn missing_edge_attribute(source: &str, target: &str, attribute: &str) -> Self {
    Error::MissingAttribute {
      entity: "edge",
      key: format!("{source}->{target}"),
      attribute: attribute.to_string(),
    }
  }
}

pub type Result<T> = std::result::Result<T, Error>;
