//! # helium-graph-analysis
//!
//! Client-side tooling for a Helium hotspot and payment analytics HTTP service.
//!
//! ## Pipeline
//!
//! - [`client`]: one blocking GET per named endpoint, decoded into typed records.
//! - [`adapters`]: node/edge record lists become a [`DirectedGraph`].
//! - [`tensor`]: a graph becomes dense feature matrices plus a CSR adjacency.
//! - [`plotting`]: witness topology and token-flow figures, or a generic network page.
//!
//! ```no_run
//! use helium_graph_analysis::{AnalyticsClient, plotting, to_tensor_graph};
//!
//! let client = AnalyticsClient::new("http://localhost:8000")?;
//! let graph = client.witness_graph_in_hex("8828308281fffff")?.to_graph(Some("hex"))?;
//! let tensors = to_tensor_graph(&graph, &["elevation", "gain"], &["snr", "rssi"])?;
//! println!("{:?}", tensors.x.shape());
//! plotting::plot_witness_graph(&graph)?;
//! # Ok::<(), helium_graph_analysis::Error>(())
//! ```
//!
//! Set `RUST_LOG=helium_graph_analysis=trace` for span enter/exit of every request and
//! conversion.

pub mod adapters;
pub mod client;
pub mod error;
pub mod plotting;
pub mod tensor;
pub mod types;

pub use adapters::build_graph;
pub use client::{AnalyticsClient, CoordsQuery, DEFAULT_LIMIT, PaymentWindow, ReceiptQuery};
pub use error::{Error, Result};
pub use tensor::{
  SparseAdjacency, TensorGraph, TensorProjection, make_tensor_graph, to_tensor_graph,
};
pub use types::{
  Account, AttributeTarget, Attributes, DirectedGraph, GraphResponse, Hotspot, PaymentEdge,
  PaymentGraph, PaymentSummary, ReceiptSample, Received, WitnessEdge, WitnessGraph,
  WitnessReceipt,
};
