//! Visualization: Plotly figures for witness and token-flow graphs, and a generic network page.
//!
//! Figures are plain data until [`Figure::show`] or [`Figure::write_html`] renders them.

mod figure;
mod layout;
mod network;
mod token_flow;
mod viewer;
mod witness;
#[cfg(test)]
mod witness_test;

pub use figure::{
  Axis, ColorBar, ColorBarTitle, DEFAULT_MARKER_SIZE, Figure, Font, Line, Margin, Marker,
  MarkerSize, PlotLayout, ScatterTrace, Title,
};
pub use layout::{Positions, coordinate_layout, spring_layout};
pub use network::{network_html, network_json, plot_graph_simple, write_network_html};
pub use token_flow::{
  AMOUNT_SCALE, TOKEN_FLOW_TITLE, payee_figure, payer_figure, plot_payee_graph, plot_payer_graph,
};
pub use viewer::{BROWSER_ENV, open};
pub use witness::{WITNESS_TITLE, plot_witness_graph, witness_figure};
