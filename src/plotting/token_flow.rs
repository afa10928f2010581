//! Token-flow figures: accounts placed by a force layout, sized by payment volume and coloured
//! by log balance.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, instrument};

use super::figure::{Figure, Marker, MarkerSize, PlotLayout, ScatterTrace};
use super::layout::spring_layout;
use crate::error::{Error, Result};
use crate::types::{Attributes, DirectedGraph, EdgeView};

/// Payment amounts are reported in the ledger's smallest unit.
pub const AMOUNT_SCALE: f64 = 1e12;

pub const TOKEN_FLOW_TITLE: &str = "<br>Token Flow";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sizing {
  /// Sum of `total_amount / 1e12` over the counted arcs.
  TotalAmount,
  /// Sum of `num_payments` over the counted arcs.
  NumPayments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
  Payee,
  Payer,
}

impl Side {
  fn sizing(self, sized_by: &str) -> Option<Sizing> {
    match (self, sized_by) {
      (Side::Payee, "total_received") | (Side::Payer, "total_paid") => Some(Sizing::TotalAmount),
      (_, "num_payments") => Some(Sizing::NumPayments),
      _ => None,
    }
  }
}

/// Payee view: node size from incoming payments (`"total_received"` or `"num_payments"`).
#[instrument(level = "trace", skip(graph))]
pub fn payee_figure(graph: &DirectedGraph, sized_by: &str) -> Result<Figure> {
  token_flow_figure(graph, sized_by, Side::Payee)
}

/// Payer view: node size from outgoing payments (`"total_paid"` or `"num_payments"`).
#[instrument(level = "trace", skip(graph))]
pub fn payer_figure(graph: &DirectedGraph, sized_by: &str) -> Result<Figure> {
  token_flow_figure(graph, sized_by, Side::Payer)
}

pub fn plot_payee_graph(graph: &DirectedGraph, sized_by: &str) -> Result<PathBuf> {
  payee_figure(graph, sized_by)?.show()
}

pub fn plot_payer_graph(graph: &DirectedGraph, sized_by: &str) -> Result<PathBuf> {
  payer_figure(graph, sized_by)?.show()
}

fn token_flow_figure(graph: &DirectedGraph, sized_by: &str, side: Side) -> Result<Figure> {
  let positions = spring_layout(graph);
  let edges = ScatterTrace::edges(graph, &positions);

  let mut marker = Marker::scaled("Log(Account Balance)");
  marker.color = graph
    .nodes()
    .map(|node| log_balance(&node.key, &node.attributes))
    .collect::<Result<_>>()?;
  let text = graph
    .nodes()
    .map(|node| {
      node
        .attributes
        .get("address")
        .and_then(Value::as_str)
        .unwrap_or(&node.key)
        .to_string()
    })
    .collect();

  let title = match side.sizing(sized_by) {
    Some(sizing) => {
      marker.size = MarkerSize::PerPoint(node_sizes(graph, sizing, side)?);
      title_for(sizing, side)
    }
    None => {
      debug!(sized_by, "unrecognised sizing, keeping default marker size");
      TOKEN_FLOW_TITLE.to_string()
    }
  };

  let nodes = ScatterTrace::nodes(&positions, text, marker);
  Ok(Figure {
    data: vec![edges, nodes],
    layout: PlotLayout::network(&title),
  })
}

fn title_for(sizing: Sizing, side: Side) -> String {
  let what = match (sizing, side) {
    (Sizing::NumPayments, Side::Payee) => "Total Number of Payments Received",
    (Sizing::NumPayments, Side::Payer) => "Total Number of Payments Sent",
    (Sizing::TotalAmount, Side::Payee) => "Total Amount Received",
    (Sizing::TotalAmount, Side::Payer) => "Total Amount Paid",
  };
  format!("{TOKEN_FLOW_TITLE}: Nodes Sized by {what} over Time Period")
}

/// `log10(balance)`; balances at or below zero have no colour.
fn log_balance(key: &str, attributes: &Attributes) -> Result<Option<f64>> {
  let balance = attributes
    .get("balance")
    .ok_or_else(|| Error::missing_node_attribute(key, "balance"))?
    .as_f64()
    .unwrap_or(0.0);
  Ok((balance > 0.0).then(|| balance.log10()))
}

/// Per-node totals over incoming arcs (payees) or outgoing arcs (payers).
fn node_sizes(graph: &DirectedGraph, sizing: Sizing, side: Side) -> Result<Vec<f64>> {
  graph
    .nodes()
    .map(|node| {
      let arcs = match side {
        Side::Payee => graph.in_edges(&node.key),
        Side::Payer => graph.out_edges(&node.key),
      };
      arcs
        .iter()
        .try_fold(0.0, |total, arc| -> Result<f64> {
          Ok(total + arc_size(arc, sizing)?)
        })
    })
    .collect()
}

fn arc_size(arc: &EdgeView<'_>, sizing: Sizing) -> Result<f64> {
  let field = match sizing {
    Sizing::NumPayments => "num_payments",
    Sizing::TotalAmount => "total_amount",
  };
  let value = arc
    .attributes
    .get(field)
    .ok_or_else(|| Error::missing_edge_attribute(arc.source, arc.target, field))?
    .as_f64()
    .unwrap_or(0.0);
  Ok(match sizing {
    Sizing::NumPayments => value,
    Sizing::TotalAmount => value / AMOUNT_SCALE,
  })
}
