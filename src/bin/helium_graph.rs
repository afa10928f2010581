//! CLI: query the analytics service, summarise the graph, optionally project or plot it.
//!
//! Usage: `helium_graph [--base-url URL] <COMMAND>`
//! Example: helium_graph witness-hex 8828308281fffff --plot
//!
//! Set RUST_LOG=helium_graph_analysis=trace for TRACE-level span enter/exit and events.

use std::env;
use std::error::Error;
use std::process;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use helium_graph_analysis::{
  AnalyticsClient, Attributes, CoordsQuery, DirectedGraph, PaymentWindow, ReceiptQuery, Result,
  TensorProjection, build_graph, plotting,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const BASE_URL_ENV: &str = "HELIUM_ANALYTICS_URL";

/// Query the Helium analytics service.
#[derive(Parser, Debug)]
#[command(name = "helium_graph")]
#[command(
  after_help = r#"Environment variables:
  HELIUM_ANALYTICS_URL  Base URL of the analytics service; overrides --base-url when set.
  BROWSER               Command used to open rendered figures (default: platform opener).

Examples:
  helium_graph receipts --limit 50 --plot
  helium_graph witness-near --lat 40.4 --lon -79.9 --node-features elevation,gain
  helium_graph payees-graph --days 7 --sized-by num_payments --plot"#
)]
struct Cli {
  /// Base URL of the analytics service. Overridden by HELIUM_ANALYTICS_URL if set.
  #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
  base_url: String,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Sample recent witness receipts and graph them.
  Receipts {
    /// Only receipts involving this hotspot.
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    limit: Option<u32>,
    #[command(flatten)]
    output: Output,
  },
  /// Witness graph of the hotspots inside an h3 cell.
  WitnessHex {
    hex: String,
    #[command(flatten)]
    output: Output,
  },
  /// Witness graph of the hotspots nearest a point.
  WitnessNear {
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    #[arg(long, default_value_t = helium_graph_analysis::DEFAULT_LIMIT)]
    limit: u32,
    #[command(flatten)]
    output: Output,
  },
  /// Payment graph around the top payees.
  PayeesGraph {
    #[command(flatten)]
    window: Window,
    /// total_received or num_payments
    #[arg(long, default_value = "total_received")]
    sized_by: String,
    #[command(flatten)]
    output: Output,
  },
  /// Payment graph around the top payers.
  PayersGraph {
    #[command(flatten)]
    window: Window,
    /// total_paid or num_payments
    #[arg(long, default_value = "total_paid")]
    sized_by: String,
    #[command(flatten)]
    output: Output,
  },
}

#[derive(Args, Debug)]
struct Window {
  #[arg(long)]
  limit: Option<u32>,
  /// Only the last N days.
  #[arg(long, conflicts_with = "min_time")]
  days: Option<i64>,
  /// UTC epoch seconds.
  #[arg(long)]
  min_time: Option<i64>,
  /// UTC epoch seconds. Default: now.
  #[arg(long)]
  max_time: Option<i64>,
}

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

impl Window {
  /// `--days N` ends the window at `--max-time`, or at `now` when that is unset.
  fn to_payment_window(&self, now: i64) -> std::result::Result<PaymentWindow, String> {
    let mut window = PaymentWindow {
      limit: self.limit,
      min_time: self.min_time,
      max_time: self.max_time,
    };
    if let Some(days) = self.days {
      let max_time = self.max_time.unwrap_or(now);
      let min_time = days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|span| max_time.checked_sub(span))
        .ok_or_else(|| format!("--days {days} is out of range"))?;
      window.min_time = Some(min_time);
      window.max_time = Some(max_time);
    }
    Ok(window)
  }
}

#[derive(Args, Debug)]
struct Output {
  /// Render the graph and open it in the browser.
  #[arg(long)]
  plot: bool,
  /// Node attributes to project into a feature matrix (comma separated).
  #[arg(long, value_delimiter = ',')]
  node_features: Vec<String>,
  /// Edge attributes to project into a feature matrix (comma separated).
  #[arg(long, value_delimiter = ',')]
  edge_features: Vec<String>,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .init();

  let cli = Cli::parse();

  // Env var overrides the flag.
  let base_url = env::var(BASE_URL_ENV).ok().unwrap_or(cli.base_url);
  info!(base_url = %base_url, "helium_graph starting");

  let client = match AnalyticsClient::new(base_url) {
    Ok(c) => c,
    Err(e) => {
      eprintln!("Error creating client: {}", e);
      process::exit(1);
    }
  };

  if let Err(e) = run(&client, cli.command) {
    eprintln!("Error: {}", e);
    process::exit(1);
  }
}

fn run(client: &AnalyticsClient, command: Command) -> std::result::Result<(), Box<dyn Error>> {
  match command {
    Command::Receipts {
      address,
      limit,
      output,
    } => {
      let sample = client.recent_witness_receipts(&ReceiptQuery { address, limit })?;
      println!("Receipts: {}", sample.receipts.len());
      let graph = build_graph::<Attributes, _>(&[], &sample.receipts, Some("receipts"))?;
      report(&graph, &output)?;
      if output.plot {
        let path = plotting::plot_graph_simple(&graph)?;
        println!("  Figure: {}", path.display());
      }
    }
    Command::WitnessHex { hex, output } => {
      let graph = client.witness_graph_in_hex(&hex)?.to_graph(Some(&hex))?;
      witness(&graph, &output)?;
    }
    Command::WitnessNear {
      lat,
      lon,
      limit,
      output,
    } => {
      let query = CoordsQuery::new(lat, lon).with_limit(limit);
      let graph = client
        .witness_graph_near_coords(&query)?
        .to_graph(Some("nearby"))?;
      witness(&graph, &output)?;
    }
    Command::PayeesGraph {
      window,
      sized_by,
      output,
    } => {
      let graph = client
        .top_payees_graph(&window.to_payment_window(Utc::now().timestamp())?)?
        .to_graph(Some("payees"))?;
      report(&graph, &output)?;
      if output.plot {
        let path = plotting::plot_payee_graph(&graph, &sized_by)?;
        println!("  Figure: {}", path.display());
      }
    }
    Command::PayersGraph {
      window,
      sized_by,
      output,
    } => {
      let graph = client
        .top_payers_graph(&window.to_payment_window(Utc::now().timestamp())?)?
        .to_graph(Some("payers"))?;
      report(&graph, &output)?;
      if output.plot {
        let path = plotting::plot_payer_graph(&graph, &sized_by)?;
        println!("  Figure: {}", path.display());
      }
    }
  }
  Ok(())
}

fn witness(graph: &DirectedGraph, output: &Output) -> Result<()> {
  report(graph, output)?;
  if output.plot {
    let path = plotting::plot_witness_graph(graph)?;
    println!("  Figure: {}", path.display());
  }
  Ok(())
}

/// Prints graph size and, when features were requested, the projected shapes.
fn report(graph: &DirectedGraph, output: &Output) -> Result<()> {
  info!(nodes = graph.node_count(), edges = graph.edge_count(), "graph built");
  println!("Graph {}", graph.name().unwrap_or("-"));
  println!("  Nodes: {}", graph.node_count());
  println!("  Edges: {}", graph.edge_count());
  if output.node_features.is_empty() && output.edge_features.is_empty() {
    return Ok(());
  }
  let projection = TensorProjection::new(
    output.node_features.iter().cloned(),
    output.edge_features.iter().cloned(),
  );
  let t = projection.project(graph)?;
  println!("  x: {:?}", t.x.shape());
  println!("  e: {:?}", t.e.shape());
  println!("  a: {:?} ({} stored)", t.a.shape(), t.a.nnz());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn window(days: Option<i64>, min_time: Option<i64>, max_time: Option<i64>) -> Window {
    Window {
      limit: None,
      days,
      min_time,
      max_time,
    }
  }

  #[test]
  fn days_end_at_now_by_default() {
    let w = window(Some(2), None, None).to_payment_window(1_000_000).unwrap();
    assert_eq!(w.min_time, Some(1_000_000 - 2 * SECONDS_PER_DAY));
    assert_eq!(w.max_time, Some(1_000_000));
  }

  #[test]
  fn days_count_back_from_max_time() {
    let w = window(Some(1), None, Some(500_000)).to_payment_window(9_000_000).unwrap();
    assert_eq!(w.min_time, Some(500_000 - SECONDS_PER_DAY));
    assert_eq!(w.max_time, Some(500_000));
  }

  #[test]
  fn explicit_bounds_pass_through() {
    let w = window(None, Some(10), None).to_payment_window(99).unwrap();
    assert_eq!((w.min_time, w.max_time, w.limit), (Some(10), None, None));
  }

  #[test]
  fn huge_day_count_is_an_error() {
    let err = window(Some(i64::MAX), None, None).to_payment_window(0).unwrap_err();
    assert!(err.contains("--days"), "{err}");
    assert!(window(Some(1), None, Some(i64::MIN)).to_payment_window(0).is_err());
  }
}
