//! Node placement: coordinates from attributes, or a force-directed layout.

use std::collections::HashSet;
use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::types::{Attributes, DirectedGraph, as_point};

const SPRING_STEPS: usize = 500;
const SPRING_DT: f32 = 0.016;
const SEED_RADIUS: f64 = 100.0;

/// `(x, y)` per node, in node iteration order.
pub type Positions = Vec<(f64, f64)>;

/// Reads each node's `coordinates` attribute, falling back to `geo_location.coordinates`.
pub fn coordinate_layout(graph: &DirectedGraph) -> Result<Positions> {
  graph
    .nodes()
    .map(|node| {
      node_coordinates(&node.attributes)
        .ok_or_else(|| Error::missing_node_attribute(&node.key, "coordinates"))
    })
    .collect()
}

pub(crate) fn node_coordinates(attributes: &Attributes) -> Option<(f64, f64)> {
  attributes.get("coordinates").and_then(as_point).or_else(|| {
    attributes
      .get("geo_location")
      .and_then(|geo| geo.get("coordinates"))
      .and_then(as_point)
  })
}

/// Force-directed layout scaled into `[-1, 1]` on both axes and centred on the origin.
///
/// Nodes start evenly spaced on a circle, so the result is deterministic. Arc direction and
/// self-loops are ignored.
#[instrument(level = "trace", skip(graph))]
pub fn spring_layout(graph: &DirectedGraph) -> Positions {
  let n = graph.node_count();
  if n == 0 {
    return Vec::new();
  }
  let seeds = circle(n);

  let mut sim: ForceGraph<usize, ()> = ForceGraph::new(SimulationParameters {
    force_charge: 150.0,
    force_spring: 0.05,
    force_max: 100.0,
    node_speed: 3000.0,
    damping_factor: 0.9,
  });
  let handles: Vec<_> = seeds
    .iter()
    .enumerate()
    .map(|(i, &(x, y))| {
      sim.add_node(NodeData {
        x: x as f32,
        y: y as f32,
        mass: 10.0,
        is_anchor: false,
        user_data: i,
      })
    })
    .collect();

  let mut linked = HashSet::new();
  for (a, b) in graph.arcs() {
    if a == b || !linked.insert((a.min(b), a.max(b))) {
      continue;
    }
    sim.add_edge(handles[a], handles[b], EdgeData::default());
  }

  for _ in 0..SPRING_STEPS {
    sim.update(SPRING_DT);
  }

  let mut positions = seeds.clone();
  sim.visit_nodes(|node| {
    positions[node.data.user_data] = (node.x() as f64, node.y() as f64);
  });
  if positions.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
    debug!("force simulation diverged, keeping circle layout");
    positions = seeds;
  }
  rescale(&mut positions);
  positions
}

fn circle(n: usize) -> Positions {
  (0..n)
    .map(|i| {
      let angle = i as f64 * 2.0 * PI / n as f64;
      (SEED_RADIUS * angle.cos(), SEED_RADIUS * angle.sin())
    })
    .collect()
}

/// Centres on the mean and divides by the largest absolute coordinate.
pub(crate) fn rescale(positions: &mut Positions) {
  if positions.is_empty() {
    return;
  }
  let n = positions.len() as f64;
  let (sx, sy) = positions
    .iter()
    .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
  let (mx, my) = (sx / n, sy / n);
  let mut extent: f64 = 0.0;
  for p in positions.iter_mut() {
    p.0 -= mx;
    p.1 -= my;
    extent = extent.max(p.0.abs()).max(p.1.abs());
  }
  if extent > 0.0 {
    for p in positions.iter_mut() {
      p.0 /= extent;
      p.1 /= extent;
    }
  }
}

