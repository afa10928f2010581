//! Plotly figure model and its HTML rendering.
//!
//! Field names follow Plotly's JSON schema so a serialized [`Figure`] can be handed straight to
//! `Plotly.newPlot`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use super::viewer;
use crate::error::Result;
use crate::types::DirectedGraph;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Default marker diameter in pixels.
pub const DEFAULT_MARKER_SIZE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
  pub width: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
  pub thickness: f64,
  pub title: ColorBarTitle,
  pub xanchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBarTitle {
  pub text: String,
  pub side: String,
}

impl ColorBar {
  pub fn titled(text: &str) -> Self {
    Self {
      thickness: 15.0,
      title: ColorBarTitle {
        text: text.to_string(),
        side: "right".to_string(),
      },
      xanchor: "left".to_string(),
    }
  }
}

/// One size for every marker, or one per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerSize {
  Uniform(f64),
  PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
  pub showscale: bool,
  pub colorscale: String,
  pub reversescale: bool,
  /// Colour value per point; `None` leaves the point uncoloured.
  pub color: Vec<Option<f64>>,
  pub size: MarkerSize,
  pub colorbar: ColorBar,
  pub line: Line,
}

impl Marker {
  /// Reversed `YlGnBu` colour scale with a titled colour bar.
  pub fn scaled(colorbar_title: &str) -> Self {
    Self {
      showscale: true,
      colorscale: "YlGnBu".to_string(),
      reversescale: true,
      color: Vec::new(),
      size: MarkerSize::Uniform(DEFAULT_MARKER_SIZE),
      colorbar: ColorBar::titled(colorbar_title),
      line: Line {
        width: 2.0,
        color: None,
      },
    }
  }
}

/// A `scatter` trace. Line segments are separated by `null` coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
  #[serde(rename = "type")]
  pub kind: String,
  pub x: Vec<Option<f64>>,
  pub y: Vec<Option<f64>>,
  pub mode: String,
  pub hoverinfo: String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub text: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub line: Option<Line>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub marker: Option<Marker>,
}

impl ScatterTrace {
  /// One combined line trace for every arc, endpoints looked up in `positions` by node position.
  pub fn edges(graph: &DirectedGraph, positions: &[(f64, f64)]) -> Self {
    let mut x = Vec::with_capacity(graph.edge_count() * 3);
    let mut y = Vec::with_capacity(graph.edge_count() * 3);
    for (a, b) in graph.arcs() {
      let (x0, y0) = positions[a];
      let (x1, y1) = positions[b];
      x.extend([Some(x0), Some(x1), None]);
      y.extend([Some(y0), Some(y1), None]);
    }
    Self {
      kind: "scatter".to_string(),
      x,
      y,
      mode: "lines".to_string(),
      hoverinfo: "none".to_string(),
      text: Vec::new(),
      line: Some(Line {
        width: 0.5,
        color: Some("#888".to_string()),
      }),
      marker: None,
    }
  }

  /// Marker trace with one point per node, hover showing `text`.
  pub fn nodes(positions: &[(f64, f64)], text: Vec<String>, marker: Marker) -> Self {
    Self {
      kind: "scatter".to_string(),
      x: positions.iter().map(|&(x, _)| Some(x)).collect(),
      y: positions.iter().map(|&(_, y)| Some(y)).collect(),
      mode: "markers".to_string(),
      hoverinfo: "text".to_string(),
      text,
      line: None,
      marker: Some(marker),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
  pub showgrid: bool,
  pub zeroline: bool,
  pub showticklabels: bool,
}

impl Axis {
  pub fn hidden() -> Self {
    Self {
      showgrid: false,
      zeroline: false,
      showticklabels: false,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
  pub b: u32,
  pub l: u32,
  pub r: u32,
  pub t: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
  pub text: String,
  pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
  pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLayout {
  pub title: Title,
  pub showlegend: bool,
  pub hovermode: String,
  pub margin: Margin,
  pub xaxis: Axis,
  pub yaxis: Axis,
}

impl PlotLayout {
  /// Legend-free layout with hidden axes and closest-point hover.
  pub fn network(title: &str) -> Self {
    Self {
      title: Title {
        text: title.to_string(),
        font: Font { size: 16 },
      },
      showlegend: false,
      hovermode: "closest".to_string(),
      margin: Margin {
        b: 20,
        l: 5,
        r: 5,
        t: 40,
      },
      xaxis: Axis::hidden(),
      yaxis: Axis::hidden(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
  pub data: Vec<ScatterTrace>,
  pub layout: PlotLayout,
}

impl Figure {
  pub fn title(&self) -> &str {
    &self.layout.title.text
  }

  /// The marker trace, if the figure has one.
  pub fn node_trace(&self) -> Option<&ScatterTrace> {
    self.data.iter().find(|t| t.marker.is_some())
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string(self)?)
  }

  /// Standalone page that loads Plotly.js and draws the figure.
  pub fn to_html(&self) -> Result<String> {
    let json = script_safe(&self.to_json()?);
    Ok(format!(
      r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_JS}"></script>
</head>
<body>
<div id="figure" style="width:100%;height:95vh;"></div>
<script>
const fig = {json};
Plotly.newPlot("figure", fig.data, fig.layout);
</script>
</body>
</html>
"#,
      title = html_text(self.title()),
    ))
  }

  /// Writes the HTML page to `path`, creating parent directories.
  #[instrument(level = "trace", skip(self, path))]
  pub fn write_html(&self, path: &Path) -> Result<()> {
    write_page(path, &self.to_html()?)
  }

  /// Writes the page to the temp directory and opens it in the system viewer.
  pub fn show(&self) -> Result<PathBuf> {
    let path = viewer::temp_page_path("figure");
    self.write_html(&path)?;
    viewer::open(&path)?;
    Ok(path)
  }
}

pub(crate) fn write_page(path: &Path, html: &str) -> Result<()> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, html)?;
  debug!(path = %path.display(), bytes = html.len(), "wrote page");
  Ok(())
}

/// Keeps embedded JSON from closing the surrounding `<script>` element.
pub(crate) fn script_safe(json: &str) -> String {
  json.replace("</", "<\\/")
}

fn html_text(s: &str) -> String {
  s.replace("<br>", " ")
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .trim()
    .to_string()
}
