//! Opens rendered pages in the user's browser.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{info, instrument};

use crate::error::{Error, Result};

/// Environment variable naming the viewer command (`firefox`, `open -a Safari`, ...).
pub const BROWSER_ENV: &str = "BROWSER";

/// Viewer command line for `browser`, or the platform opener when unset or blank.
pub(crate) fn viewer_command(browser: Option<&str>) -> Vec<String> {
  if let Some(cmd) = browser.filter(|b| !b.trim().is_empty()) {
    return cmd.split_whitespace().map(String::from).collect();
  }
  let platform: &[&str] = if cfg!(target_os = "macos") {
    &["open"]
  } else if cfg!(windows) {
    &["cmd", "/C", "start", ""]
  } else {
    &["xdg-open"]
  };
  platform.iter().map(|s| s.to_string()).collect()
}

/// Fresh path under the temp directory for a page of the given kind.
pub(crate) fn temp_page_path(kind: &str) -> PathBuf {
  let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.f");
  std::env::temp_dir().join(format!(
    "helium-graph-{kind}-{stamp}-{}.html",
    std::process::id()
  ))
}

/// Spawns the viewer on `path` without waiting for it.
#[instrument(level = "trace")]
pub fn open(path: &Path) -> Result<()> {
  let browser = std::env::var(BROWSER_ENV).ok();
  let parts = viewer_command(browser.as_deref());
  let Some((bin, args)) = parts.split_first() else {
    return Err(Error::Io(std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      "viewer command is empty",
    )));
  };
  Command::new(bin)
    .args(args)
    .arg(path)
    .stdin(Stdio::null())
    .stdout(Stdio::null())
    .stderr(Stdio::null())
    .spawn()?;
  info!(path = %path.display(), viewer = %bin, "opened page");
  Ok(())
}
