#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use copyright_bump::logging::Reporter;
use copyright_bump::notice::{NoticeMarkers, TargetYear};
use copyright_bump::processor::{Updater, UpdaterConfig};

/// Fixed target year so results do not depend on the clock.
pub const THIS_YEAR: &str = "2024";
/// The year before [`THIS_YEAR`].
pub const LAST_YEAR: &str = "2023";

pub fn this_year() -> TargetYear {
  THIS_YEAR.parse().expect("valid year")
}

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
  Debug,
  Info,
  Error,
}

/// Reporter that keeps every message for later assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
  messages: Mutex<Vec<(Level, String)>>,
}

impl RecordingReporter {
  pub fn messages(&self, level: Level) -> Vec<String> {
    self
      .messages
      .lock()
      .expect("reporter lock")
      .iter()
      .filter(|(l, _)| *l == level)
      .map(|(_, m)| m.clone())
      .collect()
  }

  fn push(&self, level: Level, message: &str) {
    self
      .messages
      .lock()
      .expect("reporter lock")
      .push((level, message.to_string()));
  }
}

impl Reporter for RecordingReporter {
  fn debug(&self, message: &str) {
    self.push(Level::Debug, message);
  }

  fn info(&self, message: &str) {
    self.push(Level::Info, message);
  }

  fn error(&self, message: &str) {
    self.push(Level::Error, message);
  }
}

/// Builds an updater for `owner` with the default symbol and [`THIS_YEAR`].
pub fn make_updater(owner: &str, dry_run: bool) -> (Arc<Updater>, Arc<RecordingReporter>) {
  let reporter = Arc::new(RecordingReporter::default());
  let markers = NoticeMarkers::new("(C)", owner).expect("valid markers");
  let config = UpdaterConfig {
    dry_run,
    ..UpdaterConfig::new(markers, this_year(), Arc::clone(&reporter) as Arc<dyn Reporter>)
  };
  (Arc::new(Updater::new(config)), reporter)
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(path)
}

pub fn read_file(path: &Path) -> Result<String> {
  fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
