//! # Diff Module
//!
//! This module renders the changes a dry run would make, as line diffs
//! between a file's original and revised content.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use similar::{ChangeTag, TextDiff};

/// Manages diff creation and rendering for copyright year changes.
///
/// This struct handles:
/// - Generating diffs between original and revised content
/// - Displaying diffs to stderr
/// - Appending diffs to a file
#[derive(Debug, Clone, Default)]
pub struct DiffManager {
  /// Whether to show diffs on stderr
  pub show_diff: bool,

  /// Path to append diffs to
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether this manager produces any output at all.
  pub const fn is_enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates the save file so a run starts from an empty diff.
  pub fn init(&self) -> Result<()> {
    if let Some(ref path) = self.save_diff_path {
      std::fs::write(path, "").with_context(|| format!("Failed to create diff file: {}", path.display()))?;
    }
    Ok(())
  }

  /// Renders the diff between `original` and `revised` for `path`.
  ///
  /// Only changed lines are included, each prefixed with `-` or `+`.
  pub fn render(path: &Path, original: &str, revised: &str) -> String {
    let diff = TextDiff::from_lines(original, revised);

    let mut diff_content = format!("Diff for {}:\n", path.display());

    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => continue,
      };
      diff_content.push_str(sign);
      diff_content.push_str(change.value());
      if change.missing_newline() {
        diff_content.push('\n');
      }
    }

    diff_content
  }

  /// Displays and/or saves the diff for one file.
  ///
  /// Multiple diffs from different files are appended to the same save file.
  pub fn display_diff(&self, path: &Path, original: &str, revised: &str) -> Result<()> {
    if !self.is_enabled() {
      return Ok(());
    }

    let diff_content = Self::render(path, original, revised);

    if self.show_diff {
      eprintln!("{diff_content}");
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file: {}", diff_path.display()))?;
      writeln!(file, "{diff_content}").with_context(|| format!("Failed to write diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }
}
