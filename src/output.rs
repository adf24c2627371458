//! # Output Module
//!
//! This module centralizes all user-facing output for copyright-bump.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! ## Design Goals
//!
//! - **Informative**: Show what changed without requiring flags
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: In quiet mode only bare paths of changed files reach
//!   stdout

use std::path::{Path, PathBuf};

use owo_colors::{OwoColorize, Stream};

use crate::logging::OutputMode;
use crate::processor::make_relative_path;
use crate::report::{FileAction, FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Success/current
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Year updated
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Writes the run summary to stdout.
pub struct Printer {
  mode: OutputMode,
  /// Paths are shown relative to this directory when set
  base: Option<PathBuf>,
}

impl Printer {
  pub const fn new(mode: OutputMode, base: Option<PathBuf>) -> Self {
    Self { mode, base }
  }

  /// Print "Checking N files..." (dry run) or "Processing N files...".
  pub fn print_start_message(&self, file_count: usize, dry_run: bool) {
    if self.mode.is_quiet() {
      return;
    }
    println!("{}", start_message(file_count, dry_run));
  }

  /// Print a blank line for visual separation (respects quiet mode).
  pub fn print_blank_line(&self) {
    if !self.mode.is_quiet() {
      println!();
    }
  }

  /// Print the files whose notices were (or would be) extended.
  ///
  /// In quiet mode only the bare paths are printed.
  pub fn print_updated_files(&self, files: &[&FileReport], dry_run: bool) {
    if files.is_empty() {
      return;
    }

    if self.mode.is_quiet() {
      for file in files {
        println!("{}", self.display_path(&file.path));
      }
      return;
    }

    let count = files.len();
    let header = if dry_run {
      format!("{} {} would be updated:", count, plural(count))
    } else {
      format!("Updated year in {} {}:", count, plural(count))
    };
    println!(
      "{} {}",
      symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
      header
    );

    self.print_list(files.iter().map(|f| self.display_path(&f.path)), count);
  }

  /// Print the files that failed, or that contain lines that could not be
  /// revised, with the first problem of each.
  pub fn print_failures(&self, files: &[&FileReport]) {
    if self.mode.is_quiet() || files.is_empty() {
      return;
    }

    let count = files.len();
    println!(
      "{} {} {} with problems:",
      symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
      count,
      plural(count)
    );

    self.print_list(
      files
        .iter()
        .map(|f| format!("{} ({})", self.display_path(&f.path), problem_note(f))),
      count,
    );
  }

  /// Print the success message when nothing needed changing.
  pub fn print_all_current(&self, owner: &str) {
    if self.mode.is_quiet() {
      return;
    }

    println!(
      "{} All copyright notices for {} are current.",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      owner
    );
  }

  /// Print the processing summary.
  ///
  /// In verbose mode, also shows timing.
  pub fn print_summary(&self, summary: &ProcessingSummary) {
    if self.mode.is_quiet() {
      return;
    }

    let failed = summary.files_failed + summary.line_failures;
    let failed_str = if failed > 0 {
      failed.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    } else {
      failed.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
    };

    let mut line = format!(
      "Summary: {} updated, {} current, {} without notice, {} failed",
      summary.files_updated.if_supports_color(Stream::Stdout, |s| s.cyan()),
      summary.files_unchanged.if_supports_color(Stream::Stdout, |s| s.cyan()),
      summary.files_without_notice.if_supports_color(Stream::Stdout, |s| s.dimmed()),
      failed_str,
    );

    if self.mode.is_verbose() {
      line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
    }

    println!("{}", line);
  }

  /// Print a hint for the user about what to do next.
  pub fn print_hint(&self, message: &str) {
    if self.mode.is_quiet() {
      return;
    }

    println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
  }

  fn print_list(&self, entries: impl Iterator<Item = String>, count: usize) {
    let limit = if self.mode.is_verbose() {
      count
    } else {
      DEFAULT_FILE_LIST_LIMIT
    };

    for entry in entries.take(limit) {
      println!("  {}", entry);
    }

    if count > limit {
      println!(
        "  {}",
        format!("... and {} more (use -v to see all)", count - limit).if_supports_color(Stream::Stdout, |s| s.dimmed())
      );
    }
  }

  fn display_path(&self, path: &Path) -> String {
    match self.base {
      Some(ref base) => make_relative_path(path, base).display().to_string(),
      None => path.display().to_string(),
    }
  }
}

/// File reports grouped by outcome, for output.
pub struct CategorizedReports<'a> {
  pub updated: Vec<&'a FileReport>,
  pub current: Vec<&'a FileReport>,
  /// Failed files, plus files with at least one line that could not be
  /// revised
  pub problems: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  pub fn from_reports(reports: &'a [FileReport]) -> Self {
    let mut updated = Vec::new();
    let mut current = Vec::new();
    let mut problems = Vec::new();

    for report in reports {
      match report.action {
        FileAction::Updated => updated.push(report),
        FileAction::Unchanged => current.push(report),
        FileAction::NoNotice | FileAction::Failed => {}
      }
      if report.action == FileAction::Failed || !report.line_failures.is_empty() {
        problems.push(report);
      }
    }

    Self {
      updated,
      current,
      problems,
    }
  }
}

fn start_message(file_count: usize, dry_run: bool) -> String {
  let verb = if dry_run { "Checking" } else { "Processing" };
  format!("{} {} {}...", verb, file_count, plural(file_count))
}

const fn plural(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

fn problem_note(report: &FileReport) -> String {
  if let Some(ref error) = report.error {
    return error.clone();
  }
  match report.line_failures.as_slice() {
    [] => String::new(),
    [only] => format!("line {}: {}", only.line, only.error),
    [first, rest @ ..] => format!("line {}: {}; {} more", first.line, first.error, rest.len()),
  }
}
