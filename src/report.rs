//! # Report Module
//!
//! This module provides functionality for generating reports of a copyright
//! update run in JSON or CSV.
//!
//! It captures what happened to each candidate file (updated, already
//! current, no notice, failed) along with the line numbers that changed and
//! the lines that could not be revised.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Information about a processed file for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// Outcome for the file
  pub action: FileAction,
  /// 1-based numbers of the lines whose years were extended
  pub changed_lines: Vec<usize>,
  /// Candidate lines that could not be revised
  pub line_failures: Vec<LineFailure>,
  /// Why the file as a whole could not be processed, if it could not
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl FileReport {
  pub const fn new(path: PathBuf, action: FileAction) -> Self {
    Self {
      path,
      action,
      changed_lines: Vec::new(),
      line_failures: Vec::new(),
      error: None,
    }
  }

  /// A report for a file that could not be read or written.
  pub fn failed(path: PathBuf, error: impl Into<String>) -> Self {
    Self {
      error: Some(error.into()),
      ..Self::new(path, FileAction::Failed)
    }
  }
}

/// A candidate line that could not be revised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFailure {
  /// 1-based line number
  pub line: usize,
  /// The revise error, rendered
  pub error: String,
}

/// Possible outcomes for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileAction {
  /// At least one notice was extended (or would be, in a dry run)
  Updated,
  /// Notices were found but already include the target year
  Unchanged,
  /// No line contains both the symbol and the owner
  NoNotice,
  /// The file could not be read or written
  Failed,
}

impl FileAction {
  pub const fn as_str(self) -> &'static str {
    match self {
      FileAction::Updated => "updated",
      FileAction::Unchanged => "unchanged",
      FileAction::NoNotice => "no-notice",
      FileAction::Failed => "failed",
    }
  }
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
  /// JSON format for machine readability
  Json,
  /// CSV format for spreadsheet compatibility
  Csv,
}

impl std::fmt::Display for ReportFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ReportFormat::Json => write!(f, "JSON"),
      ReportFormat::Csv => write!(f, "CSV"),
    }
  }
}

/// Summary of the processing results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingSummary {
  /// Total number of candidate files looked at
  pub total_files: usize,
  /// Files whose notices were extended
  pub files_updated: usize,
  /// Files whose notices were already current
  pub files_unchanged: usize,
  /// Files without any notice for the owner
  pub files_without_notice: usize,
  /// Files that could not be read or written
  pub files_failed: usize,
  /// Candidate lines that could not be revised, across all files
  pub line_failures: usize,
  /// Total processing time
  #[serde(skip_serializing)]
  pub processing_time: Duration,
  /// Processing time in seconds for serialization
  #[serde(rename = "processing_time_seconds")]
  pub processing_time_secs: f64,
}

impl ProcessingSummary {
  /// Create a ProcessingSummary from a collection of FileReports
  pub fn from_reports(files: &[FileReport], processing_time: Duration) -> Self {
    let mut summary = Self {
      total_files: files.len(),
      files_updated: 0,
      files_unchanged: 0,
      files_without_notice: 0,
      files_failed: 0,
      line_failures: 0,
      processing_time,
      processing_time_secs: processing_time.as_secs_f64(),
    };

    for file in files {
      match file.action {
        FileAction::Updated => summary.files_updated += 1,
        FileAction::Unchanged => summary.files_unchanged += 1,
        FileAction::NoNotice => summary.files_without_notice += 1,
        FileAction::Failed => summary.files_failed += 1,
      }
      summary.line_failures += file.line_failures.len();
    }

    summary
  }
}

/// Report Generator for creating update reports
pub struct ReportGenerator<'a> {
  /// Format of the report to generate
  format: ReportFormat,
  /// Path where the report will be saved
  output_path: &'a Path,
}

impl<'a> ReportGenerator<'a> {
  pub const fn new(format: ReportFormat, output_path: &'a Path) -> Self {
    Self { format, output_path }
  }

  /// Render the report and write it to the output path.
  pub fn generate(&self, files: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
    let content = self.render(files, summary)?;

    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write {} report to {}", self.format, self.output_path.display()))
  }

  /// Render the report without writing it.
  pub fn render(&self, files: &[FileReport], summary: &ProcessingSummary) -> Result<String> {
    match self.format {
      ReportFormat::Json => generate_json(files, summary),
      ReportFormat::Csv => Ok(generate_csv(files, summary)),
    }
  }
}

fn generate_json(files: &[FileReport], summary: &ProcessingSummary) -> Result<String> {
  let report = serde_json::json!({
    "generated_at": Local::now().to_rfc3339(),
    "summary": summary,
    "files": files,
  });

  serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")
}

fn generate_csv(files: &[FileReport], summary: &ProcessingSummary) -> String {
  let mut csv = String::new();

  csv.push_str("file_path,action,changed_lines,failed_lines,notes\n");

  for file in files {
    let path = escape_csv(&file.path.to_string_lossy());
    let changed = join_numbers(file.changed_lines.iter().copied());
    let failed = join_numbers(file.line_failures.iter().map(|f| f.line));
    let note = match &file.error {
      Some(error) => escape_csv(error),
      None => file
        .line_failures
        .first()
        .map(|f| escape_csv(&f.error))
        .unwrap_or_default(),
    };

    csv.push_str(&format!(
      "{},{},{},{},{}\n",
      path,
      file.action.as_str(),
      changed,
      failed,
      note
    ));
  }

  csv.push_str("\n# Summary\n");
  csv.push_str(&format!("Total files,{}\n", summary.total_files));
  csv.push_str(&format!("Files updated,{}\n", summary.files_updated));
  csv.push_str(&format!("Files already current,{}\n", summary.files_unchanged));
  csv.push_str(&format!("Files without notice,{}\n", summary.files_without_notice));
  csv.push_str(&format!("Files failed,{}\n", summary.files_failed));
  csv.push_str(&format!("Lines failed,{}\n", summary.line_failures));
  csv.push_str(&format!(
    "Processing time (seconds),{:.2}\n",
    summary.processing_time.as_secs_f64()
  ));
  csv.push_str(&format!("Generated on,{}\n", Local::now().format("%Y-%m-%d %H:%M:%S")));

  csv
}

/// Line numbers joined with `;` so they stay in one CSV column.
fn join_numbers(numbers: impl Iterator<Item = usize>) -> String {
  numbers.map(|n| n.to_string()).collect::<Vec<_>>().join(";")
}

fn escape_csv(field: &str) -> String {
  field.replace(',', "%2C").replace('\n', " ")
}
