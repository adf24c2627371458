//! # Processor Module
//!
//! This module contains the file updater: it reads candidate files, revises
//! every copyright line that names the configured owner, and writes changed
//! files back.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`file_collector`] - Directory traversal and exclusion handling
//!
//! The [`Updater`] struct is the main entry point for all file operations.
//! It holds no mutable state, so one instance is shared across the blocking
//! tasks that process files concurrently.

pub mod file_collector;
pub mod file_io;

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
pub use file_collector::{DEFAULT_EXCLUDE_DIRS, FileCollector, make_relative_path};
pub use file_io::FileIO;
use futures::StreamExt as _;
use tracing::trace;

use crate::diff::DiffManager;
use crate::logging::Reporter;
use crate::notice::{NoticeMarkers, TargetYear};
use crate::report::{FileAction, FileReport, LineFailure};

/// Configuration for creating an [`Updater`].
pub struct UpdaterConfig {
  pub markers: NoticeMarkers,
  pub target: TargetYear,
  pub reporter: Arc<dyn Reporter>,

  /// Report changes without writing them
  pub dry_run: bool,

  /// Diff output for dry runs
  pub diff_manager: Option<DiffManager>,

  /// Maximum number of files processed at once; defaults to the CPU count
  pub jobs: Option<usize>,
}

impl UpdaterConfig {
  /// Creates a new UpdaterConfig with required fields and sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// UpdaterConfig {
  ///     dry_run: true,
  ///     ..UpdaterConfig::new(markers, target, reporter)
  /// }
  /// ```
  pub fn new(markers: NoticeMarkers, target: TargetYear, reporter: Arc<dyn Reporter>) -> Self {
    Self {
      markers,
      target,
      reporter,
      dry_run: false,
      diff_manager: None,
      jobs: None,
    }
  }
}

/// Outcome of revising the lines of one file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineRevisions {
  /// Number of lines containing both the symbol and the owner
  pub candidates: usize,
  /// Zero-based index and new text of every line that changed
  pub changed: Vec<(usize, String)>,
  /// Candidate lines that could not be revised
  pub failures: Vec<LineFailure>,
}

/// Updates the copyright notices of whole files.
pub struct Updater {
  markers: NoticeMarkers,
  target: TargetYear,
  reporter: Arc<dyn Reporter>,
  dry_run: bool,
  diff_manager: Option<DiffManager>,
  jobs: usize,
}

impl Updater {
  pub fn new(config: UpdaterConfig) -> Self {
    Self {
      markers: config.markers,
      target: config.target,
      reporter: config.reporter,
      dry_run: config.dry_run,
      diff_manager: config.diff_manager.filter(DiffManager::is_enabled),
      jobs: config.jobs.unwrap_or_else(num_cpus::get).max(1),
    }
  }

  pub const fn target(&self) -> &TargetYear {
    &self.target
  }

  pub const fn is_dry_run(&self) -> bool {
    self.dry_run
  }

  /// Revises every candidate line in `lines`.
  ///
  /// Lines are left untouched; the caller applies [`LineRevisions::changed`].
  /// A line that cannot be revised is reported at error level and recorded
  /// in [`LineRevisions::failures`]; the remaining lines are still revised.
  pub fn revise_lines(&self, path: &Path, lines: &[String]) -> LineRevisions {
    let mut revisions = LineRevisions::default();

    for (index, line) in lines.iter().enumerate() {
      if !self.markers.is_candidate(line) {
        continue;
      }
      revisions.candidates += 1;
      let line_number = index + 1;

      match self.markers.revise(line, &self.target) {
        Ok(revised) => {
          self.reporter.debug(&format!(
            "({}, {}):\n---: {:?}\n+++: {:?}",
            path.display(),
            line_number,
            line,
            revised
          ));
          if let Cow::Owned(new_line) = revised
            && new_line != *line
          {
            revisions.changed.push((index, new_line));
          }
        }
        Err(e) => {
          self
            .reporter
            .error(&format!("{}:{}: {} in {:?}", path.display(), line_number, e, line.trim_end()));
          revisions.failures.push(LineFailure {
            line: line_number,
            error: e.to_string(),
          });
        }
      }
    }

    revisions
  }

  /// Updates the notices of a single file.
  ///
  /// The file is read in full and, if any line changed, written back in one
  /// write. In dry-run mode nothing is written and the diff (if enabled) is
  /// shown instead.
  ///
  /// # Errors
  ///
  /// Fails if the file cannot be read as UTF-8 text or cannot be written.
  /// Line-level problems are not errors; they are part of the report.
  pub fn update_file(&self, path: &Path) -> Result<FileReport> {
    let mut lines = FileIO::read_lines(path)?;
    let revisions = self.revise_lines(path, &lines);

    if revisions.candidates == 0 {
      trace!("No notice for {:?}: {}", self.markers.owner(), path.display());
      return Ok(FileReport::new(path.to_path_buf(), FileAction::NoNotice));
    }

    if revisions.changed.is_empty() {
      self
        .reporter
        .info(&format!("No changes necessary: {}", path.display()));
      return Ok(FileReport {
        line_failures: revisions.failures,
        ..FileReport::new(path.to_path_buf(), FileAction::Unchanged)
      });
    }

    let original = match (&self.diff_manager, self.dry_run) {
      (Some(_), true) => Some(lines.concat()),
      _ => None,
    };

    let mut changed_lines = Vec::with_capacity(revisions.changed.len());
    for (index, new_line) in revisions.changed {
      lines[index] = new_line;
      changed_lines.push(index + 1);
    }

    self.reporter.info(&format!("Update: {}", path.display()));

    if self.dry_run {
      self.reporter.info("Dry run: original file not changed.");
      if let (Some(diff_manager), Some(original)) = (&self.diff_manager, original) {
        diff_manager.display_diff(path, &original, &lines.concat())?;
      }
    } else {
      FileIO::write_lines(path, &lines)?;
    }

    Ok(FileReport {
      changed_lines,
      line_failures: revisions.failures,
      ..FileReport::new(path.to_path_buf(), FileAction::Updated)
    })
  }

  /// Updates many files concurrently.
  ///
  /// Each file runs on a blocking task; at most `jobs` run at once. A file
  /// that cannot be read or written yields a [`FileAction::Failed`] report
  /// and does not stop the others. Reports are returned sorted by path.
  pub async fn process(self: &Arc<Self>, files: Vec<PathBuf>) -> Vec<FileReport> {
    let mut reports: Vec<FileReport> = futures::stream::iter(files)
      .map(|path| {
        let updater = Arc::clone(self);
        async move {
          let task_path = path.clone();
          let outcome = tokio::task::spawn_blocking(move || {
            let result = updater.update_file(&task_path);
            if let Err(ref e) = result {
              updater.reporter.error(&format!("{:#}", e));
            }
            result
          })
          .await;

          match outcome {
            Ok(Ok(report)) => report,
            Ok(Err(e)) => FileReport::failed(path, format!("{:#}", e)),
            Err(e) => FileReport::failed(path, format!("Task failed: {}", e)),
          }
        }
      })
      .buffer_unordered(self.jobs)
      .collect()
      .await;

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    reports
  }
}
