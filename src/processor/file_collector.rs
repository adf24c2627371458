//! # File Collector Module
//!
//! This module walks the roots given on the command line and collects the
//! candidate files, pruning excluded directories and applying file filters.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::file_filter::FileFilter;

/// Directories that are never descended into.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[".git", "build", "dist", "docs/build", ".ruff_cache", ".vscode", "target"];

/// File collector for directory traversal.
///
/// Exclusion entries are matched against the trailing components of each
/// directory path: `build` prunes every directory named `build`, while
/// `docs/build` prunes only a `build` directory whose parent is `docs`.
pub struct FileCollector {
  exclude_dirs: Vec<PathBuf>,
  filter: Box<dyn FileFilter>,
}

impl FileCollector {
  /// Creates a collector with the default exclusions plus `extra_excludes`.
  pub fn new(extra_excludes: &[String], filter: Box<dyn FileFilter>) -> Self {
    let exclude_dirs = DEFAULT_EXCLUDE_DIRS
      .iter()
      .copied()
      .chain(extra_excludes.iter().map(String::as_str))
      .map(|entry| PathBuf::from(entry.trim_matches('/')))
      .filter(|entry| !entry.as_os_str().is_empty())
      .collect();
    Self { exclude_dirs, filter }
  }

  /// Whether a directory is pruned from the walk.
  pub fn is_excluded_dir(&self, dir: &Path) -> bool {
    self.exclude_dirs.iter().any(|entry| dir.ends_with(entry))
  }

  /// Collects candidate files under every root.
  ///
  /// Fails if any root does not exist. A root that is a file is taken as a
  /// single candidate and bypasses the filters. Results are sorted and
  /// deduplicated.
  pub fn collect(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    for root in roots {
      if !root.exists() {
        bail!("Cannot find {}", root.display());
      }
    }

    let start_time = std::time::Instant::now();
    let mut files = Vec::new();

    for root in roots {
      if root.is_file() {
        files.push(root.clone());
        continue;
      }

      debug!("Scanning directory: {}", root.display());
      self.walk(root, &mut files);
    }

    files.sort();
    files.dedup();

    debug!("Found {} files in {}ms", files.len(), start_time.elapsed().as_millis());

    Ok(files)
  }

  fn walk(&self, root: &Path, files: &mut Vec<PathBuf>) {
    let walker = WalkDir::new(root)
      .follow_links(false)
      .into_iter()
      .filter_entry(|entry| !self.prune(entry));

    for entry in walker {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          warn!("Error walking {}: {}", root.display(), e);
          continue;
        }
      };

      if !entry.file_type().is_file() {
        continue;
      }

      let path = entry.into_path();
      let relative = path.strip_prefix(root).unwrap_or(&path);
      match self.filter.should_process(&path, relative) {
        Ok(result) if result.should_process => files.push(path),
        Ok(_) => {}
        // Leave unreadable files in so the updater reports them.
        Err(e) => {
          debug!("Filter failed for {}: {:#}", path.display(), e);
          files.push(path);
        }
      }
    }
  }

  fn prune(&self, entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && self.is_excluded_dir(entry.path())
  }
}

/// Returns `path` relative to `base` where possible, for display.
pub fn make_relative_path(path: &Path, base: &Path) -> PathBuf {
  let path = path.strip_prefix(".").unwrap_or(path);
  if let Ok(stripped) = path.strip_prefix(base) {
    return stripped.to_path_buf();
  }
  if path.is_absolute() == base.is_absolute()
    && let Some(relative) = pathdiff::diff_paths(path, base)
  {
    return relative;
  }
  path.to_path_buf()
}
