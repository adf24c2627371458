//! # File Filter Module
//!
//! This module contains components for deciding which enumerated files are
//! worth reading: ignore patterns, and a text check based on the guessed
//! content type.

use std::fs::File;
use std::io::Read as _;
use std::path::Path;

use anyhow::{Context, Result};
use content_inspector::inspect;
use tracing::trace;

/// Number of leading bytes sniffed when the content type cannot be guessed
/// from the file name.
pub const SNIFF_LIMIT: usize = 8 * 1024;

/// Non-`text/*` MIME types that are still treated as text.
pub const DEFAULT_ACCEPTED_MIME_TYPES: &[&str] = &[
  "application/json",
  "application/x-msdos-program",
  "application/x-yaml",
  "application/xml",
  "application/xslt+xml",
];

/// Result of a file filtering operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter: Send + Sync {
  /// Determines whether a file should be processed.
  ///
  /// `relative` is the path relative to the root it was found under.
  fn should_process(&self, path: &Path, relative: &Path) -> Result<FilterResult>;
}

/// Filter that excludes files matching glob patterns.
///
/// A pattern matches if it matches either the root-relative path or the bare
/// file name, so `*.lock` skips lock files at any depth.
pub struct IgnoreFilter {
  patterns: Vec<glob::Pattern>,
}

impl IgnoreFilter {
  /// Creates a new IgnoreFilter from a list of glob patterns.
  pub fn from_patterns(patterns: &[String]) -> Result<Self> {
    let patterns = patterns
      .iter()
      .map(|p| glob::Pattern::new(&p.replace('\\', "/")).with_context(|| format!("Invalid glob pattern: {}", p)))
      .collect::<Result<Vec<_>>>()?;
    Ok(Self { patterns })
  }

  pub fn is_ignored(&self, relative: &Path) -> bool {
    let file_name = relative.file_name().map(Path::new);
    self
      .patterns
      .iter()
      .any(|p| p.matches_path(relative) || file_name.is_some_and(|name| p.matches_path(name)))
  }
}

impl FileFilter for IgnoreFilter {
  fn should_process(&self, _path: &Path, relative: &Path) -> Result<FilterResult> {
    if self.is_ignored(relative) {
      trace!("Skipping: {} (matches ignore pattern)", relative.display());
      Ok(FilterResult::skip("Matches ignore pattern"))
    } else {
      Ok(FilterResult::process())
    }
  }
}

/// Filter that keeps only files that look like text.
///
/// The content type is first guessed from the file name; `text/*` and the
/// accepted MIME types pass. Anything else has its leading bytes sniffed, so
/// extension-less scripts and unusual suffixes are still picked up while
/// images and archives are not.
pub struct TextFileFilter {
  accepted_mime_types: Vec<String>,
}

impl TextFileFilter {
  pub fn new(extra_mime_types: &[String]) -> Self {
    let accepted_mime_types = DEFAULT_ACCEPTED_MIME_TYPES
      .iter()
      .map(|m| (*m).to_string())
      .chain(extra_mime_types.iter().map(|m| m.to_ascii_lowercase()))
      .collect();
    Self { accepted_mime_types }
  }

  fn accepts_guess(&self, path: &Path) -> bool {
    mime_guess::from_path(path).iter().any(|mime| {
      mime.type_() == mime_guess::mime::TEXT || self.accepted_mime_types.iter().any(|m| m == mime.essence_str())
    })
  }
}

impl Default for TextFileFilter {
  fn default() -> Self {
    Self::new(&[])
  }
}

impl FileFilter for TextFileFilter {
  fn should_process(&self, path: &Path, relative: &Path) -> Result<FilterResult> {
    if self.accepts_guess(path) {
      return Ok(FilterResult::process());
    }

    let mut buf = Vec::with_capacity(SNIFF_LIMIT);
    File::open(path)
      .and_then(|file| file.take(SNIFF_LIMIT as u64).read_to_end(&mut buf))
      .with_context(|| format!("Failed to read file: {}", path.display()))?;

    if inspect(&buf).is_text() {
      Ok(FilterResult::process())
    } else {
      trace!("Skipping: {} (not a text file)", relative.display());
      Ok(FilterResult::skip("Not a text file"))
    }
  }
}

/// Filter that combines multiple filters.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }

  pub fn add_filter(&mut self, filter: Box<dyn FileFilter>) {
    self.filters.push(filter);
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path, relative: &Path) -> Result<FilterResult> {
    for filter in &self.filters {
      let result = filter.should_process(path, relative)?;
      if !result.should_process {
        return Ok(result);
      }
    }
    Ok(FilterResult::process())
  }
}

/// Constructs the standard filter chain: ignore patterns, then the text
/// check.
pub fn create_default_filter(ignore_patterns: &[String], extra_mime_types: &[String]) -> Result<CompositeFilter> {
  let filters: Vec<Box<dyn FileFilter>> = vec![
    Box::new(IgnoreFilter::from_patterns(ignore_patterns)?),
    Box::new(TextFileFilter::new(extra_mime_types)),
  ];
  Ok(CompositeFilter::new(filters))
}
