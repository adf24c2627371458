//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! It encapsulates synchronous file operations.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
///
/// Files are handled as lists of lines that keep their terminators, so
/// joining the lines back together reproduces the file byte for byte.
pub struct FileIO;

impl FileIO {
  /// Reads a file as UTF-8 and splits it into lines.
  ///
  /// Each line keeps its `\n` (and any `\r` before it). A final line without
  /// a terminator is kept as-is. An empty file yields no lines.
  pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(split_lines(&content))
  }

  /// Writes lines back in a single write.
  pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    std::fs::write(path, lines.concat()).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}

/// Splits text into lines, each keeping its terminator.
pub fn split_lines(content: &str) -> Vec<String> {
  content.split_inclusive('\n').map(str::to_owned).collect()
}
