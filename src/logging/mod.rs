//! # Logging Module
//!
//! This module provides logging utilities for copyright-bump, including:
//! - `tracing` subscriber setup driven by the `-q`/`-v` flags
//! - The [`Reporter`] collaborator that the file updater logs through
//! - Color and output mode selection for user-facing output
//!
//! Diagnostic logs go to stderr; the summary printed by the CLI goes to
//! stdout for better pipeline integration.
//!
//! ## Example
//!
//! ```rust
//! use copyright_bump::logging::{ColorMode, Reporter, TracingReporter, init_tracing};
//!
//! // -v: show info-level diagnostics
//! init_tracing(false, 1);
//! ColorMode::Auto.apply();
//!
//! let reporter = TracingReporter;
//! reporter.info("Update: src/main.rs");
//! ```

mod modes;

pub use modes::{ColorMode, OutputMode, default_directive, init_tracing};

/// Sink for the messages produced while updating files.
///
/// The updater never logs through globals; it is handed a `Reporter` so that
/// callers (and tests) decide where messages go.
pub trait Reporter: Send + Sync {
  /// Per-line detail, such as the before/after text of a candidate line.
  fn debug(&self, message: &str);

  /// Per-file outcome, such as "Update: path".
  fn info(&self, message: &str);

  /// A line or file that could not be processed.
  fn error(&self, message: &str);
}

/// [`Reporter`] that forwards to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
  fn debug(&self, message: &str) {
    tracing::debug!("{message}");
  }

  fn info(&self, message: &str) {
    tracing::info!("{message}");
  }

  fn error(&self, message: &str) {
    tracing::error!("{message}");
  }
}

/// [`Reporter`] that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
  fn debug(&self, _message: &str) {}

  fn info(&self, _message: &str) {}

  fn error(&self, _message: &str) {}
}
