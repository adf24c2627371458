//! # copyright-bump
//!
//! Extends the year list or range in copyright notices so that it includes
//! a target year (normally the current one), touching nothing else on the
//! line.
//!
//! A copyright line is recognized by two markers: the copyright symbol, such
//! as `(C)`, and the owner, such as `ACME Corp.`. The years sit between them:
//!
//! ```text
//! Copyright (C) 2019-2023 ACME Corp.   ->   Copyright (C) 2019-2024 ACME Corp.
//! Copyright (C) 2020 ACME Corp.        ->   Copyright (C) 2020, 2024 ACME Corp.
//! ```
//!
//! ## Features
//!
//! * Contiguous years widen a trailing range; anything else is appended as a
//!   new list entry
//! * Lines that already name the target year are left byte-for-byte unchanged
//! * Notice formats that cannot be extended unambiguously are reported, not
//!   guessed at
//! * Directory walks that skip build output and non-text files
//! * Dry runs with diffs, and JSON or CSV reports
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! use copyright_bump::logging::TracingReporter;
//! use copyright_bump::notice::{NoticeMarkers, TargetYear};
//! use copyright_bump::processor::{Updater, UpdaterConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let markers = NoticeMarkers::new("(C)", "ACME Corp.")?;
//!     let updater = Arc::new(Updater::new(UpdaterConfig::new(
//!         markers,
//!         TargetYear::current(),
//!         Arc::new(TracingReporter),
//!     )));
//!
//!     let reports = updater.process(vec![PathBuf::from("src/main.rs")]).await;
//!     for report in reports {
//!         println!("{}: {}", report.path.display(), report.action.as_str());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`notice`] - Locating and revising the years of one copyright line
//! * [`processor`] - Updating whole files and walking directories
//! * [`logging`] - Logging setup and the reporter the updater writes to
//!
//! [`notice`]: crate::notice
//! [`processor`]: crate::processor
//! [`logging`]: crate::logging

pub mod config;
pub mod diff;
pub mod file_filter;
pub mod logging;
pub mod notice;
pub mod output;
pub mod processor;
pub mod report;
