//! # Notice Module
//!
//! Locating and revising the year expression of a single copyright line.
//!
//! - [`locator`] - finds the years between the copyright symbol and the owner
//! - [`reviser`] - extends those years to include a target year
//!
//! Both operate on one line at a time and hold no state between calls, so a
//! single [`NoticeMarkers`] can be shared freely across threads.
//!
//! ## Example
//!
//! ```rust
//! use copyright_bump::notice::{NoticeMarkers, TargetYear};
//!
//! # fn main() -> anyhow::Result<()> {
//! let markers = NoticeMarkers::new("(c)", "Free Software Foundation, Inc.")?;
//! let target: TargetYear = "2024".parse()?;
//!
//! let line = "Copyright (C) 2007 Free Software Foundation, Inc.";
//! let revised = markers.revise(line, &target)?;
//! assert_eq!(revised, "Copyright (C) 2007, 2024 Free Software Foundation, Inc.");
//! # Ok(())
//! # }
//! ```

mod error;
pub mod locator;
pub mod reviser;
mod year;

pub use error::{ReviseError, SetupError};
pub use locator::{NoticeMarkers, YearSpan, locate};
pub use reviser::revise;
pub use year::TargetYear;

/// Symbol used when none is configured.
pub const DEFAULT_SYMBOL: &str = "(C)";
