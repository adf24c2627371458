//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod update;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use update::run_update;
use update::UpdateArgs;

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Extend notices for an owner to include the current year
  copyright-bump --owner \"Pete R. Jemian\" src/ docs/

  # Preview the changes for a specific year without writing anything
  copyright-bump --dry-run --show-diff --owner \"ACME Corp.\" --year 2025 .

  # Use a different copyright symbol and skip vendored code
  copyright-bump --symbol \"\u{a9}\" --exclude-dir vendor --owner \"ACME Corp.\" .

  # Write a JSON report of what happened to every file
  copyright-bump --report-json report.json --owner \"ACME Corp.\" .
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub update_args: UpdateArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
