//! # copyright-bump
//!
//! Extends copyright notices across a source tree to include the current year.

mod cli;

use anyhow::Result;

use crate::cli::{Cli, run_update};

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_update(cli.update_args).await
}
