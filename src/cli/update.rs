//! # Update Command
//!
//! This module implements the update run: resolve settings from the command
//! line and config file, collect candidate files, update them, and print a
//! summary.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Args;
use copyright_bump::config::{Config, load_config};
use copyright_bump::diff::DiffManager;
use copyright_bump::file_filter::create_default_filter;
use copyright_bump::logging::{ColorMode, OutputMode, TracingReporter, init_tracing};
use copyright_bump::notice::{DEFAULT_SYMBOL, NoticeMarkers, TargetYear};
use copyright_bump::output::{CategorizedReports, Printer};
use copyright_bump::processor::{FileCollector, Updater, UpdaterConfig};
use copyright_bump::report::{ProcessingSummary, ReportFormat, ReportGenerator};
use tracing::{debug, info, warn};

/// Arguments for the update run
#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
  /// Files or directories to process. Directories are processed recursively.
  #[arg(required = true, value_name = "ROOT")]
  pub roots: Vec<PathBuf>,

  /// Copyright owner text that follows the years, e.g. "ACME Corp."
  #[arg(long, short = 'o')]
  pub owner: Option<String>,

  /// Copyright symbol that precedes the years [default: (C)]
  #[arg(long, short = 's')]
  pub symbol: Option<String>,

  /// Year to extend notices to [default: current year]
  #[arg(long, short = 'y')]
  pub year: Option<String>,

  /// Report what would change without modifying files
  #[arg(long, short = 'd')]
  pub dry_run: bool,

  /// Show diff of changes in dry run mode
  #[arg(long)]
  pub show_diff: bool,

  /// Save diff of changes to a file in dry run mode
  #[arg(long, value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Directory name or trailing path to skip (repeatable), in addition to the
  /// built-in list
  #[arg(long, value_name = "DIR")]
  pub exclude_dir: Vec<String>,

  /// File patterns to ignore (supports glob patterns)
  #[arg(long, short = 'i')]
  pub ignore: Vec<String>,

  /// Additional MIME type to treat as text (repeatable)
  #[arg(long, value_name = "TYPE")]
  pub accept_mime: Vec<String>,

  /// Number of files to process in parallel [default: number of CPUs]
  #[arg(long, short = 'j', value_name = "N")]
  pub jobs: Option<usize>,

  /// Path to config file (default: .copyright-bump.toml in the first root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Generate a JSON report and save it to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Generate a CSV report and save it to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_csv: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Settings after merging the command line over the config file.
#[derive(Debug)]
struct Settings {
  owner: String,
  symbol: String,
  year: Option<String>,
  exclude_dirs: Vec<String>,
  ignore: Vec<String>,
  accept_mime_types: Vec<String>,
}

impl Settings {
  /// Command-line values win; list settings are concatenated.
  fn resolve(args: &UpdateArgs, config: Config) -> Result<Self> {
    let Some(owner) = args.owner.clone().or(config.owner) else {
      bail!("Missing required argument: --owner <OWNER>");
    };
    if owner.is_empty() {
      bail!("--owner must not be empty");
    }

    let symbol = args
      .symbol
      .clone()
      .or(config.symbol)
      .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());

    let merge = |from_config: Vec<String>, from_cli: &[String]| {
      let mut merged = from_config;
      merged.extend(from_cli.iter().cloned());
      merged
    };

    Ok(Self {
      owner,
      symbol,
      year: args.year.clone().or(config.year),
      exclude_dirs: merge(config.exclude_dirs, &args.exclude_dir),
      ignore: merge(config.ignore, &args.ignore),
      accept_mime_types: merge(config.accept_mime_types, &args.accept_mime),
    })
  }
}

/// Directory searched for `.copyright-bump.toml`.
fn config_search_root(roots: &[PathBuf]) -> &Path {
  let first = roots.first().map_or(Path::new("."), PathBuf::as_path);
  if first.is_file() {
    first.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."))
  } else {
    first
  }
}

/// Run an update with the given arguments
pub async fn run_update(args: UpdateArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);
  args.colors.apply();

  let mode = OutputMode::from_flags(args.quiet, args.verbose);
  let printer = Printer::new(mode, std::env::current_dir().ok());

  let config = load_config(args.config.as_deref(), config_search_root(&args.roots), args.no_config)?;
  if config.is_some() {
    debug!("Using configuration file");
  }
  let settings = Settings::resolve(&args, config.unwrap_or_default())?;

  let markers = NoticeMarkers::new(&settings.symbol, &settings.owner)?;
  let target = match settings.year {
    Some(ref year) => year.parse::<TargetYear>()?,
    None => TargetYear::current(),
  };
  debug!(
    "Extending notices {:?} ... {:?} to {}",
    markers.symbol(),
    markers.owner(),
    target
  );

  if !args.dry_run && (args.show_diff || args.save_diff.is_some()) {
    warn!("--show-diff and --save-diff only take effect with --dry-run");
  }
  let diff_manager = DiffManager::new(args.show_diff, args.save_diff.clone());
  diff_manager.init()?;

  let filter = create_default_filter(&settings.ignore, &settings.accept_mime_types)?;
  let collector = FileCollector::new(&settings.exclude_dirs, Box::new(filter));
  let files = collector.collect(&args.roots)?;

  printer.print_start_message(files.len(), args.dry_run);

  let updater = Arc::new(Updater::new(UpdaterConfig {
    dry_run: args.dry_run,
    diff_manager: Some(diff_manager),
    jobs: args.jobs,
    ..UpdaterConfig::new(markers, target, Arc::new(TracingReporter))
  }));

  let start_time = Instant::now();
  let file_reports = updater.process(files).await;
  let summary = ProcessingSummary::from_reports(&file_reports, start_time.elapsed());
  let categorized = CategorizedReports::from_reports(&file_reports);

  printer.print_blank_line();
  if categorized.updated.is_empty() && categorized.problems.is_empty() {
    printer.print_all_current(&settings.owner);
  } else {
    printer.print_updated_files(&categorized.updated, args.dry_run);
    if !categorized.updated.is_empty() && !categorized.problems.is_empty() {
      printer.print_blank_line();
    }
    printer.print_failures(&categorized.problems);
  }

  printer.print_blank_line();
  printer.print_summary(&summary);

  if args.dry_run && !categorized.updated.is_empty() {
    printer.print_blank_line();
    printer.print_hint("Run without --dry-run to apply these changes.");
  }

  for (format, output_path) in [
    (ReportFormat::Json, args.report_json.as_deref()),
    (ReportFormat::Csv, args.report_csv.as_deref()),
  ] {
    let Some(output_path) = output_path else {
      continue;
    };
    ReportGenerator::new(format, output_path)
      .generate(&file_reports, &summary)
      .with_context(|| format!("Error generating {} report", format))?;
    info!("Generated {} report at {}", format, output_path.display());
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(owner: Option<&str>) -> UpdateArgs {
    UpdateArgs {
      roots: vec![PathBuf::from(".")],
      owner: owner.map(str::to_string),
      colors: ColorMode::Never,
      ..UpdateArgs::default()
    }
  }

  #[test]
  fn test_cli_overrides_config() {
    let mut cli = args(Some("CLI Owner"));
    cli.exclude_dir = vec!["vendor".to_string()];
    let config = Config {
      owner: Some("Config Owner".to_string()),
      symbol: Some("(c)".to_string()),
      year: Some("2020".to_string()),
      exclude_dirs: vec!["third_party".to_string()],
      ..Config::default()
    };

    let settings = Settings::resolve(&cli, config).unwrap();
    assert_eq!(settings.owner, "CLI Owner");
    assert_eq!(settings.symbol, "(c)");
    assert_eq!(settings.year.as_deref(), Some("2020"));
    assert_eq!(settings.exclude_dirs, vec!["third_party", "vendor"]);
  }

  #[test]
  fn test_owner_is_required() {
    let err = Settings::resolve(&args(None), Config::default()).unwrap_err();
    assert!(err.to_string().contains("--owner"));

    let settings = Settings::resolve(&args(Some("ACME")), Config::default()).unwrap();
    assert_eq!(settings.symbol, DEFAULT_SYMBOL);
  }

  #[test]
  fn test_config_search_root() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.txt");
    std::fs::write(&file, "").unwrap();

    assert_eq!(config_search_root(&[file]), dir.path());
    assert_eq!(config_search_root(&[dir.path().to_path_buf()]), dir.path());
    assert_eq!(config_search_root(&[PathBuf::from("missing.txt")]), Path::new("missing.txt"));
  }
}
