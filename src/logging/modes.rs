use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// How much user-facing output to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
  #[default]
  Normal,
  /// Only errors and, for scripting, bare file paths
  Quiet,
  /// Full file lists and timing
  Verbose,
}

impl OutputMode {
  /// Derive the output mode from the `-q` and `-v` flags.
  pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
    if quiet {
      OutputMode::Quiet
    } else if verbose > 0 {
      OutputMode::Verbose
    } else {
      OutputMode::Normal
    }
  }

  pub const fn is_quiet(self) -> bool {
    matches!(self, OutputMode::Quiet)
  }

  pub const fn is_verbose(self) -> bool {
    matches!(self, OutputMode::Verbose)
  }
}

/// Enum representing the color mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
  /// Automatically determine whether to use colors based on TTY detection
  #[default]
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl ColorMode {
  /// Apply this mode to `owo-colors`.
  ///
  /// `Auto` clears any override so `if_supports_color` falls back to its own
  /// terminal detection.
  pub fn apply(self) {
    match self {
      ColorMode::Auto => owo_colors::unset_override(),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Always => owo_colors::set_override(true),
    }
  }
}

/// Maps the verbosity flags to a default `tracing` filter directive.
///
/// `-q` errors only, default warnings, `-v` info, `-vv` debug, `-vvv` trace.
pub const fn default_directive(quiet: bool, verbose: u8) -> &'static str {
  if quiet {
    return "error";
  }
  match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  }
}

/// Installs the global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG`, when set, takes precedence over the verbosity flags. Calling
/// this more than once is harmless; later calls are ignored.
pub fn init_tracing(quiet: bool, verbose: u8) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init();
}
