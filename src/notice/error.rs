//! Error types for locating and revising copyright notices.

/// A line-local failure while locating or revising a year expression.
///
/// None of these abort a batch run: the updater skips the offending line and
/// carries on with the rest of the file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviseError {
  /// The copyright symbol does not occur in the line.
  #[error("copyright symbol not found")]
  SymbolNotFound,

  /// The owner text does not occur after the copyright symbol.
  #[error("owner not found after the copyright symbol")]
  OwnerNotFound,

  /// There is no 4-digit year between the symbol and the owner.
  #[error("no copyright year(s) between symbol and owner")]
  YearsNotFound,

  /// The last two years are joined by something other than `,` or `-`.
  #[error("unrecognized separator {separator:?} before the last year")]
  AmbiguousSeparator { separator: String },
}

/// Invalid inputs for building the notice matcher or the target year.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
  /// A marker (symbol or owner) was empty.
  #[error("{name} must not be empty")]
  EmptyMarker { name: &'static str },

  /// The target year was not four ASCII digits in the range 0001..=9999.
  #[error("invalid target year {0:?}: expected four digits between 0001 and 9999")]
  InvalidTargetYear(String),

  /// The marker could not be compiled into a matcher.
  #[error("invalid {name}: {message}")]
  InvalidMarker { name: &'static str, message: String },
}
