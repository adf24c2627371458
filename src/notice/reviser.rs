//! # Copyright-Line Reviser
//!
//! Extends the year expression of a copyright line so it includes a target
//! year, and splices the result back into the line.
//!
//! | existing            | target | result                    |
//! |---------------------|--------|---------------------------|
//! | `2007`              | `2024` | `2007, 2024`              |
//! | `2023`              | `2024` | `2023-2024`               |
//! | `2006, 2008`        | `2024` | `2006, 2008, 2024`        |
//! | `1988-2020`         | `2024` | `1988-2020, 2024`         |
//! | `2008-2023`         | `2024` | `2008-2024`               |
//! | `2000, 2001, 2023`  | `2024` | `2000, 2001, 2023-2024`   |
//! | `2021-2024`         | `2024` | unchanged                 |

use std::borrow::Cow;

use super::locator::one_off_markers;
use super::{NoticeMarkers, ReviseError, TargetYear, YearSpan};

impl NoticeMarkers {
  /// Revises `line` so that its year expression includes `target`.
  ///
  /// Returns the line borrowed and untouched when `target` is already one of
  /// its years. Every byte outside the located year expression is preserved,
  /// trailing newline included.
  ///
  /// # Errors
  ///
  /// Any [`ReviseError`] from locating the years, or
  /// [`ReviseError::AmbiguousSeparator`] when the last year must be extended
  /// but is joined to the one before it by something other than `,` or `-`.
  pub fn revise<'a>(&self, line: &'a str, target: &TargetYear) -> Result<Cow<'a, str>, ReviseError> {
    let span = self.locate(line)?;
    match revised_years(&span, target)? {
      Some(years) => Ok(Cow::Owned(format!(
        "{}{}{}",
        &line[..span.start],
        years,
        &line[span.end..]
      ))),
      None => Ok(Cow::Borrowed(line)),
    }
  }
}

/// Builds the replacement year expression, or `None` if `target` is already
/// present.
fn revised_years(span: &YearSpan<'_>, target: &TargetYear) -> Result<Option<String>, ReviseError> {
  if span.years.iter().any(|year| *year == target.as_str()) {
    return Ok(None);
  }

  let previous = target.previous();
  let current = span.text();

  let years = match span.years.as_slice() {
    [only] if *only == previous => format!("{only}-{target}"),
    [only] => format!("{only}, {target}"),
    [.., last] if *last != previous => format!("{current}, {target}"),
    _ => match span.last_separator().map(str::trim) {
      // Move the range end; everything before the old end is kept verbatim.
      Some("-") => {
        let last = span.last_token();
        format!("{}{}", &current[..last.start - span.start], target)
      }
      Some(",") => format!("{current}-{target}"),
      other => {
        return Err(ReviseError::AmbiguousSeparator {
          separator: other.unwrap_or_default().to_string(),
        });
      }
    },
  };

  Ok(Some(years))
}

/// Convenience wrapper around [`NoticeMarkers::revise`] for one-off calls.
pub fn revise<'a>(line: &'a str, symbol: &str, owner: &str, target: &TargetYear) -> Result<Cow<'a, str>, ReviseError> {
  one_off_markers(symbol, owner)?.revise(line, target)
}
