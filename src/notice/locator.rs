//! # Year-Span Locator
//!
//! Finds the run of 4-digit years sitting between a copyright symbol and an
//! owner string, and reports where that run starts and ends in the line.
//!
//! The search window is `[end of first symbol, start of first owner after it)`.
//! Numbers elsewhere on the line (URLs, version strings) are never looked at.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::{ReviseError, SetupError};

static YEAR_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("year regex must compile"));

/// The symbol and owner markers of a copyright notice, compiled for
/// case-insensitive matching.
#[derive(Debug, Clone)]
pub struct NoticeMarkers {
  symbol: String,
  owner: String,
  symbol_matcher: Regex,
  owner_matcher: Regex,
}

impl NoticeMarkers {
  /// Compiles `symbol` and `owner` into literal, case-insensitive matchers.
  ///
  /// # Errors
  ///
  /// Returns [`SetupError::EmptyMarker`] if either marker is empty.
  pub fn new(symbol: &str, owner: &str) -> Result<Self, SetupError> {
    Ok(Self {
      symbol: symbol.to_string(),
      owner: owner.to_string(),
      symbol_matcher: literal_matcher("symbol", symbol)?,
      owner_matcher: literal_matcher("owner", owner)?,
    })
  }

  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  pub fn owner(&self) -> &str {
    &self.owner
  }

  /// Whether the line contains both markers anywhere, ignoring case.
  pub fn is_candidate(&self, line: &str) -> bool {
    self.symbol_matcher.is_match(line) && self.owner_matcher.is_match(line)
  }

  /// Locates the year expression in `line`.
  ///
  /// # Errors
  ///
  /// - [`ReviseError::SymbolNotFound`] if the symbol is absent
  /// - [`ReviseError::OwnerNotFound`] if no owner follows the symbol
  /// - [`ReviseError::YearsNotFound`] if no 4-digit year lies between them
  pub fn locate<'a>(&self, line: &'a str) -> Result<YearSpan<'a>, ReviseError> {
    let symbol = self.symbol_matcher.find(line).ok_or(ReviseError::SymbolNotFound)?;
    let window_start = symbol.end();
    let owner = self
      .owner_matcher
      .find_at(line, window_start)
      .ok_or(ReviseError::OwnerNotFound)?;

    let fragment = &line[window_start..owner.start()];
    let tokens: Vec<Range<usize>> = YEAR_TOKEN
      .find_iter(fragment)
      .map(|m| window_start + m.start()..window_start + m.end())
      .collect();

    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
      return Err(ReviseError::YearsNotFound);
    };
    let (start, end) = (first.start, last.end);

    Ok(YearSpan {
      line,
      years: tokens.iter().map(|r| &line[r.clone()]).collect(),
      start,
      end,
      tokens,
    })
  }
}

fn literal_matcher(name: &'static str, marker: &str) -> Result<Regex, SetupError> {
  if marker.is_empty() {
    return Err(SetupError::EmptyMarker { name });
  }
  RegexBuilder::new(&regex::escape(marker))
    .case_insensitive(true)
    .build()
    .map_err(|e| SetupError::InvalidMarker {
      name,
      message: e.to_string(),
    })
}

/// The located year expression of one line.
///
/// `start..end` covers everything from the first character of the first year
/// to the last character of the last year, separators included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSpan<'a> {
  line: &'a str,
  /// Year tokens in left-to-right order. Never empty.
  pub years: Vec<&'a str>,
  /// Byte offset of the first year.
  pub start: usize,
  /// Byte offset just past the last year.
  pub end: usize,
  tokens: Vec<Range<usize>>,
}

impl<'a> YearSpan<'a> {
  /// The text of the whole year expression, e.g. `"1988-2020"`.
  pub fn text(&self) -> &'a str {
    let line = self.line;
    &line[self.start..self.end]
  }

  /// The raw text between consecutive years, in order.
  pub fn separators(&self) -> impl Iterator<Item = &'a str> + '_ {
    let line = self.line;
    self.tokens.windows(2).map(move |pair| &line[pair[0].end..pair[1].start])
  }

  /// The raw text between the second-to-last and the last year, if there are
  /// at least two years.
  pub fn last_separator(&self) -> Option<&'a str> {
    let line = self.line;
    match self.tokens.as_slice() {
      [.., previous, last] => Some(&line[previous.end..last.start]),
      _ => None,
    }
  }

  /// Byte range of the last year token.
  pub fn last_token(&self) -> Range<usize> {
    self.tokens.last().cloned().unwrap_or(self.start..self.end)
  }
}

/// Convenience wrapper around [`NoticeMarkers::locate`] for one-off calls.
///
/// Empty markers cannot match anything and are reported as not found.
pub fn locate<'a>(line: &'a str, symbol: &str, owner: &str) -> Result<YearSpan<'a>, ReviseError> {
  one_off_markers(symbol, owner)?.locate(line)
}

pub(super) fn one_off_markers(symbol: &str, owner: &str) -> Result<NoticeMarkers, ReviseError> {
  NoticeMarkers::new(symbol, owner).map_err(|e| match e {
    SetupError::EmptyMarker { name: "owner" } => ReviseError::OwnerNotFound,
    _ => ReviseError::SymbolNotFound,
  })
}
