use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

use super::SetupError;

/// The year that every revised notice must end up including.
///
/// Years are kept as their 4-digit text so that comparisons against tokens
/// pulled out of a line are plain string comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetYear {
  text: String,
  previous: String,
}

impl TargetYear {
  /// The current year according to the local clock.
  pub fn current() -> Self {
    let year = chrono::Local::now().year();
    // Years outside 0001..=9999 clamp to 9999.
    format!("{year:04}")
      .parse()
      .unwrap_or_else(|_| Self::from_number(9999))
  }

  fn from_number(year: u16) -> Self {
    Self {
      text: format!("{year:04}"),
      previous: format!("{:04}", year.saturating_sub(1)),
    }
  }

  /// The year as written in notices.
  pub fn as_str(&self) -> &str {
    &self.text
  }

  /// The year immediately before this one, as 4-digit text.
  pub fn previous(&self) -> &str {
    &self.previous
  }
}

impl FromStr for TargetYear {
  type Err = SetupError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
      return Err(SetupError::InvalidTargetYear(s.to_string()));
    }
    match s.parse::<u16>() {
      Ok(0) | Err(_) => Err(SetupError::InvalidTargetYear(s.to_string())),
      Ok(year) => Ok(Self::from_number(year)),
    }
  }
}

impl fmt::Display for TargetYear {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}
