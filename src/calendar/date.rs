use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike as _, Days, NaiveDate, Weekday};

pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// A plain calendar day without time of day or timezone.
///
/// Serializes to and from the `YYYY-MM-DD` form used at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
  pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
    NaiveDate::from_ymd_opt(year, month, day).map(Self)
  }

  /// The current day on the local wall clock.
  ///
  /// Never goes through UTC, so the date does not jump near local midnight.
  pub fn today() -> Self {
    Self(chrono::Local::now().date_naive())
  }

  pub const fn naive(&self) -> NaiveDate {
    self.0
  }

  pub fn year(&self) -> i32 {
    self.0.year()
  }

  /// Zero based month, 0 = January.
  pub fn month0(&self) -> u32 {
    self.0.month0()
  }

  pub fn day(&self) -> u32 {
    self.0.day()
  }

  pub fn weekday(&self) -> Weekday {
    self.0.weekday()
  }

  pub fn sub_days(&self, days: u64) -> Option<Self> {
    self.0.checked_sub_days(Days::new(days)).map(Self)
  }

  pub fn succ(&self) -> Option<Self> {
    self.0.succ_opt().map(Self)
  }

  /// e.g. "Tuesday, May 15, 2029"
  pub fn long_format(&self) -> String {
    self.0.format("%A, %b %-d, %Y").to_string()
  }
}

impl From<NaiveDate> for CalendarDate {
  fn from(date: NaiveDate) -> Self {
    Self(date)
  }
}

impl Display for CalendarDate {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0.format(ISO_FORMAT))
  }
}

impl FromStr for CalendarDate {
  type Err = ParseDateError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    // chrono accepts unpadded fields, the wire format does not
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
      return Err(ParseDateError(s.to_string()));
    }

    NaiveDate::parse_from_str(s, ISO_FORMAT)
      .map(Self)
      .map_err(|_| ParseDateError(s.to_string()))
  }
}

impl TryFrom<String> for CalendarDate {
  type Error = ParseDateError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<CalendarDate> for String {
  fn from(date: CalendarDate) -> Self {
    date.to_string()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateError(String);

impl Display for ParseDateError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "invalid calendar date {:?}, expected YYYY-MM-DD", self.0)
  }
}

impl std::error::Error for ParseDateError {}
