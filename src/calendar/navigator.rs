use chrono::Months;

use super::CalendarDate;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// The (year, month) pair the grid is showing, pinned to day 1.
///
/// Limited to the years a `YYYY-MM-DD` string can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthAnchor(CalendarDate);

impl MonthAnchor {
  pub fn new(year: i32, month0: u32) -> Option<Self> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
      return None;
    }

    CalendarDate::from_ymd(year, month0.checked_add(1)?, 1).map(Self)
  }

  pub fn containing(date: CalendarDate) -> Option<Self> {
    Self::new(date.year(), date.month0())
  }

  pub fn year(&self) -> i32 {
    self.0.year()
  }

  pub fn month0(&self) -> u32 {
    self.0.month0()
  }

  pub const fn first_day(&self) -> CalendarDate {
    self.0
  }

  /// e.g. "May 2029"
  pub fn label(&self) -> String {
    self.0.naive().format("%B %Y").to_string()
  }

  fn shifted(&self, months: i32) -> Option<Self> {
    let first = self.0.naive();
    let delta = Months::new(months.unsigned_abs());
    let target = if months >= 0 {
      first.checked_add_months(delta)
    } else {
      first.checked_sub_months(delta)
    }?;

    Self::containing(target.into())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNavigator {
  anchor: MonthAnchor,
}

impl MonthNavigator {
  pub const fn new(anchor: MonthAnchor) -> Self {
    Self { anchor }
  }

  pub const fn anchor(&self) -> MonthAnchor {
    self.anchor
  }

  /// Move by whole months. At the edge of the supported range the anchor
  /// stays where it is.
  pub fn shift(&mut self, months: i32) -> MonthAnchor {
    match self.anchor.shifted(months) {
      Some(anchor) => self.anchor = anchor,
      None => log::warn!("Cannot shift {} by {months} months", self.anchor.label()),
    }

    self.anchor
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_anchor_validation() {
    assert!(MonthAnchor::new(2029, 0).is_some());
    assert!(MonthAnchor::new(2029, 11).is_some());
    assert!(MonthAnchor::new(2029, 12).is_none());
    assert!(MonthAnchor::new(0, 5).is_none());
    assert!(MonthAnchor::new(10000, 5).is_none());
  }

  #[test]
  fn test_anchor_pins_first_day() {
    let date: CalendarDate = "2029-05-15".parse().unwrap();
    let anchor = MonthAnchor::containing(date).unwrap();

    assert_eq!(anchor.first_day().to_string(), "2029-05-01");
    assert_eq!(anchor.label(), "May 2029");
  }

  #[test]
  fn test_shift_rolls_over_years() {
    let mut navigator = MonthNavigator::new(MonthAnchor::new(2029, 11).unwrap());

    assert_eq!(navigator.shift(1), MonthAnchor::new(2030, 0).unwrap());
    assert_eq!(navigator.shift(-1), MonthAnchor::new(2029, 11).unwrap());

    let mut navigator = MonthNavigator::new(MonthAnchor::new(2029, 0).unwrap());

    assert_eq!(navigator.shift(-1), MonthAnchor::new(2028, 11).unwrap());
    assert_eq!(navigator.shift(1), MonthAnchor::new(2029, 0).unwrap());
  }

  #[test]
  fn test_shift_from_long_month_keeps_day_one() {
    let mut navigator = MonthNavigator::new(MonthAnchor::new(2029, 0).unwrap());

    let anchor = navigator.shift(1);

    assert_eq!(anchor.first_day().to_string(), "2029-02-01");
    assert_eq!(navigator.shift(13).first_day().to_string(), "2030-03-01");
    assert_eq!(navigator.shift(-26).first_day().to_string(), "2028-01-01");
  }

  #[test]
  fn test_shift_round_trip() {
    for month0 in 0..12 {
      let start = MonthAnchor::new(2029, month0).unwrap();
      let mut navigator = MonthNavigator::new(start);

      navigator.shift(1);
      navigator.shift(-1);

      assert_eq!(navigator.anchor(), start);
    }
  }

  #[test]
  fn test_shift_stops_at_range_edge() {
    let mut navigator = MonthNavigator::new(MonthAnchor::new(MAX_YEAR, 11).unwrap());

    assert_eq!(navigator.shift(1), MonthAnchor::new(MAX_YEAR, 11).unwrap());

    let mut navigator = MonthNavigator::new(MonthAnchor::new(MIN_YEAR, 0).unwrap());

    assert_eq!(navigator.shift(-1), MonthAnchor::new(MIN_YEAR, 0).unwrap());
  }
}
