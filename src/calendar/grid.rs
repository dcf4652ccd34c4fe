use chrono::Weekday;

use super::{CalendarDate, MonthAnchor};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;
pub const GRID_LENGTH: usize = GRID_ROWS * GRID_COLS;

pub const WEEKDAY_LABELS: [&str; GRID_COLS] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
  pub date: CalendarDate,
  pub in_current_month: bool,
  pub is_today: bool,
}

/// The 42 days shown for one anchor month, starting on the Sunday on or
/// before the first of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
  cells: [GridCell; GRID_LENGTH],
}

impl MonthGrid {
  /// `today` is evaluated once by the caller and shared by every cell.
  pub fn new(anchor: MonthAnchor, today: CalendarDate) -> Self {
    let dates = grid_dates(anchor);
    let cells = dates.map(|date| GridCell {
      date,
      in_current_month: date.year() == anchor.year() && date.month0() == anchor.month0(),
      is_today: date == today,
    });

    Self { cells }
  }

  pub const fn cells(&self) -> &[GridCell; GRID_LENGTH] {
    &self.cells
  }

  pub const fn start(&self) -> CalendarDate {
    self.cells[0].date
  }

  pub const fn end(&self) -> CalendarDate {
    self.cells[GRID_LENGTH - 1].date
  }

  pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
    self.cells().chunks(GRID_COLS)
  }
}

/// Pure month grid: the same anchor always yields the same 42 dates.
pub fn grid_dates(anchor: MonthAnchor) -> [CalendarDate; GRID_LENGTH] {
  let start = start_grid_date(anchor.first_day());
  let mut dates = [start; GRID_LENGTH];

  for idx in 1..GRID_LENGTH {
    let prev = dates[idx - 1];
    // anchors are limited to years 1..=9999, the successor always exists
    dates[idx] = prev.succ().unwrap_or(prev);
  }

  dates
}

fn start_grid_date(first: CalendarDate) -> CalendarDate {
  let mut start = first;

  while start.weekday() != Weekday::Sun {
    start = start.sub_days(1).unwrap_or(start);

    if start == first {
      break;
    }
  }

  start
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
  }

  fn anchor(year: i32, month0: u32) -> MonthAnchor {
    MonthAnchor::new(year, month0).unwrap()
  }

  #[test]
  fn test_grid_shape_for_many_months() {
    for year in [1999, 2000, 2024, 2029, 2100] {
      for month0 in 0..12 {
        let anchor = anchor(year, month0);
        let dates = grid_dates(anchor);

        assert_eq!(dates.len(), GRID_LENGTH);
        assert_eq!(dates[0].weekday(), Weekday::Sun, "{year}-{month0}");
        assert!(dates[0] <= anchor.first_day());
        assert!(anchor.first_day() <= dates[GRID_LENGTH - 1]);
        assert!((anchor.first_day().naive() - dates[0].naive()).num_days() < 7);

        for pair in dates.windows(2) {
          assert_eq!(pair[0].succ(), Some(pair[1]));
        }
      }
    }
  }

  #[test]
  fn test_may_2029() {
    let dates = grid_dates(anchor(2029, 4));

    assert_eq!(dates[0], date("2029-04-29"));
    assert_eq!(dates[GRID_LENGTH - 1], date("2029-06-09"));
  }

  #[test]
  fn test_january_rolls_into_previous_december() {
    let grid = MonthGrid::new(anchor(2029, 0), date("2000-01-01"));

    assert_eq!(grid.start(), date("2028-12-31"));
    assert!(!grid.cells()[0].in_current_month);
    assert!(grid.cells()[1].in_current_month);
    assert_eq!(grid.end(), date("2029-02-10"));
  }

  #[test]
  fn test_december_rolls_into_next_january() {
    let grid = MonthGrid::new(anchor(2029, 11), date("2000-01-01"));

    assert_eq!(grid.start(), date("2029-11-25"));
    assert_eq!(grid.end(), date("2030-01-05"));

    let january: Vec<_> = grid
      .cells()
      .iter()
      .filter(|cell| cell.date.year() == 2030)
      .collect();

    assert_eq!(january.len(), 5);
    assert!(january.iter().all(|cell| !cell.in_current_month));
  }

  #[test]
  fn test_month_starting_on_sunday() {
    let grid = MonthGrid::new(anchor(2026, 1), date("2000-01-01"));

    assert_eq!(grid.start(), date("2026-02-01"));
    assert!(grid.cells()[0].in_current_month);
    assert_eq!(grid.cells().iter().filter(|cell| cell.in_current_month).count(), 28);
  }

  #[test]
  fn test_in_current_month_ignores_same_month_of_other_year() {
    let grid = MonthGrid::new(anchor(2029, 4), date("2000-01-01"));

    let in_month: Vec<_> = grid
      .cells()
      .iter()
      .filter(|cell| cell.in_current_month)
      .map(|cell| cell.date)
      .collect();

    assert_eq!(in_month.len(), 31);
    assert_eq!(in_month[0], date("2029-05-01"));
    assert_eq!(in_month[30], date("2029-05-31"));
  }

  #[test]
  fn test_today_marks_exactly_one_cell() {
    let grid = MonthGrid::new(anchor(2029, 4), date("2029-05-15"));

    let today: Vec<_> = grid.cells().iter().filter(|cell| cell.is_today).collect();

    assert_eq!(today.len(), 1);
    assert_eq!(today[0].date, date("2029-05-15"));

    let elsewhere = MonthGrid::new(anchor(2029, 4), date("2030-05-15"));
    assert!(elsewhere.cells().iter().all(|cell| !cell.is_today));
  }

  #[test]
  fn test_deterministic() {
    let today = date("2029-05-15");

    assert_eq!(MonthGrid::new(anchor(2029, 4), today), MonthGrid::new(anchor(2029, 4), today));
    assert_eq!(grid_dates(anchor(2029, 4)), grid_dates(anchor(2029, 4)));
  }

  #[test]
  fn test_rows() {
    let grid = MonthGrid::new(anchor(2029, 4), date("2000-01-01"));
    let rows: Vec<_> = grid.rows().collect();

    assert_eq!(rows.len(), GRID_ROWS);
    assert!(rows.iter().all(|row| row.len() == GRID_COLS));
    assert_eq!(rows[1][0].date, date("2029-05-06"));
    assert_eq!(rows[5][6].date, grid.end());
  }
}
