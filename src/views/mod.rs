pub mod calendars;

pub use calendars::Calendar;
