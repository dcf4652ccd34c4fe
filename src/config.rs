use std::path::PathBuf;

use url::Url;

use crate::calendar::{CalendarDate, MonthAnchor};

#[derive(Debug, serde::Deserialize)]
pub struct Config {
    pub api: Api,
    #[serde(default)]
    pub calendar: Calendar,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Api {
    /// Base url the `api/events` resource is resolved against
    pub url: Url,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Calendar {
    pub year: Option<i32>,
    /// 1 = January
    pub month: Option<u32>,
}

impl Calendar {
    /// The month to open on, falling back to the month of `today`.
    pub fn anchor(&self, today: CalendarDate) -> Result<MonthAnchor, ConfigError> {
        let year = self.year.unwrap_or_else(|| today.year());
        let month0 = match self.month {
            Some(month @ 1..=12) => month - 1,
            Some(month) => return Err(ConfigError::Month(month)),
            None => today.month0(),
        };

        MonthAnchor::new(year, month0).ok_or(ConfigError::Year(year))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Month(u32),
    Year(i32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Month(month) => write!(f, "calendar.month must be between 1 and 12, got {month}"),
            Self::Year(year) => write!(f, "calendar.year must be between 1 and 9999, got {year}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn init(path: PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
    let string = std::fs::read_to_string(path)?;

    parse(&string)
}

fn parse(string: &str) -> Result<Config, Box<dyn std::error::Error>> {
    Ok(toml::from_str(string)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> CalendarDate {
        "2026-10-18".parse().unwrap()
    }

    #[test]
    fn test_parse_full() {
        let config = parse(
            r#"
            [api]
            url = "http://localhost:5000/"

            [calendar]
            year = 2029
            month = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.api.url.as_str(), "http://localhost:5000/");
        assert_eq!(
            config.calendar.anchor(today()).unwrap(),
            MonthAnchor::new(2029, 4).unwrap()
        );
    }

    #[test]
    fn test_calendar_defaults_to_current_month() {
        let config = parse("[api]\nurl = \"http://localhost:5000/\"\n").unwrap();

        assert_eq!(
            config.calendar.anchor(today()).unwrap(),
            MonthAnchor::new(2026, 9).unwrap()
        );
    }

    #[test]
    fn test_partial_calendar_section() {
        let calendar = Calendar {
            year: None,
            month: Some(1),
        };

        assert_eq!(calendar.anchor(today()).unwrap(), MonthAnchor::new(2026, 0).unwrap());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse("[api]\nurl = \"not a url\"\n").is_err());
        assert!(parse("[calendar]\nyear = 2029\n").is_err());

        let calendar = Calendar {
            year: Some(2029),
            month: Some(13),
        };
        assert_eq!(calendar.anchor(today()), Err(ConfigError::Month(13)));

        let calendar = Calendar {
            year: Some(12000),
            month: Some(1),
        };
        assert_eq!(calendar.anchor(today()), Err(ConfigError::Year(12000)));
    }
}
