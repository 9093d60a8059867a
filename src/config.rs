use chrono::{Month, Weekday};
use num_traits::FromPrimitive;

use crate::error::{Error, ErrorKind};

/// Options for rendering a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub year: i32,
    pub month: Month,
    pub week_numbers: bool,
    pub start_weekday: Weekday,
}

impl RenderConfig {
    /// Week numbers off, weeks starting on Sunday.
    pub fn new(year: i32, month: Month) -> Self {
        RenderConfig {
            year,
            month,
            week_numbers: false,
            start_weekday: Weekday::Sun,
        }
    }

    /// Builds a config from raw numbers: months 1 through 12, weekdays
    /// 0 (Sunday) through 6 (Saturday). Out-of-range values are rejected
    /// here so that rendering itself never has to fail.
    pub fn from_numeric(year: i32, month: u32, start_weekday: u32) -> Result<Self, Error> {
        let month = Month::from_u32(month).ok_or_else(|| {
            Error::new(
                ErrorKind::MonthOutOfRange(month),
                "expected a month between 1 and 12",
            )
        })?;

        Ok(RenderConfig {
            year,
            month,
            week_numbers: false,
            start_weekday: weekday_from_index(start_weekday)?,
        })
    }

    pub fn with_week_numbers(mut self, enabled: bool) -> Self {
        self.week_numbers = enabled;
        self
    }

    pub fn with_start_weekday(mut self, weekday: Weekday) -> Self {
        self.start_weekday = weekday;
        self
    }
}

fn weekday_from_index(value: u32) -> Result<Weekday, Error> {
    match value {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(Error::new(
            ErrorKind::WeekdayOutOfRange(value),
            "expected a weekday between 0 (Sunday) and 6 (Saturday)",
        )),
    }
}
