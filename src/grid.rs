use chrono::{Datelike, Duration};

use crate::config::RenderConfig;
use crate::datetime::{days_in_month, first_of_month, week_column_offset};

/// A month laid out as week rows of seven day cells. Cells before the first
/// and after the last day of the month are `None`.
pub struct MonthGrid {
    weeks: Vec<Week>,
}

pub struct Week {
    number: u32,
    days: [Option<u32>; 7],
}

impl MonthGrid {
    pub fn new(config: &RenderConfig) -> Self {
        let first = first_of_month(config.year, config.month);
        let last_day = days_in_month(config.year, config.month);
        let offset = week_column_offset(first.weekday(), config.start_weekday);

        let mut weeks = Vec::with_capacity(6);
        let mut day = 1;
        while day <= last_day {
            // ISO week of the row's first real day, regardless of which
            // weekday heads the columns.
            let number = (first + Duration::days(i64::from(day - 1))).iso_week().week();

            let start_column = if weeks.is_empty() { offset } else { 0 };
            let mut days = [None; 7];
            for cell in days.iter_mut().skip(start_column as usize) {
                if day > last_day {
                    break;
                }
                *cell = Some(day);
                day += 1;
            }

            weeks.push(Week { number, days });
        }

        MonthGrid { weeks }
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }
}

impl Week {
    /// ISO-8601 week number of this row's first day of the month.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn days(&self) -> &[Option<u32>; 7] {
        &self.days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, Weekday};

    #[test]
    fn every_day_appears_once_in_order() {
        let configs = [
            RenderConfig::new(2023, Month::January).with_start_weekday(Weekday::Mon),
            RenderConfig::new(2024, Month::February),
            RenderConfig::new(1999, Month::December).with_start_weekday(Weekday::Sat),
        ];

        for config in &configs {
            let grid = MonthGrid::new(config);
            let days: Vec<u32> = grid
                .weeks()
                .iter()
                .flat_map(|week| week.days().iter().filter_map(|cell| *cell))
                .collect();
            let want: Vec<u32> = (1..=days_in_month(config.year, config.month)).collect();
            assert_eq!(days, want);
        }
    }

    #[test]
    fn only_the_first_and_last_rows_are_partial() {
        let grid = MonthGrid::new(&RenderConfig::new(2023, Month::January).with_start_weekday(Weekday::Mon));
        let weeks = grid.weeks();
        for week in &weeks[1..weeks.len() - 1] {
            assert!(week.days().iter().all(|cell| cell.is_some()));
        }
    }

    #[test]
    fn leading_offset_matches_the_first_weekday() {
        // January 2023 begins on a Sunday, six columns into a Monday week.
        let grid = MonthGrid::new(&RenderConfig::new(2023, Month::January).with_start_weekday(Weekday::Mon));
        let first_week = &grid.weeks()[0];
        assert_eq!(first_week.days()[..6], [None; 6]);
        assert_eq!(first_week.days()[6], Some(1));
    }

    #[test]
    fn week_numbers_come_from_each_rows_first_day() {
        // January 1st, 2023 is a Sunday and still belongs to ISO week 52
        // of 2022.
        let grid = MonthGrid::new(&RenderConfig::new(2023, Month::January));
        let numbers: Vec<u32> = grid.weeks().iter().map(|week| week.number()).collect();
        assert_eq!(numbers, [52, 1, 2, 3, 4]);
    }
}
