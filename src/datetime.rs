use chrono::{Month, NaiveDate, Weekday};

/// Number of days in `month`, taken as the distance to the first of the
/// following month so leap years fall out of the date arithmetic.
pub fn days_in_month(year: i32, month: Month) -> u32 {
    let first = first_of_month(year, month);
    let next = if let Month::December = month {
        first_of_month(year + 1, Month::January)
    } else {
        first_of_month(year, month.succ())
    };

    next.signed_duration_since(first).num_days() as u32
}

pub fn first_of_month(year: i32, month: Month) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
        .expect("the first of a month is a valid date")
}

/// Column of `weekday` in a week whose first column is `start`.
pub fn week_column_offset(weekday: Weekday, start: Weekday) -> u32 {
    (weekday.num_days_from_sunday() + 7 - start.num_days_from_sunday()) % 7
}
