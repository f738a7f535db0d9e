//! Week generation: per-month day grids laid out across month boundaries.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::{DAYS_PER_WEEK, Month, Week};

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(month: Month) -> u32 {
    match month.month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(month.year) => 29,
        2 => 28,
        _ => unreachable!(),
    }
}

/// Weekday of the first day of the month.
pub fn first_weekday(month: Month) -> Weekday {
    // Month keeps its fields in range, so the date is always constructible.
    NaiveDate::from_ymd_opt(month.year, month.month, 1)
        .unwrap()
        .weekday()
}

/// Column index of the month's first day when the grid starts on `week_start`.
fn week_offset(first: Weekday, week_start: Weekday) -> usize {
    let days = first.num_days_from_sunday() + 7 - week_start.num_days_from_sunday();
    (days % 7) as usize
}

/// Lay out one month as 7-slot rows, zero-padded at both ends.
///
/// Row count varies between 4 and 6 depending on month length and alignment.
pub fn month_weeks(month: Month, week_start: Weekday) -> Vec<Week> {
    let mut rows = Vec::with_capacity(6);
    let mut days = [0u32; DAYS_PER_WEEK];
    let mut slot = week_offset(first_weekday(month), week_start);

    for day in 1..=days_in_month(month) {
        days[slot] = day;
        slot += 1;
        if slot == DAYS_PER_WEEK {
            rows.push(Week::new(month, days));
            days = [0; DAYS_PER_WEEK];
            slot = 0;
        }
    }
    if slot > 0 {
        rows.push(Week::new(month, days));
    }

    rows
}

/// Lazy stream of weeks for `months` consecutive months starting at `start`.
pub fn weeks(start: Month, months: u32, week_start: Weekday) -> Weeks {
    Weeks {
        week_start,
        month: start,
        remaining: months,
        rows: Vec::new().into_iter(),
    }
}

pub struct Weeks {
    week_start: Weekday,
    month: Month,
    remaining: u32,
    rows: std::vec::IntoIter<Week>,
}

impl Iterator for Weeks {
    type Item = Week;

    fn next(&mut self) -> Option<Week> {
        loop {
            if let Some(week) = self.rows.next() {
                return Some(week);
            }
            if self.remaining == 0 {
                return None;
            }
            self.rows = month_weeks(self.month, self.week_start).into_iter();
            self.month = self.month.add(1);
            self.remaining -= 1;
        }
    }
}
