//! Type definitions and constants for week-grid rendering.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use clap::ValueEnum;

pub const DAYS_PER_WEEK: usize = 7;
pub const MONTHS_PER_YEAR: u32 = 12;

// Day numbers go up to 31, so a day field needs at least two columns.
pub const MIN_DAY_WIDTH: usize = 2;

/// English three-letter month abbreviations used by `Month`'s `Display`.
pub const MONTH_ABBR: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Case applied to the month label column.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum MonthCase {
    /// "JAN 2024"
    Upper,
    /// "Jan 2024"
    Title,
}

/// A calendar month: month number (1-12) plus year.
///
/// Immutable; [`Month::add`] returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub month: u32,
    pub year: i32,
}

impl Month {
    pub fn new(month: u32, year: i32) -> Self {
        debug_assert!((1..=MONTHS_PER_YEAR).contains(&month));
        Month { month, year }
    }

    /// Advance by `months`, rolling the year with whole-division arithmetic
    /// so that any step size keeps `month` in 1-12.
    pub fn add(self, months: u32) -> Self {
        let total = i64::from(self.month) - 1 + i64::from(months);
        let span = i64::from(MONTHS_PER_YEAR);
        Month {
            month: (total.rem_euclid(span) + 1) as u32,
            year: self.year + total.div_euclid(span) as i32,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Month {
            month: date.month(),
            year: date.year(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", MONTH_ABBR[(self.month - 1) as usize], self.year)
    }
}

/// One calendar row: seven day slots tagged with the owning month.
///
/// A slot value of 0 means the slot falls outside the month. `start` is true
/// iff the row contains day 1, i.e. it is the first row of its month's block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub month: Month,
    pub days: [u32; DAYS_PER_WEEK],
    pub start: bool,
}

impl Week {
    pub fn new(month: Month, days: [u32; DAYS_PER_WEEK]) -> Self {
        Week {
            month,
            days,
            start: days.contains(&1),
        }
    }

    /// True when every slot holds a real day, so the week lies entirely
    /// within one month.
    pub fn full(&self) -> bool {
        self.days.iter().all(|&day| day != 0)
    }
}

/// Rendering options assembled from the command line.
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// First month of the span.
    pub start: Month,
    /// Number of months to render.
    pub months: u32,
    /// Weekday shown in the first column.
    pub week_start: Weekday,
    /// Spaces between the month label column and the day grid.
    pub spacing: usize,
    /// Day field width; None means "widest weekday abbreviation".
    pub day_width: Option<usize>,
    /// Case of the month label.
    pub case: MonthCase,
    /// Whether to print the weekday header above the first week.
    pub header: bool,
}
