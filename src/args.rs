//! Command-line argument parsing using clap.

use chrono::{NaiveDate, Weekday};
use clap::Parser;

use crate::types::{MIN_DAY_WIDTH, MONTHS_PER_YEAR, Month, MonthCase, RenderContext};

#[derive(Parser, Debug)]
#[command(name = "weekcal")]
#[command(about = "Displays consecutive months as one continuous week grid", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Number of months to render.
    #[arg(
        short = 'n',
        long = "months",
        help_heading = "Display options",
        value_name = "num"
    )]
    pub months: u32,

    /// Starting month as YYYYMM (default: the current month).
    #[arg(long, help_heading = "Display options", value_name = "yyyymm")]
    pub start: Option<String>,

    /// Spaces between the month label and the day grid.
    #[arg(
        long,
        default_value_t = 1,
        help_heading = "Layout options",
        value_name = "num"
    )]
    pub spacing: usize,

    /// Day field width (minimum 2; default: widest weekday abbreviation).
    #[arg(long = "day-length", help_heading = "Layout options", value_name = "num")]
    pub day_length: Option<usize>,

    /// Week starts on Sunday (default).
    #[arg(short = 's', long, help_heading = "Calendar options")]
    pub sunday: bool,

    /// Week starts on Monday.
    #[arg(short = 'm', long, help_heading = "Calendar options")]
    pub monday: bool,

    /// Month label case (upper or title).
    #[arg(
        long,
        default_value = "upper",
        help_heading = "Layout options",
        value_name = "case"
    )]
    pub case: MonthCase,

    /// Print a weekday-name header above the first week.
    #[arg(short = 'H', long, help_heading = "Display options")]
    pub header: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Render consecutive months as one continuous week-by-week grid.

Adjacent months share their boundary week: the last partial week of one
month and the first partial week of the next are merged into a single row.

Examples:
  weekcal -n 3                    Three months starting from the current one
  weekcal -n 12 --start 202401    The whole of 2024
  weekcal -n 2 -m -H              Two months, Monday first, with a header
  weekcal -n 1 --day-length 4     Wider day columns";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl RenderContext {
    pub fn new(args: &Args) -> Result<Self, String> {
        if let Some(width) = args.day_length
            && width < MIN_DAY_WIDTH
        {
            return Err(format!(
                "Invalid day length: {} (must be at least {})",
                width, MIN_DAY_WIDTH
            ));
        }

        let start = match args.start.as_deref() {
            Some(s) => parse_start(s)?,
            None => Month::from_date(get_today_date()),
        };

        Ok(RenderContext {
            start,
            months: args.months,
            week_start: if args.monday {
                Weekday::Mon
            } else {
                Weekday::Sun
            },
            spacing: args.spacing,
            day_width: args.day_length,
            case: args.case,
            header: args.header,
        })
    }
}

/// Parse a six-digit YYYYMM starting month.
pub fn parse_start(s: &str) -> Result<Month, String> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid start value: {} (expected YYYYMM)", s));
    }

    let year: i32 = s[..4]
        .parse()
        .map_err(|_| format!("Invalid start value: {}", s))?;
    let month: u32 = s[4..]
        .parse()
        .map_err(|_| format!("Invalid start value: {}", s))?;

    if year == 0 {
        return Err(format!(
            "Invalid start value: {} (year must be 0001-9999)",
            s
        ));
    }
    if !(1..=MONTHS_PER_YEAR).contains(&month) {
        return Err(format!(
            "Invalid start value: {} (month must be 01-12)",
            s
        ));
    }

    Ok(Month::new(month, year))
}

/// Get today's date, respecting WEEKCAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("WEEKCAL_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}
