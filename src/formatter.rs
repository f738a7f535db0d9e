//! Week row formatting with localized month and weekday names.

use chrono::{Locale, NaiveDate, Weekday};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::{MIN_DAY_WIDTH, MONTHS_PER_YEAR, Month, MonthCase, RenderContext, Week};

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Localized month abbreviation, e.g. "Jan".
pub fn month_abbrev(month: u32, locale: Locale) -> String {
    let date = NaiveDate::from_ymd_opt(2000, month, 1).unwrap();
    date.format_localized("%b", locale).to_string()
}

/// Localized weekday abbreviation, e.g. "Mon".
pub fn weekday_abbrev(weekday: Weekday, locale: Locale) -> String {
    // 2000-01-03 is a Monday.
    let base_date = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    let offset = weekday.num_days_from_monday() as i64;
    let date = base_date + chrono::Duration::days(offset);
    date.format_localized("%a", locale).to_string()
}

/// The seven weekdays starting from `week_start`.
pub fn weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut order = [week_start; 7];
    for i in 1..7 {
        order[i] = order[i - 1].succ();
    }
    order
}

fn apply_case(name: &str, case: MonthCase) -> String {
    match case {
        MonthCase::Upper => name.to_uppercase(),
        MonthCase::Title => {
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

/// Longest prefix of `text` that fits in `width` display columns.
fn truncate_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

fn digits(year: i32) -> usize {
    year.to_string().len()
}

/// Renders one combined week per line, with a fixed-width month label column
/// that is filled only on the first row of each month's block.
///
/// The weekday header line and the column widths are computed once at
/// construction and reused for every row.
pub struct WeekFormatter {
    locale: Locale,
    case: MonthCase,
    spacing: usize,
    day_width: usize,
    label_width: usize,
    header_line: String,
}

impl WeekFormatter {
    pub fn new(ctx: &RenderContext) -> Self {
        Self::with_locale(ctx, system_locale())
    }

    pub fn with_locale(ctx: &RenderContext, locale: Locale) -> Self {
        let names: Vec<String> = weekday_order(ctx.week_start)
            .iter()
            .map(|&weekday| weekday_abbrev(weekday, locale))
            .collect();
        let widest_name = names.iter().map(|name| name.width()).max().unwrap_or(0);
        let day_width = ctx.day_width.unwrap_or(widest_name.max(MIN_DAY_WIDTH));

        // Label column sized for the widest abbreviation and the longest year
        // in the span, so every month's label lines up.
        let last = ctx.start.add(ctx.months.saturating_sub(1));
        let year_width = digits(ctx.start.year).max(digits(last.year));
        let abbrev_width = (1..=MONTHS_PER_YEAR)
            .map(|month| apply_case(&month_abbrev(month, locale), ctx.case).width())
            .max()
            .unwrap_or(0);
        let label_width = abbrev_width + 1 + year_width;

        let cells: Vec<String> = names
            .iter()
            .map(|name| {
                let cell = truncate_to_width(name, day_width);
                format!("{}{}", " ".repeat(day_width - cell.width()), cell)
            })
            .collect();
        let header_line = format!(
            "{}{}",
            " ".repeat(label_width + ctx.spacing),
            cells.join(" ")
        );

        WeekFormatter {
            locale,
            case: ctx.case,
            spacing: ctx.spacing,
            day_width,
            label_width,
            header_line,
        }
    }

    pub fn day_width(&self) -> usize {
        self.day_width
    }

    pub fn label_width(&self) -> usize {
        self.label_width
    }

    /// Weekday header, aligned with the day columns of [`format_week`].
    ///
    /// [`format_week`]: WeekFormatter::format_week
    pub fn header_line(&self) -> &str {
        &self.header_line
    }

    fn month_label(&self, month: Month) -> String {
        format!(
            "{} {}",
            apply_case(&month_abbrev(month.month, self.locale), self.case),
            month.year
        )
    }

    fn day_cell(&self, day: u32) -> String {
        if day == 0 {
            " ".repeat(self.day_width)
        } else {
            format!("{:>width$}", day, width = self.day_width)
        }
    }

    /// Render one week as a single line: month label (or blank padding of the
    /// same width), the configured gap, then seven day fields joined by one
    /// space with blank slots rendered as whitespace.
    pub fn format_week(&self, week: &Week) -> String {
        let label = if week.start {
            self.month_label(week.month)
        } else {
            String::new()
        };
        let pad = self.label_width.saturating_sub(label.width());
        let days: Vec<String> = week.days.iter().map(|&day| self.day_cell(day)).collect();
        format!(
            "{}{}{}{}",
            label,
            " ".repeat(pad),
            " ".repeat(self.spacing),
            days.join(" ")
        )
    }

    /// One line per week, or two with the header line first.
    pub fn render(&self, week: &Week, with_header: bool) -> Vec<String> {
        if with_header {
            vec![self.header_line.clone(), self.format_week(week)]
        } else {
            vec![self.format_week(week)]
        }
    }
}
