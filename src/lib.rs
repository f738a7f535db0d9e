//! Continuous week-by-week calendar rendering.
//!
//! Renders a span of consecutive months as one uninterrupted grid of weeks:
//! the trailing partial week of each month merges with the leading partial
//! week of the next month into a single combined row, so the output reads
//! week by week instead of month by month.

pub mod args;
pub mod calendar;
pub mod combine;
pub mod formatter;
pub mod types;
