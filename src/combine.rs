//! Merging of boundary partial weeks into single combined rows.

use crate::types::{DAYS_PER_WEEK, Week};

/// Merge adjacent partial weeks in a week stream.
///
/// The very first week passes through unchanged, partial or not, so the
/// display always opens with the real first row of the span. After that,
/// full weeks pass through (dropping any held partial), a lone partial week
/// is held back, and a partial week arriving while one is held is merged
/// with it by element-wise addition. Zero slots carry nothing, and adjacent
/// month-boundary partials never occupy the same slot, so the sum interleaves
/// the two months' days into one coherent row. A partial still held when the
/// input runs out is emitted as-is.
pub fn combine<I>(weeks: I) -> Combine<I>
where
    I: Iterator<Item = Week>,
{
    Combine {
        weeks,
        pending: None,
        emitted_any: false,
    }
}

pub struct Combine<I> {
    weeks: I,
    pending: Option<Week>,
    emitted_any: bool,
}

impl<I> Iterator for Combine<I>
where
    I: Iterator<Item = Week>,
{
    type Item = Week;

    fn next(&mut self) -> Option<Week> {
        loop {
            let Some(week) = self.weeks.next() else {
                return self.pending.take();
            };

            if !self.emitted_any {
                self.emitted_any = true;
                return Some(week);
            }

            if week.full() {
                self.pending = None;
                return Some(week);
            }

            match self.pending.take() {
                None => self.pending = Some(week),
                Some(held) => {
                    let mut days = [0u32; DAYS_PER_WEEK];
                    for (slot, merged) in days.iter_mut().enumerate() {
                        *merged = held.days[slot] + week.days[slot];
                    }
                    // Tagged with the incoming week's month: the merged row
                    // opens the new month's block.
                    return Some(Week::new(week.month, days));
                }
            }
        }
    }
}
