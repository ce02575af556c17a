use chrono::{Days, NaiveDate};
use std::iter::FusedIterator;

/// Lazy expansion of a recurring event into occurrence dates.
///
/// The walk starts at the anchor and takes exactly `horizon` steps of
/// `interval_days`. Steps that land before `today` or on or before the
/// completion watermark are consumed without being yielded, so the sequence
/// never holds more than `horizon` dates no matter the interval.
#[derive(Debug, Clone)]
pub struct Occurrences {
    cursor: Option<NaiveDate>,
    interval_days: u64,
    remaining: usize,
    today: NaiveDate,
    completed_till: Option<NaiveDate>,
}

impl Occurrences {
    pub fn new(
        anchor: NaiveDate,
        interval_days: i64,
        completed_till: Option<NaiveDate>,
        today: NaiveDate,
        horizon: usize,
    ) -> Self {
        Self {
            cursor: Some(anchor),
            interval_days: interval_days.max(1) as u64,
            remaining: horizon,
            today,
            completed_till,
        }
    }

    fn is_pending(&self, date: NaiveDate) -> bool {
        let completed = matches!(self.completed_till, Some(till) if date <= till);
        date >= self.today && !completed
    }
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            let date = self.cursor?;
            self.remaining -= 1;
            // Running past the last representable date ends the sequence
            self.cursor = date.checked_add_days(Days::new(self.interval_days));
            if self.is_pending(date) {
                return Some(date);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl FusedIterator for Occurrences {}
