use crate::{occurrence::Occurrences, shared::entity::ID};
use chrono::{prelude::*, NaiveDate};
use serde::{Deserialize, Serialize};

/// Something scheduled for a `Subject`. Only injections that repeat are
/// picked up by the notification scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEvent {
    pub id: ID,
    pub subject_id: ID,
    #[serde(default)]
    pub is_injection: bool,
    #[serde(default)]
    pub is_repeated: bool,
    /// Anchor of the recurrence, i.e. the first occurrence
    pub date: DateTime<Utc>,
    /// Days between two occurrences. Missing or non-positive values mean every day.
    pub repeat_duration: Option<i64>,
    /// Every occurrence on or before this point in time has been handled
    pub completed_till: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

impl SubjectEvent {
    pub fn is_injection_schedule(&self) -> bool {
        self.is_injection && self.is_repeated
    }

    pub fn interval_days(&self) -> i64 {
        match self.repeat_duration {
            Some(days) if days > 0 => days,
            _ => 1,
        }
    }

    /// Calendar day (UTC) of the first occurrence
    pub fn anchor_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// An occurrence at UTC midnight of `date` is completed when that instant is
    /// not after `completed_till`, which is the same as comparing the days.
    pub fn completed_till_date(&self) -> Option<NaiveDate> {
        self.completed_till.map(|ts| ts.date_naive())
    }

    pub fn is_completed(&self, date: NaiveDate) -> bool {
        matches!(self.completed_till_date(), Some(till) if date <= till)
    }

    /// Walks at most `horizon` recurrence steps starting from the anchor and
    /// yields the dates that are not in the past and not completed.
    pub fn occurrences(&self, today: NaiveDate, horizon: usize) -> Occurrences {
        Occurrences::new(
            self.anchor_date(),
            self.interval_days(),
            self.completed_till_date(),
            today,
            horizon,
        )
    }

    /// The first pending occurrence on or after `today`
    pub fn next_occurrence(&self, today: NaiveDate, horizon: usize) -> Option<NaiveDate> {
        self.occurrences(today, horizon).next()
    }
}
