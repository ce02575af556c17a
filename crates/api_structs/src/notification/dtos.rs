use chrono::NaiveDate;
use pashumitra_scheduler_domain::{format_occurrence_iso, Subject, SubjectEvent, ID};
use serde::{Deserialize, Serialize};

/// Next pending injection of a subject's injection schedule
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NextInjectionDTO {
    pub subject_id: ID,
    pub subject_name: String,
    pub subject_type: String,
    pub event_id: ID,
    pub interval_days: i64,
    /// Formatted as `YYYY-MM-DDT00:00:00.000Z`, `None` when nothing is scheduled
    pub next_date: Option<String>,
    pub note: Option<String>,
}

impl NextInjectionDTO {
    pub fn new(subject: &Subject, event: &SubjectEvent, next_date: Option<NaiveDate>) -> Self {
        Self {
            subject_id: subject.id.clone(),
            subject_name: subject.name.clone(),
            subject_type: subject.kind.clone(),
            event_id: event.id.clone(),
            interval_days: event.interval_days(),
            next_date: next_date.map(format_occurrence_iso),
            note: event.note.clone().filter(|note| !note.trim().is_empty()),
        }
    }
}
