use crate::{
    date::{format_human_date, format_occurrence_iso},
    due::DueWindow,
    event::SubjectEvent,
    ledger::NotificationKey,
    shared::entity::ID,
    subject::Subject,
};
use chrono::NaiveDate;

/// The message handed to a delivery channel for one due occurrence
#[derive(Debug, Clone, PartialEq)]
pub struct InjectionReminder {
    pub subject_id: ID,
    pub subject_name: String,
    pub subject_type: String,
    pub event_id: ID,
    pub occurrence_date: NaiveDate,
    pub due: DueWindow,
    pub note: Option<String>,
}

impl InjectionReminder {
    pub fn new(
        subject: &Subject,
        event: &SubjectEvent,
        occurrence_date: NaiveDate,
        due: DueWindow,
    ) -> Self {
        Self {
            subject_id: subject.id.clone(),
            subject_name: subject.name.clone(),
            subject_type: subject.kind.clone(),
            event_id: event.id.clone(),
            occurrence_date,
            due,
            note: event.note.clone().filter(|note| !note.trim().is_empty()),
        }
    }

    pub fn key(&self) -> NotificationKey {
        NotificationKey::new(&self.subject_id, &self.event_id, self.occurrence_date)
    }

    pub fn occurrence_iso(&self) -> String {
        format_occurrence_iso(self.occurrence_date)
    }

    pub fn human_date(&self) -> String {
        format_human_date(self.occurrence_date)
    }
}
