use crate::{date::format_occurrence_iso, shared::entity::ID};
use chrono::prelude::*;
use std::{collections::HashSet, fmt::Display};

/// Identifies one occurrence of one event of one subject. A notification is
/// sent at most once per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationKey {
    pub subject_id: ID,
    pub event_id: ID,
    pub occurrence_date: NaiveDate,
}

impl NotificationKey {
    pub fn new(subject_id: &ID, event_id: &ID, occurrence_date: NaiveDate) -> Self {
        Self {
            subject_id: subject_id.clone(),
            event_id: event_id.clone(),
            occurrence_date,
        }
    }

    pub fn occurrence_iso(&self) -> String {
        format_occurrence_iso(self.occurrence_date)
    }
}

impl Display for NotificationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.subject_id,
            self.event_id,
            self.occurrence_iso()
        )
    }
}

/// A ledger entry: the notification for this occurrence was delivered at `sent_at`
#[derive(Debug, Clone, PartialEq)]
pub struct SentNotification {
    pub subject_id: ID,
    pub event_id: ID,
    pub occurrence_date: NaiveDate,
    pub sent_at: DateTime<Utc>,
}

impl SentNotification {
    pub fn new(key: NotificationKey, sent_at: DateTime<Utc>) -> Self {
        Self {
            subject_id: key.subject_id,
            event_id: key.event_id,
            occurrence_date: key.occurrence_date,
            sent_at,
        }
    }

    pub fn key(&self) -> NotificationKey {
        NotificationKey::new(&self.subject_id, &self.event_id, self.occurrence_date)
    }
}

/// Everything that was sent before a run started. It is read once and never
/// refreshed during the run.
#[derive(Debug, Clone, Default)]
pub struct SentNotificationSnapshot {
    keys: HashSet<NotificationKey>,
}

impl SentNotificationSnapshot {
    pub fn contains(&self, key: &NotificationKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<SentNotification> for SentNotificationSnapshot {
    fn from_iter<I: IntoIterator<Item = SentNotification>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(|entry| entry.key()).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn key(subject: &str, event: &str, day: u32) -> NotificationKey {
        NotificationKey::new(
            &subject.parse().unwrap(),
            &event.parse().unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        )
    }

    #[test]
    fn key_renders_as_store_path() {
        assert_eq!(
            key("cow-1", "-Nq1", 10).to_string(),
            "cow-1_-Nq1_2024-03-10T00:00:00.000Z"
        );
    }

    #[test]
    fn snapshot_matches_on_all_three_parts() {
        let sent_at = Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap();
        let snapshot = vec![SentNotification::new(key("cow-1", "e1", 10), sent_at)]
            .into_iter()
            .collect::<SentNotificationSnapshot>();

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains(&key("cow-1", "e1", 10)));
        assert!(!snapshot.contains(&key("cow-2", "e1", 10)));
        assert!(!snapshot.contains(&key("cow-1", "e2", 10)));
        assert!(!snapshot.contains(&key("cow-1", "e1", 11)));
    }
}
