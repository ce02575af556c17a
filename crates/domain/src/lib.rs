mod date;
mod due;
mod event;
mod ledger;
mod occurrence;
mod reminder;
mod shared;
mod subject;

pub use date::{format_human_date, format_occurrence_iso};
pub use due::DueWindow;
pub use event::SubjectEvent;
pub use ledger::{NotificationKey, SentNotification, SentNotificationSnapshot};
pub use occurrence::Occurrences;
pub use reminder::InjectionReminder;
pub use shared::entity::{InvalidIDError, ID};
pub use subject::Subject;
