mod inmemory;
mod postgres;

pub use inmemory::InMemorySentNotificationRepo;
use pashumitra_scheduler_domain::SentNotification;
pub use postgres::PostgresSentNotificationRepo;

/// The notification ledger
#[async_trait::async_trait]
pub trait ISentNotificationRepo: Send + Sync {
    /// Records a delivered notification. Recording the same
    /// (subject, event, occurrence) again keeps the first entry.
    async fn insert(&self, notification: &SentNotification) -> anyhow::Result<()>;
    async fn find_all(&self) -> anyhow::Result<Vec<SentNotification>>;
}
