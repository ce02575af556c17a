use chrono::{DateTime, Utc};
use pashumitra_scheduler_domain::{NotificationKey, SentNotification, SentNotificationSnapshot};
use pashumitra_scheduler_infra::{ISentNotificationRepo, NotifierContext};

/// Remembers which occurrences have already been notified
pub struct NotificationLedger<'a> {
    repo: &'a dyn ISentNotificationRepo,
}

impl<'a> NotificationLedger<'a> {
    pub fn new(ctx: &'a NotifierContext) -> Self {
        Self {
            repo: ctx.repos.sent_notifications.as_ref(),
        }
    }

    /// Reads every recorded notification at once
    pub async fn snapshot(&self) -> anyhow::Result<SentNotificationSnapshot> {
        let entries = self.repo.find_all().await?;
        Ok(entries.into_iter().collect())
    }

    pub async fn record(
        &self,
        key: NotificationKey,
        sent_at: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        self.repo.insert(&SentNotification::new(key, sent_at)).await
    }
}
