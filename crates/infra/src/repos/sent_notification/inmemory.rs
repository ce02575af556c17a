use super::ISentNotificationRepo;
use crate::repos::shared::inmemory_repo::*;
use pashumitra_scheduler_domain::SentNotification;

pub struct InMemorySentNotificationRepo {
    sent_notifications: std::sync::Mutex<Vec<SentNotification>>,
}

impl InMemorySentNotificationRepo {
    pub fn new() -> Self {
        Self {
            sent_notifications: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl ISentNotificationRepo for InMemorySentNotificationRepo {
    async fn insert(&self, notification: &SentNotification) -> anyhow::Result<()> {
        let key = notification.key();
        insert_unless(notification, &self.sent_notifications, |n| n.key() == key);
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<SentNotification>> {
        Ok(find_all(&self.sent_notifications))
    }
}
