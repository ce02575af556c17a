use super::ISentNotificationRepo;
use chrono::{DateTime, NaiveDate, Utc};
use pashumitra_scheduler_domain::{SentNotification, ID};
use sqlx::{FromRow, PgPool};
use tracing::warn;

pub struct PostgresSentNotificationRepo {
    pool: PgPool,
}

impl PostgresSentNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SentNotificationRaw {
    subject_uid: String,
    event_uid: String,
    occurrence_date: NaiveDate,
    sent_at: DateTime<Utc>,
}

impl SentNotificationRaw {
    fn into_sent_notification(self) -> Option<SentNotification> {
        let ids = self.subject_uid.parse::<ID>().and_then(|subject_id| {
            self.event_uid
                .parse::<ID>()
                .map(|event_id| (subject_id, event_id))
        });
        match ids {
            Ok((subject_id, event_id)) => Some(SentNotification {
                subject_id,
                event_id,
                occurrence_date: self.occurrence_date,
                sent_at: self.sent_at,
            }),
            Err(e) => {
                warn!("Skipping ledger entry with malformed id: {}", e);
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl ISentNotificationRepo for PostgresSentNotificationRepo {
    async fn insert(&self, notification: &SentNotification) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO sent_notifications(subject_uid, event_uid, occurrence_date, sent_at)
            VALUES($1, $2, $3, $4)
            ON CONFLICT (subject_uid, event_uid, occurrence_date) DO NOTHING
            "#,
        )
        .bind(notification.subject_id.inner_ref())
        .bind(notification.event_id.inner_ref())
        .bind(notification.occurrence_date)
        .bind(notification.sent_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<SentNotification>> {
        let entries = sqlx::query_as::<_, SentNotificationRaw>(
            r#"
            SELECT * FROM sent_notifications
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries
            .into_iter()
            .filter_map(SentNotificationRaw::into_sent_notification)
            .collect())
    }
}
