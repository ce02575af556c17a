use super::IEventRepo;
use chrono::{DateTime, Utc};
use pashumitra_scheduler_domain::{SubjectEvent, ID};
use sqlx::{FromRow, PgPool};
use tracing::warn;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: String,
    subject_uid: String,
    is_injection: bool,
    is_repeated: bool,
    date: DateTime<Utc>,
    repeat_duration: Option<i64>,
    completed_till: Option<DateTime<Utc>>,
    note: Option<String>,
}

impl EventRaw {
    fn into_event(self) -> Option<SubjectEvent> {
        let ids = self.event_uid.parse::<ID>().and_then(|id| {
            self.subject_uid
                .parse::<ID>()
                .map(|subject_id| (id, subject_id))
        });
        match ids {
            Ok((id, subject_id)) => Some(SubjectEvent {
                id,
                subject_id,
                is_injection: self.is_injection,
                is_repeated: self.is_repeated,
                date: self.date,
                repeat_duration: self.repeat_duration,
                completed_till: self.completed_till,
                note: self.note,
            }),
            Err(e) => {
                warn!("Skipping event with malformed id: {}", e);
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, e: &SubjectEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO subject_events(
                event_uid,
                subject_uid,
                is_injection,
                is_repeated,
                date,
                repeat_duration,
                completed_till,
                note
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(e.subject_id.inner_ref())
        .bind(e.is_injection)
        .bind(e.is_repeated)
        .bind(e.date)
        .bind(e.repeat_duration)
        .bind(e.completed_till)
        .bind(e.note.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_subject(&self, subject_id: &ID) -> anyhow::Result<Vec<SubjectEvent>> {
        let events = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT event_uid, subject_uid, is_injection, is_repeated, date,
                repeat_duration, completed_till, note
            FROM subject_events AS e
            WHERE e.subject_uid = $1
            ORDER BY e.created_seq
            "#,
        )
        .bind(subject_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(events
            .into_iter()
            .filter_map(EventRaw::into_event)
            .collect())
    }
}
