mod event;
mod sent_notification;
mod shared;
mod subject;

pub use event::{IEventRepo, InMemoryEventRepo, PostgresEventRepo};
pub use sent_notification::{
    ISentNotificationRepo, InMemorySentNotificationRepo, PostgresSentNotificationRepo,
};
use sqlx::PgPool;
use std::sync::Arc;
pub use subject::{ISubjectRepo, InMemorySubjectRepo, PostgresSubjectRepo};

#[derive(Clone)]
pub struct Repos {
    pub subjects: Arc<dyn ISubjectRepo>,
    pub events: Arc<dyn IEventRepo>,
    pub sent_notifications: Arc<dyn ISentNotificationRepo>,
}

impl Repos {
    pub fn create_postgres(pool: PgPool) -> Self {
        Self {
            subjects: Arc::new(PostgresSubjectRepo::new(pool.clone())),
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            sent_notifications: Arc::new(PostgresSentNotificationRepo::new(pool)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            subjects: Arc::new(InMemorySubjectRepo::new()),
            events: Arc::new(InMemoryEventRepo::new()),
            sent_notifications: Arc::new(InMemorySentNotificationRepo::new()),
        }
    }
}
