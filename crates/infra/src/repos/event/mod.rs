mod inmemory;
mod postgres;

pub use inmemory::InMemoryEventRepo;
use pashumitra_scheduler_domain::{SubjectEvent, ID};
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &SubjectEvent) -> anyhow::Result<()>;
    /// Events of the subject in the order they were created
    async fn find_by_subject(&self, subject_id: &ID) -> anyhow::Result<Vec<SubjectEvent>>;
}

#[cfg(test)]
mod tests {
    use crate::NotifierContext;
    use pashumitra_scheduler_domain::SubjectEvent;

    fn generate_event(id: &str, subject_id: &str) -> SubjectEvent {
        SubjectEvent {
            id: id.parse().unwrap(),
            subject_id: subject_id.parse().unwrap(),
            is_injection: true,
            is_repeated: true,
            date: "2024-03-08T00:00:00Z".parse().unwrap(),
            repeat_duration: Some(2),
            completed_till: None,
            note: None,
        }
    }

    #[tokio::test]
    async fn finds_events_by_subject() {
        let ctx = NotifierContext::create_inmemory();
        let e1 = generate_event("e1", "cow-1");
        let mut e2 = generate_event("e2", "cow-1");
        // Anchored before e1, still listed after it
        e2.date = "2024-01-01T00:00:00Z".parse().unwrap();
        let e3 = generate_event("e3", "cow-2");
        for e in &[&e1, &e2, &e3] {
            assert!(ctx.repos.events.insert(e).await.is_ok());
        }

        let events = ctx
            .repos
            .events
            .find_by_subject(&"cow-1".parse().unwrap())
            .await
            .unwrap();
        assert_eq!(events, vec![e1, e2]);

        let events = ctx
            .repos
            .events
            .find_by_subject(&"cow-3".parse().unwrap())
            .await
            .unwrap();
        assert!(events.is_empty());
    }
}
