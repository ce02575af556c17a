use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use pashumitra_scheduler_domain::{SubjectEvent, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<SubjectEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &SubjectEvent) -> anyhow::Result<()> {
        insert(e, &self.events);
        Ok(())
    }

    async fn find_by_subject(&self, subject_id: &ID) -> anyhow::Result<Vec<SubjectEvent>> {
        Ok(find_by(&self.events, |e| e.subject_id == *subject_id))
    }
}
