use super::ISubjectRepo;
use crate::repos::shared::inmemory_repo::*;
use pashumitra_scheduler_domain::Subject;

pub struct InMemorySubjectRepo {
    subjects: std::sync::Mutex<Vec<Subject>>,
}

impl InMemorySubjectRepo {
    pub fn new() -> Self {
        Self {
            subjects: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl ISubjectRepo for InMemorySubjectRepo {
    async fn insert(&self, subject: &Subject) -> anyhow::Result<()> {
        insert(subject, &self.subjects);
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Subject>> {
        Ok(find_all(&self.subjects))
    }
}
