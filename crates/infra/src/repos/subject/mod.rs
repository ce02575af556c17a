mod inmemory;
mod postgres;

pub use inmemory::InMemorySubjectRepo;
use pashumitra_scheduler_domain::Subject;
pub use postgres::PostgresSubjectRepo;

#[async_trait::async_trait]
pub trait ISubjectRepo: Send + Sync {
    async fn insert(&self, subject: &Subject) -> anyhow::Result<()>;
    async fn find_all(&self) -> anyhow::Result<Vec<Subject>>;
}
