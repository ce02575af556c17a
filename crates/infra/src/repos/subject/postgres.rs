use super::ISubjectRepo;
use pashumitra_scheduler_domain::{Subject, ID};
use sqlx::{FromRow, PgPool};
use tracing::warn;

pub struct PostgresSubjectRepo {
    pool: PgPool,
}

impl PostgresSubjectRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubjectRaw {
    subject_uid: String,
    name: String,
    kind: String,
    image: Option<String>,
}

impl SubjectRaw {
    fn into_subject(self) -> Option<Subject> {
        match self.subject_uid.parse::<ID>() {
            Ok(id) => Some(Subject {
                id,
                name: self.name,
                kind: self.kind,
                image: self.image,
            }),
            Err(e) => {
                warn!("Skipping subject with malformed id: {}", e);
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl ISubjectRepo for PostgresSubjectRepo {
    async fn insert(&self, subject: &Subject) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO subjects(subject_uid, name, kind, image)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(subject.id.inner_ref())
        .bind(&subject.name)
        .bind(&subject.kind)
        .bind(subject.image.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Subject>> {
        let subjects = sqlx::query_as::<_, SubjectRaw>(
            r#"
            SELECT subject_uid, name, kind, image FROM subjects
            ORDER BY subject_uid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(subjects
            .into_iter()
            .filter_map(SubjectRaw::into_subject)
            .collect())
    }
}
