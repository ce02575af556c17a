use crate::{
    error::NotifierError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::NaiveDate;
use pashumitra_scheduler_api_structs::dtos::NextInjectionDTO;
use pashumitra_scheduler_api_structs::get_next_injections::*;
use pashumitra_scheduler_domain::{Subject, SubjectEvent};
use pashumitra_scheduler_infra::NotifierContext;

fn handle_error(e: UseCaseErrors) -> NotifierError {
    match e {
        UseCaseErrors::StoreUnavailable(e) => {
            tracing::error!("Unable to read the next injections: {:?}", e);
            NotifierError::InternalError
        }
    }
}

pub async fn get_next_injections_controller(
    http_req: HttpRequest,
    ctx: web::Data<NotifierContext>,
) -> Result<HttpResponse, NotifierError> {
    protect_route(&http_req, &ctx)?;

    let usecase = GetNextInjectionsUseCase {};
    execute(usecase, &ctx)
        .await
        .map(|injections| {
            let injections = injections
                .iter()
                .map(|i| NextInjectionDTO::new(&i.subject, &i.event, i.next_date))
                .collect();
            HttpResponse::Ok().json(APIResponse::new(injections))
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetNextInjectionsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StoreUnavailable(anyhow::Error),
}

#[derive(Debug, PartialEq)]
pub struct NextInjection {
    pub subject: Subject,
    /// The first injection schedule of the subject
    pub event: SubjectEvent,
    pub next_date: Option<NaiveDate>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNextInjectionsUseCase {
    type Response = Vec<NextInjection>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetNextInjections";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Errors> {
        let today = ctx.sys.today();
        let horizon = ctx.config.next_injection_horizon;
        let subjects = ctx
            .repos
            .subjects
            .find_all()
            .await
            .map_err(UseCaseErrors::StoreUnavailable)?;

        let mut injections = Vec::with_capacity(subjects.len());
        for subject in subjects {
            let events = ctx
                .repos
                .events
                .find_by_subject(&subject.id)
                .await
                .map_err(UseCaseErrors::StoreUnavailable)?;
            let event = match events.into_iter().find(|e| e.is_injection_schedule()) {
                Some(event) => event,
                None => continue,
            };
            let next_date = event.next_occurrence(today, horizon);
            injections.push(NextInjection {
                subject,
                event,
                next_date,
            });
        }

        Ok(injections)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pashumitra_scheduler_domain::ID;
    use pashumitra_scheduler_infra::ISys;
    use std::sync::Arc;

    struct StaticTimeSys {}
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            1710107999000 // Sun Mar 10 2024 21:59:59 GMT+0000
        }
    }

    fn id(val: &str) -> ID {
        val.parse().unwrap()
    }

    fn injection(event_id: &str, subject_id: &str, anchor: &str) -> SubjectEvent {
        SubjectEvent {
            id: id(event_id),
            subject_id: id(subject_id),
            is_injection: true,
            is_repeated: true,
            date: anchor.parse().unwrap(),
            repeat_duration: Some(7),
            completed_till: None,
            note: None,
        }
    }

    #[actix_web::test]
    async fn finds_next_pending_injection_per_subject() {
        let mut ctx = NotifierContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});
        ctx.config.next_injection_horizon = 100;

        for (subject_id, name) in [("cow-1", "Gauri"), ("cow-2", "Nandi"), ("cow-3", "Kamdhenu")] {
            let subject = Subject::new(id(subject_id), name, "Cow");
            ctx.repos.subjects.insert(&subject).await.unwrap();
        }

        // Weekly from Feb 1st, completed until Mar 14th
        let mut weekly = injection("e1", "cow-1", "2024-02-01T00:00:00Z");
        weekly.completed_till = Some("2024-03-14T00:00:00Z".parse().unwrap());
        ctx.repos.events.insert(&weekly).await.unwrap();

        // Only a checkup, no injection schedule
        let mut checkup = injection("e2", "cow-2", "2024-03-01T00:00:00Z");
        checkup.is_injection = false;
        ctx.repos.events.insert(&checkup).await.unwrap();

        // Far in the past, out of reach of the search
        let mut stale = injection("e3", "cow-3", "2020-01-01T00:00:00Z");
        stale.repeat_duration = Some(1);
        ctx.repos.events.insert(&stale).await.unwrap();

        let mut usecase = GetNextInjectionsUseCase {};
        let injections = usecase.execute(&ctx).await.unwrap();
        assert_eq!(injections.len(), 2);

        assert_eq!(injections[0].subject.id, id("cow-1"));
        assert_eq!(injections[0].next_date, NaiveDate::from_ymd_opt(2024, 3, 21));

        assert_eq!(injections[1].subject.id, id("cow-3"));
        assert_eq!(injections[1].next_date, None);
    }

    #[actix_web::test]
    async fn uses_first_created_injection_schedule() {
        let mut ctx = NotifierContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});
        ctx.config.next_injection_horizon = 100;
        let subject = Subject::new(id("cow-1"), "Gauri", "Cow");
        ctx.repos.subjects.insert(&subject).await.unwrap();

        let first = injection("e1", "cow-1", "2024-03-12T00:00:00Z");
        ctx.repos.events.insert(&first).await.unwrap();
        let later = injection("e2", "cow-1", "2024-03-05T00:00:00Z");
        ctx.repos.events.insert(&later).await.unwrap();

        let mut usecase = GetNextInjectionsUseCase {};
        let injections = usecase.execute(&ctx).await.unwrap();
        assert_eq!(injections.len(), 1);
        assert_eq!(injections[0].event.id, id("e1"));
        assert_eq!(injections[0].next_date, NaiveDate::from_ymd_opt(2024, 3, 12));
    }
}
