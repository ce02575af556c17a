use pashumitra_scheduler_domain::{Subject, SubjectEvent, ID};
use pashumitra_scheduler_infra::NotifierContext;

pub fn id(val: &str) -> ID {
    val.parse().expect("Valid id")
}

pub fn injection_schedule(
    event_id: &str,
    subject_id: &str,
    anchor: &str,
    repeat_duration: i64,
) -> SubjectEvent {
    SubjectEvent {
        id: id(event_id),
        subject_id: id(subject_id),
        is_injection: true,
        is_repeated: true,
        date: anchor.parse().expect("Valid anchor"),
        repeat_duration: Some(repeat_duration),
        completed_till: None,
        note: Some("Deworming, 10ml".into()),
    }
}

pub async fn insert_subject(ctx: &NotifierContext, subject_id: &str, name: &str, kind: &str) {
    ctx.repos
        .subjects
        .insert(&Subject::new(id(subject_id), name, kind))
        .await
        .expect("To insert subject");
}

pub async fn insert_event(ctx: &NotifierContext, event: &SubjectEvent) {
    ctx.repos
        .events
        .insert(event)
        .await
        .expect("To insert event");
}

/// Gauri is due today, Kali is due tomorrow
pub async fn seed_herd(ctx: &NotifierContext) {
    insert_subject(ctx, "cow-1", "Gauri", "Cow").await;
    insert_event(
        ctx,
        &injection_schedule("e1", "cow-1", "2024-03-08T00:00:00Z", 2),
    )
    .await;
    insert_subject(ctx, "buffalo-1", "Kali", "Buffalo").await;
    insert_event(
        ctx,
        &injection_schedule("e2", "buffalo-1", "2024-02-10T00:00:00Z", 30),
    )
    .await;
}
