use super::ledger::NotificationLedger;
use crate::{
    error::NotifierError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{rt::time::timeout, web, HttpRequest, HttpResponse};
use chrono::NaiveDate;
use futures::{stream, StreamExt, TryStreamExt};
use pashumitra_scheduler_api_structs::send_injection_notifications::*;
use pashumitra_scheduler_domain::{
    DueWindow, InjectionReminder, SentNotificationSnapshot, Subject, SubjectEvent,
};
use pashumitra_scheduler_infra::NotifierContext;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{error, info, warn};

fn handle_error(e: UseCaseErrors) -> NotifierError {
    match e {
        UseCaseErrors::StoreUnavailable(e) => NotifierError::NotificationRunFailed(e.to_string()),
        UseCaseErrors::DeadlineExceeded(deadline) => NotifierError::NotificationRunFailed(format!(
            "The notification run did not finish within {:?}",
            deadline
        )),
    }
}

pub async fn send_injection_notifications_controller(
    http_req: HttpRequest,
    ctx: web::Data<NotifierContext>,
) -> Result<HttpResponse, NotifierError> {
    protect_route(&http_req, &ctx)?;

    let usecase = SendInjectionNotificationsUseCase {};
    execute(usecase, &ctx)
        .await
        .map(|report| HttpResponse::Ok().json(APIResponse::sent(report.notifications_sent)))
        .map_err(handle_error)
}

/// Sends a reminder for every injection occurrence that is due today or
/// tomorrow and has not been notified before
#[derive(Debug)]
pub struct SendInjectionNotificationsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {
    StoreUnavailable(anyhow::Error),
    DeadlineExceeded(Duration),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NotificationRunReport {
    pub notifications_sent: usize,
    pub already_notified: usize,
    pub delivery_failures: usize,
    pub ledger_failures: usize,
}

#[derive(Default)]
struct RunCounters {
    notifications_sent: AtomicUsize,
    already_notified: AtomicUsize,
    delivery_failures: AtomicUsize,
    ledger_failures: AtomicUsize,
}

impl RunCounters {
    fn report(&self) -> NotificationRunReport {
        NotificationRunReport {
            notifications_sent: self.notifications_sent.load(Ordering::Relaxed),
            already_notified: self.already_notified.load(Ordering::Relaxed),
            delivery_failures: self.delivery_failures.load(Ordering::Relaxed),
            ledger_failures: self.ledger_failures.load(Ordering::Relaxed),
        }
    }
}

fn due_reminders(
    subject: &Subject,
    events: &[SubjectEvent],
    today: NaiveDate,
    horizon: usize,
    snapshot: &SentNotificationSnapshot,
    counters: &RunCounters,
) -> Vec<InjectionReminder> {
    let mut reminders = Vec::new();
    for event in events.iter().filter(|e| e.is_injection_schedule()) {
        for date in event.occurrences(today, horizon) {
            let due = DueWindow::classify(date, today);
            if !due.is_due() {
                continue;
            }
            let reminder = InjectionReminder::new(subject, event, date, due);
            if snapshot.contains(&reminder.key()) {
                counters.already_notified.fetch_add(1, Ordering::Relaxed);
                continue;
            }
            reminders.push(reminder);
        }
    }
    reminders
}

/// Reads every subject with its events and collects the reminders to send,
/// grouped per subject. Any failing read fails the whole load.
async fn load_reminders(
    ctx: &NotifierContext,
    today: NaiveDate,
    snapshot: &SentNotificationSnapshot,
    counters: &RunCounters,
) -> anyhow::Result<Vec<Vec<InjectionReminder>>> {
    let subjects = ctx.repos.subjects.find_all().await?;
    let horizon = ctx.config.horizon_days;

    stream::iter(subjects)
        .map(|subject| async move {
            let events = ctx.repos.events.find_by_subject(&subject.id).await?;
            Ok::<_, anyhow::Error>(due_reminders(
                &subject, &events, today, horizon, snapshot, counters,
            ))
        })
        .buffered(ctx.config.subject_concurrency)
        .try_collect()
        .await
}

/// Delivers one reminder and records it in the ledger once delivered
async fn notify(
    reminder: InjectionReminder,
    ledger: &NotificationLedger<'_>,
    counters: &RunCounters,
    ctx: &NotifierContext,
) {
    let delivery_timeout = ctx.config.delivery_timeout;
    match timeout(delivery_timeout, ctx.delivery.send(&reminder)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            counters.delivery_failures.fetch_add(1, Ordering::Relaxed);
            error!(
                "Failed to notify about {} - {}: {:?}",
                reminder.subject_name,
                reminder.occurrence_iso(),
                e
            );
            return;
        }
        Err(_) => {
            counters.delivery_failures.fetch_add(1, Ordering::Relaxed);
            warn!(
                "Notification about {} - {} timed out after {:?}",
                reminder.subject_name,
                reminder.occurrence_iso(),
                delivery_timeout
            );
            return;
        }
    }
    counters.notifications_sent.fetch_add(1, Ordering::Relaxed);

    if let Err(e) = ledger.record(reminder.key(), ctx.sys.now()).await {
        counters.ledger_failures.fetch_add(1, Ordering::Relaxed);
        error!(
            "Notified about {} but could not record it, it will be sent again: {:?}",
            reminder.key(),
            e
        );
    }
}

async fn notify_subject(
    reminders: Vec<InjectionReminder>,
    ledger: &NotificationLedger<'_>,
    counters: &RunCounters,
    ctx: &NotifierContext,
) {
    for reminder in reminders {
        notify(reminder, ledger, counters, ctx).await;
    }
}

async fn run(ctx: &NotifierContext) -> anyhow::Result<NotificationRunReport> {
    let today = ctx.sys.today();
    let ledger = NotificationLedger::new(ctx);
    let snapshot = ledger.snapshot().await?;
    let counters = RunCounters::default();

    let reminders_per_subject = load_reminders(ctx, today, &snapshot, &counters).await?;
    stream::iter(reminders_per_subject)
        .for_each_concurrent(ctx.config.subject_concurrency, |reminders| {
            notify_subject(reminders, &ledger, &counters, ctx)
        })
        .await;

    Ok(counters.report())
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendInjectionNotificationsUseCase {
    type Response = NotificationRunReport;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SendInjectionNotifications";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Errors> {
        // Overlapping runs would read the same ledger snapshot
        let _running = ctx.lock_notification_run().await;

        let deadline = ctx.config.run_deadline;
        let report = timeout(deadline, run(ctx))
            .await
            .map_err(|_| UseCaseErrors::DeadlineExceeded(deadline))?
            .map_err(UseCaseErrors::StoreUnavailable)?;

        info!(
            notifications_sent = report.notifications_sent,
            already_notified = report.already_notified,
            delivery_failures = report.delivery_failures,
            ledger_failures = report.ledger_failures,
            "Injection notification run finished"
        );
        Ok(report)
    }
}
