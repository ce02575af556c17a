use crate::{notification::SendInjectionNotificationsUseCase, shared::usecase::execute};
use actix_web::rt::time::interval;
use pashumitra_scheduler_infra::NotifierContext;
use tracing::info;

/// Runs the injection notifications on the configured interval. The HTTP
/// trigger keeps working alongside it.
pub fn start_injection_notifications_job(ctx: NotifierContext) {
    let period = match ctx.config.injection_job_interval {
        Some(period) => period,
        None => return,
    };
    info!("Sending injection notifications every {:?}", period);

    actix_web::rt::spawn(async move {
        let mut interval = interval(period);
        loop {
            interval.tick().await;

            let usecase = SendInjectionNotificationsUseCase {};
            // Failed runs are logged by `execute`
            let _ = execute(usecase, &ctx).await;
        }
    });
}
