use pashumitra_scheduler_api::Application;
use pashumitra_scheduler_infra::{ISys, InMemoryDeliveryChannel, NotifierContext};
use pashumitra_scheduler_sdk::NotifierSDK;
use std::sync::Arc;

pub struct StaticTimeSys {}
impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        1710107999000 // Sun Mar 10 2024 21:59:59 GMT+0000
    }
}

pub struct TestApp {
    pub ctx: NotifierContext,
    pub delivery: Arc<InMemoryDeliveryChannel>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, NotifierSDK, String) {
    spawn_app_with(|_| {}).await
}

/// Same as `spawn_app`, `configure` can adjust the context before launch
pub async fn spawn_app_with<F>(configure: F) -> (TestApp, NotifierSDK, String)
where
    F: FnOnce(&mut NotifierContext),
{
    let mut ctx = NotifierContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.injection_job_interval = None;
    ctx.config.cron_secret = None;
    ctx.sys = Arc::new(StaticTimeSys {});
    let delivery = Arc::new(InMemoryDeliveryChannel::new());
    ctx.delivery = delivery.clone();
    configure(&mut ctx);

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx, delivery };
    let sdk = NotifierSDK::new(address.clone());
    (app, sdk, address)
}
