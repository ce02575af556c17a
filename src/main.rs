mod telemetry;

use pashumitra_scheduler_api::Application;
use pashumitra_scheduler_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::error;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("pashumitra_scheduler_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = match setup_context().await {
        Ok(context) => context,
        Err(e) => {
            error!("Unable to set up the notifier: {}", e);
            return Err(e);
        }
    };

    let app = Application::new(context.clone()).await?;
    let res = app.start().await;
    context.teardown().await;

    Ok(res?)
}
