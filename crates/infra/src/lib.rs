mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    IEventRepo, ISentNotificationRepo, ISubjectRepo, InMemoryEventRepo,
    InMemorySentNotificationRepo, InMemorySubjectRepo, Repos,
};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
pub use system::{ISys, RealSys};
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

#[derive(Clone)]
pub struct NotifierContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub delivery: Arc<dyn IDeliveryChannel>,
    pool: Option<PgPool>,
    /// Shared by every clone of the context so that notification runs
    /// triggered by the job and by requests never overlap
    notification_run: Arc<Mutex<()>>,
}

struct ContextParams {
    pub postgres_connection_string: String,
    pub delivery_channel: DeliveryChannelKind,
}

impl NotifierContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&params.postgres_connection_string)
            .await?;
        run_migration(&pool).await?;
        info!("Connected to the store and applied migrations");

        let delivery = create_delivery_channel(params.delivery_channel)?;
        Ok(Self {
            repos: Repos::create_postgres(pool.clone()),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            delivery,
            pool: Some(pool),
            notification_run: Arc::new(Mutex::new(())),
        })
    }

    /// Context backed by in-memory stores and an in-memory delivery channel
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            delivery: Arc::new(InMemoryDeliveryChannel::new()),
            pool: None,
            notification_run: Arc::new(Mutex::new(())),
        }
    }

    /// Waits until no other notification run is in progress. The run is
    /// exclusive for as long as the returned guard is held.
    pub async fn lock_notification_run(&self) -> MutexGuard<'_, ()> {
        self.notification_run.lock().await
    }

    /// Releases the store connections held by this context
    pub async fn teardown(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

/// Will setup the infrastructure context given the environment.
/// Every missing variable is reported at once.
pub async fn setup_context() -> anyhow::Result<NotifierContext> {
    let delivery_channel = DeliveryChannelKind::from_env()?;
    let mut required = vec![PSQL_CONNECTION_STRING];
    required.extend_from_slice(delivery_channel.required_env_vars());
    let mut values = config::require_env_vars(&required)?;

    NotifierContext::create(ContextParams {
        postgres_connection_string: values.remove(0),
        delivery_channel,
    })
    .await
}

pub async fn run_migration(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await
}
