mod base;
mod notification;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use notification::NotificationClient;
pub use pashumitra_scheduler_api_structs::dtos::*;
pub use pashumitra_scheduler_domain::ID;
use status::StatusClient;
use std::sync::Arc;

/// PashuMitra Injection Notifier SDK
///
/// The SDK contains methods for interacting with the injection notifier
/// server API.
#[derive(Clone)]
pub struct NotifierSDK {
    pub notification: NotificationClient,
    pub status: StatusClient,
}

impl NotifierSDK {
    pub fn new(address: String) -> Self {
        Self::create(BaseClient::new(address))
    }

    /// Client for a server that protects its routes with a secret
    pub fn with_api_key<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        Self::create(base)
    }

    fn create(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let notification = NotificationClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            notification,
            status,
        }
    }
}
