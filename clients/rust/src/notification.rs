use crate::{APIResponse, BaseClient};
use pashumitra_scheduler_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Runs the injection notifications once. A failed run is returned as an
    /// `APIError` carrying the run summary as its message.
    pub async fn send_injection_notifications(
        &self,
    ) -> APIResponse<send_injection_notifications::APIResponse> {
        self.base
            .get("cron/injection-notifications", StatusCode::OK)
            .await
    }

    pub async fn get_next_injections(&self) -> APIResponse<get_next_injections::APIResponse> {
        self.base.get("injections/next", StatusCode::OK).await
    }
}
