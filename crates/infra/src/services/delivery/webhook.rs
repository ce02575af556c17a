use super::IDeliveryChannel;
use crate::config::require_env_vars;
use pashumitra_scheduler_domain::{DueWindow, InjectionReminder};
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};
use url::Url;

pub const WEBHOOK_KEY_HEADER: &str = "pashumitra-webhook-key";

#[derive(Debug, Clone)]
pub struct WebhookSettings {
    pub url: Url,
    /// Sent in the `pashumitra-webhook-key` header when present
    pub key: Option<String>,
}

impl WebhookSettings {
    pub const REQUIRED_ENV_VARS: &'static [&'static str] = &["NOTIFICATION_WEBHOOK_URL"];

    pub fn from_env() -> anyhow::Result<Self> {
        let values = require_env_vars(Self::REQUIRED_ENV_VARS)?;
        let url = Url::parse(&values[0]).map_err(|e| {
            anyhow::Error::msg(format!(
                "NOTIFICATION_WEBHOOK_URL: {} is not a valid url: {}",
                values[0], e
            ))
        })?;
        let key = std::env::var("NOTIFICATION_WEBHOOK_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self { url, key })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectionReminderPayload {
    pub subject_id: String,
    pub subject_name: String,
    pub subject_type: String,
    pub event_id: String,
    pub occurrence_date: String,
    pub due: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<&InjectionReminder> for InjectionReminderPayload {
    fn from(reminder: &InjectionReminder) -> Self {
        let due = match reminder.due {
            DueWindow::Today => "today",
            DueWindow::Tomorrow => "tomorrow",
            DueWindow::NotDue => "notDue",
        };
        Self {
            subject_id: reminder.subject_id.to_string(),
            subject_name: reminder.subject_name.clone(),
            subject_type: reminder.subject_type.clone(),
            event_id: reminder.event_id.to_string(),
            occurrence_date: reminder.occurrence_iso(),
            due,
            note: reminder.note.clone(),
        }
    }
}

/// Posts every reminder as JSON to a configured url
pub struct WebhookDeliveryChannel {
    client: Client,
    settings: WebhookSettings,
}

impl WebhookDeliveryChannel {
    pub fn new(settings: WebhookSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }
}

#[async_trait::async_trait]
impl IDeliveryChannel for WebhookDeliveryChannel {
    async fn send(&self, reminder: &InjectionReminder) -> anyhow::Result<()> {
        let payload = InjectionReminderPayload::from(reminder);
        let mut request = self.client.post(self.settings.url.clone()).json(&payload);
        if let Some(key) = &self.settings.key {
            request = request.header(WEBHOOK_KEY_HEADER, key);
        }

        let res = match request.send().await {
            Ok(res) => res,
            Err(e) => {
                error!("[Network Error] Webhook delivery failed: {:?}", e);
                return Err(anyhow::Error::new(e));
            }
        };
        if let Err(e) = res.error_for_status() {
            error!("[Unexpected Response] Webhook rejected reminder: {:?}", e);
            return Err(anyhow::Error::new(e));
        }

        info!(
            "Webhook notified for {} - {}",
            payload.subject_name, payload.occurrence_date
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn serializes_reminder_payload() {
        let reminder = InjectionReminder {
            subject_id: "cow-1".parse().unwrap(),
            subject_name: "Gauri".into(),
            subject_type: "Cow".into(),
            event_id: "e1".parse().unwrap(),
            occurrence_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            due: DueWindow::Today,
            note: None,
        };

        let payload = serde_json::to_value(InjectionReminderPayload::from(&reminder)).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "subjectId": "cow-1",
                "subjectName": "Gauri",
                "subjectType": "Cow",
                "eventId": "e1",
                "occurrenceDate": "2024-03-10T00:00:00.000Z",
                "due": "today"
            })
        );
    }
}
