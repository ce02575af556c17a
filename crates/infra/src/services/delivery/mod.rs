mod inmemory;
mod smtp;
mod webhook;

use crate::config::require_env_vars;
pub use inmemory::InMemoryDeliveryChannel;
use pashumitra_scheduler_domain::InjectionReminder;
pub use smtp::{SmtpDeliveryChannel, SmtpSettings};
use std::sync::Arc;
pub use webhook::{WebhookDeliveryChannel, WebhookSettings};

/// Where injection reminders are sent. A successful return means the
/// channel accepted the reminder, anything else is a failed delivery.
#[async_trait::async_trait]
pub trait IDeliveryChannel: Send + Sync {
    async fn send(&self, reminder: &InjectionReminder) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeliveryChannelKind {
    Smtp,
    Webhook,
}

impl DeliveryChannelKind {
    pub fn from_env() -> anyhow::Result<Self> {
        let kind = std::env::var("DELIVERY_CHANNEL").unwrap_or_default();
        match kind.trim().to_lowercase().as_str() {
            "" | "smtp" | "email" => Ok(Self::Smtp),
            "webhook" => Ok(Self::Webhook),
            other => Err(anyhow::Error::msg(format!(
                "Unsupported DELIVERY_CHANNEL: {}. Expected one of: smtp, webhook",
                other
            ))),
        }
    }

    pub fn required_env_vars(&self) -> &'static [&'static str] {
        match self {
            Self::Smtp => SmtpSettings::REQUIRED_ENV_VARS,
            Self::Webhook => WebhookSettings::REQUIRED_ENV_VARS,
        }
    }
}

/// Creates the delivery channel configured through the environment.
/// Expects the required variables of `kind` to be present.
pub fn create_delivery_channel(
    kind: DeliveryChannelKind,
) -> anyhow::Result<Arc<dyn IDeliveryChannel>> {
    require_env_vars(kind.required_env_vars())?;
    let channel: Arc<dyn IDeliveryChannel> = match kind {
        DeliveryChannelKind::Smtp => {
            let settings = SmtpSettings::from_env()?;
            Arc::new(SmtpDeliveryChannel::new(settings)?)
        }
        DeliveryChannelKind::Webhook => {
            let settings = WebhookSettings::from_env()?;
            Arc::new(WebhookDeliveryChannel::new(settings))
        }
    };
    Ok(channel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn selects_channel_from_env() {
        std::env::remove_var("DELIVERY_CHANNEL");
        assert_eq!(
            DeliveryChannelKind::from_env().unwrap(),
            DeliveryChannelKind::Smtp
        );

        std::env::set_var("DELIVERY_CHANNEL", "Webhook");
        assert_eq!(
            DeliveryChannelKind::from_env().unwrap(),
            DeliveryChannelKind::Webhook
        );

        std::env::set_var("DELIVERY_CHANNEL", "sms");
        assert!(DeliveryChannelKind::from_env().is_err());
        std::env::remove_var("DELIVERY_CHANNEL");
    }
}
