mod delivery;

pub use delivery::{
    create_delivery_channel, DeliveryChannelKind, IDeliveryChannel, InMemoryDeliveryChannel,
    SmtpDeliveryChannel, SmtpSettings, WebhookDeliveryChannel, WebhookSettings,
};
