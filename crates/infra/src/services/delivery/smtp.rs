use super::IDeliveryChannel;
use crate::config::require_env_vars;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use pashumitra_scheduler_domain::{DueWindow, InjectionReminder};
use std::convert::TryInto;
use tracing::{error, info};

#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    /// Mailbox that receives every reminder
    pub notification_email: String,
    pub send_from_email: String,
}

impl SmtpSettings {
    pub const REQUIRED_ENV_VARS: &'static [&'static str] = &[
        "EMAIL_HOST",
        "EMAIL_PORT",
        "EMAIL_USER",
        "EMAIL_PASS",
        "NOTIFICATION_EMAIL",
    ];

    pub fn from_env() -> anyhow::Result<Self> {
        let values: [String; 5] = require_env_vars(Self::REQUIRED_ENV_VARS)?
            .try_into()
            .map_err(|_| anyhow::Error::msg("Unable to read the SMTP settings"))?;
        let [host, port, user, pass, notification_email] = values;
        let port = port
            .parse::<u16>()
            .map_err(|_| anyhow::Error::msg(format!("EMAIL_PORT: {} is not a valid port", port)))?;
        let send_from_email = std::env::var("SEND_FROM_EMAIL")
            .ok()
            .filter(|email| !email.trim().is_empty())
            .unwrap_or_else(|| user.clone());

        Ok(Self {
            host,
            port,
            user,
            pass,
            notification_email,
            send_from_email,
        })
    }
}

/// Sends every reminder as an HTML e-mail to one fixed mailbox
pub struct SmtpDeliveryChannel {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

fn parse_mailbox(var: &str, value: &str) -> anyhow::Result<Mailbox> {
    value.parse::<Mailbox>().map_err(|e| {
        anyhow::Error::msg(format!("{}: {} is not a valid mailbox: {}", var, value, e))
    })
}

impl SmtpDeliveryChannel {
    pub fn new(settings: SmtpSettings) -> anyhow::Result<Self> {
        let from = parse_mailbox("SEND_FROM_EMAIL", &settings.send_from_email)?;
        let to = parse_mailbox("NOTIFICATION_EMAIL", &settings.notification_email)?;
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(Credentials::new(settings.user, settings.pass))
            .build();

        Ok(Self { mailer, from, to })
    }

    fn build_message(&self, reminder: &InjectionReminder) -> anyhow::Result<Message> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(render_subject(reminder))
            .header(ContentType::TEXT_HTML)
            .body(render_body(reminder))?;
        Ok(message)
    }
}

#[async_trait::async_trait]
impl IDeliveryChannel for SmtpDeliveryChannel {
    async fn send(&self, reminder: &InjectionReminder) -> anyhow::Result<()> {
        let message = self.build_message(reminder)?;
        if let Err(e) = self.mailer.send(message).await {
            error!(
                "Error sending email for {} - {}: {:?}",
                reminder.subject_name,
                reminder.occurrence_iso(),
                e
            );
            return Err(anyhow::Error::new(e));
        }
        info!(
            "Email sent for {} - {}",
            reminder.subject_name,
            reminder.occurrence_iso()
        );
        Ok(())
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub(crate) fn render_subject(reminder: &InjectionReminder) -> String {
    format!("Injection Reminder: {}", reminder.subject_name)
}

pub(crate) fn render_body(reminder: &InjectionReminder) -> String {
    let due = match reminder.due {
        DueWindow::Today => "<p><strong>Due:</strong> Today</p>",
        DueWindow::Tomorrow => "<p><strong>Due:</strong> Tomorrow</p>",
        DueWindow::NotDue => "",
    };
    let note = reminder
        .note
        .as_ref()
        .map(|note| format!("<p><strong>Note:</strong> {}</p>", escape_html(note)))
        .unwrap_or_default();

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2563eb;">🐄 Injection Reminder</h2>
  <div style="background-color: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="margin-top: 0;">Cattle Details:</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Type:</strong> {kind}</p>
    <p><strong>Injection Date:</strong> {date}</p>
    {due}
    {note}
  </div>
  <p style="color: #64748b; font-size: 14px;">
    This is an automated reminder from PashuMitra cattle management system.
  </p>
</div>"#,
        name = escape_html(&reminder.subject_name),
        kind = escape_html(&reminder.subject_type),
        date = reminder.human_date(),
        due = due,
        note = note,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reminder(name: &str, note: Option<&str>) -> InjectionReminder {
        InjectionReminder {
            subject_id: "cow-1".parse().unwrap(),
            subject_name: name.to_string(),
            subject_type: "Cow".to_string(),
            event_id: "e1".parse().unwrap(),
            occurrence_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            due: DueWindow::Tomorrow,
            note: note.map(String::from),
        }
    }

    fn settings(notification_email: &str) -> SmtpSettings {
        SmtpSettings {
            host: "smtp.example.com".into(),
            port: 587,
            user: "alerts@example.com".into(),
            pass: "secret".into(),
            notification_email: notification_email.into(),
            send_from_email: "alerts@example.com".into(),
        }
    }

    #[test]
    fn renders_subject_line() {
        assert_eq!(
            render_subject(&reminder("Gauri", None)),
            "Injection Reminder: Gauri"
        );
    }

    #[test]
    fn renders_body_with_note() {
        let body = render_body(&reminder("Gauri", Some("FMD booster, 5ml")));
        assert!(body.contains("<strong>Name:</strong> Gauri"));
        assert!(body.contains("<strong>Type:</strong> Cow"));
        assert!(body.contains("<strong>Injection Date:</strong> March 10, 2024"));
        assert!(body.contains("<strong>Due:</strong> Tomorrow"));
        assert!(body.contains("<strong>Note:</strong> FMD booster, 5ml"));
    }

    #[test]
    fn leaves_out_missing_note() {
        let body = render_body(&reminder("Gauri", None));
        assert!(!body.contains("Note:"));
    }

    #[test]
    fn escapes_user_input() {
        let body = render_body(&reminder("<b>Gauri</b>", Some("a & b")));
        assert!(body.contains("&lt;b&gt;Gauri&lt;/b&gt;"));
        assert!(body.contains("a &amp; b"));
        assert!(!body.contains("<b>Gauri</b>"));
    }

    #[test]
    fn rejects_invalid_mailbox() {
        let err = SmtpDeliveryChannel::new(settings("not-an-address"))
            .err()
            .expect("Invalid mailbox to be rejected");
        assert!(err.to_string().starts_with("NOTIFICATION_EMAIL"));
    }

    #[tokio::test]
    async fn builds_html_message() {
        let channel = SmtpDeliveryChannel::new(settings("farmer@example.com")).unwrap();
        let message = channel
            .build_message(&reminder("Gauri", Some("FMD booster")))
            .unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Injection Reminder: Gauri"));
        assert!(raw.contains("To: farmer@example.com"));
        assert!(raw.contains("Content-Type: text/html"));
    }
}
