//! SMTP email notifier via `lettre` with TLS support.
//!
//! Delivers the digest as an HTML email with the CSV attached.
//! Supports STARTTLS and implicit TLS connections.

use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use jobdigest_core::config::SmtpConfig;

use crate::traits::{Notification, Notifier, NotifyError};

/// Sends the digest via SMTP.
#[derive(Debug)]
pub struct EmailNotifier {
    /// Async SMTP transport for sending emails.
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// Sender mailbox.
    from: Mailbox,
    /// Recipient mailboxes.
    to: Vec<Mailbox>,
}

impl EmailNotifier {
    /// Build an `EmailNotifier` from SMTP configuration.
    ///
    /// Port 465 uses implicit TLS; any other port uses STARTTLS when
    /// `config.tls` is set and plaintext otherwise. Credentials are
    /// attached when both username and password are configured.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, NotifyError> {
        let host = config
            .host
            .as_deref()
            .ok_or_else(|| NotifyError::Config("SMTP_HOST is not set".to_string()))?;

        let from: Mailbox = config
            .from
            .as_deref()
            .ok_or_else(|| NotifyError::Config("MAIL_FROM is not set".to_string()))?
            .parse()
            .map_err(|e: lettre::address::AddressError| NotifyError::Config(e.to_string()))?;

        let to: Vec<Mailbox> = config
            .to
            .iter()
            .map(|addr| {
                addr.parse()
                    .map_err(|e: lettre::address::AddressError| NotifyError::Config(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if to.is_empty() {
            return Err(NotifyError::Config(
                "at least one recipient is required".to_string(),
            ));
        }

        let mut builder = if config.port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| NotifyError::Config(e.to_string()))?
                .port(config.port)
        } else if config.tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                .map_err(|e| NotifyError::Config(e.to_string()))?
                .port(config.port)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).port(config.port)
        };

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
            to,
        })
    }
}

#[async_trait::async_trait]
impl Notifier for EmailNotifier {
    /// Send the digest email to all configured recipients.
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        let mut message_builder = Message::builder().from(self.from.clone());

        for recipient in &self.to {
            message_builder = message_builder.to(recipient.clone());
        }

        let csv_type =
            ContentType::parse("text/csv").map_err(|e| NotifyError::Smtp(e.to_string()))?;

        let email = message_builder
            .subject(&notification.subject)
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::html(notification.html_body.clone()))
                    .singlepart(
                        Attachment::new(notification.csv_filename.clone())
                            .body(notification.csv.clone(), csv_type),
                    ),
            )
            .map_err(|e| NotifyError::Smtp(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| NotifyError::Smtp(e.to_string()))?;

        tracing::info!(
            channel = "email",
            subject = %notification.subject,
            recipients = self.to.len(),
            attachment = %notification.csv_filename,
            "digest delivered"
        );

        Ok(())
    }

    /// Returns `"email"`.
    fn channel_name(&self) -> &str {
        "email"
    }
}
