//! Notifier trait definition and shared error types.

/// Errors that can occur during digest delivery.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("SMTP delivery failed: {0}")]
    Smtp(String),

    #[error("Template rendering failed: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// A rendered digest email ready for delivery.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The rendered subject line.
    pub subject: String,
    /// The rendered HTML body.
    pub html_body: String,
    /// Attachment filename, e.g. `jobs_2026-08-06.csv`.
    pub csv_filename: String,
    /// CSV payload bytes.
    pub csv: Vec<u8>,
}

/// Trait for the mail boundary.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification through this channel.
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError>;

    /// Human-readable name for this channel (e.g., "email").
    fn channel_name(&self) -> &str;
}
