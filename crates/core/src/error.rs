use thiserror::Error;

/// Fatal configuration problems — missing or unusable credentials.
/// Never retried: the next scheduled run would fail identically.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("no mail recipients configured (MAIL_TO)")]
    NoRecipients,
}
