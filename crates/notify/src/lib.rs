//! Digest delivery over SMTP.
//!
//! This crate provides:
//! - `Notifier` trait for the mail boundary (mockable in pipeline tests)
//! - lettre-based `EmailNotifier` with TLS and a CSV attachment
//! - Minijinja rendering of the digest subject and HTML body

pub mod email;
pub mod templating;
pub mod traits;

pub use email::EmailNotifier;
pub use templating::{DigestTemplateContext, TemplateRenderer};
pub use traits::{Notification, Notifier, NotifyError};
