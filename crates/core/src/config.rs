use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    match env_opt(key) {
        Some(v) => v == "true" || v == "1",
        None => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    pub smtp: SmtpConfig,
    pub digest: DigestConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            search: SearchConfig::from_env(),
            smtp: SmtpConfig::from_env(),
            digest: DigestConfig::from_env(),
        }
    }

    /// Check that every required option is present. Fatal on failure —
    /// a run with missing credentials can never succeed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()?;
        self.smtp.validate()?;
        Ok(())
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!(
            "  search:  location={}, hl={}, gl={}, key={}",
            self.search.location,
            self.search.hl,
            self.search.gl,
            if self.search.api_key.is_some() { "set" } else { "(none)" },
        );
        tracing::info!(
            "  smtp:    host={}, port={}, from={}, recipients={}",
            self.smtp.host.as_deref().unwrap_or("(none)"),
            self.smtp.port,
            self.smtp.from.as_deref().unwrap_or("(none)"),
            self.smtp.to.len(),
        );
        tracing::info!(
            "  digest:  seen_file={}, rules={}, send_empty={}",
            self.digest.seen_file.display(),
            self.digest.keyword_rules.display(),
            self.digest.send_empty,
        );
    }
}

// ── Search API ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub location: String,
    /// Interface language parameter passed to the API.
    pub hl: String,
    /// Country code parameter passed to the API.
    pub gl: String,
}

impl SearchConfig {
    fn from_env() -> Self {
        Self {
            api_key: env_opt("SERPAPI_KEY"),
            base_url: env_or("SERPAPI_BASE_URL", "https://serpapi.com"),
            location: env_or("SEARCH_LOCATION", "Berlin, Germany"),
            hl: env_or("SEARCH_HL", "en"),
            gl: env_or("SEARCH_GL", "de"),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_none() {
            return Err(ConfigError::MissingVar("SERPAPI_KEY"));
        }
        Ok(())
    }
}

// ── SMTP / mail ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: Option<String>,
    pub port: u16,
    pub tls: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: Option<String>,
    pub to: Vec<String>,
}

impl SmtpConfig {
    fn from_env() -> Self {
        let to = env_opt("MAIL_TO")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host: env_opt("SMTP_HOST"),
            port: env_u16("SMTP_PORT", 587),
            tls: env_bool("SMTP_TLS", true),
            username: env_opt("SMTP_USERNAME"),
            password: env_opt("SMTP_PASSWORD"),
            from: env_opt("MAIL_FROM"),
            to,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_none() {
            return Err(ConfigError::MissingVar("SMTP_HOST"));
        }
        if self.from.is_none() {
            return Err(ConfigError::MissingVar("MAIL_FROM"));
        }
        if self.to.is_empty() {
            return Err(ConfigError::NoRecipients);
        }
        Ok(())
    }
}

// ── Digest behavior ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Flat seen-set file, one posting id per line.
    pub seen_file: PathBuf,
    /// YAML keyword-rule document; compiled defaults used when missing.
    pub keyword_rules: PathBuf,
    /// Display name used in the email subject line.
    pub name: String,
    /// Send a "no results" email when the digest is empty.
    pub send_empty: bool,
    pub max_entry_rows: usize,
    pub max_other_rows: usize,
}

impl DigestConfig {
    fn from_env() -> Self {
        Self {
            seen_file: PathBuf::from(env_or("SEEN_FILE", "data/seen_jobs.txt")),
            keyword_rules: PathBuf::from(env_or("KEYWORD_RULES", "data/rules/keywords.yml")),
            name: env_or("DIGEST_NAME", "Berlin Supply Chain"),
            send_empty: env_bool("SEND_EMPTY", true),
            max_entry_rows: env_usize("MAX_ENTRY_ROWS", 15),
            max_other_rows: env_usize("MAX_OTHER_ROWS", 20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; each uses its own key names.

    #[test]
    fn recipients_split_on_comma() {
        env::set_var("MAIL_TO", "a@example.com, b@example.com,,");
        let smtp = SmtpConfig::from_env();
        assert_eq!(smtp.to, vec!["a@example.com", "b@example.com"]);
        env::remove_var("MAIL_TO");
    }

    #[test]
    fn validate_requires_api_key() {
        let search = SearchConfig {
            api_key: None,
            base_url: "https://serpapi.com".to_string(),
            location: "Berlin, Germany".to_string(),
            hl: "en".to_string(),
            gl: "de".to_string(),
        };
        let err = search.validate().unwrap_err();
        assert!(err.to_string().contains("SERPAPI_KEY"));
    }

    #[test]
    fn validate_requires_recipients() {
        let smtp = SmtpConfig {
            host: Some("smtp.example.com".to_string()),
            port: 587,
            tls: true,
            username: None,
            password: None,
            from: Some("digest@example.com".to_string()),
            to: vec![],
        };
        assert!(matches!(smtp.validate(), Err(ConfigError::NoRecipients)));
    }

    #[test]
    fn digest_defaults() {
        let digest = DigestConfig::from_env();
        assert_eq!(digest.max_entry_rows, 15);
        assert_eq!(digest.max_other_rows, 20);
        assert!(digest.send_empty);
    }
}
