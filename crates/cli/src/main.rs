//! jobdigest — daily job-digest run.
//!
//! Fetches postings for every configured query, classifies them with the
//! keyword heuristic, drops everything already digested on a prior run,
//! emails the ranked digest with a CSV attached, and records the new ids.
//! Scheduling belongs to cron; this binary is "run now".

mod pipeline;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use jobdigest_core::config::{load_dotenv, Config};
use jobdigest_digest::SeenStore;
use jobdigest_notify::EmailNotifier;
use jobdigest_rules::load_keyword_set;
use jobdigest_search::SerpApiClient;

// ── CLI ─────────────────────────────────────────────────────────────

/// Daily job digest — search, classify, dedup, email.
///
/// All behavior is driven by environment configuration (see
/// `.env.example`); the flags below only override file locations.
#[derive(Parser, Debug)]
#[command(name = "jobdigest", version, about)]
struct Cli {
    /// Path to the KeywordConfig YAML (overrides KEYWORD_RULES).
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Path to the seen-ids file (overrides SEEN_FILE).
    #[arg(long)]
    seen_file: Option<PathBuf>,
}

// ── main ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    load_dotenv();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(rules) = cli.rules {
        config.digest.keyword_rules = rules;
    }
    if let Some(seen_file) = cli.seen_file {
        config.digest.seen_file = seen_file;
    }

    config.validate().context("configuration error")?;
    config.log_summary();

    let keywords = load_keyword_set(&config.digest.keyword_rules)
        .context("failed to load keyword rules")?;

    let provider = SerpApiClient::from_config(&config.search)
        .context("failed to create search client")?;
    let notifier =
        EmailNotifier::from_config(&config.smtp).context("failed to create email notifier")?;
    let store = SeenStore::new(config.digest.seen_file.clone());

    let report = pipeline::run(&provider, &notifier, &store, &keywords, &config.digest).await?;

    info!(
        fetched = report.fetched,
        new = report.new,
        entry = report.entry,
        others = report.others,
        sent = report.sent,
        "run complete"
    );

    Ok(())
}
