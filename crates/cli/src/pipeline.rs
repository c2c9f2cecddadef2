//! The single-pass digest pipeline.
//!
//! Keyword source → search → classify → dedup → build → notify, then
//! persist the seen-set. Delivery happens before persistence: a failed
//! seen-set write after a successful send means duplicate emails next
//! run, which beats silently dropping postings that were never sent.

use anyhow::{Context, Result};
use tracing::info;

use jobdigest_core::config::DigestConfig;
use jobdigest_digest::{build, csv_filename, digest_csv, filter_new, SeenStore};
use jobdigest_notify::{DigestTemplateContext, Notification, Notifier, TemplateRenderer};
use jobdigest_rules::{classify, KeywordSet};
use jobdigest_search::{collect_postings, JobSearchProvider};

/// Outcome counters for the run's exit log.
#[derive(Debug, PartialEq)]
pub struct RunReport {
    pub fetched: usize,
    pub new: usize,
    pub entry: usize,
    pub others: usize,
    pub sent: bool,
}

/// Execute one digest run against the given collaborators.
pub async fn run(
    provider: &dyn JobSearchProvider,
    notifier: &dyn Notifier,
    store: &SeenStore,
    keywords: &KeywordSet,
    config: &DigestConfig,
) -> Result<RunReport> {
    let mut seen = store.load().context("failed to read seen set")?;

    let postings = collect_postings(provider, &keywords.queries)
        .await
        .context("job search failed")?;
    let fetched = postings.len();

    let classified: Vec<_> = postings.into_iter().map(|p| classify(p, keywords)).collect();

    let new = filter_new(classified, &mut seen);
    info!(fetched, new = new.len(), "postings after seen-set filtering");

    let digest = build(new);
    let report = RunReport {
        fetched,
        new: digest.entry.len() + digest.others.len(),
        entry: digest.entry.len(),
        others: digest.others.len(),
        sent: false,
    };

    let sent = if digest.is_empty() && !config.send_empty {
        info!("digest is empty and SEND_EMPTY is off, skipping delivery");
        false
    } else {
        let renderer = TemplateRenderer::new();
        let ctx = DigestTemplateContext::from_digest(&digest, config);
        let notification = Notification {
            subject: renderer.subject(&ctx)?,
            html_body: renderer.body(&ctx)?,
            csv_filename: csv_filename(&digest),
            csv: digest_csv(&digest).context("failed to build CSV attachment")?,
        };
        notifier
            .send(&notification)
            .await
            .context("digest delivery failed")?;
        true
    };

    // Durable before the run ends; a failure here is loud by design.
    store.persist(&seen).context("failed to persist seen set")?;

    Ok(RunReport { sent, ..report })
}
