//! CSV payload for the email attachment.
//!
//! One row per entry-level posting, in digest order. Quoting and
//! escaping are the `csv` crate's problem, not ours.

use jobdigest_core::Digest;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const HEADER: [&str; 6] = [
    "title",
    "company",
    "location",
    "boost_score",
    "posted_days_ago",
    "link",
];

/// Render the digest's entry-level rows as CSV bytes.
pub fn digest_csv(digest: &Digest) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for c in &digest.entry {
        let p = &c.posting;
        let boost = c.boost_score.to_string();
        let age = p.posted_days_ago.map(|d| d.to_string()).unwrap_or_default();
        writer.write_record([
            p.title.as_str(),
            p.company.as_str(),
            p.location.as_str(),
            boost.as_str(),
            age.as_str(),
            p.link.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// Dated attachment filename, e.g. `jobs_2026-08-06.csv`.
pub fn csv_filename(digest: &Digest) -> String {
    format!("jobs_{}.csv", digest.generated_at.format("%Y-%m-%d"))
}
