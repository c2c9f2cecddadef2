//! Runs every configured query and normalizes the combined result list.
//!
//! Postings with an identical (title, company) pair across queries are
//! collapsed to their first occurrence, then the list is ordered
//! most-recent-first so later tie-breaks favor fresh postings.

use std::collections::HashSet;

use tracing::info;

use jobdigest_core::Posting;

use crate::provider::{JobSearchProvider, SearchError};

/// Fetch all queries through the provider and return the collapsed,
/// recency-ordered posting list. Any failed query fails the run — the
/// next scheduled invocation is the retry mechanism.
pub async fn collect_postings(
    provider: &dyn JobSearchProvider,
    queries: &[String],
) -> Result<Vec<Posting>, SearchError> {
    let mut all = Vec::new();

    for query in queries {
        let results = provider.search(query).await?;
        info!(query = %query, count = results.len(), "fetched postings");
        all.extend(results);
    }

    let before = all.len();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    all.retain(|p| seen.insert((p.title.clone(), p.company.clone())));
    info!(
        collected = before,
        unique = all.len(),
        "collapsed in-run duplicates"
    );

    // Stable sort: equal ages keep API order.
    all.sort_by_key(|p| p.age_rank());

    Ok(all)
}
