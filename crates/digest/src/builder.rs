//! Assembles the ranked digest from classified, deduplicated postings.

use chrono::Utc;

use jobdigest_core::{ClassifiedPosting, Digest};

/// Partition into entry-level and other postings, each ranked by boost
/// score descending. The sort is stable, so equal scores keep fetch
/// order — which is most-recent-first after collection.
pub fn build(classified: Vec<ClassifiedPosting>) -> Digest {
    let (mut entry, mut others): (Vec<_>, Vec<_>) =
        classified.into_iter().partition(|c| c.is_entry_level);

    entry.sort_by(|a, b| b.boost_score.cmp(&a.boost_score));
    others.sort_by(|a, b| b.boost_score.cmp(&a.boost_score));

    Digest {
        generated_at: Utc::now(),
        entry,
        others,
    }
}
