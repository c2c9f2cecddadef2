use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Posted-age rank assigned when the API gives no age information.
/// Unknown postings sort after everything with a known age.
pub const UNKNOWN_AGE_DAYS: u32 = 999;

/// A single job listing returned by the search collaborator.
///
/// Immutable once fetched. The `id` is the API-provided job id when
/// present, otherwise the link string — it only needs to be stable
/// across runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Posting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub link: String,
    /// Days since the posting went up, when the API exposes it.
    pub posted_days_ago: Option<u32>,
}

impl Posting {
    /// Sort rank by recency: lower = fresher, unknown age = oldest.
    pub fn age_rank(&self) -> u32 {
        self.posted_days_ago.unwrap_or(UNKNOWN_AGE_DAYS)
    }

    /// Title and description concatenated for substring classification.
    pub fn haystack(&self) -> String {
        let mut s = String::with_capacity(self.title.len() + self.description.len() + 1);
        s.push_str(&self.title);
        s.push(' ');
        s.push_str(&self.description);
        s
    }
}

/// A posting plus its classification outcome. Derived, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedPosting {
    pub posting: Posting,
    /// True iff an entry-level pattern matched title+description.
    pub is_entry_level: bool,
    /// Number of boost terms that matched (each counted once).
    pub boost_score: u32,
}

/// The assembled output of one run: entry-level postings ranked by boost
/// score, plus the non-entry remainder for the secondary email section.
///
/// A posting id appears in the `entry` sequence of at most one run —
/// dedup happens before assembly, and every fetched id is marked seen
/// within the same run.
#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    pub generated_at: DateTime<Utc>,
    pub entry: Vec<ClassifiedPosting>,
    pub others: Vec<ClassifiedPosting>,
}

impl Digest {
    /// True when the run surfaced nothing new at all.
    pub fn is_empty(&self) -> bool {
        self.entry.is_empty() && self.others.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(days: Option<u32>) -> Posting {
        Posting {
            id: "job-1".to_string(),
            title: "Junior Analyst".to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            description: "procurement role".to_string(),
            link: "https://example.com/job-1".to_string(),
            posted_days_ago: days,
        }
    }

    #[test]
    fn age_rank_known() {
        assert_eq!(posting(Some(3)).age_rank(), 3);
    }

    #[test]
    fn age_rank_unknown_sorts_last() {
        assert_eq!(posting(None).age_rank(), UNKNOWN_AGE_DAYS);
        assert!(posting(Some(500)).age_rank() < posting(None).age_rank());
    }

    #[test]
    fn haystack_joins_title_and_description() {
        assert_eq!(posting(None).haystack(), "Junior Analyst procurement role");
    }
}
