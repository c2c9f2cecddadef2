//! The entry-level / boost-score classification heuristic.
//!
//! Plain case-insensitive substring matching over title+description.
//! No stemming and no word boundaries: "nonjuniormanager" matches
//! "junior". That is the documented tradeoff, not an oversight.

use jobdigest_core::{ClassifiedPosting, Posting};

use crate::keyword_config::KeywordSet;

/// Classify a posting against the keyword set. Pure and infallible.
///
/// `is_entry_level` is true iff any entry-level pattern occurs in the
/// lower-cased title+description. `boost_score` counts how many boost
/// terms occur, each at most once.
pub fn classify(posting: Posting, keywords: &KeywordSet) -> ClassifiedPosting {
    let haystack = posting.haystack().to_lowercase();

    let is_entry_level = keywords
        .entry_level_patterns
        .iter()
        .any(|p| haystack.contains(p.as_str()));

    let boost_score = keywords
        .boost_terms
        .iter()
        .filter(|t| haystack.contains(t.as_str()))
        .count() as u32;

    ClassifiedPosting {
        posting,
        is_entry_level,
        boost_score,
    }
}
