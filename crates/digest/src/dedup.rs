//! Cross-run deduplication against the persistent seen-set.

use std::collections::HashSet;

use jobdigest_core::ClassifiedPosting;

/// Keep only postings whose id has never been seen, in input order, and
/// mark every visited id as seen — including postings that are not
/// entry-level, so a non-matching posting is never re-evaluated on a
/// later run.
pub fn filter_new(
    postings: Vec<ClassifiedPosting>,
    seen: &mut HashSet<String>,
) -> Vec<ClassifiedPosting> {
    postings
        .into_iter()
        .filter(|p| seen.insert(p.posting.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobdigest_core::Posting;

    fn classified(id: &str, entry: bool) -> ClassifiedPosting {
        ClassifiedPosting {
            posting: Posting {
                id: id.to_string(),
                title: format!("Role {id}"),
                company: "Acme".to_string(),
                location: "Berlin".to_string(),
                description: String::new(),
                link: format!("https://example.com/{id}"),
                posted_days_ago: None,
            },
            is_entry_level: entry,
            boost_score: 0,
        }
    }

    fn ids(postings: &[ClassifiedPosting]) -> Vec<&str> {
        postings.iter().map(|p| p.posting.id.as_str()).collect()
    }

    #[test]
    fn previously_seen_ids_are_dropped() {
        let mut seen: HashSet<String> = ["b".to_string()].into_iter().collect();
        let new = filter_new(vec![classified("a", true), classified("b", true)], &mut seen);
        assert_eq!(ids(&new), vec!["a"]);
    }

    #[test]
    fn updated_set_contains_input_union_previous() {
        let mut seen: HashSet<String> = ["v".to_string()].into_iter().collect();
        filter_new(vec![classified("a", true), classified("b", false)], &mut seen);

        for id in ["v", "a", "b"] {
            assert!(seen.contains(id), "missing {id}");
        }
    }

    #[test]
    fn non_entry_postings_are_still_marked_seen() {
        let mut seen = HashSet::new();
        let new = filter_new(vec![classified("x", false)], &mut seen);
        assert_eq!(new.len(), 1);
        assert!(seen.contains("x"));
    }

    #[test]
    fn input_order_preserved() {
        let mut seen = HashSet::new();
        let new = filter_new(
            vec![classified("c", true), classified("a", true), classified("b", true)],
            &mut seen,
        );
        assert_eq!(ids(&new), vec!["c", "a", "b"]);
    }

    #[test]
    fn second_run_over_same_input_is_empty() {
        let input = vec![classified("a", true), classified("b", false)];
        let mut seen = HashSet::new();

        let first = filter_new(input.clone(), &mut seen);
        assert_eq!(first.len(), 2);

        let second = filter_new(input, &mut seen);
        assert!(second.is_empty());
    }

    #[test]
    fn duplicate_ids_within_one_run_kept_once() {
        let mut seen = HashSet::new();
        let new = filter_new(vec![classified("a", true), classified("a", true)], &mut seen);
        assert_eq!(new.len(), 1);
    }
}
