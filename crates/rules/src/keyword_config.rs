//! KeywordConfig rule kind — search queries, entry-level patterns, and
//! boost terms as declarative configuration.

use serde::{Deserialize, Serialize};

use crate::schema::CommonMetadata;

// ── YAML-level types ────────────────────────────────────────────────

/// Top-level KeywordConfig rule document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeywordConfigRule {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: CommonMetadata,
    pub spec: KeywordConfigSpec,
}

/// Specification section of a KeywordConfig rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeywordConfigSpec {
    /// Search-query strings, issued against the job API in order.
    pub queries: Vec<String>,
    /// Substrings that mark a posting as entry-level (case-insensitive,
    /// no word-boundary enforcement — matched in order).
    pub entry_level_patterns: Vec<String>,
    /// Domain terms counted toward the relevance boost score.
    pub boost_terms: Vec<String>,
}

// ── Compiled type ───────────────────────────────────────────────────

/// Pre-compiled keyword set: patterns lower-cased once so the per-posting
/// hot path only lower-cases the haystack.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordSet {
    pub queries: Vec<String>,
    pub entry_level_patterns: Vec<String>,
    pub boost_terms: Vec<String>,
}

impl KeywordConfigRule {
    /// Compile the YAML config into the lowercase hot-path form.
    pub fn compile(&self) -> KeywordSet {
        let lower = |v: &[String]| v.iter().map(|s| s.to_lowercase()).collect();
        KeywordSet {
            queries: self.spec.queries.clone(),
            entry_level_patterns: lower(&self.spec.entry_level_patterns),
            boost_terms: lower(&self.spec.boost_terms),
        }
    }
}

impl KeywordSet {
    /// Built-in defaults used when no rule file is configured.
    pub fn defaults() -> Self {
        let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect();
        Self {
            queries: owned(&[
                "supply chain Berlin",
                "procurement Berlin",
                "logistics Berlin",
                "operations Berlin",
            ]),
            entry_level_patterns: owned(&[
                "entry", "junior", "werkstudent", "trainee", "associate", "graduate",
            ]),
            boost_terms: owned(&["supply chain", "procurement", "logistics", "operations"]),
        }
    }
}
