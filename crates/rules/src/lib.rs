//! Keyword rules and the classification heuristic.
//!
//! This crate provides:
//! - YAML `KeywordConfig` rule documents (queries, entry-level patterns,
//!   boost terms)
//! - A loader with compiled defaults when no rule file is present
//! - The pure `classify` function applied to every fetched posting

pub mod classifier;
pub mod keyword_config;
pub mod loader;
pub mod schema;

pub use classifier::classify;
pub use keyword_config::{KeywordConfigRule, KeywordSet};
pub use loader::{load_keyword_set, RuleError};
