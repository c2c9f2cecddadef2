//! Filesystem loader for the KeywordConfig rule document.
//!
//! Reads a single YAML file. A missing file falls back to compiled
//! defaults with a warning; a present-but-malformed file is an error —
//! silently reverting someone's customization to the defaults would be
//! worse than failing the run.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::keyword_config::{KeywordConfigRule, KeywordSet};

/// Errors that can occur while loading keyword rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("unsupported rule kind: '{0}' (expected KeywordConfig)")]
    WrongKind(String),

    #[error("rule '{0}' is disabled")]
    Disabled(String),
}

/// Load the keyword set from `path`, or fall back to defaults when the
/// file does not exist.
pub fn load_keyword_set(path: &Path) -> Result<KeywordSet, RuleError> {
    if !path.exists() {
        warn!(path = %path.display(), "keyword rules file not found, using defaults");
        return Ok(KeywordSet::defaults());
    }

    let yaml = fs::read_to_string(path)?;
    let rule: KeywordConfigRule = serde_yaml::from_str(&yaml)?;

    if rule.kind != "KeywordConfig" {
        return Err(RuleError::WrongKind(rule.kind));
    }
    if !rule.metadata.enabled {
        return Err(RuleError::Disabled(rule.metadata.id));
    }

    info!(
        path = %path.display(),
        rule_id = %rule.metadata.id,
        queries = rule.spec.queries.len(),
        "keyword rules loaded"
    );

    Ok(rule.compile())
}
