//! Integration tests that verify the shipped keyword rule document in
//! `data/rules/` deserializes correctly against the schema.

use jobdigest_rules::{load_keyword_set, KeywordConfigRule, KeywordSet};

/// Resolve the rules directory relative to the workspace root.
/// Integration tests run from the crate directory, so we go up two levels.
fn rules_dir() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.join("../../data/rules")
}

fn load_rule(filename: &str) -> KeywordConfigRule {
    let path = rules_dir().join(filename);
    let yaml = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_yaml::from_str(&yaml)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
}

// ── keywords.yml ────────────────────────────────────────────

#[test]
fn parse_shipped_keywords() {
    let rule = load_rule("keywords.yml");

    assert_eq!(rule.api_version, "v1");
    assert_eq!(rule.kind, "KeywordConfig");
    assert_eq!(rule.metadata.id, "keywords-default");
    assert!(rule.metadata.enabled);

    assert_eq!(rule.spec.queries.len(), 4);
    assert_eq!(rule.spec.queries[0], "supply chain Berlin");
    assert_eq!(rule.spec.entry_level_patterns.len(), 6);
    assert_eq!(rule.spec.boost_terms.len(), 4);
}

#[test]
fn shipped_keywords_match_compiled_defaults() {
    // The YAML on disk and the compiled fallback must agree, otherwise a
    // deleted rules file silently changes behavior.
    let rule = load_rule("keywords.yml");
    assert_eq!(rule.compile(), KeywordSet::defaults());
}

#[test]
fn loader_reads_shipped_file() {
    let set = load_keyword_set(&rules_dir().join("keywords.yml")).unwrap();
    assert_eq!(set.queries.len(), 4);
    assert_eq!(set.entry_level_patterns[1], "junior");
}
