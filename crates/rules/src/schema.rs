//! Shared YAML rule-document header types.
//!
//! Every rule document carries `apiVersion`, `kind`, and a metadata
//! block; the kind-specific payload lives under `spec`.

use serde::{Deserialize, Serialize};

/// Metadata block common to all rule documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CommonMetadata {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_defaults_to_true() {
        let yaml = "id: x\nname: X";
        let meta: CommonMetadata = serde_yaml::from_str(yaml).unwrap();
        assert!(meta.enabled);
        assert!(meta.description.is_none());
    }

    #[test]
    fn unknown_metadata_field_rejected() {
        let yaml = "id: x\nname: X\nbogus: 1";
        let result: Result<CommonMetadata, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
