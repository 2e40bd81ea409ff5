//! Grammar registry types
//!
//! A grammar registry maps a glyph-set identifier (a language such as
//! `"English"`) to a grammar fragment. Only `execution_order` drives the
//! parser; every other key is kept verbatim in `settings`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::execution::ExecutionOrder;

/// Settings for one glyph-set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarFragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_order: Option<ExecutionOrder>,
    /// Remaining keys, untouched
    #[serde(flatten)]
    pub settings: BTreeMap<String, serde_json::Value>,
}

impl GrammarFragment {
    pub fn new(execution_order: ExecutionOrder) -> Self {
        Self {
            execution_order: Some(execution_order),
            settings: BTreeMap::new(),
        }
    }

    /// Effective execution order; missing means reversed
    pub fn execution_order(&self) -> ExecutionOrder {
        self.execution_order.unwrap_or_default()
    }

    pub fn setting(&self, key: &str) -> Option<&serde_json::Value> {
        self.settings.get(key)
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }
}

/// Glyph-set identifier -> grammar fragment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrammarRegistry {
    glyph_sets: BTreeMap<String, GrammarFragment>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, glyph_set: impl Into<String>, fragment: GrammarFragment) {
        self.glyph_sets.insert(glyph_set.into(), fragment);
    }

    pub fn get(&self, glyph_set: &str) -> Option<&GrammarFragment> {
        self.glyph_sets.get(glyph_set)
    }

    /// Fragment for `glyph_set`, or an empty fragment when unknown
    pub fn fragment(&self, glyph_set: &str) -> GrammarFragment {
        self.get(glyph_set).cloned().unwrap_or_default()
    }

    /// Known glyph-set identifiers, sorted
    pub fn glyph_sets(&self) -> impl Iterator<Item = (&str, &GrammarFragment)> {
        self.glyph_sets.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.glyph_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyph_sets.is_empty()
    }
}

impl FromIterator<(String, GrammarFragment)> for GrammarRegistry {
    fn from_iter<I: IntoIterator<Item = (String, GrammarFragment)>>(iter: I) -> Self {
        Self {
            glyph_sets: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY_JSON: &str = r#"{
        "English": {"execution_order": "left_to_right", "script": "latin"},
        "Hebrew": {"execution_order": "right_to_left"},
        "Runic": {"script": "futhark"}
    }"#;

    #[test]
    fn test_parse_registry() {
        let registry: GrammarRegistry = serde_json::from_str(REGISTRY_JSON).unwrap();
        assert_eq!(registry.len(), 3);

        let english = registry.fragment("English");
        assert_eq!(english.execution_order(), ExecutionOrder::LeftToRight);
        assert_eq!(english.setting("script"), Some(&serde_json::json!("latin")));

        assert_eq!(
            registry.fragment("Hebrew").execution_order(),
            ExecutionOrder::RightToLeft
        );
    }

    #[test]
    fn test_missing_execution_order_is_reversed() {
        let registry: GrammarRegistry = serde_json::from_str(REGISTRY_JSON).unwrap();
        let runic = registry.fragment("Runic");
        assert!(runic.execution_order.is_none());
        assert_eq!(runic.execution_order(), ExecutionOrder::RightToLeft);
    }

    #[test]
    fn test_unknown_glyph_set_is_empty_fragment() {
        let registry: GrammarRegistry = serde_json::from_str(REGISTRY_JSON).unwrap();
        let fragment = registry.fragment("Klingon");
        assert_eq!(fragment, GrammarFragment::default());
        assert_eq!(fragment.execution_order(), ExecutionOrder::RightToLeft);
    }

    #[test]
    fn test_glyph_sets_sorted() {
        let registry: GrammarRegistry = serde_json::from_str(REGISTRY_JSON).unwrap();
        let names: Vec<&str> = registry.glyph_sets().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["English", "Hebrew", "Runic"]);
    }

    #[test]
    fn test_yaml_registry() {
        let yaml = "English:\n  execution_order: left_to_right\nGreek:\n  execution_order: boustrophedon\n";
        let registry: GrammarRegistry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            registry.fragment("English").execution_order(),
            ExecutionOrder::LeftToRight
        );
        assert_eq!(
            registry.fragment("Greek").execution_order(),
            ExecutionOrder::RightToLeft
        );
    }

    #[test]
    fn test_builder() {
        let mut registry = GrammarRegistry::new();
        registry.insert(
            "English",
            GrammarFragment::new(ExecutionOrder::LeftToRight)
                .with_setting("script", serde_json::json!("latin")),
        );
        let json = serde_json::to_value(&registry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"English": {"execution_order": "left_to_right", "script": "latin"}})
        );
    }
}
