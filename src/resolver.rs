//! Glyph Resolver
//!
//! Looks up a glyph's DAM annotation in an ordered lookup table. The first
//! matching entry wins; later entries for the same glyph are shadowed and
//! reported once as warnings when the resolver is built.

use std::collections::HashMap;
use tracing::warn;

use crate::glyph::{Glyph, GlyphRecord};

/// Resolver over an ordered glyph lookup table
#[derive(Debug, Clone, Default)]
pub struct GlyphResolver {
    records: Vec<GlyphRecord>,
    /// glyph -> position of its first record
    first_match: HashMap<Glyph, usize>,
    duplicates: Vec<Glyph>,
}

impl GlyphResolver {
    /// Build a resolver, keeping the table order for first-match lookup
    pub fn new(records: Vec<GlyphRecord>) -> Self {
        let mut first_match = HashMap::with_capacity(records.len());
        let mut duplicates = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            // entry().or_insert keeps the first position; insert() would keep the last
            let first = *first_match.entry(record.glyph.clone()).or_insert(idx);
            if first != idx && !duplicates.contains(&record.glyph) {
                warn!(
                    glyph = %record.glyph,
                    first_entry = first,
                    shadowed_entry = idx,
                    "Duplicate glyph in lookup table; first entry wins"
                );
                duplicates.push(record.glyph.clone());
            }
        }

        Self {
            records,
            first_match,
            duplicates,
        }
    }

    /// Resolve a glyph to its lookup record.
    ///
    /// Exact, case-sensitive match. Unknown glyphs yield a synthesized record
    /// echoing the glyph with three empty layers.
    pub fn resolve(&self, glyph: &str) -> GlyphRecord {
        self.lookup(glyph)
            .cloned()
            .unwrap_or_else(|| GlyphRecord::unresolved(glyph))
    }

    /// The first table entry for `glyph`, if any
    pub fn lookup(&self, glyph: &str) -> Option<&GlyphRecord> {
        self.first_match.get(glyph).map(|&idx| &self.records[idx])
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.first_match.contains_key(glyph)
    }

    /// Glyphs that appear more than once in the table, in first-seen order
    pub fn duplicates(&self) -> &[Glyph] {
        &self.duplicates
    }

    /// The underlying table, in its original order
    pub fn records(&self) -> &[GlyphRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<GlyphRecord>> for GlyphResolver {
    fn from(records: Vec<GlyphRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Dam;

    fn table() -> Vec<GlyphRecord> {
        vec![
            GlyphRecord::new("L", Dam::new("light", "line", "logos")),
            GlyphRecord::new("O", Dam::new("orb", "open", "origin")),
            GlyphRecord::new("L", Dam::new("lower", "late", "lost")),
        ]
    }

    #[test]
    fn test_resolve_known_glyph() {
        let resolver = GlyphResolver::new(table());
        let record = resolver.resolve("O");
        assert_eq!(record.glyph, "O");
        assert_eq!(record.dam_or_empty().layers(), ["orb", "open", "origin"]);
    }

    #[test]
    fn test_unknown_glyph_gets_blank_layers() {
        let resolver = GlyphResolver::new(table());
        let record = resolver.resolve("Z");
        assert_eq!(record.glyph, "Z");
        let dam = record.dam.expect("synthesized DAM");
        assert_eq!(dam.layer_1.as_deref(), Some(""));
        assert_eq!(dam.layer_2.as_deref(), Some(""));
        assert_eq!(dam.layer_3.as_deref(), Some(""));
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let resolver = GlyphResolver::new(table());
        assert_eq!(resolver.resolve("L").dam_or_empty().layer_1(), "light");
        assert_eq!(resolver.duplicates(), ["L".to_string()]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let resolver = GlyphResolver::new(table());
        assert!(resolver.contains("L"));
        assert!(!resolver.contains("l"));
        assert_eq!(resolver.resolve("l").dam_or_empty().layer_1(), "");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = GlyphResolver::new(table());
        assert_eq!(resolver.resolve("O"), resolver.resolve("O"));
        assert_eq!(resolver.resolve("?"), resolver.resolve("?"));
    }

    #[test]
    fn test_found_entry_is_not_defaulted() {
        let record: GlyphRecord =
            serde_json::from_str(r#"{"glyph": "S", "DAM": {"layer_2": "spiral"}}"#).unwrap();
        let resolver = GlyphResolver::new(vec![record.clone()]);
        let resolved = resolver.resolve("S");
        assert_eq!(resolved, record);
        assert!(resolved.dam.unwrap().layer_1.is_none());
    }

    #[test]
    fn test_empty_table() {
        let resolver = GlyphResolver::default();
        assert!(resolver.is_empty());
        assert_eq!(resolver.resolve("A"), GlyphRecord::unresolved("A"));
    }
}
