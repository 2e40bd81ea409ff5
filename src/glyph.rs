//! Glyph data structures
//!
//! Pure data: glyph tokens, the three-layer DAM annotation, lookup table
//! records and the input source shapes accepted by the parser.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single symbolic unit of the input sequence.
///
/// Glyphs are opaque: the parser only ever compares them for equality.
pub type Glyph = String;

// ============================================================================
// DAM ANNOTATION
// ============================================================================

/// Three-layer glyph annotation ("DAM").
///
/// Layers are optional so that a record read from a lookup table is passed
/// through exactly as written: a layer missing from the source stays
/// missing. Any additional keys inside the DAM object are retained in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_3: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Dam {
    /// Annotation synthesized for glyphs with no lookup table entry:
    /// all three layers present and empty.
    pub fn blank() -> Self {
        Self {
            layer_1: Some(String::new()),
            layer_2: Some(String::new()),
            layer_3: Some(String::new()),
            extra: BTreeMap::new(),
        }
    }

    /// Create an annotation with all three layers set
    pub fn new(
        layer_1: impl Into<String>,
        layer_2: impl Into<String>,
        layer_3: impl Into<String>,
    ) -> Self {
        Self {
            layer_1: Some(layer_1.into()),
            layer_2: Some(layer_2.into()),
            layer_3: Some(layer_3.into()),
            extra: BTreeMap::new(),
        }
    }

    pub fn layer_1(&self) -> &str {
        self.layer_1.as_deref().unwrap_or("")
    }

    pub fn layer_2(&self) -> &str {
        self.layer_2.as_deref().unwrap_or("")
    }

    pub fn layer_3(&self) -> &str {
        self.layer_3.as_deref().unwrap_or("")
    }

    /// All three layers, missing ones read as empty strings
    pub fn layers(&self) -> [&str; 3] {
        [self.layer_1(), self.layer_2(), self.layer_3()]
    }

    /// True when every layer is missing or empty and there are no extra keys
    pub fn is_empty(&self) -> bool {
        self.layers().iter().all(|l| l.is_empty()) && self.extra.is_empty()
    }
}

// ============================================================================
// LOOKUP TABLE RECORDS
// ============================================================================

/// One entry of the glyph lookup table.
///
/// The resolver also returns this shape for unknown glyphs, echoing the
/// queried glyph with a [`Dam::blank`] annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphRecord {
    pub glyph: Glyph,
    #[serde(rename = "DAM", default, skip_serializing_if = "Option::is_none")]
    pub dam: Option<Dam>,
}

impl GlyphRecord {
    pub fn new(glyph: impl Into<Glyph>, dam: Dam) -> Self {
        Self {
            glyph: glyph.into(),
            dam: Some(dam),
        }
    }

    /// Synthesized record for a glyph with no lookup table entry
    pub fn unresolved(glyph: impl Into<Glyph>) -> Self {
        Self::new(glyph, Dam::blank())
    }

    /// The annotation, or an empty record when the entry carries none
    pub fn dam_or_empty(&self) -> Dam {
        self.dam.clone().unwrap_or_default()
    }
}

// ============================================================================
// INPUT SOURCE
// ============================================================================

/// Input accepted by the parser, echoed back verbatim as `source`.
///
/// A text source is split into one glyph per `char`; a token source is
/// used as-is, which allows multi-character glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GlyphSource {
    Text(String),
    Tokens(Vec<Glyph>),
}

impl GlyphSource {
    /// Build a token source by splitting `text` on `separator`,
    /// trimming whitespace and dropping empty tokens
    pub fn split(text: &str, separator: &str) -> Self {
        GlyphSource::Tokens(
            text.split(separator)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// The glyph sequence in original order
    pub fn glyphs(&self) -> Vec<Glyph> {
        match self {
            GlyphSource::Text(text) => text.chars().map(String::from).collect(),
            GlyphSource::Tokens(tokens) => tokens.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            GlyphSource::Text(text) => text.chars().count(),
            GlyphSource::Tokens(tokens) => tokens.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for GlyphSource {
    fn from(text: &str) -> Self {
        GlyphSource::Text(text.to_string())
    }
}

impl From<String> for GlyphSource {
    fn from(text: String) -> Self {
        GlyphSource::Text(text)
    }
}

impl From<Vec<Glyph>> for GlyphSource {
    fn from(tokens: Vec<Glyph>) -> Self {
        GlyphSource::Tokens(tokens)
    }
}
