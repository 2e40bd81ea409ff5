//! Sequence Annotator
//!
//! Walks the spiral index groups in role order and emits one annotated
//! entry per visited position. The output is in spiral order, not input
//! order: role 1's members first, then role 2's, and so on.

use serde::{Deserialize, Serialize};

use crate::glyph::{Dam, Glyph};
use crate::resolver::GlyphResolver;
use crate::spiral::{role_label, spiral_index_groups, IndexGroup};

/// One glyph placed at its spiral position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedGlyph {
    /// Role ordinal of the group this glyph belongs to (1-based)
    pub position: usize,
    pub glyph: Glyph,
    /// 1-based position in the input sequence
    pub original_index: usize,
    /// `spiral_<position>`
    pub role: String,
    #[serde(rename = "DAM")]
    pub dam: Dam,
}

/// Annotate `sequence` following `groups`.
///
/// Role ordinals are the 1-based position of each group in `groups`.
/// Indices outside the sequence are skipped.
pub fn annotate(
    sequence: &[Glyph],
    groups: &[IndexGroup],
    resolver: &GlyphResolver,
) -> Vec<AnnotatedGlyph> {
    let mut stack = Vec::with_capacity(sequence.len());

    for (ordinal, group) in (1..).zip(groups) {
        for &index in group.indices() {
            let Some(glyph) = sequence.get(index) else {
                continue;
            };
            let resolved = resolver.resolve(glyph);
            stack.push(AnnotatedGlyph {
                position: ordinal,
                glyph: glyph.clone(),
                original_index: index + 1,
                role: role_label(ordinal),
                dam: resolved.dam_or_empty(),
            });
        }
    }

    stack
}

/// Annotator bound to a resolver
#[derive(Debug, Clone, Copy)]
pub struct SequenceAnnotator<'a> {
    resolver: &'a GlyphResolver,
}

impl<'a> SequenceAnnotator<'a> {
    pub fn new(resolver: &'a GlyphResolver) -> Self {
        Self { resolver }
    }

    /// Annotate with explicitly supplied groups
    pub fn annotate(&self, sequence: &[Glyph], groups: &[IndexGroup]) -> Vec<AnnotatedGlyph> {
        annotate(sequence, groups, self.resolver)
    }

    /// Annotate in canonical spiral order
    pub fn annotate_spiral(&self, sequence: &[Glyph]) -> Vec<AnnotatedGlyph> {
        let groups = spiral_index_groups(sequence.len());
        self.annotate(sequence, &groups)
    }
}
