//! Orchestrator
//!
//! Wires the grammar registry and glyph lookup table to the spiral index
//! generator, the annotator and the execution order selector, producing a
//! single [`ParseResult`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::annotator::{AnnotatedGlyph, SequenceAnnotator};
use crate::config::{DataLoader, GrammarRegistry};
use crate::error::DataSourceError;
use crate::glyph::{Glyph, GlyphRecord, GlyphSource};
use crate::resolver::GlyphResolver;

/// Full output of one parse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Annotated glyphs in spiral order
    pub parsed_stack: Vec<AnnotatedGlyph>,
    /// Glyphs in the grammar's execution order
    pub execution_sequence: Vec<Glyph>,
    /// The input exactly as supplied
    pub source: GlyphSource,
    pub glyph_set: String,
}

/// Parser over a loaded grammar registry and glyph lookup table
#[derive(Debug, Clone, Default)]
pub struct SpiralParser {
    grammar: GrammarRegistry,
    resolver: GlyphResolver,
}

impl SpiralParser {
    pub fn new(grammar: GrammarRegistry, glyphs: Vec<GlyphRecord>) -> Self {
        Self {
            grammar,
            resolver: GlyphResolver::new(glyphs),
        }
    }

    /// Load both data sources through `loader`
    pub fn load(loader: &DataLoader) -> Result<Self, DataSourceError> {
        let grammar = loader.load_grammar()?;
        let glyphs = loader.load_glyphs()?;
        Ok(Self::new(grammar, glyphs))
    }

    pub fn grammar(&self) -> &GrammarRegistry {
        &self.grammar
    }

    pub fn resolver(&self) -> &GlyphResolver {
        &self.resolver
    }

    /// Parse `source` under the grammar of `glyph_set`.
    ///
    /// An unknown glyph-set uses an empty grammar, which executes reversed.
    pub fn parse(&self, source: impl Into<GlyphSource>, glyph_set: &str) -> ParseResult {
        let source = source.into();
        let sequence = source.glyphs();
        let fragment = self.grammar.fragment(glyph_set);
        let order = fragment.execution_order();

        debug!(
            glyph_set,
            length = sequence.len(),
            execution_order = %order,
            known_glyph_set = self.grammar.get(glyph_set).is_some(),
            "Parsing glyph sequence"
        );

        let parsed_stack = SequenceAnnotator::new(&self.resolver).annotate_spiral(&sequence);
        let execution_sequence = order.apply(&sequence);

        ParseResult {
            parsed_stack,
            execution_sequence,
            source,
            glyph_set: glyph_set.to_string(),
        }
    }
}

/// Load the grammar and glyph files and parse `source` in one call.
///
/// Fails only when either data source cannot be read or decoded; no partial
/// result is produced in that case.
pub fn parse_input(
    source: impl Into<GlyphSource>,
    glyph_set: &str,
    grammar_file: impl AsRef<Path>,
    glyph_data_file: impl AsRef<Path>,
) -> Result<ParseResult, DataSourceError> {
    let loader = DataLoader::new(grammar_file.as_ref(), glyph_data_file.as_ref());
    let parser = SpiralParser::load(&loader)?;
    Ok(parser.parse(source, glyph_set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrammarFragment;
    use crate::execution::ExecutionOrder;
    use crate::glyph::Dam;
    use pretty_assertions::assert_eq;

    fn parser() -> SpiralParser {
        let mut grammar = GrammarRegistry::new();
        grammar.insert("English", GrammarFragment::new(ExecutionOrder::LeftToRight));
        grammar.insert("Hebrew", GrammarFragment::new(ExecutionOrder::RightToLeft));
        SpiralParser::new(
            grammar,
            vec![
                GlyphRecord::new("L", Dam::new("light", "line", "logos")),
                GlyphRecord::new("O", Dam::new("orb", "open", "origin")),
            ],
        )
    }

    #[test]
    fn test_parse_left_to_right() {
        let result = parser().parse("LOGOS", "English");
        assert_eq!(result.glyph_set, "English");
        assert_eq!(result.source, GlyphSource::Text("LOGOS".into()));
        assert_eq!(result.execution_sequence, vec!["L", "O", "G", "O", "S"]);
        assert_eq!(result.parsed_stack.len(), 5);
        assert_eq!(result.parsed_stack[0].glyph, "G");
    }

    #[test]
    fn test_parse_right_to_left() {
        let result = parser().parse("LOGOS", "Hebrew");
        assert_eq!(result.execution_sequence, vec!["S", "O", "G", "O", "L"]);
    }

    #[test]
    fn test_unknown_glyph_set_reverses() {
        let result = parser().parse("AB", "Klingon");
        assert_eq!(result.glyph_set, "Klingon");
        assert_eq!(result.execution_sequence, vec!["B", "A"]);
    }

    #[test]
    fn test_token_source_echoed_as_array() {
        let tokens: Vec<Glyph> = vec!["ka".into(), "ra".into(), "ta".into()];
        let result = parser().parse(tokens.clone(), "English");
        assert_eq!(result.source, GlyphSource::Tokens(tokens));

        let glyphs: Vec<&str> = result
            .parsed_stack
            .iter()
            .map(|e| e.glyph.as_str())
            .collect();
        assert_eq!(glyphs, vec!["ra", "ka", "ta"]);
    }

    #[test]
    fn test_empty_input() {
        let result = parser().parse("", "English");
        assert!(result.parsed_stack.is_empty());
        assert!(result.execution_sequence.is_empty());
    }

    #[test]
    fn test_result_json_shape() {
        let result = parser().parse("LO", "English");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "parsed_stack": [
                    {
                        "position": 1,
                        "glyph": "L",
                        "original_index": 1,
                        "role": "spiral_1",
                        "DAM": {"layer_1": "light", "layer_2": "line", "layer_3": "logos"}
                    },
                    {
                        "position": 1,
                        "glyph": "O",
                        "original_index": 2,
                        "role": "spiral_1",
                        "DAM": {"layer_1": "orb", "layer_2": "open", "layer_3": "origin"}
                    }
                ],
                "execution_sequence": ["L", "O"],
                "source": "LO",
                "glyph_set": "English"
            })
        );
    }
}
