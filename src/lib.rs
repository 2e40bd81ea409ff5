//! spiral-parser: spiral ordering and DAM annotation for glyph sequences
//!
//! Maps a short sequence of glyphs into an annotated stack ordered by
//! spiral position, plus a separately computed execution sequence:
//! - Spiral index generator (centre first, then outer/inner pairs)
//! - Glyph resolver over an ordered lookup table (first match wins)
//! - Sequence annotator producing `spiral_<n>` roles with DAM layers
//! - Execution order selector driven by the grammar's `execution_order`
//! - JSON/YAML loaders for the grammar registry and glyph lookup table
//!
//! # Usage
//!
//! ```
//! use spiral_parser::{ExecutionOrder, GrammarFragment, GrammarRegistry, SpiralParser};
//!
//! let mut grammar = GrammarRegistry::new();
//! grammar.insert("English", GrammarFragment::new(ExecutionOrder::LeftToRight));
//!
//! let parser = SpiralParser::new(grammar, vec![]);
//! let result = parser.parse("LOGOS", "English");
//!
//! assert_eq!(result.parsed_stack[0].glyph, "G");
//! assert_eq!(result.parsed_stack[0].role, "spiral_1");
//! assert_eq!(result.execution_sequence, vec!["L", "O", "G", "O", "S"]);
//! ```

pub mod annotator;
pub mod config;
pub mod error;
pub mod execution;
pub mod glyph;
pub mod orchestrator;
pub mod resolver;
pub mod spiral;

// Re-export commonly used types
pub use annotator::{annotate, AnnotatedGlyph, SequenceAnnotator};
pub use config::{DataLoader, GrammarFragment, GrammarRegistry};
pub use error::{DataSourceError, DataSourceKind};
pub use execution::{select_execution_order, ExecutionOrder};
pub use glyph::{Dam, Glyph, GlyphRecord, GlyphSource};
pub use orchestrator::{parse_input, ParseResult, SpiralParser};
pub use resolver::GlyphResolver;
pub use spiral::{raw_spiral_groups, spiral_index_groups, spiral_order, GroupKind, IndexGroup};
