//! Error types for the spiral parser
//!
//! The parsing core is total: unknown glyphs, unknown glyph-sets and
//! unrecognised execution orders all have defined fallbacks. The only
//! failures are at the data-source boundary, when the grammar registry or
//! the glyph lookup table cannot be located, read, or decoded.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which external data source an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceKind {
    /// Grammar registry (glyph-set -> grammar fragment)
    Grammar,
    /// Glyph lookup table (ordered glyph/DAM records)
    Glyphs,
}

impl DataSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceKind::Grammar => "grammar registry",
            DataSourceKind::Glyphs => "glyph lookup table",
        }
    }
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to locate or decode a grammar registry or glyph lookup table
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("{kind} not found at {}", .path.display())]
    NotFound { kind: DataSourceKind, path: PathBuf },

    #[error("Failed to read {kind} {}: {source}", .path.display())]
    Read {
        kind: DataSourceKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {kind} {} as JSON: {source}", .path.display())]
    Json {
        kind: DataSourceKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse {kind} {} as YAML: {source}", .path.display())]
    Yaml {
        kind: DataSourceKind,
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported {kind} format for {} (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { kind: DataSourceKind, path: PathBuf },
}

impl DataSourceError {
    /// The data source this error refers to
    pub fn kind(&self) -> DataSourceKind {
        match self {
            DataSourceError::NotFound { kind, .. }
            | DataSourceError::Read { kind, .. }
            | DataSourceError::Json { kind, .. }
            | DataSourceError::Yaml { kind, .. }
            | DataSourceError::UnsupportedFormat { kind, .. } => *kind,
        }
    }

    /// Path of the offending file
    pub fn path(&self) -> &std::path::Path {
        match self {
            DataSourceError::NotFound { path, .. }
            | DataSourceError::Read { path, .. }
            | DataSourceError::Json { path, .. }
            | DataSourceError::Yaml { path, .. }
            | DataSourceError::UnsupportedFormat { path, .. } => path,
        }
    }
}
