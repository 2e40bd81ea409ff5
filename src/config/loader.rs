//! Data source loader
//!
//! Loads the grammar registry and the glyph lookup table from JSON or YAML
//! files. Each read is scoped: the file is read, decoded and released
//! before returning.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

use super::grammar::GrammarRegistry;
use crate::error::{DataSourceError, DataSourceKind};
use crate::glyph::GlyphRecord;

/// Default grammar registry file stem inside a data directory
pub const GRAMMAR_FILE_STEM: &str = "grammar_registry";
/// Default glyph lookup table file stem inside a data directory
pub const GLYPHS_FILE_STEM: &str = "glyphs";

const EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Locations of the two external data sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLoader {
    grammar_path: PathBuf,
    glyphs_path: PathBuf,
}

impl DataLoader {
    pub fn new(grammar_path: impl Into<PathBuf>, glyphs_path: impl Into<PathBuf>) -> Self {
        Self {
            grammar_path: grammar_path.into(),
            glyphs_path: glyphs_path.into(),
        }
    }

    /// Use `grammar_registry.{json,yaml,yml}` and `glyphs.{json,yaml,yml}`
    /// inside `dir`, preferring JSON when several exist
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            find_data_file(dir, GRAMMAR_FILE_STEM),
            find_data_file(dir, GLYPHS_FILE_STEM),
        )
    }

    /// Create loader from environment variables or default to "data"
    ///
    /// Path resolution order:
    /// 1. SPIRAL_GRAMMAR_FILE / SPIRAL_GLYPHS_FILE (explicit per-file override)
    /// 2. SPIRAL_DATA_DIR environment variable
    /// 3. Relative "data" path (works when running from the crate root)
    /// 4. Compile-time CARGO_MANIFEST_DIR/data (bundled sample data)
    pub fn from_env() -> Self {
        Self::from_overrides(
            std::env::var("SPIRAL_GRAMMAR_FILE").ok(),
            std::env::var("SPIRAL_GLYPHS_FILE").ok(),
            std::env::var("SPIRAL_DATA_DIR").ok(),
        )
    }

    /// Resolve paths from optional overrides, falling back to the default
    /// data directory
    pub fn from_overrides(
        grammar_file: Option<String>,
        glyphs_file: Option<String>,
        data_dir: Option<String>,
    ) -> Self {
        let dir = data_dir
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let defaults = Self::from_dir(&dir);

        Self {
            grammar_path: grammar_file
                .map(PathBuf::from)
                .unwrap_or(defaults.grammar_path),
            glyphs_path: glyphs_file
                .map(PathBuf::from)
                .unwrap_or(defaults.glyphs_path),
        }
    }

    pub fn grammar_path(&self) -> &Path {
        &self.grammar_path
    }

    pub fn glyphs_path(&self) -> &Path {
        &self.glyphs_path
    }

    /// Load the grammar registry
    pub fn load_grammar(&self) -> Result<GrammarRegistry, DataSourceError> {
        info!(
            "Loading grammar registry from {}",
            self.grammar_path.display()
        );
        let registry: GrammarRegistry = read_data(DataSourceKind::Grammar, &self.grammar_path)?;
        info!("Loaded {} glyph-set grammars", registry.len());
        Ok(registry)
    }

    /// Load the glyph lookup table, preserving file order
    pub fn load_glyphs(&self) -> Result<Vec<GlyphRecord>, DataSourceError> {
        info!(
            "Loading glyph lookup table from {}",
            self.glyphs_path.display()
        );
        let records: Vec<GlyphRecord> = read_data(DataSourceKind::Glyphs, &self.glyphs_path)?;
        info!("Loaded {} glyph records", records.len());
        Ok(records)
    }
}

fn default_data_dir() -> PathBuf {
    let relative = Path::new("data");
    if relative.is_dir() {
        return relative.to_path_buf();
    }
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

/// First existing `dir/stem.<ext>`, or `dir/stem.json` if none exist
fn find_data_file(dir: &Path, stem: &str) -> PathBuf {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|p| p.is_file())
        .unwrap_or_else(|| dir.join(format!("{}.json", stem)))
}

/// Read and decode one data file; format chosen by extension
fn read_data<T: DeserializeOwned>(kind: DataSourceKind, path: &Path) -> Result<T, DataSourceError> {
    if !path.exists() {
        return Err(DataSourceError::NotFound {
            kind,
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let content = std::fs::read_to_string(path).map_err(|source| DataSourceError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })?;

    match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|source| DataSourceError::Json {
            kind,
            path: path.to_path_buf(),
            source,
        }),
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|source| DataSourceError::Yaml {
                kind,
                path: path.to_path_buf(),
                source,
            })
        }
        _ => Err(DataSourceError::UnsupportedFormat {
            kind,
            path: path.to_path_buf(),
        }),
    }
}
