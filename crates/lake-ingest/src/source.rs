//! Source descriptors and shape hints.
//!
//! Every input file is classified once, at pipeline start, into a
//! [`SourceShape`] derived from its filename suffix. The shape drives the
//! dispatcher's three-way branch; it is a hint, not a guarantee, which is
//! why unknown shapes still get a best-effort delimited read.

use std::path::{Path, PathBuf};

/// Structural category of a source, inferred from the filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceShape {
    /// `.csv` — delimited text with a header row.
    DelimitedText,
    /// `.txt` — headerless comma-delimited text with an imposed schema.
    FixedLayout,
    /// `.sql` — a SQL dump script to be recovered into one table.
    SqlScript,
    /// Anything else — treated as best-effort delimited.
    Unknown,
}

impl SourceShape {
    /// Classify a path by its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Unknown;
        };
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Self::DelimitedText,
            "txt" => Self::FixedLayout,
            "sql" => Self::SqlScript,
            _ => Self::Unknown,
        }
    }

    /// Short label for logs and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::DelimitedText => "delimited",
            Self::FixedLayout => "fixed-layout",
            Self::SqlScript => "sql-script",
            Self::Unknown => "unknown",
        }
    }
}

/// A source file plus its declared shape. Immutable once enumerated.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    pub path: PathBuf,
    pub shape: SourceShape,
}

impl SourceDescriptor {
    /// Build a descriptor, inferring the shape from the path suffix.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let shape = SourceShape::from_path(&path);
        Self { path, shape }
    }

    /// The source's base name without extension, used as the bronze table
    /// identity (e.g. `clientes_info` for `clientes_info.csv`).
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Enumerates the sources in a directory, in stable name order.
///
/// The descriptor set is fixed at pipeline start: files added to the
/// directory afterwards are not picked up by a running batch.
pub fn enumerate_sources(dir: &Path) -> crate::error::Result<Vec<SourceDescriptor>> {
    let entries = std::fs::read_dir(dir).map_err(|e| crate::error::IngestError::FileRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let mut sources: Vec<SourceDescriptor> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .map(SourceDescriptor::new)
        .collect();
    sources.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(sources)
}
