// PlacePrep - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
// All errors preserve the causal chain for diagnostic logging.
//
// Propagation policy:
// - Analysis errors are surfaced to the caller (direct user action).
// - Corrupt persisted data is recovered inside the history store and only
//   ever logged; it is never returned from `HistoryStore::list`.
// - "Not found" is modelled as `Option::None`, not as an error.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all PlacePrep operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum PrepError {
    /// Job description analysis rejected its input.
    Analysis(AnalysisError),

    /// Reading or writing persisted state failed.
    Storage(StorageError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for PrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "Analysis error: {e}"),
            Self::Storage(e) => write!(f, "Storage error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for PrepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Analysis(e) => Some(e),
            Self::Storage(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis errors
// ---------------------------------------------------------------------------

/// Errors raised by the job description analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A required input field is empty or whitespace-only.
    InvalidInput { field: &'static str, reason: String },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, reason } => {
                write!(f, "invalid input for '{field}': {reason}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<AnalysisError> for PrepError {
    fn from(e: AnalysisError) -> Self {
        Self::Analysis(e)
    }
}

// ---------------------------------------------------------------------------
// Storage errors
// ---------------------------------------------------------------------------

/// Errors related to persisted state.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error reading, writing, or removing a stored blob.
    Io {
        key: String,
        path: PathBuf,
        source: io::Error,
    },

    /// The history could not be serialised for writing.
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    /// The stored blob is not valid JSON or not the expected envelope shape.
    /// Recovered internally by the history store.
    Corrupt {
        key: String,
        source: serde_json::Error,
    },

    /// The stored blob was written by an incompatible schema version.
    /// Recovered internally by the history store.
    SchemaVersion { key: String, found: u32, expected: u32 },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { key, path, source } => write!(
                f,
                "I/O error on stored key '{key}' ('{}'): {source}",
                path.display()
            ),
            Self::Serialize { key, source } => {
                write!(f, "Failed to serialise stored key '{key}': {source}")
            }
            Self::Corrupt { key, source } => {
                write!(f, "Stored key '{key}' is corrupt: {source}")
            }
            Self::SchemaVersion {
                key,
                found,
                expected,
            } => write!(
                f,
                "Stored key '{key}' has schema version {found}, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            Self::SchemaVersion { .. } => None,
        }
    }
}

impl From<StorageError> for PrepError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export output.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for PrepError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for PrepError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for PlacePrep results.
pub type Result<T> = std::result::Result<T, PrepError>;
