//! Answers-file parse errors.
//!
//! Defined as a concrete error type (rather than `anyhow`) so the CLI can
//! distinguish "file problem" from "content problem" when reporting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or parsing an answers file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML.
    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The file is not valid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file extension is neither `.toml` nor `.json`.
    #[error("unsupported answers format: {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl ParseError {
    /// The file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            ParseError::Io { path, .. }
            | ParseError::Toml { path, .. }
            | ParseError::Json { path, .. }
            | ParseError::UnsupportedFormat { path } => path,
        }
    }

    /// Returns `true` when the file exists but its content is malformed.
    pub fn is_content_error(&self) -> bool {
        matches!(self, ParseError::Toml { .. } | ParseError::Json { .. })
    }
}
