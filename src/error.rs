//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by post reads
#[derive(Error, Debug)]
pub enum Error {
    /// The requested slug does not correspond to an existing file
    #[error("post not found: {slug} (looked in {path:?})")]
    NotFound { slug: String, path: PathBuf },

    /// The front-matter block was delimited correctly but its YAML is invalid
    #[error("invalid front-matter: {0}")]
    Decode(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
