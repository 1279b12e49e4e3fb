//! Error types for the fallible edges of the crate.
//!
//! Scoring itself never fails; only loading a lesson configuration,
//! validating word lists and parsing CLI values can.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lesson config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid word list: {0}")]
    InvalidLexicon(String),

    #[error("corpus must contain at least one example sentence")]
    EmptyCorpus,

    #[error("unknown approach '{0}' (expected 'keywords' or 'mini-model')")]
    UnknownApproach(String),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
