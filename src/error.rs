use crate::either::Absent;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config has no `port` field")]
    MissingPort,

    // Holds the raw JSON text of the rejected value.
    #[error("`port` must be an integer between 0 and 65535, found {0}")]
    InvalidPort(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no user id was given")]
    MissingId,

    #[error("User not found")]
    NotFound { id: u32 },
}

impl From<Absent> for LookupError {
    fn from(_: Absent) -> Self {
        LookupError::MissingId
    }
}
