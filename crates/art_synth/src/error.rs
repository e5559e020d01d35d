//! Error types and result alias for the crate.
//!
//! The engine has exactly one reportable failure: an archetype tag that is
//! not in the dispatch table. Everything else (unknown palettes, degenerate
//! geometry) recovers internally.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown archetype '{tag}'")]
    UnknownArchetype { tag: String },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
