use std::io;
use thiserror::Error;
use toolmod_syntax::SyntaxError;

/// Errors that can occur during manifest codec operations
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("read {location}: {source}")]
    Parse {
        location: String,
        source: SyntaxError,
    },

    #[error("moddir cannot be empty, got manifest path: {0}")]
    InvalidLocation(String),
}
