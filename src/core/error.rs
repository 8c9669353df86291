use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal input errors. Any of them aborts the run before a single output row is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed track {}, line {line}: {reason}", path.display())]
    MalformedTrack { path: PathBuf, line: usize, reason: String },

    #[error("Malformed sites list {}, line {line}: \"{value}\" is not an integer position", path.display())]
    MalformedSites { path: PathBuf, line: usize, value: String },

    #[error("Failed to write the results table: {0}")]
    Output(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
