use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("instructions file path is empty")]
    EmptyPath,

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is empty", .path.display())]
    EmptyFile { path: PathBuf },

    #[error("{} is too large ({size} bytes, limit is {limit})", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}
