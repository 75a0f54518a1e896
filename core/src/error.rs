use std::{io, path::PathBuf};

use thiserror::Error;

pub type CrackResult<T> = std::result::Result<T, CrackError>;

#[derive(Error, Debug)]
pub enum CrackError {
    #[error("Unsupported hash algorithm '{0}'. Supported algorithms are md5, sha1, sha256 and sha512")]
    UnsupportedAlgorithm(String),

    #[error("Unable to read the candidate source at {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid search parameters: {0}")]
    InvalidParameters(String),
}
