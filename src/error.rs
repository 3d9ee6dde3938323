use std::io;

use thiserror::Error;

/// Errors raised by the harness outside the engine, which has no error
/// channel of its own.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed stimulus data: {0}")]
    Malformed(&'static str),

    #[error("stimulus has {actual} input elements, topology expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("stimulus index {index} out of range ({len} available)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("could not create file: {path}")]
    Report {
        path: String,
        #[source]
        source: io::Error,
    },
}
