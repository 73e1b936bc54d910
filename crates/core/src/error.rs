use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for header emission.
///
/// Only I/O can fail: every byte value has a valid escape and the struct name
/// is never validated.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The binary input could not be opened or read.
    #[error("Failed to read binary input {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The header output could not be created or written.
    #[error("Failed to write header output {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience result type for emit operations.
pub type EmitResult<T> = Result<T, EmitError>;
