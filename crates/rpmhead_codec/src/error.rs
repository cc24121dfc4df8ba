//! Error types for the codec crate.

use std::io;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while writing encoded bytes to a sink.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The sink rejected a write.
    #[error("failed to write {context} after {written} bytes: {source}")]
    Io {
        /// The section being written when the sink failed.
        context: String,
        /// Exact number of bytes the sink accepted before the failure.
        written: u64,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl CodecError {
    /// Create an I/O error for the given section.
    pub fn io(context: impl Into<String>, written: u64, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            written,
            source,
        }
    }

    /// Number of bytes committed to the sink before the failure.
    #[must_use]
    pub fn written(&self) -> u64 {
        match self {
            Self::Io { written, .. } => *written,
        }
    }

    /// The section being written when the failure happened.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::Io { context, .. } => context,
        }
    }
}
