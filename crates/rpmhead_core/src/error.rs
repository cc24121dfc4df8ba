//! Error types for rpmhead core.

use crate::table::TableState;
use crate::types::{DataType, Tag};
use rpmhead_codec::CodecError;
use thiserror::Error;

/// Result type for core operations.
pub type HeadResult<T> = Result<T, HeadError>;

/// Errors that can occur while building or writing a header table.
///
/// I/O failures and internal faults are kept apart: the former come from
/// the sink and carry the exact partial byte count, the latter mean the
/// construction sequence was misused and the encode must stop.
#[derive(Debug, Error)]
pub enum HeadError {
    /// The sink rejected a write.
    #[error("I/O error: {0}")]
    Io(#[from] CodecError),

    /// An invariant or precondition was violated.
    #[error("internal fault: {0}")]
    Fault(#[from] Fault),
}

impl HeadError {
    /// Returns true for invariant/precondition violations.
    #[must_use]
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Returns the fault, if this is one.
    #[must_use]
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            Self::Fault(fault) => Some(fault),
            Self::Io(_) => None,
        }
    }

    /// Bytes committed to the sink before the failure.
    ///
    /// Faults are always raised before the first byte is written.
    #[must_use]
    pub fn written(&self) -> u64 {
        match self {
            Self::Io(err) => err.written(),
            Self::Fault(_) => 0,
        }
    }
}

/// Invariant and precondition violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// Replacement entry has a different data type than the stored one.
    #[error("cannot overwrite entry {tag}: data type {replacement:?} does not match {existing:?}")]
    DataTypeMismatch {
        /// Tag being replaced.
        tag: Tag,
        /// Data type of the stored entry.
        existing: DataType,
        /// Data type of the replacement.
        replacement: DataType,
    },

    /// Replacement entry has a different element count.
    #[error("cannot overwrite entry {tag}: count {replacement} does not match {existing}")]
    CountMismatch {
        /// Tag being replaced.
        tag: Tag,
        /// Count of the stored entry.
        existing: u32,
        /// Count of the replacement.
        replacement: u32,
    },

    /// Replacement payload has a different byte size.
    #[error("cannot overwrite entry {tag}: payload size {replacement} does not match {existing}")]
    SizeMismatch {
        /// Tag being replaced.
        tag: Tag,
        /// Payload size of the stored entry.
        existing: u64,
        /// Payload size of the replacement.
        replacement: u64,
    },

    /// Declared payload area size disagrees with the sum of payload sizes.
    #[error("mismatch: payload area size {declared} vs. sum of payload sizes {actual}")]
    PayloadAreaMismatch {
        /// Size recorded in the preamble.
        declared: u32,
        /// Sum of the payload sizes actually stored.
        actual: u64,
    },

    /// A payload would not fit the 32-bit size fields of the format.
    #[error("payload for entry {tag} is too large: {size} bytes")]
    PayloadTooLarge {
        /// Tag of the rejected entry.
        tag: Tag,
        /// Payload size in bytes.
        size: u64,
    },

    /// Serialization was requested without a fresh normalize.
    #[error("table must be normalized before serialization (state: {state:?})")]
    NotNormalized {
        /// State the table was in.
        state: TableState,
    },

    /// Name-version-release text does not fit the lead's name field.
    #[error("unable to write name-version-release for '{nvr}', it may not exceed {max} bytes")]
    NameTooLong {
        /// The rejected text.
        nvr: String,
        /// Maximum permitted length.
        max: usize,
    },
}
