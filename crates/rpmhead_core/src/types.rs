//! Core type definitions for header tables.

use serde::Serialize;
use std::fmt;

/// Key identifying an entry's meaning within a table.
///
/// Tags are unique within a table; entries are ordered by tag on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Tag(pub u32);

impl Tag {
    /// Legacy "immutable region" marker of the signature table.
    pub const HEADER_SIGNATURES: Self = Self(0x3e);
    /// SHA1 digest of the main header, as 40 hex characters.
    pub const SHA1: Self = Self(0x10d);
    /// Byte count of the main header plus the compressed payload.
    pub const SIZE: Self = Self(0x3e8);
    /// MD5 digest of the main header plus the compressed payload.
    pub const MD5: Self = Self(0x3ec);
    /// Byte count of the uncompressed payload.
    pub const PAYLOAD_SIZE: Self = Self(0x3ef);
    /// Zero-filled space reserved for later signatures.
    pub const RESERVED_SPACE: Self = Self(0x3f0);

    /// Creates a new tag.
    #[must_use]
    pub const fn new(tag: u32) -> Self {
        Self(tag)
    }

    /// Returns the raw tag value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<u32> for Tag {
    fn from(tag: u32) -> Self {
        Self(tag)
    }
}

/// Encoding of an entry's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u32)]
pub enum DataType {
    /// A single big-endian 32-bit unsigned integer.
    Int32 = 4,
    /// Raw string bytes, written without a terminator.
    String = 6,
    /// Opaque binary data.
    Bin = 7,
}

impl DataType {
    /// Returns the wire code of this data type.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Converts a wire code to a data type.
    #[must_use]
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            4 => Some(Self::Int32),
            6 => Some(Self::String),
            7 => Some(Self::Bin),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_displays_as_hex() {
        assert_eq!(Tag::RESERVED_SPACE.to_string(), "0x3f0");
        assert_eq!(Tag::new(62), Tag::HEADER_SIGNATURES);
    }

    #[test]
    fn data_type_codes() {
        assert_eq!(DataType::Bin.as_u32(), 7);
        assert_eq!(DataType::Int32.as_u32(), 4);
        assert_eq!(DataType::String.as_u32(), 6);
        assert_eq!(DataType::from_u32(6), Some(DataType::String));
        assert_eq!(DataType::from_u32(5), None);
    }
}
