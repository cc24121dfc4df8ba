//! The signature table written right after the lead.
//!
//! It is seeded with placeholder entries for the digests and sizes, which
//! are only known once the main header and payload have been produced, and
//! with the legacy region marker. Placeholders are later replaced in place
//! through the same upsert path, which keeps every offset stable.

use crate::entry::Entry;
use crate::error::HeadResult;
use crate::table::{EntryTable, TableState, Upsert};
use crate::types::{DataType, Tag};
use bytes::Bytes;
use rpmhead_codec::{encode_u32_words, twos_complement, CountingWriter};
use std::io::Write;

/// Bytes of zeroed space reserved for later signatures.
pub const RESERVED_SPACE_LEN: usize = 4096;

/// Length of a hex-encoded SHA1 digest.
pub const SHA1_HEX_LEN: usize = 40;

/// Length of a raw MD5 digest.
pub const MD5_LEN: usize = 16;

/// Builds the 16-byte region marker stored under
/// [`Tag::HEADER_SIGNATURES`].
///
/// `entries` is the number of index records in the region, marker
/// included. The third word is the negative byte distance from the end of
/// the index records back to their start, encoded as a 32-bit two's
/// complement.
#[must_use]
pub fn header_signatures(entries: u32) -> Bytes {
    encode_u32_words(&[
        Tag::HEADER_SIGNATURES.as_u32(),
        DataType::Bin.as_u32(),
        twos_complement(entries.wrapping_mul(16)),
        16,
    ])
}

/// A header table pre-populated with the signature placeholders.
#[derive(Debug, Clone)]
pub struct SignatureTable {
    table: EntryTable,
}

impl SignatureTable {
    /// Creates the signature table with its six fixed entries, normalized
    /// and ready to serialize.
    ///
    /// # Errors
    ///
    /// Only fails if the fixed construction sequence itself is
    /// inconsistent.
    pub fn new() -> HeadResult<Self> {
        let mut table = EntryTable::new();
        table.upsert(Entry::binary(
            Tag::RESERVED_SPACE,
            vec![0u8; RESERVED_SPACE_LEN],
        ))?;
        table.upsert(Entry::string(Tag::SHA1, "x".repeat(SHA1_HEX_LEN)))?;
        table.upsert(Entry::uint32(Tag::SIZE, 0))?;
        table.upsert(Entry::binary(Tag::MD5, vec![0u8; MD5_LEN]))?;
        table.upsert(Entry::uint32(Tag::PAYLOAD_SIZE, 0))?;
        let marker = header_signatures(table.entry_count() + 1);
        table.upsert(Entry::binary(Tag::HEADER_SIGNATURES, marker))?;
        table.normalize()?;
        Ok(Self { table })
    }

    /// Replaces a placeholder entry.
    ///
    /// The table has to be normalized again before it is serialized.
    ///
    /// # Errors
    ///
    /// Returns a fault if the replacement's shape does not match.
    pub fn upsert(&mut self, entry: Entry) -> HeadResult<Upsert> {
        self.table.upsert(entry)
    }

    /// Re-assigns offsets after replacements.
    ///
    /// # Errors
    ///
    /// Returns a fault if the table is internally inconsistent.
    pub fn normalize(&mut self) -> HeadResult<()> {
        self.table.normalize()
    }

    /// Sets the hex-encoded SHA1 digest of the main header.
    ///
    /// # Errors
    ///
    /// Returns a size fault unless `hex` is exactly 40 bytes.
    pub fn set_sha1(&mut self, hex: &str) -> HeadResult<()> {
        self.replace(Entry::string(Tag::SHA1, hex.to_owned()))
    }

    /// Sets the byte count of the main header plus the compressed payload.
    ///
    /// # Errors
    ///
    /// Only fails if the table is internally inconsistent.
    pub fn set_size(&mut self, size: u32) -> HeadResult<()> {
        self.replace(Entry::uint32(Tag::SIZE, size))
    }

    /// Sets the MD5 digest of the main header plus the compressed payload.
    ///
    /// # Errors
    ///
    /// Only fails if the table is internally inconsistent.
    pub fn set_md5(&mut self, digest: [u8; MD5_LEN]) -> HeadResult<()> {
        self.replace(Entry::binary(Tag::MD5, digest.to_vec()))
    }

    /// Sets the byte count of the uncompressed payload.
    ///
    /// # Errors
    ///
    /// Only fails if the table is internally inconsistent.
    pub fn set_payload_size(&mut self, size: u32) -> HeadResult<()> {
        self.replace(Entry::uint32(Tag::PAYLOAD_SIZE, size))
    }

    fn replace(&mut self, entry: Entry) -> HeadResult<()> {
        self.table.upsert(entry)?;
        self.table.normalize()
    }

    /// Writes the table to `sink`.
    ///
    /// # Errors
    ///
    /// See [`EntryTable::serialize`].
    pub fn serialize<W: Write + ?Sized>(&self, sink: &mut W) -> HeadResult<u64> {
        self.table.serialize(sink)
    }

    /// Writes the table to a shared counting sink.
    ///
    /// # Errors
    ///
    /// See [`EntryTable::serialize`].
    pub fn serialize_into<W: Write + ?Sized>(
        &self,
        sink: &mut CountingWriter<'_, W>,
    ) -> HeadResult<()> {
        self.table.serialize_into(sink)
    }

    /// Encoded length in bytes.
    #[must_use]
    pub fn encoded_len(&self) -> u64 {
        self.table.encoded_len()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TableState {
        self.table.state()
    }

    /// The underlying entry table.
    #[must_use]
    pub fn table(&self) -> &EntryTable {
        &self.table
    }
}
