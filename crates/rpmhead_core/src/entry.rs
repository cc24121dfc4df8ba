//! Index records, payloads and entries.

use crate::types::{DataType, Tag};
use bytes::Bytes;
use rpmhead_codec::{encode_u32, CodecResult, CountingWriter, Encode};
use std::io::Write;

/// Size of one encoded index record in bytes.
pub const INDEX_RECORD_LEN: u64 = 16;

/// Fixed 16-byte descriptor of one entry.
///
/// `offset` is only meaningful after the owning table has been normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRecord {
    tag: Tag,
    data_type: DataType,
    offset: u32,
    count: u32,
}

impl IndexRecord {
    /// The entry's tag.
    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The payload encoding.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Byte offset of the payload within the payload area.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Element count: byte length for binary, 1 for integers and strings.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Encode for IndexRecord {
    fn encoded_len(&self) -> u64 {
        INDEX_RECORD_LEN
    }

    fn encode_to<W: Write + ?Sized>(&self, sink: &mut CountingWriter<'_, W>) -> CodecResult<()> {
        let context = format!("index record for tag {}", self.tag);
        sink.write_section(&context, &encode_u32(self.tag.as_u32()))?;
        sink.write_section(&context, &encode_u32(self.data_type.as_u32()))?;
        sink.write_section(&context, &encode_u32(self.offset))?;
        sink.write_section(&context, &encode_u32(self.count))
    }
}

/// Payload of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Opaque bytes.
    Binary(Bytes),
    /// A single 32-bit unsigned integer.
    UInt32(u32),
    /// String bytes without a terminator.
    String(Bytes),
}

impl Payload {
    /// Serialized length in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        match self {
            Self::Binary(data) | Self::String(data) => data.len() as u64,
            Self::UInt32(_) => 4,
        }
    }

    /// The data type this payload is written as.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Binary(_) => DataType::Bin,
            Self::UInt32(_) => DataType::Int32,
            Self::String(_) => DataType::String,
        }
    }
}

impl Encode for Payload {
    fn encoded_len(&self) -> u64 {
        self.size()
    }

    fn encode_to<W: Write + ?Sized>(&self, sink: &mut CountingWriter<'_, W>) -> CodecResult<()> {
        match self {
            Self::Binary(data) => sink.write_section("binary payload", data),
            Self::UInt32(value) => sink.write_section("uint32 payload", &encode_u32(*value)),
            Self::String(data) => sink.write_section("string payload", data),
        }
    }
}

/// One table entry: an index record and the payload it describes.
///
/// The record's data type and count always agree with the payload; only
/// the constructors below create entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    index: IndexRecord,
    payload: Payload,
}

impl Entry {
    fn new(tag: Tag, count: u32, payload: Payload) -> Self {
        Self {
            index: IndexRecord {
                tag,
                data_type: payload.data_type(),
                offset: 0,
                count,
            },
            payload,
        }
    }

    /// Binary entry; count is the byte length.
    ///
    /// Data longer than `u32::MAX` bytes is rejected when the entry is
    /// inserted into a table.
    pub fn binary(tag: Tag, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        let count = u32::try_from(data.len()).unwrap_or(u32::MAX);
        Self::new(tag, count, Payload::Binary(data))
    }

    /// Unsigned 32-bit integer entry; count is 1.
    #[must_use]
    pub fn uint32(tag: Tag, value: u32) -> Self {
        Self::new(tag, 1, Payload::UInt32(value))
    }

    /// String entry; count is 1 and no terminator is written.
    pub fn string(tag: Tag, text: impl Into<Bytes>) -> Self {
        Self::new(tag, 1, Payload::String(text.into()))
    }

    /// The entry's tag.
    #[must_use]
    pub fn tag(&self) -> Tag {
        self.index.tag
    }

    /// The index record.
    #[must_use]
    pub fn index(&self) -> &IndexRecord {
        &self.index
    }

    /// The payload.
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub(crate) fn set_offset(&mut self, offset: u32) {
        self.index.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_entry_counts_bytes() {
        let entry = Entry::binary(Tag::RESERVED_SPACE, vec![0u8; 4096]);
        assert_eq!(entry.index().data_type(), DataType::Bin);
        assert_eq!(entry.index().count(), 4096);
        assert_eq!(entry.payload().size(), 4096);

        let bytes = entry.payload().to_vec().unwrap();
        assert_eq!(bytes.len(), 4096);
        assert!(bytes.iter().all(|b| *b == 0));
    }

    #[test]
    fn string_entry_has_no_terminator() {
        let entry = Entry::string(Tag::new(1000), "myapp-1.0.3-1");
        assert_eq!(entry.index().data_type(), DataType::String);
        assert_eq!(entry.index().count(), 1);
        assert_eq!(entry.payload().size(), 13);
        assert_eq!(entry.payload().to_vec().unwrap(), b"myapp-1.0.3-1".to_vec());
    }

    #[test]
    fn uint32_entry_is_big_endian() {
        let entry = Entry::uint32(Tag::SIZE, 0x0102_0304);
        assert_eq!(entry.index().data_type(), DataType::Int32);
        assert_eq!(entry.index().count(), 1);
        assert_eq!(entry.payload().size(), 4);
        assert_eq!(entry.payload().to_vec().unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn index_record_layout() {
        let mut entry = Entry::uint32(Tag::PAYLOAD_SIZE, 9);
        entry.set_offset(0x20);
        let bytes = entry.index().to_vec().unwrap();
        assert_eq!(
            bytes,
            vec![0, 0, 0x03, 0xef, 0, 0, 0, 4, 0, 0, 0, 0x20, 0, 0, 0, 1]
        );
    }

    #[test]
    fn empty_binary_entry() {
        let entry = Entry::binary(Tag::new(5), Vec::new());
        assert_eq!(entry.index().count(), 0);
        assert_eq!(entry.payload().size(), 0);
    }
}
