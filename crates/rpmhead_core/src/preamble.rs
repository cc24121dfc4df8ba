//! Fixed 16-byte table preamble.

use rpmhead_codec::{encode_u32, CodecResult, CountingWriter, Encode};
use std::io::Write;

/// Magic bytes opening every header table.
pub const PREAMBLE_MAGIC: [u8; 3] = [0x8e, 0xad, 0xe8];

/// Header table format version.
pub const PREAMBLE_VERSION: u8 = 1;

/// Size of the encoded preamble in bytes.
pub const PREAMBLE_LEN: u64 = 16;

/// Table preamble: magic, version, reserved bytes, entry count and the
/// size of the payload area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preamble {
    entry_count: u32,
    payload_area_size: u32,
}

impl Preamble {
    /// Number of index records that follow.
    #[must_use]
    pub fn entry_count(&self) -> u32 {
        self.entry_count
    }

    /// Declared size of the payload area in bytes.
    #[must_use]
    pub fn payload_area_size(&self) -> u32 {
        self.payload_area_size
    }

    pub(crate) fn set_counts(&mut self, entry_count: u32, payload_area_size: u32) {
        self.entry_count = entry_count;
        self.payload_area_size = payload_area_size;
    }
}

impl Encode for Preamble {
    fn encoded_len(&self) -> u64 {
        PREAMBLE_LEN
    }

    fn encode_to<W: Write + ?Sized>(&self, sink: &mut CountingWriter<'_, W>) -> CodecResult<()> {
        sink.write_section("preamble magic", &PREAMBLE_MAGIC)?;
        sink.write_section("preamble version", &[PREAMBLE_VERSION])?;
        sink.write_section("preamble reserved bytes", &[0; 4])?;
        sink.write_section("preamble entry count", &encode_u32(self.entry_count))?;
        sink.write_section("preamble payload size", &encode_u32(self.payload_area_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_preamble_bytes() {
        let bytes = Preamble::default().to_vec().unwrap();
        assert_eq!(
            bytes,
            vec![0x8e, 0xad, 0xe8, 0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn counts_are_big_endian() {
        let mut preamble = Preamble::default();
        preamble.set_counts(6, 0x1044);
        let bytes = preamble.to_vec().unwrap();
        assert_eq!(bytes.len() as u64, PREAMBLE_LEN);
        assert_eq!(&bytes[8..12], &[0, 0, 0, 6]);
        assert_eq!(&bytes[12..16], &[0, 0, 0x10, 0x44]);
    }
}
