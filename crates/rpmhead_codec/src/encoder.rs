//! Big-endian integer encoding.
//!
//! Every multi-byte integer in the header format is written most
//! significant byte first.

use bytes::{BufMut, Bytes, BytesMut};

/// Encode a 16-bit unsigned integer as 2 big-endian bytes.
#[must_use]
pub const fn encode_u16(value: u16) -> [u8; 2] {
    [(value >> 8) as u8, (value & 0xff) as u8]
}

/// Encode a 32-bit unsigned integer as 4 big-endian bytes.
#[must_use]
pub const fn encode_u32(value: u32) -> [u8; 4] {
    [
        (value >> 24) as u8,
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ]
}

/// Two's complement of `value` over 32 bits: `(value XOR 0xFFFFFFFF) + 1`.
///
/// Zero maps to zero; everything else maps to `2^32 - value`.
#[must_use]
pub const fn twos_complement(value: u32) -> u32 {
    (value ^ 0xffff_ffff).wrapping_add(1)
}

/// Encode a sequence of 32-bit words back to back, big-endian.
#[must_use]
pub fn encode_u32_words(words: &[u32]) -> Bytes {
    let mut buf = BytesMut::with_capacity(words.len() * 4);
    for word in words {
        buf.put_u32(*word);
    }
    buf.freeze()
}
