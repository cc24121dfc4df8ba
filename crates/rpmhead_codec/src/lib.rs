//! # rpmhead codec
//!
//! Byte-level encoding for the RPM header table format.
//!
//! This crate provides:
//! - Big-endian encoding of 16-bit and 32-bit integers
//! - The 32-bit two's complement used by the legacy region marker
//! - [`CountingWriter`], a sink wrapper that reports exact partial byte
//!   counts when a write fails
//! - The [`Encode`] trait implemented by every fixed-layout section
//!
//! ## Usage
//!
//! ```
//! use rpmhead_codec::{encode_u32, CountingWriter};
//!
//! let mut out = Vec::new();
//! let mut sink = CountingWriter::new(&mut out);
//! sink.write_section("count", &encode_u32(6)).unwrap();
//! assert_eq!(sink.written(), 4);
//! assert_eq!(out, vec![0, 0, 0, 6]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod encoder;
mod error;
mod sink;

pub use encoder::{encode_u16, encode_u32, encode_u32_words, twos_complement};
pub use error::{CodecError, CodecResult};
pub use sink::CountingWriter;

use std::io::Write;

/// Trait for sections that know their exact encoded length and can write
/// themselves to a counting sink.
pub trait Encode {
    /// Number of bytes [`Encode::encode_to`] writes.
    fn encoded_len(&self) -> u64;

    /// Write the encoded bytes to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects a write.
    fn encode_to<W: Write + ?Sized>(&self, sink: &mut CountingWriter<'_, W>) -> CodecResult<()>;

    /// Encode into a fresh buffer.
    ///
    /// # Errors
    ///
    /// Only fails if an implementation reports an error of its own; writes
    /// to a `Vec` never fail.
    fn to_vec(&self) -> CodecResult<Vec<u8>> {
        let capacity = usize::try_from(self.encoded_len()).unwrap_or(0);
        let mut out = Vec::with_capacity(capacity);
        self.encode_to(&mut CountingWriter::new(&mut out))?;
        Ok(out)
    }
}
