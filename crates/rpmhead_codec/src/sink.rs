//! Byte-counting sink wrapper.

use crate::error::{CodecError, CodecResult};
use std::io::{self, Write};

/// Wraps a [`Write`] sink and counts every byte it accepts.
///
/// The count includes bytes accepted during a section that later failed,
/// so a caller always learns exactly how much of the sink was committed.
pub struct CountingWriter<'a, W: Write + ?Sized> {
    inner: &'a mut W,
    written: u64,
}

impl<'a, W: Write + ?Sized> CountingWriter<'a, W> {
    /// Create a new counting writer around `inner`.
    pub fn new(inner: &'a mut W) -> Self {
        Self { inner, written: 0 }
    }

    /// Total bytes accepted by the sink so far.
    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Write all of `bytes` as one named section.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Io`] tagged with `context` and the exact byte
    /// count committed so far if the sink fails or stops accepting data.
    pub fn write_section(&mut self, context: &str, bytes: &[u8]) -> CodecResult<()> {
        self.write_all(bytes)
            .map_err(|source| CodecError::io(context, self.written, source))
    }

    /// Flush the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Io`] if the sink fails to flush.
    pub fn flush_section(&mut self, context: &str) -> CodecResult<()> {
        self.inner
            .flush()
            .map_err(|source| CodecError::io(context, self.written, source))
    }
}

impl<W: Write + ?Sized> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
