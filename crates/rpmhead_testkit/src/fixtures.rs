//! Sink fixtures.
//!
//! Writers that fail or accept data slowly, for checking partial byte
//! counts and section contexts on I/O errors.

use std::io::{self, Write};

/// Accepts up to `limit` bytes, then fails every write.
#[derive(Debug, Default)]
pub struct FailingWriter {
    /// Bytes accepted so far.
    pub data: Vec<u8>,
    limit: usize,
}

impl FailingWriter {
    /// Creates a writer that fails once `limit` bytes have been accepted.
    pub fn new(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            limit,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.limit.saturating_sub(self.data.len());
        if room == 0 {
            return Err(io::Error::other("sink is full"));
        }
        let n = room.min(buf.len());
        self.data.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts one byte per call, interrupting every other call.
#[derive(Debug, Default)]
pub struct ByteAtATimeWriter {
    /// Bytes accepted so far.
    pub data: Vec<u8>,
    interrupt_next: bool,
}

impl ByteAtATimeWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Write for ByteAtATimeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.interrupt_next = !self.interrupt_next;
        if self.interrupt_next {
            return Err(io::ErrorKind::Interrupted.into());
        }
        self.data.push(buf[0]);
        Ok(1)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_writer_stops_at_limit() {
        let mut sink = FailingWriter::new(3);
        assert_eq!(sink.write(&[1, 2]).unwrap(), 2);
        assert_eq!(sink.write(&[3, 4]).unwrap(), 1);
        assert!(sink.write(&[5]).is_err());
        assert_eq!(sink.data, vec![1, 2, 3]);
    }

    #[test]
    fn byte_at_a_time_writer_completes_write_all() {
        let mut sink = ByteAtATimeWriter::new();
        sink.write_all(&[1, 2, 3]).unwrap();
        assert_eq!(sink.data, vec![1, 2, 3]);
    }
}
