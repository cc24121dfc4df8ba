//! Lead followed by the signature table.

use crate::error::HeadResult;
use crate::lead::{Lead, LEAD_LEN};
use crate::signature::SignatureTable;
use rpmhead_codec::CountingWriter;
use std::io::Write;
use tracing::debug;

/// The start of a package file: the lead, then the signature table.
#[derive(Debug, Clone)]
pub struct PackagePrefix {
    /// The leading identification record.
    pub lead: Lead,
    /// The signature table.
    pub signature: SignatureTable,
}

impl PackagePrefix {
    /// Pairs a lead with a signature table.
    #[must_use]
    pub fn new(lead: Lead, signature: SignatureTable) -> Self {
        Self { lead, signature }
    }

    /// Encoded length in bytes.
    #[must_use]
    pub fn encoded_len(&self) -> u64 {
        LEAD_LEN + self.signature.encoded_len()
    }

    /// Writes the lead and the signature table to one sink.
    ///
    /// Both are validated before the first byte is written, so a fault
    /// never leaves a truncated lead behind.
    ///
    /// # Errors
    ///
    /// Returns a fault for an over-long package name or a signature table
    /// that needs normalizing, or an I/O error carrying the total bytes
    /// written across both sections.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> HeadResult<u64> {
        self.signature.table().ensure_serializable()?;

        let mut sink = CountingWriter::new(sink);
        self.lead.write_into(&mut sink)?;
        self.signature.serialize_into(&mut sink)?;
        debug!(
            bytes = sink.written(),
            nvr = %self.lead.name_version_release(),
            "wrote package prefix"
        );
        Ok(sink.written())
    }
}
