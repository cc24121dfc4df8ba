//! Tag-indexed entry table.
//!
//! A table is encoded as a [`Preamble`], one index record per entry in
//! ascending tag order, and the payloads concatenated in the same order.
//!
//! Tables move through three states:
//! - [`TableState::Building`]: entries are being added, offsets are stale.
//! - [`TableState::Normalized`]: offsets were assigned, but a payload has
//!   been replaced since; normalize again before serializing.
//! - [`TableState::Serializable`]: offsets were assigned and nothing has
//!   changed since.

use crate::entry::{Entry, INDEX_RECORD_LEN};
use crate::error::{Fault, HeadResult};
use crate::preamble::{Preamble, PREAMBLE_LEN};
use crate::types::Tag;
use rpmhead_codec::{CountingWriter, Encode};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{debug, trace};

/// Lifecycle state of an [`EntryTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TableState {
    /// Entries may be added; offsets are not valid.
    Building,
    /// Offsets are valid but a replace happened after the last normalize.
    Normalized,
    /// Offsets are valid and the table may be serialized.
    Serializable,
}

/// Outcome of [`EntryTable::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// The tag was new and the entry was appended.
    Inserted,
    /// An entry with the same tag and shape had its payload replaced.
    Replaced,
}

/// A tag-indexed table of entries.
#[derive(Debug, Clone)]
pub struct EntryTable {
    preamble: Preamble,
    entries: BTreeMap<Tag, Entry>,
    state: TableState,
}

impl EntryTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            preamble: Preamble::default(),
            entries: BTreeMap::new(),
            state: TableState::Building,
        }
    }

    /// Inserts an entry, or replaces the payload of the entry with the
    /// same tag.
    ///
    /// A replacement must have exactly the same data type, count and
    /// payload size as the stored entry; the entry count and payload area
    /// size are unchanged. A new tag increments the entry count and grows
    /// the payload area.
    ///
    /// # Errors
    ///
    /// Returns a [`Fault`] if a replacement's shape differs, or if the
    /// payload would not fit the format's 32-bit size fields. The table is
    /// unchanged in that case.
    pub fn upsert(&mut self, entry: Entry) -> HeadResult<Upsert> {
        let tag = entry.tag();
        let size = entry.payload().size();

        if let Some(existing) = self.entries.get_mut(&tag) {
            check_replacement(existing, &entry)?;
            let offset = existing.index().offset();
            *existing = entry;
            existing.set_offset(offset);
            if self.state == TableState::Serializable {
                self.state = TableState::Normalized;
            }
            trace!(%tag, size, "replaced entry payload");
            return Ok(Upsert::Replaced);
        }

        let too_large = || Fault::PayloadTooLarge { tag, size };
        let size = u32::try_from(size).map_err(|_| too_large())?;
        let payload_area_size = self
            .preamble
            .payload_area_size()
            .checked_add(size)
            .ok_or_else(too_large)?;
        let entry_count = self.preamble.entry_count() + 1;

        self.preamble.set_counts(entry_count, payload_area_size);
        self.entries.insert(tag, entry);
        self.state = TableState::Building;
        trace!(%tag, size, entry_count, "appended entry");
        Ok(Upsert::Inserted)
    }

    /// Assigns payload offsets in ascending tag order.
    ///
    /// Each offset is the sum of the sizes of the payloads before it, so
    /// the first entry sits at offset 0 and the payload area is contiguous.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::PayloadAreaMismatch`] if the payload sizes do not
    /// add up to the size declared in the preamble. Offsets are untouched
    /// in that case.
    pub fn normalize(&mut self) -> HeadResult<()> {
        let actual: u64 = self.entries.values().map(|e| e.payload().size()).sum();
        let declared = self.preamble.payload_area_size();
        if actual != u64::from(declared) {
            return Err(Fault::PayloadAreaMismatch { declared, actual }.into());
        }

        // Running offsets never exceed `declared`, which is a u32.
        let mut offset = 0u32;
        for entry in self.entries.values_mut() {
            entry.set_offset(offset);
            offset += entry.payload().size() as u32;
        }

        self.state = TableState::Serializable;
        debug!(
            entries = self.entries.len(),
            payload_area_size = declared,
            "normalized header table"
        );
        Ok(())
    }

    /// Writes the whole table to `sink` and returns the number of bytes
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::NotNormalized`] before writing anything unless the
    /// table is [`TableState::Serializable`], or an I/O error carrying the
    /// exact partial byte count if the sink fails.
    pub fn serialize<W: Write + ?Sized>(&self, sink: &mut W) -> HeadResult<u64> {
        let mut sink = CountingWriter::new(sink);
        self.serialize_into(&mut sink)?;
        Ok(sink.written())
    }

    /// Writes the table to an existing counting sink, so several sections
    /// can share one byte count.
    ///
    /// # Errors
    ///
    /// Same as [`EntryTable::serialize`].
    pub fn serialize_into<W: Write + ?Sized>(
        &self,
        sink: &mut CountingWriter<'_, W>,
    ) -> HeadResult<()> {
        self.ensure_serializable()?;

        self.preamble.encode_to(sink)?;
        for entry in self.entries.values() {
            entry.index().encode_to(sink)?;
        }
        for entry in self.entries.values() {
            entry.payload().encode_to(sink)?;
        }
        debug!(bytes = self.encoded_len(), "serialized header table");
        Ok(())
    }

    /// Checks that the table was normalized since its last change.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::NotNormalized`] in any other state.
    pub fn ensure_serializable(&self) -> Result<(), Fault> {
        if self.state == TableState::Serializable {
            Ok(())
        } else {
            Err(Fault::NotNormalized { state: self.state })
        }
    }

    /// Serializes into a fresh buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::NotNormalized`] unless the table is serializable.
    pub fn to_vec(&self) -> HeadResult<Vec<u8>> {
        let mut out = Vec::with_capacity(usize::try_from(self.encoded_len()).unwrap_or(0));
        self.serialize(&mut out)?;
        Ok(out)
    }

    /// Encoded length: `16 + 16 * entry_count + payload_area_size`.
    #[must_use]
    pub fn encoded_len(&self) -> u64 {
        PREAMBLE_LEN
            + INDEX_RECORD_LEN * u64::from(self.preamble.entry_count())
            + u64::from(self.preamble.payload_area_size())
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TableState {
        self.state
    }

    /// The table preamble.
    #[must_use]
    pub fn preamble(&self) -> &Preamble {
        &self.preamble
    }

    /// Number of entries.
    #[must_use]
    pub fn entry_count(&self) -> u32 {
        self.preamble.entry_count()
    }

    /// Declared payload area size in bytes.
    #[must_use]
    pub fn payload_area_size(&self) -> u32 {
        self.preamble.payload_area_size()
    }

    /// Returns the entry with `tag`, if any.
    #[must_use]
    pub fn get(&self, tag: Tag) -> Option<&Entry> {
        self.entries.get(&tag)
    }

    /// Iterates entries in ascending tag order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EntryTable {
    fn default() -> Self {
        Self::new()
    }
}

fn check_replacement(existing: &Entry, replacement: &Entry) -> Result<(), Fault> {
    let tag = existing.tag();
    let (old, new) = (existing.index(), replacement.index());
    if old.data_type() != new.data_type() {
        return Err(Fault::DataTypeMismatch {
            tag,
            existing: old.data_type(),
            replacement: new.data_type(),
        });
    }
    if old.count() != new.count() {
        return Err(Fault::CountMismatch {
            tag,
            existing: old.count(),
            replacement: new.count(),
        });
    }
    let (old_size, new_size) = (existing.payload().size(), replacement.payload().size());
    if old_size != new_size {
        return Err(Fault::SizeMismatch {
            tag,
            existing: old_size,
            replacement: new_size,
        });
    }
    Ok(())
}
