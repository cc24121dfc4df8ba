//! Property-based test generators using proptest.
//!
//! Provides strategies for entries and entry batches whose tags are
//! unique, as a table requires.

use proptest::prelude::*;
use rpmhead_core::{Entry, EntryTable, Payload, Tag};
use std::collections::BTreeMap;
use std::ops::Range;

/// Payload shape without a tag.
#[derive(Debug, Clone)]
pub enum EntryShape {
    /// Binary payload.
    Binary(Vec<u8>),
    /// 32-bit integer payload.
    UInt32(u32),
    /// String payload.
    String(String),
}

impl EntryShape {
    /// Binds the shape to `tag`.
    pub fn into_entry(self, tag: Tag) -> Entry {
        match self {
            Self::Binary(data) => Entry::binary(tag, data),
            Self::UInt32(value) => Entry::uint32(tag, value),
            Self::String(text) => Entry::string(tag, text),
        }
    }
}

/// Strategy for generating tags.
pub fn tag_strategy() -> impl Strategy<Value = Tag> {
    any::<u32>().prop_map(Tag::new)
}

/// Strategy for generating non-empty payload shapes.
pub fn entry_shape_strategy() -> impl Strategy<Value = EntryShape> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 1..256).prop_map(EntryShape::Binary),
        any::<u32>().prop_map(EntryShape::UInt32),
        prop::string::string_regex("[a-zA-Z0-9._-]{1,64}")
            .expect("Invalid regex")
            .prop_map(EntryShape::String),
    ]
}

/// Strategy for generating a single entry.
pub fn entry_strategy() -> impl Strategy<Value = Entry> {
    (tag_strategy(), entry_shape_strategy()).prop_map(|(tag, shape)| shape.into_entry(tag))
}

/// Strategy for generating entries with unique tags, in arbitrary order.
pub fn unique_entries_strategy(len: Range<usize>) -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::btree_map(tag_strategy(), entry_shape_strategy(), len)
        .prop_map(|map: BTreeMap<Tag, EntryShape>| {
            map.into_iter()
                .map(|(tag, shape)| shape.into_entry(tag))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

/// Upserts every entry and normalizes the table.
///
/// # Panics
///
/// Panics if any upsert or the normalize fails.
pub fn normalized_table(entries: Vec<Entry>) -> EntryTable {
    let mut table = EntryTable::new();
    for entry in entries {
        table.upsert(entry).expect("upsert failed");
    }
    table.normalize().expect("normalize failed");
    table
}

/// A replacement for `entry` with the same shape but different content.
pub fn same_shape_replacement(entry: &Entry) -> Entry {
    let tag = entry.tag();
    match entry.payload() {
        Payload::Binary(data) => Entry::binary(tag, data.iter().map(|b| !b).collect::<Vec<_>>()),
        Payload::UInt32(value) => Entry::uint32(tag, value.wrapping_add(1)),
        Payload::String(data) => Entry::string(tag, "z".repeat(data.len())),
    }
}
