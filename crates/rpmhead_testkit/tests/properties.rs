//! Property tests for entry tables.

use proptest::prelude::*;
use rpmhead_core::{EntryTable, Fault, TableState, Upsert, INDEX_RECORD_LEN, PREAMBLE_LEN};
use rpmhead_testkit::prelude::*;

proptest! {
    #[test]
    fn normalize_sorts_and_packs_offsets(entries in unique_entries_strategy(1..32)) {
        let table = normalized_table(entries);

        let tags: Vec<u32> = table.entries().map(|e| e.tag().as_u32()).collect();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&tags, &sorted);

        let mut expected_offset = 0u64;
        let mut previous: Option<u32> = None;
        for entry in table.entries() {
            let offset = entry.index().offset();
            prop_assert_eq!(u64::from(offset), expected_offset);
            if let Some(prev) = previous {
                prop_assert!(offset > prev);
            }
            previous = Some(offset);
            expected_offset += entry.payload().size();
        }
        prop_assert_eq!(expected_offset, u64::from(table.payload_area_size()));
    }

    #[test]
    fn serialized_length_matches_layout(entries in unique_entries_strategy(0..32)) {
        let table = normalized_table(entries);
        let bytes = table.to_vec().unwrap();

        let expected = PREAMBLE_LEN
            + INDEX_RECORD_LEN * u64::from(table.entry_count())
            + u64::from(table.payload_area_size());
        prop_assert_eq!(bytes.len() as u64, expected);
        prop_assert_eq!(bytes.len() as u64, table.encoded_len());
    }

    #[test]
    fn index_records_point_at_payloads(entries in unique_entries_strategy(1..16)) {
        let table = normalized_table(entries);
        let bytes = table.to_vec().unwrap();
        let count = table.entry_count() as usize;
        let area_start = 16 + 16 * count;

        for (i, entry) in table.entries().enumerate() {
            let record = be_words(&bytes[16 + 16 * i..32 + 16 * i]);
            prop_assert_eq!(record[0], entry.tag().as_u32());
            prop_assert_eq!(record[1], entry.index().data_type().as_u32());
            prop_assert_eq!(record[3], entry.index().count());

            let start = area_start + record[2] as usize;
            let end = start + entry.payload().size() as usize;
            let payload = rpmhead_codec::Encode::to_vec(entry.payload()).unwrap();
            prop_assert_eq!(&bytes[start..end], &payload[..]);
        }
    }

    #[test]
    fn same_shape_replace_keeps_layout(entries in unique_entries_strategy(1..16), pick in any::<prop::sample::Index>()) {
        let mut table = normalized_table(entries);
        let target = pick.get(&table.entries().cloned().collect::<Vec<_>>()).clone();
        let before_len = table.encoded_len();
        let before_count = table.entry_count();

        let replacement = same_shape_replacement(&target);
        prop_assert_eq!(table.upsert(replacement.clone()).unwrap(), Upsert::Replaced);
        prop_assert_eq!(table.state(), TableState::Normalized);
        prop_assert_eq!(table.entry_count(), before_count);
        prop_assert_eq!(table.encoded_len(), before_len);

        let stored = table.get(target.tag()).unwrap();
        prop_assert_eq!(stored.payload(), replacement.payload());
        prop_assert_eq!(stored.index().offset(), target.index().offset());
    }

    #[test]
    fn mismatched_replace_leaves_table_unchanged(
        entries in unique_entries_strategy(1..16),
        pick in any::<prop::sample::Index>(),
        shape in entry_shape_strategy(),
    ) {
        let mut table = normalized_table(entries);
        let target = pick.get(&table.entries().cloned().collect::<Vec<_>>()).clone();
        let replacement = shape.into_entry(target.tag());
        let before = table.to_vec().unwrap();

        let same_shape = replacement.index().data_type() == target.index().data_type()
            && replacement.index().count() == target.index().count()
            && replacement.payload().size() == target.payload().size();

        match table.upsert(replacement) {
            Ok(outcome) => {
                prop_assert!(same_shape);
                prop_assert_eq!(outcome, Upsert::Replaced);
            }
            Err(err) => {
                prop_assert!(!same_shape);
                let is_shape_fault = matches!(
                    err.as_fault(),
                    Some(Fault::DataTypeMismatch { .. })
                        | Some(Fault::CountMismatch { .. })
                        | Some(Fault::SizeMismatch { .. })
                );
                prop_assert!(is_shape_fault, "unexpected error: {}", err);
                prop_assert_eq!(table.state(), TableState::Serializable);
                prop_assert_eq!(table.to_vec().unwrap(), before);
            }
        }
    }

    #[test]
    fn insertion_order_does_not_matter(entries in unique_entries_strategy(1..16)) {
        let forward = normalized_table(entries.clone());
        let backward = normalized_table(entries.into_iter().rev().collect());
        prop_assert_eq!(forward.to_vec().unwrap(), backward.to_vec().unwrap());
    }
}

#[test]
fn fresh_table_is_building() {
    assert_eq!(EntryTable::new().state(), TableState::Building);
}
