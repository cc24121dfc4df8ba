//! End-to-end tests for the signature table, the lead and the package
//! prefix.

use rpmhead_core::{
    Entry, HeadError, Lead, LeadConfig, PackagePrefix, SignatureTable, SignatureValues, Tag,
    LEAD_LEN,
};
use rpmhead_testkit::prelude::*;

fn myapp_prefix() -> PackagePrefix {
    PackagePrefix::new(
        Lead::from_config(&LeadConfig::new("myapp", "1.0.3", "1")),
        SignatureTable::new().unwrap(),
    )
}

#[test]
fn default_signature_matches_vectors() {
    let bytes = SignatureTable::new().unwrap().table().to_vec().unwrap();

    assert_eq!(&bytes[..16], &SIGNATURE_PREAMBLE);
    for (i, expected) in SIGNATURE_INDEX.iter().enumerate() {
        let record = be_words(&bytes[16 + 16 * i..32 + 16 * i]);
        assert_eq!(record, expected.to_vec(), "index record {i}");
    }

    let area = &bytes[16 + 16 * 6..];
    assert_eq!(area.len(), 4176);
    assert_eq!(&area[..16], &SIGNATURE_MARKER);
    assert_eq!(&area[16..56], "x".repeat(40).as_bytes());
    assert_eq!(&area[56..60], &[0, 0, 0, 0]);
    assert!(area[60..76].iter().all(|b| *b == 0));
    assert_eq!(&area[76..80], &[0, 0, 0, 0]);
    assert!(area[80..].iter().all(|b| *b == 0));
}

#[test]
fn injected_values_land_at_placeholder_offsets() {
    let mut table = SignatureTable::new().unwrap();
    SignatureValues::new()
        .sha1("0123456789abcdef0123456789abcdef01234567")
        .size(0x0102_0304)
        .md5([0xaa; 16])
        .payload_size(0x0a0b_0c0d)
        .apply(&mut table)
        .unwrap();

    let bytes = table.table().to_vec().unwrap();
    let area = &bytes[16 + 16 * 6..];
    assert_eq!(&area[16..56], b"0123456789abcdef0123456789abcdef01234567");
    assert_eq!(&area[56..60], &[1, 2, 3, 4]);
    assert_eq!(&area[60..76], &[0xaa; 16]);
    assert_eq!(&area[76..80], &[0x0a, 0x0b, 0x0c, 0x0d]);
    for (i, expected) in SIGNATURE_INDEX.iter().enumerate() {
        assert_eq!(be_words(&bytes[16 + 16 * i..32 + 16 * i]), expected.to_vec());
    }
}

#[test]
fn lead_matches_vector() {
    let mut out = Vec::new();
    let n = Lead::from_config(&LeadConfig::new("myapp", "1.0.3", "1"))
        .write_to(&mut out)
        .unwrap();
    assert_eq!(n, LEAD_LEN);
    assert_eq!(out, myapp_lead());
}

#[test]
fn prefix_is_lead_then_signature() {
    let prefix = myapp_prefix();
    let mut out = Vec::new();
    prefix.write_to(&mut out).unwrap();

    let signature = prefix.signature.table().to_vec().unwrap();
    assert_eq!(&out[..96], &myapp_lead()[..]);
    assert_eq!(&out[96..], &signature[..]);
}

#[test]
fn partial_writes_report_exact_counts() {
    let table = SignatureTable::new().unwrap();
    let total = table.encoded_len() as usize;

    for limit in [0, 1, 3, 15, 16, 17, 40, 111, 112, 113, 200, total - 1] {
        let mut sink = FailingWriter::new(limit);
        let err = table.serialize(&mut sink).unwrap_err();

        assert!(!err.is_fault(), "limit {limit}");
        assert_eq!(err.written(), limit as u64, "limit {limit}");
        assert_eq!(sink.data.len(), limit);
    }

    let mut sink = FailingWriter::new(total);
    assert_eq!(table.serialize(&mut sink).unwrap(), total as u64);
}

#[test]
fn io_errors_name_the_section() {
    let table = SignatureTable::new().unwrap();

    let err = table.serialize(&mut FailingWriter::new(2)).unwrap_err();
    match err {
        HeadError::Io(io) => assert_eq!(io.context(), "preamble magic"),
        other => panic!("unexpected error {other}"),
    }

    let err = table.serialize(&mut FailingWriter::new(20)).unwrap_err();
    match err {
        HeadError::Io(io) => assert_eq!(io.context(), "index record for tag 0x3e"),
        other => panic!("unexpected error {other}"),
    }

    let err = table.serialize(&mut FailingWriter::new(120)).unwrap_err();
    match err {
        HeadError::Io(io) => assert_eq!(io.context(), "binary payload"),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn prefix_partial_count_spans_both_sections() {
    let prefix = myapp_prefix();
    let limit = 96 + 20;
    let mut sink = FailingWriter::new(limit);
    let err = prefix.write_to(&mut sink).unwrap_err();
    assert_eq!(err.written(), limit as u64);
}

#[test]
fn interrupted_sink_still_gets_everything() {
    let table = SignatureTable::new().unwrap();
    let mut sink = ByteAtATimeWriter::new();
    let n = table.serialize(&mut sink).unwrap();
    assert_eq!(n, table.encoded_len());
    assert_eq!(sink.data, table.table().to_vec().unwrap());
}

#[test]
fn long_name_faults_before_any_byte() {
    let lead = Lead::from_config(&LeadConfig::new("a".repeat(40), "1.0.0", "1".repeat(20)));
    assert_eq!(lead.name_version_release().len(), 67);

    let mut sink = FailingWriter::new(usize::MAX);
    let err = lead.write_to(&mut sink).unwrap_err();
    assert!(err.is_fault());
    assert_eq!(err.written(), 0);
    assert!(sink.data.is_empty());

    let prefix = PackagePrefix::new(lead, SignatureTable::new().unwrap());
    let mut out = Vec::new();
    assert!(prefix.write_to(&mut out).unwrap_err().is_fault());
    assert!(out.is_empty());
}

#[test]
fn stale_signature_is_not_serialized() {
    let mut table = SignatureTable::new().unwrap();
    table.upsert(Entry::uint32(Tag::PAYLOAD_SIZE, 10)).unwrap();

    let mut sink = FailingWriter::new(usize::MAX);
    assert!(table.serialize(&mut sink).unwrap_err().is_fault());
    assert!(sink.data.is_empty());
}
