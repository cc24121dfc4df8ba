//! Known-good byte vectors.
//!
//! Expected bytes for the fixed parts of the format, written out by hand
//! from the layout rather than produced by the encoder.

/// Preamble of the default signature table: 6 entries, 4176 payload bytes.
pub const SIGNATURE_PREAMBLE: [u8; 16] = [
    0x8e, 0xad, 0xe8, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x10,
    0x50,
];

/// Index records of the default signature table, in wire order.
pub const SIGNATURE_INDEX: [[u32; 4]; 6] = [
    [0x3e, 7, 0, 16],
    [0x10d, 6, 16, 1],
    [0x3e8, 4, 56, 1],
    [0x3ec, 7, 60, 16],
    [0x3ef, 4, 76, 1],
    [0x3f0, 7, 80, 4096],
];

/// Region marker payload for a six-entry table.
pub const SIGNATURE_MARKER: [u8; 16] = [
    0x00, 0x00, 0x00, 0x3e, 0x00, 0x00, 0x00, 0x07, 0xff, 0xff, 0xff, 0xa0, 0x00, 0x00, 0x00,
    0x10,
];

/// Lead of a binary x86_64 Linux `myapp-1.0.3-1` package.
pub fn myapp_lead() -> Vec<u8> {
    let mut lead = vec![0xed, 0xab, 0xee, 0xdb, 0x03, 0x00, 0x00, 0x00, 0x00, 0x01];
    let mut name = b"myapp-1.0.3-1".to_vec();
    name.resize(66, 0);
    lead.extend_from_slice(&name);
    lead.extend_from_slice(&[0x00, 0x01, 0x00, 0x05]);
    lead.extend_from_slice(&[0; 16]);
    lead
}

/// Decodes big-endian 32-bit words.
pub fn be_words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}
