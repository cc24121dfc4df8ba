//! Dump command implementation.

use super::ValueArgs;

/// Prints a hex dump of the signature table.
pub fn run(values: &ValueArgs) -> Result<(), Box<dyn std::error::Error>> {
    let table = values.build_signature()?;
    let bytes = table.table().to_vec()?;
    print!("{}", hex_dump(&bytes));
    Ok(())
}

/// Formats `bytes` as offset, 16 hex bytes and their printable ASCII.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (line, chunk) in bytes.chunks(16).enumerate() {
        out.push_str(&format!("{:08x}  ", line * 16));
        for i in 0..16 {
            match chunk.get(i) {
                Some(b) => out.push_str(&format!("{b:02x} ")),
                None => out.push_str("   "),
            }
            if i == 7 {
                out.push(' ');
            }
        }
        out.push_str(" |");
        out.extend(chunk.iter().map(|b| {
            if b.is_ascii_graphic() || *b == b' ' {
                *b as char
            } else {
                '.'
            }
        }));
        out.push_str("|\n");
    }
    out.push_str(&format!("{:08x}\n", bytes.len()));
    out
}
