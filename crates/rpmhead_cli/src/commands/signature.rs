//! Signature command implementation.

use super::ValueArgs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes only the signature table to `output`.
pub fn run(output: &Path, values: &ValueArgs) -> Result<(), Box<dyn std::error::Error>> {
    let table = values.build_signature()?;
    info!("Writing signature table to {:?}", output);

    let mut writer = BufWriter::new(File::create(output)?);
    let written = table.serialize(&mut writer)?;
    writer.flush()?;

    println!("✓ Signature table written");
    println!("  Path: {:?}", output);
    println!("  Entries: {}", table.table().entry_count());
    println!("  Size: {} bytes", written);

    Ok(())
}
