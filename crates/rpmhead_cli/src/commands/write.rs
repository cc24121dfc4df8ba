//! Write command implementation.

use super::{PackageArgs, ValueArgs};
use rpmhead_core::{Lead, PackagePrefix};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes the lead and the signature table to `output`.
pub fn run(
    output: &Path,
    package: &PackageArgs,
    values: &ValueArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = package.resolve()?;
    let prefix = PackagePrefix::new(Lead::from_config(&config), values.build_signature()?);
    let written = write_prefix(output, &prefix)?;

    println!("✓ Package prefix written");
    println!("  Path: {:?}", output);
    println!("  Package: {}", prefix.lead.name_version_release());
    println!("  Arch: {}  OS: {}", config.arch, config.os);
    println!("  Size: {} bytes", written);

    Ok(())
}

/// Writes `prefix` to a new file and returns the number of bytes written.
pub fn write_prefix(
    output: &Path,
    prefix: &PackagePrefix,
) -> Result<u64, Box<dyn std::error::Error>> {
    info!("Writing package prefix to {:?}", output);

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let written = prefix.write_to(&mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(written)
}
