//! CLI command implementations.

pub mod dump;
pub mod inspect;
pub mod signature;
pub mod write;

use clap::Args;
use rpmhead_core::{
    Arch, LeadConfig, Os, PackageType, SignatureTable, SignatureValues, MD5_LEN,
};
use std::fs;
use std::path::PathBuf;

/// Package metadata for the lead.
#[derive(Debug, Clone, Default, Args)]
pub struct PackageArgs {
    /// JSON file with name, version, release, package_type, arch and os
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Package name
    #[arg(long)]
    pub name: Option<String>,

    /// Package version
    #[arg(long = "pkg-version")]
    pub pkg_version: Option<String>,

    /// Package release
    #[arg(long)]
    pub release: Option<String>,

    /// Target architecture (x86_64, noarch, arm, ...)
    #[arg(long)]
    pub arch: Option<Arch>,

    /// Target operating system (linux, freebsd, ...)
    #[arg(long)]
    pub os: Option<Os>,

    /// Mark the package as a source package
    #[arg(long)]
    pub source: bool,
}

impl PackageArgs {
    /// Loads the config file, if any, and applies the flags over it.
    pub fn resolve(&self) -> Result<LeadConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
                serde_json::from_str::<LeadConfig>(&text)
                    .map_err(|e| format!("invalid config {}: {e}", path.display()))?
            }
            None => LeadConfig::default(),
        };

        if let Some(name) = &self.name {
            config.name.clone_from(name);
        }
        if let Some(version) = &self.pkg_version {
            config.version.clone_from(version);
        }
        if let Some(release) = &self.release {
            config.release.clone_from(release);
        }
        if let Some(arch) = self.arch {
            config.arch = arch;
        }
        if let Some(os) = self.os {
            config.os = os;
        }
        if self.source {
            config.package_type = PackageType::Source;
        }

        if config.name.is_empty() || config.version.is_empty() || config.release.is_empty() {
            return Err("package name, version and release are required".into());
        }
        Ok(config)
    }
}

/// Digests and sizes to place in the signature table.
#[derive(Debug, Clone, Default, Args)]
pub struct ValueArgs {
    /// Hex-encoded SHA1 of the main header (40 characters)
    #[arg(long)]
    pub sha1: Option<String>,

    /// Byte count of the main header plus the compressed payload
    #[arg(long)]
    pub size: Option<u32>,

    /// Hex-encoded MD5 of the main header plus the compressed payload
    #[arg(long, value_parser = parse_md5)]
    pub md5: Option<[u8; MD5_LEN]>,

    /// Byte count of the uncompressed payload
    #[arg(long)]
    pub payload_size: Option<u32>,
}

impl ValueArgs {
    /// Converts the flags into signature values.
    pub fn values(&self) -> SignatureValues {
        SignatureValues {
            sha1: self.sha1.clone(),
            size: self.size,
            md5: self.md5,
            payload_size: self.payload_size,
        }
    }

    /// Builds the default signature table with these values applied.
    pub fn build_signature(&self) -> Result<SignatureTable, Box<dyn std::error::Error>> {
        let mut table = SignatureTable::new()?;
        self.values().apply(&mut table)?;
        Ok(table)
    }
}

/// Parses a 32-character hex MD5 digest.
pub fn parse_md5(hex: &str) -> Result<[u8; MD5_LEN], String> {
    let bytes = hex_decode(hex)?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| format!("md5 must be {MD5_LEN} bytes, got {}", b.len()))
}

/// Decodes a hexadecimal string to bytes.
pub fn hex_decode(hex: &str) -> Result<Vec<u8>, String> {
    if hex.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in '{hex}'"));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| format!("invalid hex digits in '{hex}'"))
        })
        .collect()
}

/// Encodes bytes as lowercase hexadecimal.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
