//! Package configuration.

use crate::error::HeadResult;
use crate::lead::{Arch, Os, PackageType};
use crate::signature::{SignatureTable, MD5_LEN};
use serde::{Deserialize, Serialize};

/// Package metadata written to the lead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadConfig {
    /// Package name, e.g. `myapp`.
    pub name: String,

    /// Package version, e.g. `2.2.1`.
    pub version: String,

    /// Package release, e.g. `1`.
    pub release: String,

    /// Binary or source package.
    pub package_type: PackageType,

    /// Target architecture.
    pub arch: Arch,

    /// Target operating system.
    pub os: Os,
}

impl LeadConfig {
    /// Creates a binary x86_64 Linux configuration for `name-version-release`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            release: release.into(),
            ..Self::default()
        }
    }

    /// Sets the package type.
    #[must_use]
    pub fn package_type(mut self, value: PackageType) -> Self {
        self.package_type = value;
        self
    }

    /// Sets the target architecture.
    #[must_use]
    pub fn arch(mut self, value: Arch) -> Self {
        self.arch = value;
        self
    }

    /// Sets the target operating system.
    #[must_use]
    pub fn os(mut self, value: Os) -> Self {
        self.os = value;
        self
    }
}

/// Digests and sizes to inject into a [`SignatureTable`] once known.
///
/// Unset values leave their placeholders alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureValues {
    /// Hex-encoded SHA1 of the main header (40 characters).
    pub sha1: Option<String>,

    /// Byte count of the main header plus the compressed payload.
    pub size: Option<u32>,

    /// MD5 of the main header plus the compressed payload.
    pub md5: Option<[u8; MD5_LEN]>,

    /// Byte count of the uncompressed payload.
    pub payload_size: Option<u32>,
}

impl SignatureValues {
    /// Creates an empty set of values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the SHA1 hex digest.
    #[must_use]
    pub fn sha1(mut self, hex: impl Into<String>) -> Self {
        self.sha1 = Some(hex.into());
        self
    }

    /// Sets the header-plus-payload size.
    #[must_use]
    pub fn size(mut self, value: u32) -> Self {
        self.size = Some(value);
        self
    }

    /// Sets the MD5 digest.
    #[must_use]
    pub fn md5(mut self, digest: [u8; MD5_LEN]) -> Self {
        self.md5 = Some(digest);
        self
    }

    /// Sets the uncompressed payload size.
    #[must_use]
    pub fn payload_size(mut self, value: u32) -> Self {
        self.payload_size = Some(value);
        self
    }

    /// Returns true if no value is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sha1.is_none()
            && self.size.is_none()
            && self.md5.is_none()
            && self.payload_size.is_none()
    }

    /// Replaces the matching placeholders in `table`.
    ///
    /// # Errors
    ///
    /// Returns a fault if a value does not match its placeholder's size.
    /// The table is left unchanged when any value is rejected.
    pub fn apply(&self, table: &mut SignatureTable) -> HeadResult<()> {
        let mut staged = table.clone();
        if let Some(hex) = &self.sha1 {
            staged.set_sha1(hex)?;
        }
        if let Some(size) = self.size {
            staged.set_size(size)?;
        }
        if let Some(digest) = self.md5 {
            staged.set_md5(digest)?;
        }
        if let Some(size) = self.payload_size {
            staged.set_payload_size(size)?;
        }
        *table = staged;
        Ok(())
    }
}
