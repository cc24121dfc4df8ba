//! The 96-byte lead that opens every package file.
//!
//! Modern readers take everything from the header tables; the lead only
//! identifies the file as a package (file(1) reads it, for example).

use crate::config::LeadConfig;
use crate::error::{Fault, HeadResult};
use rpmhead_codec::{encode_u16, CountingWriter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Magic bytes opening the lead.
pub const LEAD_MAGIC: [u8; 4] = [0xed, 0xab, 0xee, 0xdb];

/// Size of the encoded lead in bytes.
pub const LEAD_LEN: u64 = 96;

/// Size of the zero-padded name field.
pub const NAME_FIELD_LEN: usize = 66;

/// Longest name-version-release text that still leaves a terminating zero.
pub const MAX_NVR_LEN: usize = NAME_FIELD_LEN - 1;

/// Signature type for header-style signatures.
pub const SIGTYPE_HEADER_STYLE: u16 = 5;

/// Binary or source package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u16)]
pub enum PackageType {
    /// Binary package.
    #[default]
    Binary = 0,
    /// Source package.
    Source = 1,
}

macro_rules! named_codes {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident = $code:expr => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[repr(u16)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant = $code,
            )+
        }

        impl $name {
            /// Every known value.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire code.
            #[must_use]
            pub const fn code(self) -> u16 {
                self as u16
            }

            /// Lowercase name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name() == wanted)
                    .ok_or_else(|| format!("unknown {}: {s}", stringify!($name).to_lowercase()))
            }
        }
    };
}

named_codes! {
    /// Target architecture.
    Arch {
        /// i386 and x86_64 share a code.
        X86_64 = 1 => "x86_64",
        /// Alpha and sparc64.
        Alpha = 2 => "alpha",
        /// SPARC.
        Sparc = 3 => "sparc",
        /// MIPS.
        Mips = 4 => "mips",
        /// PowerPC.
        PowerPc = 5 => "ppc",
        /// Motorola 68k.
        M68k = 6 => "m68k",
        /// SGI.
        Sgi = 7 => "sgi",
        /// IBM RS/6000.
        Rs6000 = 8 => "rs6000",
        /// Itanium.
        Ia64 = 9 => "ia64",
        /// 64-bit SPARC.
        Sparc64 = 10 => "sparc64",
        /// Little-endian MIPS.
        MipsEl = 11 => "mipsel",
        /// ARM.
        Arm = 12 => "arm",
        /// Atari MiNT.
        Mint = 13 => "mint",
        /// IBM S/390.
        S390 = 14 => "s390",
        /// IBM S/390x.
        S390x = 15 => "s390x",
        /// 64-bit PowerPC.
        PowerPc64 = 16 => "ppc64",
        /// SuperH.
        SuperH = 17 => "sh",
        /// Xtensa.
        Xtensa = 18 => "xtensa",
        /// Architecture independent.
        NoArch = 0xff => "noarch",
    }
}

named_codes! {
    /// Target operating system.
    Os {
        /// Unknown.
        Unknown = 0 => "unknown",
        /// Linux.
        Linux = 1 => "linux",
        /// IRIX.
        Irix = 2 => "irix",
        /// Solaris.
        Solaris = 3 => "solaris",
        /// SunOS.
        SunOs = 4 => "sunos",
        /// AmigaOS.
        AmigaOs = 5 => "amigaos",
        /// AIX.
        Aix = 6 => "aix",
        /// HP-UX 10.
        HpUx10 = 7 => "hpux10",
        /// OSF/1.
        Osf1 = 8 => "osf1",
        /// FreeBSD.
        FreeBsd = 9 => "freebsd",
        /// SCO.
        Sco = 10 => "sco",
        /// 64-bit IRIX.
        Irix64 = 11 => "irix64",
        /// NeXTSTEP.
        NextStep = 12 => "nextstep",
        /// BSD/OS.
        Bsdi = 13 => "bsdi",
        /// MachTen.
        MachTen = 14 => "machten",
        /// Cygwin on NT.
        CygwinNt = 15 => "cygwin32_nt",
        /// Cygwin on 95.
        Cygwin95 = 16 => "cygwin32_95",
        /// UNIX System V.
        UnixSv = 17 => "unix_sv",
        /// Atari MiNT.
        Mint = 18 => "mint",
        /// OS/390.
        Os390 = 19 => "os/390",
        /// VM/ESA.
        VmEsa = 20 => "vm/esa",
        /// Linux on S/390.
        Linux390 = 21 => "linux/390",
        /// macOS.
        MacOsX = 22 => "macosx",
    }
}

impl Default for Arch {
    fn default() -> Self {
        Self::X86_64
    }
}

impl Default for Os {
    fn default() -> Self {
        Self::Linux
    }
}

/// The leading identification record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    package_type: PackageType,
    arch: Arch,
    os: Os,
    name: String,
    version: String,
    release: String,
}

impl Lead {
    /// Builds a lead from package metadata.
    #[must_use]
    pub fn from_config(config: &LeadConfig) -> Self {
        Self {
            package_type: config.package_type,
            arch: config.arch,
            os: config.os,
            name: config.name.clone(),
            version: config.version.clone(),
            release: config.release.clone(),
        }
    }

    /// `name-version-release`, as stored in the name field.
    #[must_use]
    pub fn name_version_release(&self) -> String {
        format!("{}-{}-{}", self.name, self.version, self.release)
    }

    /// Package type.
    #[must_use]
    pub fn package_type(&self) -> PackageType {
        self.package_type
    }

    /// Target architecture.
    #[must_use]
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Target operating system.
    #[must_use]
    pub fn os(&self) -> Os {
        self.os
    }

    /// Writes the lead and returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::NameTooLong`] before writing anything if the
    /// name-version-release text exceeds 65 bytes, or an I/O error with the
    /// partial byte count if the sink fails.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> HeadResult<u64> {
        let mut sink = CountingWriter::new(sink);
        self.write_into(&mut sink)?;
        Ok(sink.written())
    }

    /// Writes the lead to a shared counting sink.
    ///
    /// # Errors
    ///
    /// Same as [`Lead::write_to`].
    pub fn write_into<W: Write + ?Sized>(
        &self,
        sink: &mut CountingWriter<'_, W>,
    ) -> HeadResult<()> {
        let name_field = self.name_field()?;
        sink.write_section("lead magic", &LEAD_MAGIC)?;
        sink.write_section("lead version", &[3, 0])?;
        sink.write_section("lead package type", &encode_u16(self.package_type as u16))?;
        sink.write_section("lead arch", &encode_u16(self.arch.code()))?;
        sink.write_section("lead name-version-release", &name_field)?;
        sink.write_section("lead os", &encode_u16(self.os.code()))?;
        sink.write_section("lead signature type", &encode_u16(SIGTYPE_HEADER_STYLE))?;
        sink.write_section("lead reserved bytes", &[0; 16])?;
        Ok(())
    }

    fn name_field(&self) -> Result<[u8; NAME_FIELD_LEN], Fault> {
        let nvr = self.name_version_release();
        if nvr.len() > MAX_NVR_LEN {
            return Err(Fault::NameTooLong {
                nvr,
                max: MAX_NVR_LEN,
            });
        }
        let mut field = [0u8; NAME_FIELD_LEN];
        field[..nvr.len()].copy_from_slice(nvr.as_bytes());
        Ok(field)
    }
}

impl From<&LeadConfig> for Lead {
    fn from(config: &LeadConfig) -> Self {
        Self::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn myapp() -> Lead {
        Lead::from_config(&LeadConfig::new("myapp", "1.0.3", "1"))
    }

    #[test]
    fn lead_is_96_bytes() {
        let mut out = Vec::new();
        let n = myapp().write_to(&mut out).unwrap();
        assert_eq!(n, LEAD_LEN);
        assert_eq!(out.len() as u64, LEAD_LEN);
    }

    #[test]
    fn lead_layout() {
        let mut out = Vec::new();
        myapp().write_to(&mut out).unwrap();

        assert_eq!(&out[0..4], &LEAD_MAGIC);
        assert_eq!(&out[4..6], &[3, 0]);
        assert_eq!(&out[6..8], &[0, 0]);
        assert_eq!(&out[8..10], &[0, 1]);
        assert_eq!(&out[10..23], b"myapp-1.0.3-1");
        assert!(out[23..76].iter().all(|b| *b == 0));
        assert_eq!(&out[76..78], &[0, 1]);
        assert_eq!(&out[78..80], &[0, 5]);
        assert!(out[80..96].iter().all(|b| *b == 0));
    }

    #[test]
    fn source_noarch_codes() {
        let config = LeadConfig::new("a", "1", "1")
            .package_type(PackageType::Source)
            .arch(Arch::NoArch)
            .os(Os::MacOsX);
        let mut out = Vec::new();
        Lead::from_config(&config).write_to(&mut out).unwrap();
        assert_eq!(&out[6..8], &[0, 1]);
        assert_eq!(&out[8..10], &[0, 0xff]);
        assert_eq!(&out[76..78], &[0, 22]);
    }

    #[test]
    fn longest_name_fits() {
        // 61 + "-1-1" = 65 bytes
        let lead = Lead::from_config(&LeadConfig::new("n".repeat(61), "1", "1"));
        let mut out = Vec::new();
        assert_eq!(lead.write_to(&mut out).unwrap(), LEAD_LEN);
        assert_eq!(out[10 + 64], b'1');
        assert_eq!(out[10 + 65], 0);
    }

    #[test]
    fn long_name_faults_before_writing() {
        let lead = Lead::from_config(&LeadConfig::new("n".repeat(62), "1", "1"));
        let mut out = Vec::new();
        let err = lead.write_to(&mut out).unwrap_err();

        assert!(matches!(
            err.as_fault(),
            Some(Fault::NameTooLong { max: 65, .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn names_parse() {
        assert_eq!("x86_64".parse::<Arch>(), Ok(Arch::X86_64));
        assert_eq!("NOARCH".parse::<Arch>(), Ok(Arch::NoArch));
        assert_eq!("linux".parse::<Os>(), Ok(Os::Linux));
        assert!("vax".parse::<Arch>().is_err());
        assert_eq!(Arch::PowerPc64.to_string(), "ppc64");
    }
}
