//! # rpmhead core
//!
//! Encoder for the tag-indexed binary header tables of RPM packages.
//!
//! This crate provides:
//! - Typed entries ([`Entry`]) over binary, 32-bit integer and string payloads
//! - [`EntryTable`], which sorts entries by tag, assigns payload offsets and
//!   serializes the preamble, index records and payload area
//! - [`SignatureTable`], the table of digest and size placeholders that
//!   follows the lead, including the legacy region marker
//! - [`Lead`], the 96-byte identification record opening a package file
//!
//! Only the encode direction is implemented.
//!
//! ## Usage
//!
//! ```
//! use rpmhead_core::{Entry, EntryTable, Tag};
//!
//! let mut table = EntryTable::new();
//! table.upsert(Entry::string(Tag::new(1000), "myapp")).unwrap();
//! table.upsert(Entry::uint32(Tag::new(1009), 42)).unwrap();
//! table.normalize().unwrap();
//!
//! let bytes = table.to_vec().unwrap();
//! assert_eq!(bytes.len() as u64, 16 + 2 * 16 + 5 + 4);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod entry;
mod error;
mod lead;
mod prefix;
mod preamble;
mod signature;
mod table;
mod types;

pub use config::{LeadConfig, SignatureValues};
pub use entry::{Entry, IndexRecord, Payload, INDEX_RECORD_LEN};
pub use error::{Fault, HeadError, HeadResult};
pub use lead::{
    Arch, Lead, Os, PackageType, LEAD_LEN, LEAD_MAGIC, MAX_NVR_LEN, NAME_FIELD_LEN,
    SIGTYPE_HEADER_STYLE,
};
pub use preamble::{Preamble, PREAMBLE_LEN, PREAMBLE_MAGIC, PREAMBLE_VERSION};
pub use prefix::PackagePrefix;
pub use signature::{
    header_signatures, SignatureTable, MD5_LEN, RESERVED_SPACE_LEN, SHA1_HEX_LEN,
};
pub use table::{EntryTable, TableState, Upsert};
pub use types::{DataType, Tag};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
