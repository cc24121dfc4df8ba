//! # rpmhead testkit
//!
//! Test utilities for rpmhead.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - Sink fixtures that fail or trickle writes
//! - Known-good byte vectors for the fixed sections
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rpmhead_testkit::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn always_sorted(entries in unique_entries_strategy(1..32)) {
//!         let table = normalized_table(entries);
//!         // ...
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use vectors::*;
