//! # Growable integer vectors in Rust
//!
//! Intvector provides [`IntVector`], an owned, growable sequence of signed 64-bit
//! integers with the helpers scripting languages usually attach to their arrays:
//! list and set operations, sorted insertion, summary statistics, a canonical
//! binary encoding and a content hash.
//!
//! ## Design policy
//!
//! - **Keep one representation:**
//!   Integers live in a plain `Vec<i64>`; no index structure is maintained
//!   on the side, so every mutation stays cheap and predictable.
//!
//! - **Report failures as values:**
//!   Operations that can fail return [`Result`] with an [`Error`] describing the
//!   failure, and never leave a partially mutated vector behind.
//!
//! - **Ensure safety:**
//!   The crate contains no unsafe code; the wire format goes through `zerocopy`.
//!
//! ## Modules
//!
//! - [Integer vectors](crate::int_vectors), including [statistics](crate::int_vectors::statistics)
//! - [Serialization and hashing](crate::serialization)
//!
//! ## Features
//!
//! - `hash` (default): enables [`IntVector::hash()`] backed by SHA-256.
//!
//! ## Limitation
//!
//! This library is designed to run on 64-bit machines.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(not(target_pointer_width = "64"))]
compile_error!("`target_pointer_width` must be 64");

pub mod error;
pub mod int_vectors;
pub mod serialization;

pub use error::{Error, Result};
pub use int_vectors::IntVector;
#[cfg(feature = "hash")]
pub use serialization::Sha256Hasher;
pub use serialization::{ContentHasher, WORD_LEN};
