//! Top module for integer vectors.
//!
//! # Introduction
//!
//! Let $`A = (a_0, a_1, \dots, a_{n-1})`$ be a sequence of $`n`$ signed 64-bit integers.
//! [`IntVector`] stores $`A`$ in a plain growable array and supports
//!
//! - list operations: push, pop, shift, unshift, positional and value-based removal,
//! - set-like operations: unique insertion and deduplication,
//! - ordering operations: sorting, sortedness checks and binary-search insertion,
//! - summary statistics: mean, median, mode and frequency tables (see [`statistics`]),
//! - a fixed-width big-endian encoding and a content hash (see [`crate::serialization`]).
//!
//! # Complexities
//!
//! | Operation | Time |
//! | --- | :-: |
//! | [`push`](IntVector::push), [`pop`](IntVector::pop), [`at`](IntVector::at), [`set`](IntVector::set) | $`O(1)`$ |
//! | [`shift`](IntVector::shift), [`unshift`](IntVector::unshift), [`remove_at`](IntVector::remove_at) | $`O(n)`$ |
//! | [`search`](IntVector::search), [`remove_all`](IntVector::remove_all), [`make_unique`](IntVector::make_unique) | $`O(n)`$ |
//! | [`sorted_push`](IntVector::sorted_push) | $`O(\lg n)`$ comparisons, $`O(n)`$ moves |
//! | [`sort`](IntVector::sort), [`median`](IntVector::median) | $`O(n \lg n)`$ |
//!
//! # Examples
//!
//! This module provides several traits for essential behaviors.
//! [`prelude`] allows you to import them easily.
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use intvector::int_vectors::{IntVector, prelude::*};
//!
//! let seq = IntVector::build_from_slice(&[5u32, 0, 100000, 334])?;
//!
//! assert_eq!(seq.num_vals(), 4);
//!
//! assert_eq!(seq.access(3), Some(334));
//! assert_eq!(seq.access(4), None);
//! # Ok(())
//! # }
//! ```
pub mod int_vector;
pub mod statistics;

pub mod prelude;

pub use int_vector::{IntVector, Iter};

use anyhow::Result;
use num_traits::ToPrimitive;

/// Interface for building integer vectors.
pub trait Build {
    /// Creates a new vector from a slice of integers `vals`.
    ///
    /// # Arguments
    ///
    ///  - `vals`: Slice of integers to be stored.
    ///
    /// # Errors
    ///
    /// An error is returned if `vals` contains an integer that cannot be cast to [`i64`].
    fn build_from_slice<T>(vals: &[T]) -> Result<Self>
    where
        T: ToPrimitive,
        Self: Sized;
}

/// Interface for reporting basic statistics of integer vectors.
pub trait NumVals {
    /// Returns the number of integers stored.
    fn num_vals(&self) -> usize;
}

/// Interface for accessing elements on integer vectors.
pub trait Access {
    /// Returns the `pos`-th integer, or [`None`] if out of bounds.
    fn access(&self, pos: usize) -> Option<i64>;
}
