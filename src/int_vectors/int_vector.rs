//! Growable vector of signed 64-bit integers.

use std::collections::HashSet;
use std::iter::ExactSizeIterator;

use num_traits::ToPrimitive;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::int_vectors::prelude::*;

/// Growable vector of signed 64-bit integers.
///
/// The vector exclusively owns its storage. Every query hands out copies of
/// the stored integers, and every fallible operation leaves the vector
/// untouched when it returns an error.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use intvector::IntVector;
///
/// let mut iv = IntVector::new();
/// iv.push(5);
/// iv.insert_all([7, 1]);
/// iv.unshift(3);
///
/// assert_eq!(iv.as_slice(), &[3, 5, 7, 1]);
/// assert_eq!(iv.pop()?, 1);
/// assert_eq!(iv.shift()?, 3);
/// assert_eq!(iv.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IntVector {
    vals: Vec<i64>,
}

impl IntVector {
    /// Creates a new empty vector.
    pub const fn new() -> Self {
        Self { vals: Vec::new() }
    }

    /// Creates a new empty vector reserving space for at least `capa` integers.
    pub fn with_capacity(capa: usize) -> Self {
        Self {
            vals: Vec::with_capacity(capa),
        }
    }

    /// Creates a new vector from a slice of integers `vals`.
    ///
    /// # Arguments
    ///
    ///  - `vals`: Slice of integers to be stored.
    ///
    /// # Errors
    ///
    /// An error is returned if `vals` contains an integer that cannot be cast to [`i64`].
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let iv = IntVector::from_slice(&[7u8, 2])?;
    /// assert_eq!(iv.len(), 2);
    /// assert_eq!(iv.at(0)?, 7);
    ///
    /// assert!(IntVector::from_slice(&[u64::MAX]).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_slice<T>(vals: &[T]) -> Result<Self>
    where
        T: ToPrimitive,
    {
        let mut iv = Self::with_capacity(vals.len());
        for x in vals {
            iv.push(x.to_i64().ok_or_else(|| {
                Error::invalid_argument("vals must consist only of values castable into i64.")
            })?);
        }
        Ok(iv)
    }

    /// Appends `val` at the back.
    #[inline(always)]
    pub fn push(&mut self, val: i64) {
        self.vals.push(val);
    }

    /// Appends every integer of `vals` at the back, in order.
    pub fn insert_all<I>(&mut self, vals: I)
    where
        I: IntoIterator<Item = i64>,
    {
        self.vals.extend(vals);
    }

    /// Removes the last integer and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty.
    pub fn pop(&mut self) -> Result<i64> {
        self.vals.pop().ok_or(Error::EmptyContainer)
    }

    /// Removes the first integer and returns it, shifting the rest to the left.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty.
    pub fn shift(&mut self) -> Result<i64> {
        if self.vals.is_empty() {
            return Err(Error::EmptyContainer);
        }
        Ok(self.vals.remove(0))
    }

    /// Inserts `val` at the front, shifting the rest to the right.
    pub fn unshift(&mut self, val: i64) {
        self.vals.insert(0, val);
    }

    /// Removes the `pos`-th integer.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `self.len() <= pos`.
    pub fn remove_at(&mut self, pos: usize) -> Result<()> {
        self.check_index(pos)?;
        self.vals.remove(pos);
        Ok(())
    }

    /// Removes the first occurrence of `val`, returning `true` if one was found.
    pub fn remove_first_of(&mut self, val: i64) -> bool {
        match self.search(val) {
            Some(pos) => {
                self.vals.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes every occurrence of `val` and returns how many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use intvector::IntVector;
    ///
    /// let mut iv: IntVector = [3, 3, 1, 3, 2, 3, 3].into_iter().collect();
    /// assert_eq!(iv.remove_all(3), 5);
    /// assert_eq!(iv.as_slice(), &[1, 2]);
    /// ```
    pub fn remove_all(&mut self, val: i64) -> usize {
        let before = self.vals.len();
        self.vals.retain(|&x| x != val);
        before - self.vals.len()
    }

    /// Keeps only the first occurrence of every distinct integer, preserving
    /// the order in which they were first seen.
    pub fn make_unique(&mut self) {
        if self.vals.len() < 2 {
            return;
        }
        let before = self.vals.len();
        let mut seen = HashSet::with_capacity(before);
        self.vals.retain(|&x| seen.insert(x));
        trace!(before, after = self.vals.len(), "deduplicated int vector");
    }

    /// Removes every integer and releases the backing storage.
    pub fn clear(&mut self) {
        trace!(len = self.vals.len(), "clearing int vector");
        self.vals = Vec::new();
    }

    /// Reverses the order of the integers in place.
    pub fn reverse(&mut self) {
        self.vals.reverse();
    }

    /// Exchanges the `i`-th and `j`-th integers.
    ///
    /// # Errors
    ///
    /// An error is returned if
    ///
    ///  - `i == j` ([`Error::InvalidArgument`]), or
    ///  - `i` or `j` is not less than `self.len()` ([`Error::IndexOutOfBounds`]).
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        if i == j {
            debug!(i, "rejected swap of an index with itself");
            return Err(Error::invalid_argument(format!(
                "i and j must differ, but both are {i}."
            )));
        }
        self.check_index(i)?;
        self.check_index(j)?;
        self.vals.swap(i, j);
        Ok(())
    }

    /// Sets the `pos`-th integer to `val`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `self.len() <= pos`.
    pub fn set(&mut self, pos: usize, val: i64) -> Result<()> {
        self.check_index(pos)?;
        self.vals[pos] = val;
        Ok(())
    }

    /// Multiplies every integer by `factor`, wrapping around on overflow.
    pub fn scale_by(&mut self, factor: i64) {
        for x in self.vals.iter_mut() {
            *x = x.wrapping_mul(factor);
        }
    }

    /// Inserts `val` into a vector assumed to be sorted in ascending order,
    /// keeping it sorted.
    ///
    /// The insertion point is found by binary search, so the call costs
    /// $`O(\lg n)`$ comparisons plus the shift of the tail.
    /// Sortedness is not validated; on unsorted input the position of `val`
    /// is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use intvector::IntVector;
    ///
    /// let mut iv = IntVector::new();
    /// for x in [4, 23, 62, 7, 2, 7, -4] {
    ///     iv.sorted_push(x);
    /// }
    /// assert_eq!(iv.as_slice(), &[-4, 2, 4, 7, 7, 23, 62]);
    /// ```
    pub fn sorted_push(&mut self, val: i64) {
        let pos = match self.vals.as_slice() {
            [] => 0,
            [only] => usize::from(*only <= val),
            [head, ..] if val <= *head => 0,
            [.., tail] if val >= *tail => self.vals.len(),
            vals => insertion_point(vals, val),
        };
        self.vals.insert(pos, val);
    }

    /// Appends `val` unless it is already present, returning `true` if it was
    /// appended.
    ///
    /// Presence is checked by a linear scan.
    pub fn unique_push(&mut self, val: i64) -> bool {
        if self.vals.contains(&val) {
            return false;
        }
        self.vals.push(val);
        true
    }

    /// Sorts the integers in ascending order.
    pub fn sort(&mut self) {
        trace!(len = self.vals.len(), "sorting int vector");
        self.vals.sort_unstable();
    }

    /// Checks if every integer is no greater than its successor.
    pub fn is_sorted(&self) -> bool {
        self.vals.windows(2).all(|w| w[0] <= w[1])
    }

    /// Gets the number of integers.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    /// Checks if the vector is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    /// Returns the total number of integers it can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.vals.capacity()
    }

    /// Returns the `pos`-th integer.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `self.len() <= pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let iv = IntVector::from(vec![5, 256, 0]);
    /// assert_eq!(iv.at(1)?, 256);
    /// assert!(iv.at(3).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn at(&self, pos: usize) -> Result<i64> {
        self.check_index(pos)?;
        Ok(self.vals[pos])
    }

    /// Returns the first integer.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty.
    pub fn first(&self) -> Result<i64> {
        self.vals.first().copied().ok_or(Error::EmptyContainer)
    }

    /// Returns the last integer.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty.
    pub fn last(&self) -> Result<i64> {
        self.vals.last().copied().ok_or(Error::EmptyContainer)
    }

    /// Returns the position of the first occurrence of `val`, or [`None`] if absent.
    ///
    /// The scan is linear; sortedness is not tracked, so binary search is never used.
    pub fn search(&self, val: i64) -> Option<usize> {
        self.vals.iter().position(|&x| x == val)
    }

    /// Returns the positions of every occurrence of `val` in ascending order.
    pub fn search_all(&self, val: i64) -> Vec<usize> {
        self.vals
            .iter()
            .enumerate()
            .filter_map(|(i, &x)| (x == val).then_some(i))
            .collect()
    }

    /// Returns the minimum integer and the position of its first occurrence,
    /// or [`None`] if the vector is empty.
    pub fn min(&self) -> Option<(i64, usize)> {
        self.extremum(|x, best| x < best)
    }

    /// Returns the maximum integer and the position of its first occurrence,
    /// or [`None`] if the vector is empty.
    pub fn max(&self) -> Option<(i64, usize)> {
        self.extremum(|x, best| x > best)
    }

    /// Counts the occurrences of `val`.
    pub fn count_instances_of(&self, val: i64) -> usize {
        self.vals.iter().filter(|&&x| x == val).count()
    }

    /// Returns the stored integers as a slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.vals
    }

    /// Creates an iterator for enumerating integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use intvector::IntVector;
    ///
    /// let iv = IntVector::from(vec![5, 256, 0]);
    /// let mut it = iv.iter();
    ///
    /// assert_eq!(it.next(), Some(5));
    /// assert_eq!(it.next(), Some(256));
    /// assert_eq!(it.next(), Some(0));
    /// assert_eq!(it.next(), None);
    /// ```
    pub const fn iter(&'_ self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Collects all integers into a `Vec<i64>`.
    pub fn to_vec(&self) -> Vec<i64> {
        self.vals.clone()
    }

    /// Consumes the vector and returns its storage.
    pub fn into_vec(self) -> Vec<i64> {
        self.vals
    }

    fn check_index(&self, pos: usize) -> Result<()> {
        if self.vals.len() <= pos {
            debug!(pos, len = self.vals.len(), "index out of bounds");
            return Err(Error::out_of_bounds(pos, self.vals.len()));
        }
        Ok(())
    }

    fn extremum<F>(&self, better: F) -> Option<(i64, usize)>
    where
        F: Fn(i64, i64) -> bool,
    {
        let (&head, tail) = self.vals.split_first()?;
        let mut best = (head, 0);
        for (i, &x) in tail.iter().enumerate() {
            if better(x, best.0) {
                best = (x, i + 1);
            }
        }
        Some(best)
    }
}

/// Finds `m + 1` for the boundary `vals[m] <= val <= vals[m + 1]`.
///
/// Expects `vals[0] < val < vals[vals.len() - 1]`.
fn insertion_point(vals: &[i64], val: i64) -> usize {
    let (mut lo, mut hi) = (0, vals.len() - 2);
    while lo <= hi {
        let m = lo + (hi - lo) / 2;
        if vals[m] > val {
            if m == 0 {
                break;
            }
            hi = m - 1;
        } else if vals[m + 1] < val {
            lo = m + 1;
        } else {
            return m + 1;
        }
    }
    // Only reachable when the input was not sorted.
    vals.partition_point(|&x| x <= val)
}

impl From<Vec<i64>> for IntVector {
    fn from(vals: Vec<i64>) -> Self {
        Self { vals }
    }
}

impl FromIterator<i64> for IntVector {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            vals: iter.into_iter().collect(),
        }
    }
}

impl Extend<i64> for IntVector {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl IntoIterator for IntVector {
    type Item = i64;
    type IntoIter = std::vec::IntoIter<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.vals.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntVector {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Build for IntVector {
    /// Creates a new vector from a slice of integers `vals`.
    ///
    /// This just calls [`Self::from_slice()`]. See the documentation.
    fn build_from_slice<T>(vals: &[T]) -> anyhow::Result<Self>
    where
        T: ToPrimitive,
        Self: Sized,
    {
        Ok(Self::from_slice(vals)?)
    }
}

impl NumVals for IntVector {
    /// Returns the number of integers stored (just wrapping [`Self::len()`]).
    fn num_vals(&self) -> usize {
        self.len()
    }
}

impl Access for IntVector {
    /// Returns the `pos`-th integer, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use intvector::int_vectors::{IntVector, Access};
    ///
    /// let iv = IntVector::from(vec![5, 256, 0]);
    /// assert_eq!(iv.access(0), Some(5));
    /// assert_eq!(iv.access(3), None);
    /// ```
    fn access(&self, pos: usize) -> Option<i64> {
        self.vals.get(pos).copied()
    }
}

/// Iterator for enumerating integers, created by [`IntVector::iter()`].
pub struct Iter<'a> {
    iv: &'a IntVector,
    pos: usize,
}

impl<'a> Iter<'a> {
    /// Creates a new iterator.
    pub const fn new(iv: &'a IntVector) -> Self {
        Self { iv, pos: 0 }
    }
}

impl Iterator for Iter<'_> {
    type Item = i64;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.iv.access(self.pos)?;
        self.pos += 1;
        Some(x)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.iv.len() - self.pos;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends() {
        let mut iv = IntVector::from(vec![5, 6, 7]);
        iv.push(4);
        assert_eq!(iv.len(), 4);
        assert_eq!(iv.last().unwrap(), 4);
    }

    #[test]
    fn test_insert_all_keeps_order() {
        let mut iv = IntVector::from(vec![1]);
        iv.insert_all([2, 3, 4]);
        assert_eq!(iv.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_pop_empty() {
        let mut iv = IntVector::new();
        let e = iv.pop();
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("the vector is empty.".to_string())
        );
    }

    #[test]
    fn test_shift_and_unshift() {
        let mut iv = IntVector::from(vec![1, 2, 3]);
        assert_eq!(iv.shift().unwrap(), 1);
        iv.unshift(9);
        assert_eq!(iv.as_slice(), &[9, 2, 3]);
        assert!(matches!(IntVector::new().shift(), Err(Error::EmptyContainer)));
    }

    #[test]
    fn test_remove_at_oob() {
        let mut iv = IntVector::from(vec![1, 2]);
        let e = iv.remove_at(2);
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("index must be less than self.len()=2, but got 2.".to_string())
        );
        iv.remove_at(0).unwrap();
        assert_eq!(iv.as_slice(), &[2]);
    }

    #[test]
    fn test_remove_first_of() {
        let mut iv = IntVector::from(vec![4, 1, 4, 2]);
        assert!(iv.remove_first_of(4));
        assert_eq!(iv.as_slice(), &[1, 4, 2]);
        assert!(!iv.remove_first_of(7));
        assert!(iv.remove_first_of(2));
        assert_eq!(iv.as_slice(), &[1, 4]);
    }

    #[test]
    fn test_remove_all_adjacent_duplicates() {
        let mut iv = IntVector::from(vec![1, 1, 1, 2, 1, 3, 1, 1]);
        assert_eq!(iv.remove_all(1), 6);
        assert_eq!(iv.as_slice(), &[2, 3]);
        assert_eq!(iv.remove_all(1), 0);
    }

    #[test]
    fn test_make_unique_first_seen_order() {
        let mut iv = IntVector::from(vec![3, 1, 3, 2, 1, 4, 2]);
        iv.make_unique();
        assert_eq!(iv.as_slice(), &[3, 1, 2, 4]);
        let once = iv.clone();
        iv.make_unique();
        assert_eq!(iv, once);
    }

    #[test]
    fn test_clear_releases_storage() {
        let mut iv = IntVector::from_iter(0..1000);
        iv.clear();
        assert!(iv.is_empty());
        assert_eq!(iv.capacity(), 0);
    }

    #[test]
    fn test_reverse() {
        let mut iv = IntVector::from(vec![1, 2, 3, 4, 5]);
        iv.reverse();
        assert_eq!(iv.as_slice(), &[5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_swap_same_index() {
        let mut iv = IntVector::from(vec![1, 2]);
        let e = iv.swap(1, 1);
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("i and j must differ, but both are 1.".to_string())
        );
    }

    #[test]
    fn test_swap_oob() {
        let mut iv = IntVector::from(vec![1, 2]);
        assert!(matches!(
            iv.swap(0, 5),
            Err(Error::IndexOutOfBounds { index: 5, len: 2 })
        ));
        iv.swap(0, 1).unwrap();
        assert_eq!(iv.as_slice(), &[2, 1]);
    }

    #[test]
    fn test_set_oob_leaves_vector_untouched() {
        let mut iv = IntVector::from(vec![1, 2]);
        assert!(iv.set(2, 9).is_err());
        assert_eq!(iv.as_slice(), &[1, 2]);
        iv.set(1, 9).unwrap();
        assert_eq!(iv.as_slice(), &[1, 9]);
    }

    #[test]
    fn test_scale_by() {
        let mut iv = IntVector::from(vec![1, -2, 3]);
        iv.scale_by(-3);
        assert_eq!(iv.as_slice(), &[-3, 6, -9]);
    }

    #[test]
    fn test_sorted_push_edges() {
        let mut iv = IntVector::new();
        iv.sorted_push(5);
        iv.sorted_push(3);
        assert_eq!(iv.as_slice(), &[3, 5]);
        iv.sorted_push(3);
        iv.sorted_push(9);
        iv.sorted_push(5);
        iv.sorted_push(4);
        assert_eq!(iv.as_slice(), &[3, 3, 4, 5, 5, 9]);
    }

    #[test]
    fn test_sorted_push_single_equal_goes_after() {
        let mut iv = IntVector::from(vec![2]);
        iv.sorted_push(2);
        assert_eq!(iv.as_slice(), &[2, 2]);
    }

    #[test]
    fn test_sorted_push_unsorted_does_not_panic() {
        let mut iv = IntVector::from(vec![1, 9, 2, 8, 3, 10]);
        iv.sorted_push(5);
        assert_eq!(iv.len(), 7);
        assert_eq!(iv.count_instances_of(5), 1);
    }

    #[test]
    fn test_unique_push() {
        let mut iv = IntVector::new();
        assert!(iv.unique_push(1));
        assert!(iv.unique_push(2));
        assert!(!iv.unique_push(1));
        assert_eq!(iv.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_is_sorted() {
        assert!(IntVector::new().is_sorted());
        assert!(IntVector::from(vec![7]).is_sorted());
        assert!(IntVector::from(vec![1, 1, 2]).is_sorted());
        assert!(!IntVector::from(vec![2, 1]).is_sorted());
    }

    #[test]
    fn test_at_first_last() {
        let iv = IntVector::from(vec![4, 5, 6]);
        assert_eq!(iv.at(1).unwrap(), 5);
        assert_eq!(iv.first().unwrap(), 4);
        assert_eq!(iv.last().unwrap(), 6);
        let empty = IntVector::new();
        assert!(matches!(empty.first(), Err(Error::EmptyContainer)));
        assert!(matches!(empty.last(), Err(Error::EmptyContainer)));
        assert!(matches!(
            empty.at(0),
            Err(Error::IndexOutOfBounds { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_search() {
        let iv = IntVector::from(vec![4, 2, 4, 4, 1]);
        assert_eq!(iv.search(4), Some(0));
        assert_eq!(iv.search(1), Some(4));
        assert_eq!(iv.search(9), None);
        assert_eq!(iv.search_all(4), vec![0, 2, 3]);
        assert!(iv.search_all(9).is_empty());
    }

    #[test]
    fn test_min_max_first_occurrence() {
        let iv = IntVector::from(vec![3, -1, 7, -1, 7]);
        assert_eq!(iv.min(), Some((-1, 1)));
        assert_eq!(iv.max(), Some((7, 2)));
        assert_eq!(IntVector::new().min(), None);
        assert_eq!(IntVector::new().max(), None);
    }

    #[test]
    fn test_count_instances_of() {
        let iv = IntVector::from(vec![1, 2, 1, 1]);
        assert_eq!(iv.count_instances_of(1), 3);
        assert_eq!(iv.count_instances_of(5), 0);
        assert_eq!(IntVector::new().count_instances_of(1), 0);
    }

    #[test]
    fn test_from_slice_uncastable() {
        let e = IntVector::from_slice(&[u64::MAX]);
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("vals must consist only of values castable into i64.".to_string())
        );
    }

    #[test]
    fn iter_collects() {
        let iv = IntVector::from(vec![1, 2, 3]);
        let mut it = iv.iter();
        it.next();
        assert_eq!(it.len(), 2);
        let collected: Vec<i64> = (&iv).into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert_eq!(iv.clone().into_vec(), iv.to_vec());
    }
}
