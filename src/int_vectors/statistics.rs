//! Summary statistics over an [`IntVector`].
//!
//! Means and medians are reported as [`f64`] and fall back to `0.0` on an
//! empty vector. Modes are derived from the frequency table built by
//! [`IntVector::frequency()`], grouped by occurrence count.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use intvector::IntVector;
//!
//! let iv = IntVector::from(vec![1, 2, 2, 3, 3, 3]);
//! assert_eq!(iv.mean(), 14.0 / 6.0);
//! assert_eq!(iv.median(), 2.5);
//! assert_eq!(iv.mode()?, 3);
//! # Ok(())
//! # }
//! ```
use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};
use crate::int_vectors::IntVector;

impl IntVector {
    /// Returns the arithmetic mean, or `0.0` if the vector is empty.
    pub fn average(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let sum: i128 = self.iter().map(i128::from).sum();
        sum as f64 / self.len() as f64
    }

    /// Alias of [`Self::average()`].
    #[inline(always)]
    pub fn mean(&self) -> f64 {
        self.average()
    }

    /// Returns the median, or `0.0` if the vector is empty.
    ///
    /// A sorted copy is used, so the vector itself is not reordered.
    /// For an even number of integers, the median is the mean of the two
    /// integers around the midpoint.
    pub fn median(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let mut sorted = self.to_vec();
        sorted.sort_unstable();
        let mid = (sorted.len() - 1) / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid] as f64 + sorted[mid + 1] as f64) / 2.0
        } else {
            sorted[mid] as f64
        }
    }

    /// Maps every distinct integer to the number of its occurrences.
    pub fn frequency(&self) -> HashMap<i64, usize> {
        let mut frq = HashMap::new();
        for x in self.iter() {
            *frq.entry(x).or_insert(0) += 1;
        }
        frq
    }

    /// Returns the unique most frequent integer.
    ///
    /// # Errors
    ///
    /// An error is returned if
    ///
    ///  - the vector is empty ([`Error::EmptyContainer`]), or
    ///  - two or more integers tie for the highest frequency ([`Error::AmbiguousMode`]).
    pub fn mode(&self) -> Result<i64> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        match self.most_frequent().as_slice() {
            [mode] => Ok(*mode),
            _ => Err(Error::AmbiguousMode),
        }
    }

    /// Returns the integers tied for the highest frequency, in no particular order.
    ///
    /// This is the multimodal counterpart of [`Self::mode()`] and only answers
    /// when at least two integers share the highest frequency.
    ///
    /// # Errors
    ///
    /// An error is returned if
    ///
    ///  - the vector is empty ([`Error::EmptyContainer`]), or
    ///  - a single integer holds the highest frequency, including vectors with
    ///    one element or one distinct value ([`Error::UniqueModeNotApplicable`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use intvector::IntVector;
    ///
    /// let iv = IntVector::from(vec![1, 1, 2, 3, 3]);
    /// let mut modes = iv.modes()?;
    /// modes.sort();
    /// assert_eq!(modes, vec![1, 3]);
    ///
    /// assert!(IntVector::from(vec![1, 1, 2]).modes().is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn modes(&self) -> Result<Vec<i64>> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        if self.len() == 1 {
            return Err(Error::UniqueModeNotApplicable);
        }
        let modes = self.most_frequent();
        if modes.len() < 2 {
            return Err(Error::UniqueModeNotApplicable);
        }
        Ok(modes)
    }

    /// Groups distinct integers by frequency and returns the top group.
    fn most_frequent(&self) -> Vec<i64> {
        let mut by_count: BTreeMap<usize, Vec<i64>> = BTreeMap::new();
        for (val, count) in self.frequency() {
            by_count.entry(count).or_default().push(val);
        }
        by_count
            .pop_last()
            .map(|(_, vals)| vals)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn test_average_empty() {
        let iv = IntVector::new();
        assert_eq!(iv.average(), 0.0);
        assert_eq!(iv.mean(), 0.0);
    }

    #[test]
    fn test_average_does_not_overflow() {
        let iv = IntVector::from(vec![i64::MAX, i64::MAX]);
        assert_eq!(iv.average(), i64::MAX as f64);
    }

    #[test]
    fn test_median_even() {
        let mut iv: IntVector = (0..100).collect();
        assert_eq!(iv.median(), 49.5);

        let mut rng = ChaChaRng::seed_from_u64(13);
        let mut vals = iv.to_vec();
        vals.shuffle(&mut rng);
        iv = IntVector::from(vals);
        assert_eq!(iv.median(), 49.5);
    }

    #[test]
    fn test_median_odd() {
        let iv: IntVector = (0..=100).rev().collect();
        assert_eq!(iv.median(), 50.0);
        assert_eq!(iv.first().unwrap(), 100);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(IntVector::new().median(), 0.0);
    }

    #[test]
    fn test_frequency() {
        let iv = IntVector::from(vec![5, 1, 5, 5, 2, 1]);
        let frq = iv.frequency();
        assert_eq!(frq.len(), 3);
        assert_eq!(frq[&5], 3);
        assert_eq!(frq[&1], 2);
        assert_eq!(frq[&2], 1);
        assert!(IntVector::new().frequency().is_empty());
    }

    #[test]
    fn test_mode_tie_break() {
        let mut iv = IntVector::new();
        for i in 1..=10 {
            for _ in 0..i {
                iv.push(i);
            }
        }
        assert_eq!(iv.mode().unwrap(), 10);

        iv.push(9);
        let e = iv.mode();
        assert_eq!(
            e.err().map(|x| x.to_string()),
            Some("no unique mode available.".to_string())
        );
    }

    #[test]
    fn test_mode_empty() {
        assert!(matches!(IntVector::new().mode(), Err(Error::EmptyContainer)));
    }

    #[test]
    fn test_mode_single_value() {
        assert_eq!(IntVector::from(vec![4]).mode().unwrap(), 4);
        assert_eq!(IntVector::from(vec![4, 4, 4]).mode().unwrap(), 4);
    }

    #[test]
    fn test_modes_multimodal() {
        let iv = IntVector::from(vec![7, 1, 7, 2, 1, 3]);
        let mut modes = iv.modes().unwrap();
        modes.sort_unstable();
        assert_eq!(modes, vec![1, 7]);
    }

    #[test]
    fn test_modes_all_distinct() {
        let iv = IntVector::from(vec![3, 1, 2]);
        let mut modes = iv.modes().unwrap();
        modes.sort_unstable();
        assert_eq!(modes, vec![1, 2, 3]);
    }

    #[test]
    fn test_modes_not_applicable() {
        assert!(matches!(IntVector::new().modes(), Err(Error::EmptyContainer)));
        assert!(matches!(
            IntVector::from(vec![1]).modes(),
            Err(Error::UniqueModeNotApplicable)
        ));
        assert!(matches!(
            IntVector::from(vec![2, 2, 2]).modes(),
            Err(Error::UniqueModeNotApplicable)
        ));
        assert!(matches!(
            IntVector::from(vec![2, 2, 1]).modes(),
            Err(Error::UniqueModeNotApplicable)
        ));
    }
}
