//! Range-update, point-query Binary Indexed Tree.

use crate::error::{check_index, check_range, Result};
use crate::purq::PurqBinaryIndexedTree;
use itertools::Itertools;
use std::ops::{Add, Sub};
use tracing::debug;

/// The dual of [`PurqBinaryIndexedTree`]: range additions and single element
/// reads, both in O(log n).
///
/// The inner PURQ tree stores the difference array `d[i] = a[i] - a[i - 1]`
/// instead of the array itself. Reading `a[i]` is then the prefix sum of `d`
/// up to `i`, and adding `delta` to `a[start..=end]` only changes two
/// differences: `d[start] += delta` and `d[end + 1] -= delta`.
///
/// # Example
/// ```
/// use range_query::RupqBinaryIndexedTree;
///
/// let mut bit = RupqBinaryIndexedTree::from_slice(&[1i64, 2, 3, 4, 5]);
///
/// bit.range_update(1, 3, 2);
///
/// assert_eq!(bit.value_query(0), 1);
/// assert_eq!(bit.value_query(3), 6);
/// assert_eq!(bit.value_query(4), 5);
/// ```
#[derive(Debug, Clone)]
pub struct RupqBinaryIndexedTree<T> {
    differences: PurqBinaryIndexedTree<T>,
}

impl<T> RupqBinaryIndexedTree<T>
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T>,
{
    /// Creates a tree over `len` zeros.
    pub fn new(len: usize) -> Self {
        RupqBinaryIndexedTree {
            differences: PurqBinaryIndexedTree::new(len),
        }
    }

    pub fn from_slice(values: &[T]) -> Self {
        debug!(
            structure = "RUPQ binary indexed tree",
            elements = values.len(),
            "building"
        );

        RupqBinaryIndexedTree {
            differences: PurqBinaryIndexedTree::build(&differences(values)),
        }
    }

    pub fn len(&self) -> usize {
        self.differences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Adds `delta` to each element of `start..=end`.
    pub fn range_update(&mut self, start: usize, end: usize, delta: T) {
        debug_assert!(start <= end && end < self.len());
        self.differences.propagate(start, delta);
        self.differences.propagate(end + 1, T::default() - delta);
    }

    /// Current value of the element at `index`.
    pub fn value_query(&self, index: usize) -> T {
        self.differences.prefix_sum(index)
    }

    pub fn try_range_update(&mut self, start: usize, end: usize, delta: T) -> Result<()> {
        check_range(start, end, self.len())?;
        self.range_update(start, end, delta);
        Ok(())
    }

    pub fn try_value_query(&self, index: usize) -> Result<T> {
        check_index(index, self.len())?;
        Ok(self.value_query(index))
    }
}

/// `d[0] = a[0]`, `d[i] = a[i] - a[i - 1]`.
pub(crate) fn differences<T>(values: &[T]) -> Vec<T>
where
    T: Copy + Sub<Output = T>,
{
    values
        .first()
        .copied()
        .into_iter()
        .chain(values.iter().tuple_windows().map(|(&a, &b)| b - a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_events::logged_structures;
    use crate::{NaiveArray, PurqBinaryIndexedTree};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn differences_of_slices() {
        assert_eq!(differences(&[5i64, 7, 4, 4]), vec![5, 2, -3, 0]);
        assert_eq!(differences(&[9i64]), vec![9]);
        assert!(differences::<i64>(&[]).is_empty());
    }

    #[test]
    fn update_reaching_the_last_element() {
        let mut bit = RupqBinaryIndexedTree::from_slice(&[0i64, 0, 0]);
        bit.range_update(1, 2, 5);
        assert_eq!(
            (0..3).map(|i| bit.value_query(i)).collect::<Vec<_>>(),
            vec![0, 5, 5]
        );
    }

    #[test]
    fn random_against_naive() {
        let mut rng = StdRng::seed_from_u64(3);

        for n in 1..30usize {
            let values: Vec<i64> = (0..n).map(|_| rng.gen_range(-100..=100)).collect();
            let mut bit = RupqBinaryIndexedTree::from_slice(&values);
            let mut naive = NaiveArray::new(values);

            for r in 0..300i64 {
                let a = rng.gen_range(0..n);
                let b = rng.gen_range(0..n);
                if rng.gen_bool(0.5) {
                    bit.range_update(a.min(b), a.max(b), r);
                    naive.range_add(a.min(b), a.max(b), r);
                } else {
                    assert_eq!(bit.value_query(a), naive.value(a));
                }
            }
        }
    }

    // Range additions through RUPQ leave every element where the same
    // additions applied one element at a time through PURQ leave it.
    #[test]
    fn duality_with_purq() {
        let mut rng = StdRng::seed_from_u64(5);
        let values: Vec<i64> = (0..25).map(|_| rng.gen_range(-10..=10)).collect();
        let mut rupq = RupqBinaryIndexedTree::from_slice(&values);
        let mut purq = PurqBinaryIndexedTree::from_slice(&values);

        for _ in 0..100 {
            let a = rng.gen_range(0..25);
            let b = rng.gen_range(0..25);
            let delta = rng.gen_range(-50..=50);

            rupq.range_update(a.min(b), a.max(b), delta);
            for i in a.min(b)..=a.max(b) {
                purq.point_update(i, delta);
            }

            for i in 0..25 {
                assert_eq!(rupq.value_query(i), purq.sum_query(i, i));
            }
        }
    }

    #[test]
    fn build_is_logged_once_under_its_own_name() {
        let logged = logged_structures(|| {
            RupqBinaryIndexedTree::from_slice(&[4i64, 1, 7]);
        });
        assert_eq!(logged, vec!["RUPQ binary indexed tree"]);
    }

    #[test]
    fn checked_api() {
        let mut bit = RupqBinaryIndexedTree::<i32>::new(4);
        assert!(bit.try_range_update(0, 4, 1).is_err());
        assert!(bit.try_range_update(0, 3, 1).is_ok());
        assert_eq!(bit.try_value_query(3), Ok(1));
        assert!(bit.try_value_query(4).is_err());
    }
}
