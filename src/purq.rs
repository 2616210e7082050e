//! Point-update, range-query Binary Indexed Tree, the structure Fenwick
//! originally described.

use crate::error::{check_index, check_range, Result};
use std::ops::{Add, Sub};
use tracing::debug;

/// A Fenwick tree over the source array: point additions and range sums,
/// both in O(log n).
///
/// Uses 1-based slots internally: slot `i` holds the sum of the elements
/// `(i - lowbit(i), i]`. Adding to an element walks `i, i + lowbit(i), ...`
/// (every slot covering it), while a prefix sum walks `i, i - lowbit(i), ...`
/// (disjoint slots tiling the prefix).
///
/// # Example
/// ```
/// use range_query::PurqBinaryIndexedTree;
///
/// let mut bit = PurqBinaryIndexedTree::from_slice(&[1i64, 2, 3, 4, 5]);
///
/// assert_eq!(bit.sum_query(1, 3), 9);
///
/// bit.point_update(2, 10);
///
/// assert_eq!(bit.sum_query(0, 4), 25);
/// ```
#[derive(Debug, Clone)]
pub struct PurqBinaryIndexedTree<T> {
    tree: Vec<T>,
}

impl<T> PurqBinaryIndexedTree<T>
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T>,
{
    /// Creates a tree over `len` zeros.
    pub fn new(len: usize) -> Self {
        PurqBinaryIndexedTree {
            tree: vec![T::default(); len + 1],
        }
    }

    /// Builds the tree in O(n): each slot pushes its finished partial sum
    /// into the next slot covering it, `i + lowbit(i)`.
    pub fn from_slice(values: &[T]) -> Self {
        debug!(
            structure = "PURQ binary indexed tree",
            elements = values.len(),
            "building"
        );
        Self::build(values)
    }

    /// [`from_slice`](Self::from_slice) without the build event, for the
    /// trees composed from this one.
    pub(crate) fn build(values: &[T]) -> Self {
        let n = values.len();
        let mut tree = Vec::with_capacity(n + 1);
        tree.push(T::default());
        tree.extend_from_slice(values);

        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                let child = tree[i];
                tree[parent] = tree[parent] + child;
            }
        }

        PurqBinaryIndexedTree { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` to the element at `index`.
    pub fn point_update(&mut self, index: usize, delta: T) {
        debug_assert!(index < self.len());
        self.propagate(index, delta);
    }

    /// Adds `delta` to every slot covering `index`. An `index` equal to the
    /// length touches nothing, which lets difference-array users write
    /// their `end + 1` unconditionally.
    pub(crate) fn propagate(&mut self, index: usize, delta: T) {
        let mut slot = index + 1;
        while slot < self.tree.len() {
            self.tree[slot] = self.tree[slot] + delta;
            slot += lowbit(slot);
        }
    }

    /// Sum of the elements `0..=end`.
    pub fn prefix_sum(&self, end: usize) -> T {
        let mut slot = end + 1;
        let mut sum = T::default();
        while slot > 0 {
            sum = sum + self.tree[slot];
            slot -= lowbit(slot);
        }
        sum
    }

    /// Sum of the elements `start..=end`, as the difference of two prefix sums.
    pub fn sum_query(&self, start: usize, end: usize) -> T {
        if start == 0 {
            self.prefix_sum(end)
        } else {
            self.prefix_sum(end) - self.prefix_sum(start - 1)
        }
    }

    pub fn try_point_update(&mut self, index: usize, delta: T) -> Result<()> {
        check_index(index, self.len())?;
        self.point_update(index, delta);
        Ok(())
    }

    pub fn try_sum_query(&self, start: usize, end: usize) -> Result<T> {
        check_range(start, end, self.len())?;
        Ok(self.sum_query(start, end))
    }
}

/// Lowest set bit of `i` (i.e., `i & -i`).
#[inline]
pub(crate) fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NaiveArray;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn lowbit_values() {
        assert_eq!(lowbit(1), 1);
        assert_eq!(lowbit(6), 2);
        assert_eq!(lowbit(8), 8);
        assert_eq!(lowbit(12), 4);
    }

    #[test]
    fn linear_build_matches_repeated_updates() {
        let values: Vec<i64> = (0..37).map(|i| (i * 13 % 11) - 5).collect();
        let built = PurqBinaryIndexedTree::from_slice(&values);
        let mut updated = PurqBinaryIndexedTree::new(values.len());
        for (i, &v) in values.iter().enumerate() {
            updated.point_update(i, v);
        }
        assert_eq!(built.tree, updated.tree);
    }

    #[test]
    fn add_then_subtract_restores_every_range() {
        let values = [4i64, -2, 9, 0, 3, 3, -7];
        let mut bit = PurqBinaryIndexedTree::from_slice(&values);
        let before: Vec<i64> = (0..7)
            .flat_map(|s| (s..7).map(move |e| (s, e)))
            .map(|(s, e)| bit.sum_query(s, e))
            .collect();

        for i in 0..7 {
            bit.point_update(i, 100);
            bit.point_update(i, -100);
        }

        let after: Vec<i64> = (0..7)
            .flat_map(|s| (s..7).map(move |e| (s, e)))
            .map(|(s, e)| bit.sum_query(s, e))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn random_against_naive() {
        let mut rng = StdRng::seed_from_u64(11);
        let values: Vec<i64> = (0..64).map(|_| rng.gen_range(-1000..=1000)).collect();
        let mut bit = PurqBinaryIndexedTree::from_slice(&values);
        let mut naive = NaiveArray::new(values);

        for r in 0..1000i64 {
            let a = rng.gen_range(0..64);
            let b = rng.gen_range(0..64);
            if rng.gen_bool(0.5) {
                bit.point_update(a, r);
                naive.point_add(a, r);
            } else {
                let (start, end) = (a.min(b), a.max(b));
                assert_eq!(bit.sum_query(start, end), naive.sum(start, end));
            }
        }
    }

    #[test]
    fn f64_values() {
        let bit = PurqBinaryIndexedTree::from_slice(&[1.0_f64, 2.5, 3.0, 0.5]);
        assert!((bit.prefix_sum(3) - 7.0).abs() < 1e-10);
        assert!((bit.sum_query(1, 2) - 5.5).abs() < 1e-10);
    }

    #[test]
    fn empty_and_checked() {
        let bit: PurqBinaryIndexedTree<i64> = PurqBinaryIndexedTree::new(0);
        assert!(bit.is_empty());
        assert!(bit.try_sum_query(0, 0).is_err());

        let mut bit = PurqBinaryIndexedTree::from_slice(&[1i64, 2]);
        assert!(bit.try_point_update(2, 1).is_err());
        assert_eq!(bit.try_sum_query(0, 1), Ok(3));
    }
}
