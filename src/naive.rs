//! O(n) reference implementations, used to check and benchmark the trees.

use crate::query_object::QueryObject;
use crate::segment_tree::SegmentTree;
use std::ops::{Add, AddAssign};

/// A plain copy of the source array. Queries fold the range element by
/// element and updates touch each element directly.
///
/// # Example
/// ```
/// use range_query::{NaiveArray, QueryObject, SegmentTree, SumQuery};
///
/// let mut naive = NaiveArray::new(vec![1i64, 2, 3, 4, 5]);
///
/// let sum: SumQuery<i64> = naive.query(1, 3);
/// assert_eq!(sum.answer(), 9);
///
/// SegmentTree::<SumQuery<i64>>::update(&mut naive, 2, |v| v + 10);
/// assert_eq!(naive.values(), &[1, 2, 13, 4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaiveArray<V> {
    values: Vec<V>,
}

impl<V: Copy> NaiveArray<V> {
    pub fn new(values: Vec<V>) -> Self {
        NaiveArray { values }
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn value(&self, index: usize) -> V {
        self.values[index]
    }
}

impl<V> NaiveArray<V>
where
    V: Copy + Default + Add<Output = V> + AddAssign,
{
    pub fn sum(&self, start: usize, end: usize) -> V {
        self.values[start..=end]
            .iter()
            .fold(V::default(), |sum, &v| sum + v)
    }

    pub fn point_add(&mut self, index: usize, delta: V) {
        self.values[index] += delta;
    }

    pub fn range_add(&mut self, start: usize, end: usize, delta: V) {
        for v in &mut self.values[start..=end] {
            *v += delta;
        }
    }
}

impl NaiveArray<i64> {
    /// Maximum sum of a non-empty contiguous subrange of `start..=end`, by the
    /// usual dynamic programming over the best sum ending at each index.
    ///
    /// # Example
    /// ```
    /// use range_query::NaiveArray;
    ///
    /// let naive = NaiveArray::new(vec![-1i64, 2, 3, -4, 5]);
    ///
    /// assert_eq!(naive.maximum_sum(0, 4), 6);
    /// assert_eq!(naive.maximum_sum(3, 3), -4);
    /// ```
    pub fn maximum_sum(&self, start: usize, end: usize) -> i64 {
        let mut ending_here = self.values[start];
        let mut best = ending_here;

        for &v in &self.values[start + 1..=end] {
            ending_here = std::cmp::max(ending_here + v, v);
            best = std::cmp::max(best, ending_here);
        }

        best
    }
}

impl<V, Q> SegmentTree<Q> for NaiveArray<V>
where
    V: Copy,
    Q: QueryObject<Value = V>,
{
    fn from_slice(values: &[V]) -> Self {
        NaiveArray {
            values: values.to_vec(),
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn query(&self, start: usize, end: usize) -> Q {
        (start..=end)
            .map(|i| Q::from_leaf(i, self.values[i]))
            .fold(Q::identity(), |result, next| result.combine(&next))
    }

    fn range_update<F>(&mut self, start: usize, end: usize, updater: F)
    where
        F: Fn(Q::Value) -> Q::Value,
    {
        for v in &mut self.values[start..=end] {
            *v = updater(*v);
        }
    }
}
