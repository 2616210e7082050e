//! Range-update, range-query Binary Indexed Tree.

use crate::error::{check_index, check_range, Result};
use crate::purq::PurqBinaryIndexedTree;
use crate::rupq::differences;
use tracing::debug;

/// Range additions and range sums in O(log n), composed from two PURQ trees.
///
/// With `d` the difference array of the source, the prefix sum up to `i` is
/// ```text
/// sum_{j <= i} a[j] = (i + 1) * sum_{j <= i} d[j] - sum_{j <= i} j * d[j]
/// ```
/// so one tree keeps the differences `d[j]` and the other the weighted
/// differences `j * d[j]`. A range addition changes two entries of each.
///
/// # Example
/// ```
/// use range_query::RurqBinaryIndexedTree;
///
/// let mut bit = RurqBinaryIndexedTree::from_slice(&[1, 2, 3, 4, 5]);
///
/// let before = bit.sum_query(1, 3);
/// bit.range_update(1, 3, 2);
///
/// assert_eq!(bit.sum_query(1, 3) - before, 6);
/// assert_eq!(bit.sum_query(0, 4), 21);
/// ```
#[derive(Debug, Clone)]
pub struct RurqBinaryIndexedTree {
    differences: PurqBinaryIndexedTree<i64>,
    weighted_differences: PurqBinaryIndexedTree<i64>,
}

impl RurqBinaryIndexedTree {
    /// Creates a tree over `len` zeros.
    pub fn new(len: usize) -> Self {
        RurqBinaryIndexedTree {
            differences: PurqBinaryIndexedTree::new(len),
            weighted_differences: PurqBinaryIndexedTree::new(len),
        }
    }

    pub fn from_slice(values: &[i64]) -> Self {
        debug!(
            structure = "RURQ binary indexed tree",
            elements = values.len(),
            "building"
        );

        let differences = differences(values);
        let weighted: Vec<i64> = differences
            .iter()
            .enumerate()
            .map(|(j, &d)| j as i64 * d)
            .collect();

        RurqBinaryIndexedTree {
            differences: PurqBinaryIndexedTree::build(&differences),
            weighted_differences: PurqBinaryIndexedTree::build(&weighted),
        }
    }

    pub fn len(&self) -> usize {
        self.differences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Adds `delta` to each element of `start..=end`.
    pub fn range_update(&mut self, start: usize, end: usize, delta: i64) {
        debug_assert!(start <= end && end < self.len());
        let after = end + 1;

        self.differences.propagate(start, delta);
        self.differences.propagate(after, -delta);
        self.weighted_differences.propagate(start, delta * start as i64);
        self.weighted_differences.propagate(after, -delta * after as i64);
    }

    pub fn point_update(&mut self, index: usize, delta: i64) {
        self.range_update(index, index, delta);
    }

    /// Sum of the elements `0..=end`.
    pub fn prefix_sum(&self, end: usize) -> i64 {
        (end as i64 + 1) * self.differences.prefix_sum(end)
            - self.weighted_differences.prefix_sum(end)
    }

    /// Sum of the elements `start..=end`.
    pub fn sum_query(&self, start: usize, end: usize) -> i64 {
        if start == 0 {
            self.prefix_sum(end)
        } else {
            self.prefix_sum(end) - self.prefix_sum(start - 1)
        }
    }

    /// Current value of the element at `index`.
    pub fn value_query(&self, index: usize) -> i64 {
        self.differences.prefix_sum(index)
    }

    pub fn try_range_update(&mut self, start: usize, end: usize, delta: i64) -> Result<()> {
        check_range(start, end, self.len())?;
        self.range_update(start, end, delta);
        Ok(())
    }

    pub fn try_sum_query(&self, start: usize, end: usize) -> Result<i64> {
        check_range(start, end, self.len())?;
        Ok(self.sum_query(start, end))
    }

    pub fn try_value_query(&self, index: usize) -> Result<i64> {
        check_index(index, self.len())?;
        Ok(self.value_query(index))
    }
}
