use crate::error::{check_range, RangeQueryError, Result};
use crate::tree_index::{midpoint, tree_array_size, TreeIndex, TreeIndexable};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LazyNode {
    /// Sum of the node's whole segment, pending additions included.
    sum: i64,
    /// Per-element addition not yet applied to the children.
    pending: i64,
}

/// A sum segment tree supporting O(log n) range additions through lazy
/// propagation.
///
/// ## Structure
/// Nodes are laid out like the [`ArrayBasedSegmentTree`](crate::ArrayBasedSegmentTree)
/// (children of `i` at `2i + 1` and `2i + 2`), each storing the sum of its
/// segment and a pending addition.
///
/// A node's sum is always correct for its own segment. The pending addition
/// describes work owed to its direct children only: an update covering a
/// node's whole segment adds `delta * length` to its sum and `delta` to its
/// pending addition, and stops there. Whenever an update or a query needs to
/// go below a partially covered node, the node first *pushes down* its pending
/// addition into both children, which makes their sums correct again.
///
/// # Example
/// ```
/// use range_query::LazySumSegmentTree;
///
/// let mut tree = LazySumSegmentTree::from_slice(&[1, 2, 3, 4, 5]);
///
/// tree.range_update(1, 3, 2);
///
/// assert_eq!(tree.sum_query(1, 3), 15);
/// assert_eq!(tree.sum_query(3, 4), 11);
/// assert_eq!(tree.sum_query(0, 4), 21);
/// ```
#[derive(Debug, Clone)]
pub struct LazySumSegmentTree {
    nodes: Vec<LazyNode>,
    len: usize,
}

impl LazySumSegmentTree {
    /// Builds the tree over `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn from_slice(values: &[i64]) -> Self {
        assert!(!values.is_empty(), "cannot build a segment tree over nothing");

        let slots = tree_array_size(values.len());
        debug!(
            structure = "lazy sum segment tree",
            elements = values.len(),
            slots,
            "building"
        );

        let mut tree = LazySumSegmentTree {
            nodes: vec![LazyNode::default(); slots],
            len: values.len(),
        };
        tree.build(values, 0, 0, values.len() - 1);
        tree
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn build(&mut self, values: &[i64], index: TreeIndex, start: usize, end: usize) {
        if start == end {
            self.nodes[index].sum = values[start];
            return;
        }

        let mid = midpoint(start, end);
        self.build(values, index.left_child(), start, mid);
        self.build(values, index.right_child(), mid + 1, end);

        self.recompute(index);
    }

    #[inline]
    fn recompute(&mut self, index: TreeIndex) {
        self.nodes[index].sum =
            self.nodes[index.left_child()].sum + self.nodes[index.right_child()].sum;
    }

    /// Adds `delta` to each element of a node's segment of `length` elements,
    /// deferring the addition to its descendants.
    #[inline]
    fn apply(&mut self, index: TreeIndex, length: usize, delta: i64) {
        let node = &mut self.nodes[index];
        node.sum += delta * length as i64;
        node.pending += delta;
    }

    fn push_down(&mut self, index: TreeIndex, start: usize, mid: usize, end: usize) {
        let pending = self.nodes[index].pending;

        if pending != 0 {
            self.apply(index.left_child(), mid - start + 1, pending);
            self.apply(index.right_child(), end - mid, pending);
            self.nodes[index].pending = 0;
        }
    }

    /// Sum of the elements of `start..=end`.
    ///
    /// Takes `&mut self`: descending through a partially covered node pushes
    /// its pending addition down first.
    pub fn sum_query(&mut self, start: usize, end: usize) -> i64 {
        let last = self.len - 1;
        self.query_node(0, 0, last, start, end)
    }

    pub fn try_from_slice(values: &[i64]) -> Result<Self> {
        if values.is_empty() {
            Err(RangeQueryError::EmptySource)
        } else {
            Ok(Self::from_slice(values))
        }
    }

    pub fn try_sum_query(&mut self, start: usize, end: usize) -> Result<i64> {
        check_range(start, end, self.len)?;
        Ok(self.sum_query(start, end))
    }

    fn query_node(
        &mut self,
        index: TreeIndex,
        segment_start: usize,
        segment_end: usize,
        start: usize,
        end: usize,
    ) -> i64 {
        if start <= segment_start && segment_end <= end {
            return self.nodes[index].sum;
        }

        let mid = midpoint(segment_start, segment_end);
        self.push_down(index, segment_start, mid, segment_end);

        let mut sum = 0;

        if start <= mid {
            sum += self.query_node(index.left_child(), segment_start, mid, start, end);
        }

        if end > mid {
            sum += self.query_node(index.right_child(), mid + 1, segment_end, start, end);
        }

        sum
    }

    /// Adds `delta` to each element of `start..=end`.
    pub fn range_update(&mut self, start: usize, end: usize, delta: i64) {
        let last = self.len - 1;
        self.update_node(0, 0, last, start, end, delta);
    }

    pub fn try_range_update(&mut self, start: usize, end: usize, delta: i64) -> Result<()> {
        check_range(start, end, self.len)?;
        self.range_update(start, end, delta);
        Ok(())
    }

    /// Adds `delta` to the element at `index`.
    pub fn update(&mut self, index: usize, delta: i64) {
        self.range_update(index, index, delta);
    }

    fn update_node(
        &mut self,
        index: TreeIndex,
        segment_start: usize,
        segment_end: usize,
        start: usize,
        end: usize,
        delta: i64,
    ) {
        if start <= segment_start && segment_end <= end {
            self.apply(index, segment_end - segment_start + 1, delta);
            return;
        }

        let mid = midpoint(segment_start, segment_end);
        self.push_down(index, segment_start, mid, segment_end);

        if start <= mid {
            self.update_node(index.left_child(), segment_start, mid, start, end, delta);
        }

        if end > mid {
            self.update_node(index.right_child(), mid + 1, segment_end, start, end, delta);
        }

        self.recompute(index);
    }

    /// Sum of pending additions still parked above the leaves; zero once every
    /// internal node has been pushed down.
    #[cfg(test)]
    fn outstanding_pending(&self) -> i64 {
        self.nodes.iter().map(|node| node.pending.abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NaiveArray;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn whole_range_update_stays_at_the_root() {
        let mut tree = LazySumSegmentTree::from_slice(&[1, 1, 1, 1, 1, 1]);
        tree.range_update(0, 5, 4);
        assert_eq!(tree.nodes[0].sum, 30);
        assert_eq!(tree.nodes[0].pending, 4);
        assert_eq!(tree.nodes[1].sum, 3);

        // A partial query forces the root to push its addition down.
        assert_eq!(tree.sum_query(0, 1), 10);
        assert_eq!(tree.nodes[0].pending, 0);
        assert_eq!(tree.nodes[1].sum, 15);
    }

    #[test]
    fn stacked_updates_then_overlapping_queries() {
        let values = [5i64, -3, 8, 0, 2, 7, -1, 4, 6];
        let mut tree = LazySumSegmentTree::from_slice(&values);
        let mut naive = NaiveArray::new(values.to_vec());

        for &(start, end, delta) in [(0usize, 8usize, 1i64), (2, 6, -4), (3, 3, 10), (1, 7, 2)]
            .iter()
        {
            tree.range_update(start, end, delta);
            naive.range_add(start, end, delta);

            for query_start in 0..values.len() {
                for query_end in query_start..values.len() {
                    assert_eq!(
                        tree.sum_query(query_start, query_end),
                        naive.sum(query_start, query_end)
                    );
                }
            }
        }
    }

    #[test]
    fn random_interleaving() {
        let mut rng = StdRng::seed_from_u64(7);

        for n in 1..40usize {
            let values: Vec<i64> = (0..n).map(|_| rng.gen_range(-50..=50)).collect();
            let mut tree = LazySumSegmentTree::from_slice(&values);
            let mut naive = NaiveArray::new(values);

            for _ in 0..200 {
                let a = rng.gen_range(0..n);
                let b = rng.gen_range(0..n);
                let (start, end) = (a.min(b), a.max(b));

                if rng.gen_bool(0.5) {
                    let delta = rng.gen_range(-20..=20);
                    tree.range_update(start, end, delta);
                    naive.range_add(start, end, delta);
                } else {
                    assert_eq!(tree.sum_query(start, end), naive.sum(start, end));
                }
            }
        }
    }

    #[test]
    fn point_queries_drain_the_pending_additions() {
        let mut tree = LazySumSegmentTree::from_slice(&[0; 8]);
        tree.range_update(0, 7, 3);
        tree.range_update(2, 5, 1);

        for i in 0..8 {
            let expected = if (2..=5).contains(&i) { 4 } else { 3 };
            assert_eq!(tree.sum_query(i, i), expected);
        }

        // Only leaves may still carry pending additions now.
        let leaf_pending: i64 = tree.nodes[7..].iter().map(|node| node.pending.abs()).sum();
        assert_eq!(tree.outstanding_pending(), leaf_pending);
    }

    #[test]
    fn checked_api() {
        assert_eq!(
            LazySumSegmentTree::try_from_slice(&[]).err(),
            Some(RangeQueryError::EmptySource)
        );

        let mut tree = LazySumSegmentTree::try_from_slice(&[1, 2, 3]).unwrap();
        assert!(tree.try_range_update(1, 3, 5).is_err());
        assert!(tree.try_range_update(0, 2, 5).is_ok());
        assert_eq!(tree.try_sum_query(0, 2), Ok(21));
        assert!(tree.try_sum_query(2, 1).is_err());
    }
}
