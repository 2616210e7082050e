use crate::query_object::QueryObject;
use crate::segment_tree::SegmentTree;
use crate::tree_index::{midpoint, tree_array_size, TreeIndex, TreeIndexable};
use tracing::debug;

/// The recursive segment tree of [`NodeBasedSegmentTree`](crate::NodeBasedSegmentTree),
/// with its nodes stored in one preallocated vector instead of individual
/// allocations.
///
/// ## Structure
/// The node at [`TreeIndex`] `i` has its children at `2i + 1` and `2i + 2`.
/// Nodes do not remember their segment: the recursion carries `start..=end`
/// along, splitting it at the midpoint exactly as the node-based tree does.
/// The vector holds `2 * nextPowerOfTwo(n) - 1` slots; slots no segment maps
/// to keep the identity object.
///
/// # Example
/// ```
/// use range_query::{ArrayBasedSegmentTree, MaximumQuery, QueryObject, SegmentTree};
///
/// let mut tree = ArrayBasedSegmentTree::<MaximumQuery<i64>>::from_slice(&[2, 9, 4, 1, 7]);
///
/// assert_eq!(tree.query(2, 4).answer(), 7);
///
/// tree.range_update(0, 2, |v| v + 10);
///
/// assert_eq!(tree.query(2, 4).answer(), 14);
/// assert_eq!(tree.slot_count(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayBasedSegmentTree<Q> {
    tree: Vec<Q>,
    len: usize,
}

impl<Q: QueryObject> ArrayBasedSegmentTree<Q> {
    fn build(&mut self, values: &[Q::Value], index: TreeIndex, start: usize, end: usize) {
        if start == end {
            self.tree[index] = Q::from_leaf(start, values[start]);
            return;
        }

        let mid = midpoint(start, end);
        self.build(values, index.left_child(), start, mid);
        self.build(values, index.right_child(), mid + 1, end);

        self.recombine(index);
    }

    #[inline]
    fn recombine(&mut self, index: TreeIndex) {
        self.tree[index] = self.tree[index.left_child()].combine(&self.tree[index.right_child()]);
    }

    fn query_node(
        &self,
        index: TreeIndex,
        segment_start: usize,
        segment_end: usize,
        start: usize,
        end: usize,
    ) -> Q {
        if start <= segment_start && segment_end <= end {
            return self.tree[index].clone();
        }

        let mid = midpoint(segment_start, segment_end);

        if start <= mid && end > mid {
            self.query_node(index.left_child(), segment_start, mid, start, end)
                .combine(&self.query_node(index.right_child(), mid + 1, segment_end, start, end))
        } else if start <= mid {
            self.query_node(index.left_child(), segment_start, mid, start, end)
        } else {
            self.query_node(index.right_child(), mid + 1, segment_end, start, end)
        }
    }

    fn update_node<F>(
        &mut self,
        index: TreeIndex,
        segment_start: usize,
        segment_end: usize,
        start: usize,
        end: usize,
        updater: &F,
    ) where
        F: Fn(Q::Value) -> Q::Value,
    {
        if segment_start == segment_end {
            self.tree[index] = self.tree[index].reinitialize(segment_start, updater);
            return;
        }

        let mid = midpoint(segment_start, segment_end);

        if start <= mid {
            self.update_node(index.left_child(), segment_start, mid, start, end, updater);
        }

        if end > mid {
            self.update_node(index.right_child(), mid + 1, segment_end, start, end, updater);
        }

        self.recombine(index);
    }

    /// Number of slots of the backing vector.
    pub fn slot_count(&self) -> usize {
        self.tree.len()
    }
}

impl<Q: QueryObject> SegmentTree<Q> for ArrayBasedSegmentTree<Q> {
    fn from_slice(values: &[Q::Value]) -> Self {
        assert!(!values.is_empty(), "cannot build a segment tree over nothing");

        let slots = tree_array_size(values.len());
        debug!(
            structure = "array-based segment tree",
            elements = values.len(),
            slots,
            "building"
        );

        let mut tree = ArrayBasedSegmentTree {
            tree: vec![Q::identity(); slots],
            len: values.len(),
        };
        tree.build(values, 0, 0, values.len() - 1);
        tree
    }

    fn len(&self) -> usize {
        self.len
    }

    fn query(&self, start: usize, end: usize) -> Q {
        self.query_node(0, 0, self.len - 1, start, end)
    }

    fn range_update<F>(&mut self, start: usize, end: usize, updater: F)
    where
        F: Fn(Q::Value) -> Q::Value,
    {
        let last = self.len - 1;
        self.update_node(0, 0, last, start, end, &updater);
    }
}
