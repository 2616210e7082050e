use crate::query_object::QueryObject;
use crate::segment_tree::SegmentTree;
use tracing::debug;

/// An iterative, bottom-up segment tree.
///
/// ## Structure
/// The source array is padded to the next power of two `size`. Leaves live in
/// the second half of the backing vector, the element `i` at slot `size + i`,
/// padding slots holding the identity. The internal slot `i` combines slots
/// `2i` and `2i + 1`, slot 1 being the root; slot 0 is unused.
///
/// ## Complexity
/// Building is a single O(n) pass from the last internal slot down to the
/// root. Queries walk two cursors from both ends of the range up to their
/// common ancestor without any recursion, and point updates walk a single
/// leaf-to-root path. There is no lazy propagation: a range update is a
/// loop of point updates, O((end - start) log n).
///
/// # Example
/// ```
/// use range_query::{MaximumSumQuery, NonRecursiveSegmentTree, QueryObject, SegmentTree};
///
/// let mut tree = NonRecursiveSegmentTree::<MaximumSumQuery>::from_slice(&[-1, 3, -2, 4, -7]);
///
/// assert_eq!(tree.query(0, 4).answer(), 5);
///
/// tree.update(4, |_| 10);
///
/// assert_eq!(tree.query(0, 4).answer(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct NonRecursiveSegmentTree<Q> {
    tree: Vec<Q>,
    size: usize,
    len: usize,
}

impl<Q: QueryObject> NonRecursiveSegmentTree<Q> {
    fn build(&mut self) {
        for i in (1..self.size).rev() {
            self.recombine(i);
        }
    }

    #[inline]
    fn recombine(&mut self, index: usize) {
        self.tree[index] = self.tree[index << 1].combine(&self.tree[index << 1 | 1]);
    }

    /// The leaf count, the source length rounded up to a power of two.
    pub fn padded_len(&self) -> usize {
        self.size
    }
}

impl<Q: QueryObject> SegmentTree<Q> for NonRecursiveSegmentTree<Q> {
    fn from_slice(values: &[Q::Value]) -> Self {
        assert!(!values.is_empty(), "cannot build a segment tree over nothing");

        let size = values.len().next_power_of_two();
        debug!(
            structure = "non-recursive segment tree",
            elements = values.len(),
            slots = 2 * size,
            "building"
        );

        let mut tree = vec![Q::identity(); 2 * size];
        for (i, &value) in values.iter().enumerate() {
            tree[size + i] = Q::from_leaf(i, value);
        }

        let mut tree = NonRecursiveSegmentTree {
            tree,
            size,
            len: values.len(),
        };
        tree.build();
        tree
    }

    fn len(&self) -> usize {
        self.len
    }

    fn query(&self, start: usize, end: usize) -> Q {
        if start == end {
            return self.tree[self.size + start].clone();
        }

        // `right` is kept half-open; the two partial results are accumulated
        // separately so that left-to-right order survives.
        let mut left = self.size + start;
        let mut right = self.size + end + 1;
        let mut left_result = Q::identity();
        let mut right_result = Q::identity();

        while left < right {
            if left & 1 == 1 {
                left_result = left_result.combine(&self.tree[left]);
                left += 1;
            }

            if right & 1 == 1 {
                right -= 1;
                right_result = self.tree[right].combine(&right_result);
            }

            left >>= 1;
            right >>= 1;
        }

        left_result.combine(&right_result)
    }

    fn update<F>(&mut self, index: usize, updater: F)
    where
        F: Fn(Q::Value) -> Q::Value,
    {
        let mut slot = self.size + index;
        self.tree[slot] = self.tree[slot].reinitialize(index, updater);

        while slot > 1 {
            slot >>= 1;
            self.recombine(slot);
        }
    }

    fn range_update<F>(&mut self, start: usize, end: usize, updater: F)
    where
        F: Fn(Q::Value) -> Q::Value,
    {
        for i in start..=end {
            self.update(i, &updater);
        }
    }
}
