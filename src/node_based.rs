use crate::query_object::QueryObject;
use crate::segment_tree::SegmentTree;
use crate::tree_index::midpoint;
use tracing::debug;

/// A segment tree made of explicitly allocated nodes, each owning its two
/// children.
///
/// ## Structure
/// The root covers the whole source array `0..=n-1`. Every internal node
/// splits its segment at the midpoint, the left child covering
/// `start..=mid` and the right child `mid + 1..=end`, down to leaves covering
/// a single index. Each node stores the query object of its segment, which
/// for an internal node is always the combination of its children's.
///
/// ## Complexity
/// Building is O(n) node allocations. A query visits O(log n) nodes: a node
/// fully covered by the query range answers directly, otherwise the query
/// descends into whichever halves it overlaps. Updates descend to every leaf
/// of the updated range and recombine the ancestors on the way back up.
///
/// This is the easiest variant to read, and the one paying the most for
/// allocation and pointer chasing; compare with
/// [`ArrayBasedSegmentTree`](crate::ArrayBasedSegmentTree).
///
/// # Example
/// ```
/// use range_query::{MinimumQuery, NodeBasedSegmentTree, QueryObject, SegmentTree};
///
/// let mut tree = NodeBasedSegmentTree::<MinimumQuery<i32>>::from_slice(&[5, 3, 8, 6]);
///
/// assert_eq!(tree.query(2, 3).answer(), 6);
///
/// tree.update(3, |_| 1);
///
/// assert_eq!(tree.query(0, 3).answer(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NodeBasedSegmentTree<Q> {
    root: Node<Q>,
}

#[derive(Debug, Clone)]
struct Node<Q> {
    object: Q,
    start: usize,
    end: usize,
    children: Option<Box<(Node<Q>, Node<Q>)>>,
}

impl<Q: QueryObject> Node<Q> {
    fn build(values: &[Q::Value], start: usize, end: usize) -> Node<Q> {
        if start == end {
            return Node {
                object: Q::from_leaf(start, values[start]),
                start,
                end,
                children: None,
            };
        }

        let mid = midpoint(start, end);
        let left = Self::build(values, start, mid);
        let right = Self::build(values, mid + 1, end);

        Node {
            object: left.object.combine(&right.object),
            start,
            end,
            children: Some(Box::new((left, right))),
        }
    }

    fn is_totally_overlapped_by(&self, start: usize, end: usize) -> bool {
        start <= self.start && self.end <= end
    }

    // Both overlap tests assume the range intersects this node's segment.
    fn is_left_half_overlapped_by(&self, start: usize) -> bool {
        start <= midpoint(self.start, self.end)
    }

    fn is_right_half_overlapped_by(&self, end: usize) -> bool {
        end > midpoint(self.start, self.end)
    }

    fn query(&self, start: usize, end: usize) -> Q {
        if self.is_totally_overlapped_by(start, end) {
            return self.object.clone();
        }

        // A leaf is always totally overlapped, so this node has children.
        let (left, right) = match &self.children {
            Some(children) => (&children.0, &children.1),
            None => return self.object.clone(),
        };

        match (
            self.is_left_half_overlapped_by(start),
            self.is_right_half_overlapped_by(end),
        ) {
            (true, true) => left.query(start, end).combine(&right.query(start, end)),
            (true, false) => left.query(start, end),
            _ => right.query(start, end),
        }
    }

    fn update<F>(&mut self, start: usize, end: usize, updater: &F)
    where
        F: Fn(Q::Value) -> Q::Value,
    {
        let left_overlapped = self.is_left_half_overlapped_by(start);
        let right_overlapped = self.is_right_half_overlapped_by(end);

        match &mut self.children {
            None => {
                self.object = self.object.reinitialize(self.start, updater);
            }
            Some(children) => {
                let (left, right) = &mut **children;

                if left_overlapped {
                    left.update(start, end, updater);
                }

                if right_overlapped {
                    right.update(start, end, updater);
                }

                self.object = left.object.combine(&right.object);
            }
        }
    }

    fn count(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |children| children.0.count() + children.1.count())
    }
}

impl<Q: QueryObject> NodeBasedSegmentTree<Q> {
    /// Number of allocated nodes, always `2n - 1`.
    ///
    /// # Example
    /// ```
    /// use range_query::{NodeBasedSegmentTree, SegmentTree, SumQuery};
    ///
    /// let tree = NodeBasedSegmentTree::<SumQuery<i64>>::from_slice(&[1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(tree.node_count(), 9);
    /// ```
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}

impl<Q: QueryObject> SegmentTree<Q> for NodeBasedSegmentTree<Q> {
    fn from_slice(values: &[Q::Value]) -> Self {
        assert!(!values.is_empty(), "cannot build a segment tree over nothing");

        debug!(
            structure = "node-based segment tree",
            elements = values.len(),
            "building"
        );

        NodeBasedSegmentTree {
            root: Node::build(values, 0, values.len() - 1),
        }
    }

    fn len(&self) -> usize {
        self.root.end + 1
    }

    fn query(&self, start: usize, end: usize) -> Q {
        self.root.query(start, end)
    }

    fn range_update<F>(&mut self, start: usize, end: usize, updater: F)
    where
        F: Fn(Q::Value) -> Q::Value,
    {
        self.root.update(start, end, &updater);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MaximumSumQuery, NaiveArray, SumQuery};

    #[test]
    fn single_element() {
        let mut tree = NodeBasedSegmentTree::<SumQuery<i64>>::from_slice(&[3]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.query(0, 0).answer(), 3);
        tree.update(0, |v| v * 2);
        assert_eq!(tree.query(0, 0).answer(), 6);
    }

    #[test]
    fn every_range_of_every_length() {
        for n in 1..20i64 {
            let values: Vec<i64> = (0..n).map(|i| (i * 7) % 5 - 2).collect();
            let tree = NodeBasedSegmentTree::<MaximumSumQuery>::from_slice(&values);
            let naive = NaiveArray::new(values);

            for start in 0..n as usize {
                for end in start..n as usize {
                    assert_eq!(tree.query(start, end).answer(), naive.maximum_sum(start, end));
                }
            }
        }
    }

    #[test]
    fn range_update_recombines_ancestors() {
        let mut tree = NodeBasedSegmentTree::<SumQuery<i64>>::from_slice(&[1, 2, 3, 4, 5, 6, 7]);
        tree.range_update(2, 5, |v| v - 1);
        assert_eq!(tree.query(0, 6).answer(), 24);
        assert_eq!(tree.query(3, 4).answer(), 7);
        assert_eq!(tree.query(6, 6).answer(), 7);
    }

    #[test]
    #[should_panic]
    fn empty_source_panics() {
        NodeBasedSegmentTree::<SumQuery<i64>>::from_slice(&[]);
    }
}
