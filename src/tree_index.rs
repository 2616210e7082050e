/// The index of a node in a flat, recursively built tree array. The root sits
/// at 0 and children are laid out breadth first, like so :
///                          0
///                       /     \
///                      1       2
///                    /   \   /   \
///                   3     4 5     6
///
/// And so forth. Both the array-based segment tree and the lazy sum tree
/// address their nodes this way.
pub trait TreeIndexable {
    fn left_child(&self) -> Self;
    fn right_child(&self) -> Self;
    fn parent(&self) -> Self;
}

pub type TreeIndex = usize;

impl TreeIndexable for TreeIndex {
    fn left_child(&self) -> Self {
        2 * self + 1
    }

    fn right_child(&self) -> Self {
        2 * self + 2
    }

    fn parent(&self) -> Self {
        assert!(*self != 0);

        (self - 1) / 2
    }
}

/// Number of slots a recursively built tree over `element_count` leaves
/// needs: `2 * nextPowerOfTwo(n) - 1`.
///
/// # Example
/// ```
/// use range_query::tree_index::tree_array_size;
///
/// assert_eq!(tree_array_size(1), 1);
/// assert_eq!(tree_array_size(5), 15);
/// assert_eq!(tree_array_size(8), 15);
/// ```
pub fn tree_array_size(element_count: usize) -> usize {
    2 * element_count.next_power_of_two() - 1
}

/// Midpoint splitting a closed segment: the left child covers
/// `start..=mid`, the right child `mid + 1..=end`.
#[inline]
pub(crate) fn midpoint(start: usize, end: usize) -> usize {
    start + (end - start) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_and_parent_are_inverse() {
        for i in 0..100usize {
            assert_eq!(i.left_child().parent(), i);
            assert_eq!(i.right_child().parent(), i);
            assert_eq!(i.left_child() + 1, i.right_child());
        }
    }

    #[test]
    #[should_panic]
    fn root_has_no_parent() {
        0usize.parent();
    }

    #[test]
    fn recursive_split_fits_in_tree_array() {
        fn deepest(index: TreeIndex, start: usize, end: usize) -> TreeIndex {
            if start == end {
                index
            } else {
                let mid = midpoint(start, end);
                deepest(index.left_child(), start, mid)
                    .max(deepest(index.right_child(), mid + 1, end))
            }
        }

        for n in 1..300 {
            assert!(deepest(0, 0, n - 1) < tree_array_size(n));
        }
    }
}
