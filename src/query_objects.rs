//! Ready-made aggregations: sum, minimum, maximum, product, maximum
//! contiguous sum and rightmost maximum index.

use crate::query_object::QueryObject;
use crate::Bounded;
use std::ops::Add;

/// Sum of a segment.
///
/// # Example
/// ```
/// use range_query::{QueryObject, SumQuery};
///
/// let left = SumQuery::from_leaf(0, 3i64);
/// let right = SumQuery::from_leaf(1, 4i64);
///
/// assert_eq!(left.combine(&right).answer(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumQuery<T> {
    sum: T,
}

impl<T> QueryObject for SumQuery<T>
where
    T: Copy + Default + Add<Output = T>,
{
    type Value = T;
    type Answer = T;

    fn identity() -> Self {
        SumQuery { sum: T::default() }
    }

    fn from_leaf(_index: usize, value: T) -> Self {
        SumQuery { sum: value }
    }

    fn combine(&self, right_adjacent: &Self) -> Self {
        SumQuery {
            sum: self.sum + right_adjacent.sum,
        }
    }

    fn leaf_value(&self) -> T {
        self.sum
    }

    fn answer(&self) -> T {
        self.sum
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumQuery<T> {
    minimum: T,
}

impl<T> QueryObject for MinimumQuery<T>
where
    T: Copy + Ord + Bounded,
{
    type Value = T;
    type Answer = T;

    fn identity() -> Self {
        MinimumQuery {
            minimum: T::highest(),
        }
    }

    fn from_leaf(_index: usize, value: T) -> Self {
        MinimumQuery { minimum: value }
    }

    fn combine(&self, right_adjacent: &Self) -> Self {
        MinimumQuery {
            minimum: std::cmp::min(self.minimum, right_adjacent.minimum),
        }
    }

    fn leaf_value(&self) -> T {
        self.minimum
    }

    fn answer(&self) -> T {
        self.minimum
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaximumQuery<T> {
    maximum: T,
}

impl<T> QueryObject for MaximumQuery<T>
where
    T: Copy + Ord + Bounded,
{
    type Value = T;
    type Answer = T;

    fn identity() -> Self {
        MaximumQuery {
            maximum: T::lowest(),
        }
    }

    fn from_leaf(_index: usize, value: T) -> Self {
        MaximumQuery { maximum: value }
    }

    fn combine(&self, right_adjacent: &Self) -> Self {
        MaximumQuery {
            maximum: std::cmp::max(self.maximum, right_adjacent.maximum),
        }
    }

    fn leaf_value(&self) -> T {
        self.maximum
    }

    fn answer(&self) -> T {
        self.maximum
    }
}

/// Product of a segment. Multiplication wraps on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductQuery {
    product: i64,
}

impl QueryObject for ProductQuery {
    type Value = i64;
    type Answer = i64;

    fn identity() -> Self {
        ProductQuery { product: 1 }
    }

    fn from_leaf(_index: usize, value: i64) -> Self {
        ProductQuery { product: value }
    }

    fn combine(&self, right_adjacent: &Self) -> Self {
        ProductQuery {
            product: self.product.wrapping_mul(right_adjacent.product),
        }
    }

    fn leaf_value(&self) -> i64 {
        self.product
    }

    fn answer(&self) -> i64 {
        self.product
    }
}

/// Maximum sum of any non-empty contiguous subrange of a segment.
///
/// Besides the answer, the object keeps the segment's total, its best sum
/// starting at the left edge and its best sum ending at the right edge; the
/// best sum of two adjacent segments is either entirely in one of them, or
/// crosses the boundary as a suffix of the left plus a prefix of the right.
/// The identity uses `i64::MIN` for the three maxima, and every addition that
/// may involve one of them saturates.
///
/// # Example
/// ```
/// use range_query::{MaximumSumQuery, QueryObject};
///
/// let maximum_sum = [-2i64, 1, -3, 4, -1, 2, 1, -5, 4]
///     .iter()
///     .enumerate()
///     .map(|(i, &v)| MaximumSumQuery::from_leaf(i, v))
///     .fold(MaximumSumQuery::identity(), |acc, leaf| acc.combine(&leaf));
///
/// assert_eq!(maximum_sum.answer(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaximumSumQuery {
    sum: i64,
    maximum_sum: i64,
    maximum_prefix_sum: i64, // [-> ... ]
    maximum_suffix_sum: i64, // [ ... <-]
}

impl MaximumSumQuery {
    pub fn sum(&self) -> i64 {
        self.sum
    }

    pub fn maximum_prefix_sum(&self) -> i64 {
        self.maximum_prefix_sum
    }

    pub fn maximum_suffix_sum(&self) -> i64 {
        self.maximum_suffix_sum
    }
}

impl QueryObject for MaximumSumQuery {
    type Value = i64;
    type Answer = i64;

    fn identity() -> Self {
        MaximumSumQuery {
            sum: 0,
            maximum_sum: i64::MIN,
            maximum_prefix_sum: i64::MIN,
            maximum_suffix_sum: i64::MIN,
        }
    }

    fn from_leaf(_index: usize, value: i64) -> Self {
        MaximumSumQuery {
            sum: value,
            maximum_sum: value,
            maximum_prefix_sum: value,
            maximum_suffix_sum: value,
        }
    }

    fn combine(&self, right_adjacent: &Self) -> Self {
        let crossing = self
            .maximum_suffix_sum
            .saturating_add(right_adjacent.maximum_prefix_sum);

        MaximumSumQuery {
            sum: self.sum + right_adjacent.sum,
            maximum_sum: crossing
                .max(self.maximum_sum)
                .max(right_adjacent.maximum_sum),
            maximum_prefix_sum: self
                .sum
                .saturating_add(right_adjacent.maximum_prefix_sum)
                .max(self.maximum_prefix_sum),
            maximum_suffix_sum: right_adjacent
                .sum
                .saturating_add(self.maximum_suffix_sum)
                .max(right_adjacent.maximum_suffix_sum),
        }
    }

    // A single element's total is the element itself.
    fn leaf_value(&self) -> i64 {
        self.sum
    }

    fn answer(&self) -> i64 {
        self.maximum_sum
    }
}

/// Index of the maximum of a segment, the rightmost one on ties.
///
/// Picking the right operand on ties only gives the rightmost index because
/// the trees always combine a segment with the one to its right; swapping the
/// operands would return the leftmost one instead.
///
/// # Example
/// ```
/// use range_query::{MaximumIndexQuery, QueryObject};
///
/// let left = MaximumIndexQuery::from_leaf(0, 5i32);
/// let right = MaximumIndexQuery::from_leaf(1, 5i32);
///
/// assert_eq!(left.combine(&right).answer(), Some(1));
/// assert_eq!(MaximumIndexQuery::<i32>::identity().answer(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaximumIndexQuery<T> {
    index: Option<usize>,
    maximum: T,
}

impl<T> QueryObject for MaximumIndexQuery<T>
where
    T: Copy + Ord + Bounded,
{
    type Value = T;
    type Answer = Option<usize>;

    fn identity() -> Self {
        MaximumIndexQuery {
            index: None,
            maximum: T::lowest(),
        }
    }

    fn from_leaf(index: usize, value: T) -> Self {
        MaximumIndexQuery {
            index: Some(index),
            maximum: value,
        }
    }

    fn combine(&self, right_adjacent: &Self) -> Self {
        match (self.index, right_adjacent.index) {
            (_, None) => *self,
            (None, _) => *right_adjacent,
            _ if right_adjacent.maximum >= self.maximum => *right_adjacent,
            _ => *self,
        }
    }

    fn leaf_value(&self) -> T {
        self.maximum
    }

    fn answer(&self) -> Option<usize> {
        self.index
    }
}
