use crate::error::{check_index, check_range, RangeQueryError, Result};
use crate::query_object::QueryObject;

/// The Query/Update contract shared by every segment tree variant and by the
/// naive baseline, so callers (tests, benchmarks) can drive any of them
/// without knowing its representation.
///
/// Ranges are closed and zero-based: `query(start, end)` covers
/// `start..=end`. The plain methods do not validate their arguments; an out of
/// range index or `start > end` is a caller bug and either panics or returns
/// a meaningless object. The `try_*` methods check first.
pub trait SegmentTree<Q: QueryObject>: Sized {
    /// Builds the structure over `values`.
    ///
    /// # Panics
    ///
    /// The tree variants panic if `values` is empty.
    fn from_slice(values: &[Q::Value]) -> Self;

    /// Number of elements of the source array.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Combined query object of `start..=end`.
    fn query(&self, start: usize, end: usize) -> Q;

    /// Replaces the element at `index` by `updater(element)`.
    fn update<F>(&mut self, index: usize, updater: F)
    where
        F: Fn(Q::Value) -> Q::Value,
    {
        self.range_update(index, index, updater)
    }

    /// Replaces every element of `start..=end` by `updater(element)`. Plain
    /// trees visit each leaf of the range, so this costs O(end - start) leaf
    /// updates.
    fn range_update<F>(&mut self, start: usize, end: usize, updater: F)
    where
        F: Fn(Q::Value) -> Q::Value;

    fn try_from_slice(values: &[Q::Value]) -> Result<Self> {
        if values.is_empty() {
            Err(RangeQueryError::EmptySource)
        } else {
            Ok(Self::from_slice(values))
        }
    }

    fn try_query(&self, start: usize, end: usize) -> Result<Q> {
        check_range(start, end, self.len())?;
        Ok(self.query(start, end))
    }

    fn try_update<F>(&mut self, index: usize, updater: F) -> Result<()>
    where
        F: Fn(Q::Value) -> Q::Value,
    {
        check_index(index, self.len())?;
        self.update(index, updater);
        Ok(())
    }

    fn try_range_update<F>(&mut self, start: usize, end: usize, updater: F) -> Result<()>
    where
        F: Fn(Q::Value) -> Q::Value,
    {
        check_range(start, end, self.len())?;
        self.range_update(start, end, updater);
        Ok(())
    }
}
