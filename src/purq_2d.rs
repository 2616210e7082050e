use crate::error::{check_index, RangeQueryError, Result};
use crate::purq::lowbit;
use std::ops::{Add, Sub};

/// Two-dimensional point-update, range-query Binary Indexed Tree over a
/// `row_count x column_count` grid starting at zeros.
///
/// Each row slot of the outer Fenwick indexing holds a whole Fenwick tree over
/// columns, so both operations cost O(log rows * log columns). Rectangle sums
/// come from four prefix rectangles by inclusion-exclusion.
///
/// # Example
/// ```
/// use range_query::PurqBinaryIndexedTree2D;
///
/// let mut bit = PurqBinaryIndexedTree2D::new(4, 5);
///
/// bit.point_update(1, 1, 1);
/// bit.point_update(2, 2, 10);
///
/// assert_eq!(bit.sum_query(0, 0, 1, 1), 1);
/// assert_eq!(bit.sum_query(1, 1, 2, 2), 11);
/// ```
#[derive(Debug, Clone)]
pub struct PurqBinaryIndexedTree2D<T> {
    tree: Vec<T>,
    row_count: usize,
    column_count: usize,
}

impl<T> PurqBinaryIndexedTree2D<T>
where
    T: Copy + Default + Add<Output = T> + Sub<Output = T>,
{
    pub fn new(row_count: usize, column_count: usize) -> Self {
        PurqBinaryIndexedTree2D {
            tree: vec![T::default(); (row_count + 1) * (column_count + 1)],
            row_count,
            column_count,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    #[inline]
    fn slot(&self, row: usize, column: usize) -> usize {
        row * (self.column_count + 1) + column
    }

    /// Adds `delta` to the cell at (`row`, `column`).
    pub fn point_update(&mut self, row: usize, column: usize, delta: T) {
        let mut r = row + 1;
        while r <= self.row_count {
            let mut c = column + 1;
            while c <= self.column_count {
                let slot = self.slot(r, c);
                self.tree[slot] = self.tree[slot] + delta;
                c += lowbit(c);
            }
            r += lowbit(r);
        }
    }

    /// Sum of the cells in the first `rows` rows and first `columns` columns.
    fn leading_sum(&self, rows: usize, columns: usize) -> T {
        let mut sum = T::default();
        let mut r = rows;
        while r > 0 {
            let mut c = columns;
            while c > 0 {
                sum = sum + self.tree[self.slot(r, c)];
                c -= lowbit(c);
            }
            r -= lowbit(r);
        }
        sum
    }

    /// Sum of the rectangle from (`near_row`, `near_column`) to
    /// (`far_row`, `far_column`), corners included.
    pub fn sum_query(
        &self,
        near_row: usize,
        near_column: usize,
        far_row: usize,
        far_column: usize,
    ) -> T {
        self.leading_sum(far_row + 1, far_column + 1)
            - self.leading_sum(near_row, far_column + 1)
            - self.leading_sum(far_row + 1, near_column)
            + self.leading_sum(near_row, near_column)
    }

    pub fn try_point_update(&mut self, row: usize, column: usize, delta: T) -> Result<()> {
        check_index(row, self.row_count)?;
        check_index(column, self.column_count)?;
        self.point_update(row, column, delta);
        Ok(())
    }

    pub fn try_sum_query(
        &self,
        near_row: usize,
        near_column: usize,
        far_row: usize,
        far_column: usize,
    ) -> Result<T> {
        if near_row > far_row || far_row >= self.row_count {
            return Err(RangeQueryError::InvalidRange {
                start: near_row,
                end: far_row,
                len: self.row_count,
            });
        }
        if near_column > far_column || far_column >= self.column_count {
            return Err(RangeQueryError::InvalidRange {
                start: near_column,
                end: far_column,
                len: self.column_count,
            });
        }
        Ok(self.sum_query(near_row, near_column, far_row, far_column))
    }
}
