//! Seeded range-sum workloads, and a uniform way of driving every structure
//! through one, for benchmarks and comparisons.

use crate::error::{RangeQueryError, Result};
use crate::{
    ArrayBasedSegmentTree, LazySumSegmentTree, NaiveArray, NodeBasedSegmentTree,
    NonRecursiveSegmentTree, PurqBinaryIndexedTree, QueryObject, RupqBinaryIndexedTree,
    RurqBinaryIndexedTree, SegmentTree, SumQuery,
};
use either::Either;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::debug;

/// Which `(start, end)` pairs a workload visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    /// Every `(i, j)` with `i <= j`, in lexicographic order.
    AllRanges,
    /// `(i, n - 1)` for every `i`.
    RightEndingRanges,
    /// `operation_count` random ordered pairs.
    RandomRanges,
}

/// What a workload does with each of its ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    SumQueries,
    /// Adds 1 to every element of the range.
    RangeUpdates,
    /// Queries when the range starts at an even index, adds 1 otherwise.
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SumQuery { start: usize, end: usize },
    RangeAdd { start: usize, end: usize, delta: i64 },
}

impl Operation {
    fn of_kind(kind: OperationKind, (start, end): (usize, usize)) -> Self {
        let query = match kind {
            OperationKind::SumQueries => true,
            OperationKind::RangeUpdates => false,
            OperationKind::Mixed => start % 2 == 0,
        };

        if query {
            Operation::SumQuery { start, end }
        } else {
            Operation::RangeAdd {
                start,
                end,
                delta: 1,
            }
        }
    }
}

/// Parameters of a [`Workload`].
///
/// # Example
/// ```
/// use range_query::{RangeMode, WorkloadConfig};
///
/// let config = WorkloadConfig::default()
///     .with_array_size(1_000)
///     .with_range_mode(RangeMode::RightEndingRanges);
///
/// assert!(config.validate().is_ok());
/// assert!(config.with_value_range(5..=4).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadConfig {
    pub array_size: usize,
    pub operation_count: usize,
    pub value_range: RangeInclusive<i64>,
    pub seed: u64,
    pub range_mode: RangeMode,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        WorkloadConfig {
            array_size: 100_000,
            operation_count: 50_000,
            value_range: -1000..=1000,
            seed: 42,
            range_mode: RangeMode::RandomRanges,
        }
    }
}

impl WorkloadConfig {
    pub fn with_array_size(mut self, array_size: usize) -> Self {
        self.array_size = array_size;
        self
    }

    pub fn with_operation_count(mut self, operation_count: usize) -> Self {
        self.operation_count = operation_count;
        self
    }

    pub fn with_value_range(mut self, value_range: RangeInclusive<i64>) -> Self {
        self.value_range = value_range;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_range_mode(mut self, range_mode: RangeMode) -> Self {
        self.range_mode = range_mode;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.array_size == 0 {
            return Err(RangeQueryError::InvalidConfig(
                "array size must be positive".to_string(),
            ));
        }

        if self.range_mode == RangeMode::RandomRanges && self.operation_count == 0 {
            return Err(RangeQueryError::InvalidConfig(
                "random ranges need a positive operation count".to_string(),
            ));
        }

        if self.value_range.is_empty() {
            return Err(RangeQueryError::InvalidConfig(format!(
                "empty value range {:?}",
                self.value_range
            )));
        }

        Ok(())
    }
}

/// A source array and the ranges to visit over it.
///
/// # Example
/// ```
/// use range_query::workload::{run, OperationKind, Workload, WorkloadConfig};
/// use range_query::{NaiveArray, RurqBinaryIndexedTree};
///
/// let config = WorkloadConfig::default()
///     .with_array_size(64)
///     .with_operation_count(200);
/// let workload = Workload::generate(config).unwrap();
/// let operations: Vec<_> = workload.operations(OperationKind::Mixed).collect();
///
/// assert_eq!(
///     run::<RurqBinaryIndexedTree>(workload.values(), &operations),
///     run::<NaiveArray<i64>>(workload.values(), &operations),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Workload {
    config: WorkloadConfig,
    values: Vec<i64>,
    random_ranges: Vec<(usize, usize)>,
}

impl Workload {
    pub fn generate(config: WorkloadConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let values: Vec<i64> = (0..config.array_size)
            .map(|_| rng.gen_range(config.value_range.clone()))
            .collect();

        let random_ranges = if config.range_mode == RangeMode::RandomRanges {
            (0..config.operation_count)
                .map(|_| {
                    let a = rng.gen_range(0..config.array_size);
                    let b = rng.gen_range(0..config.array_size);
                    (a.min(b), a.max(b))
                })
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            elements = config.array_size,
            mode = ?config.range_mode,
            seed = config.seed,
            "generated workload"
        );

        Ok(Workload {
            config,
            values,
            random_ranges,
        })
    }

    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The closed ranges of this workload, lazily for the exhaustive modes.
    pub fn ranges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.values.len();

        match self.config.range_mode {
            RangeMode::AllRanges => Either::Left(Either::Left(
                (0..n).flat_map(move |i| (i..n).map(move |j| (i, j))),
            )),
            RangeMode::RightEndingRanges => {
                Either::Left(Either::Right((0..n).map(move |i| (i, n - 1))))
            }
            RangeMode::RandomRanges => Either::Right(self.random_ranges.iter().copied()),
        }
    }

    pub fn operations(&self, kind: OperationKind) -> impl Iterator<Item = Operation> + '_ {
        self.ranges().map(move |range| Operation::of_kind(kind, range))
    }
}

/// A structure able to answer range sums and apply range additions over
/// `i64` values, however efficiently.
pub trait RangeSumStructure {
    fn name() -> &'static str;

    fn build(values: &[i64]) -> Self;

    /// Takes `&mut self` so the lazy tree can push its additions down.
    fn sum_query(&mut self, start: usize, end: usize) -> i64;

    fn range_add(&mut self, start: usize, end: usize, delta: i64);
}

macro_rules! segment_tree_range_sum {
    ($tree: ty, $name: expr) => {
        impl RangeSumStructure for $tree {
            fn name() -> &'static str {
                $name
            }

            fn build(values: &[i64]) -> Self {
                <Self as SegmentTree<SumQuery<i64>>>::from_slice(values)
            }

            fn sum_query(&mut self, start: usize, end: usize) -> i64 {
                let sum: SumQuery<i64> = self.query(start, end);
                sum.answer()
            }

            fn range_add(&mut self, start: usize, end: usize, delta: i64) {
                SegmentTree::<SumQuery<i64>>::range_update(self, start, end, |v| v + delta)
            }
        }
    };
}

segment_tree_range_sum!(NaiveArray<i64>, "naive array");
segment_tree_range_sum!(NodeBasedSegmentTree<SumQuery<i64>>, "node-based segment tree");
segment_tree_range_sum!(ArrayBasedSegmentTree<SumQuery<i64>>, "array-based segment tree");
segment_tree_range_sum!(NonRecursiveSegmentTree<SumQuery<i64>>, "non-recursive segment tree");

impl RangeSumStructure for LazySumSegmentTree {
    fn name() -> &'static str {
        "lazy sum segment tree"
    }

    fn build(values: &[i64]) -> Self {
        LazySumSegmentTree::from_slice(values)
    }

    fn sum_query(&mut self, start: usize, end: usize) -> i64 {
        LazySumSegmentTree::sum_query(self, start, end)
    }

    fn range_add(&mut self, start: usize, end: usize, delta: i64) {
        LazySumSegmentTree::range_update(self, start, end, delta)
    }
}

impl RangeSumStructure for PurqBinaryIndexedTree<i64> {
    fn name() -> &'static str {
        "PURQ binary indexed tree"
    }

    fn build(values: &[i64]) -> Self {
        PurqBinaryIndexedTree::from_slice(values)
    }

    fn sum_query(&mut self, start: usize, end: usize) -> i64 {
        PurqBinaryIndexedTree::sum_query(self, start, end)
    }

    fn range_add(&mut self, start: usize, end: usize, delta: i64) {
        for index in start..=end {
            self.point_update(index, delta);
        }
    }
}

impl RangeSumStructure for RupqBinaryIndexedTree<i64> {
    fn name() -> &'static str {
        "RUPQ binary indexed tree"
    }

    fn build(values: &[i64]) -> Self {
        RupqBinaryIndexedTree::from_slice(values)
    }

    fn sum_query(&mut self, start: usize, end: usize) -> i64 {
        (start..=end).map(|index| self.value_query(index)).sum()
    }

    fn range_add(&mut self, start: usize, end: usize, delta: i64) {
        RupqBinaryIndexedTree::range_update(self, start, end, delta)
    }
}

impl RangeSumStructure for RurqBinaryIndexedTree {
    fn name() -> &'static str {
        "RURQ binary indexed tree"
    }

    fn build(values: &[i64]) -> Self {
        RurqBinaryIndexedTree::from_slice(values)
    }

    fn sum_query(&mut self, start: usize, end: usize) -> i64 {
        RurqBinaryIndexedTree::sum_query(self, start, end)
    }

    fn range_add(&mut self, start: usize, end: usize, delta: i64) {
        RurqBinaryIndexedTree::range_update(self, start, end, delta)
    }
}

/// Builds `S` over `values`, applies `operations` in order and returns the
/// wrapping sum of every query answer.
pub fn run<S: RangeSumStructure>(values: &[i64], operations: &[Operation]) -> i64 {
    let mut structure = S::build(values);

    let checksum = operations
        .iter()
        .fold(0i64, |checksum, operation| match *operation {
            Operation::SumQuery { start, end } => {
                checksum.wrapping_add(structure.sum_query(start, end))
            }
            Operation::RangeAdd { start, end, delta } => {
                structure.range_add(start, end, delta);
                checksum
            }
        });

    debug!(
        structure = S::name(),
        operations = operations.len(),
        checksum,
        "finished run"
    );
    checksum
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn small(mode: RangeMode) -> Workload {
        let config = WorkloadConfig::default()
            .with_array_size(6)
            .with_operation_count(20)
            .with_value_range(-5..=5)
            .with_range_mode(mode);
        Workload::generate(config).unwrap()
    }

    #[test]
    fn default_configuration() {
        let config = WorkloadConfig::default();
        assert_eq!(config.array_size, 100_000);
        assert_eq!(config.operation_count, 50_000);
        assert_eq!(config.value_range, -1000..=1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejected_configurations() {
        assert!(WorkloadConfig::default().with_array_size(0).validate().is_err());
        assert!(WorkloadConfig::default()
            .with_operation_count(0)
            .validate()
            .is_err());
        assert!(WorkloadConfig::default()
            .with_operation_count(0)
            .with_range_mode(RangeMode::AllRanges)
            .validate()
            .is_ok());
        assert!(matches!(
            Workload::generate(WorkloadConfig::default().with_value_range(1..=0)),
            Err(RangeQueryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn range_modes() {
        let all = small(RangeMode::AllRanges).ranges().collect::<Vec<_>>();
        let expected = itertools::iproduct!(0..6, 0..6)
            .filter(|(i, j)| i <= j)
            .collect::<Vec<_>>();
        assert_eq!(all, expected);

        let right = small(RangeMode::RightEndingRanges).ranges().collect::<Vec<_>>();
        assert_eq!(right, (0..6).map(|i| (i, 5)).collect::<Vec<_>>());

        let random = small(RangeMode::RandomRanges);
        assert_eq!(random.ranges().count(), 20);
        assert!(random.ranges().all(|(i, j)| i <= j && j < 6));
        assert!(random.values().iter().all(|v| (-5..=5).contains(v)));
    }

    #[test]
    fn same_seed_same_workload() {
        let a = small(RangeMode::RandomRanges);
        let b = small(RangeMode::RandomRanges);
        assert_eq!(a.values(), b.values());
        assert!(a.ranges().eq(b.ranges()));
    }

    #[test]
    fn mixed_operations_follow_range_parity() {
        let workload = small(RangeMode::AllRanges);

        for (operation, (start, _)) in workload
            .operations(OperationKind::Mixed)
            .zip_eq(workload.ranges())
        {
            match operation {
                Operation::SumQuery { .. } => assert_eq!(start % 2, 0),
                Operation::RangeAdd { delta, .. } => {
                    assert_eq!(start % 2, 1);
                    assert_eq!(delta, 1);
                }
            }
        }
    }

    #[test]
    fn checksums_agree() {
        let workload = small(RangeMode::AllRanges);

        for &kind in [
            OperationKind::SumQueries,
            OperationKind::RangeUpdates,
            OperationKind::Mixed,
        ]
        .iter()
        {
            let values = workload.values();
            let operations = workload.operations(kind).collect::<Vec<_>>();
            let expected = run::<NaiveArray<i64>>(values, &operations);

            assert_eq!(
                run::<NodeBasedSegmentTree<SumQuery<i64>>>(values, &operations),
                expected
            );
            assert_eq!(
                run::<ArrayBasedSegmentTree<SumQuery<i64>>>(values, &operations),
                expected
            );
            assert_eq!(
                run::<NonRecursiveSegmentTree<SumQuery<i64>>>(values, &operations),
                expected
            );
            assert_eq!(run::<LazySumSegmentTree>(values, &operations), expected);
            assert_eq!(run::<PurqBinaryIndexedTree<i64>>(values, &operations), expected);
            assert_eq!(run::<RupqBinaryIndexedTree<i64>>(values, &operations), expected);
            assert_eq!(run::<RurqBinaryIndexedTree>(values, &operations), expected);
        }

        assert_eq!(
            run::<PurqBinaryIndexedTree<i64>>(
                workload.values(),
                &workload.operations(OperationKind::RangeUpdates).collect::<Vec<_>>()
            ),
            0
        );
    }
}
