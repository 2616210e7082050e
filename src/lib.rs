#![warn(clippy::all)]

//! Range queries over arrays: segment trees in three layouts plus a lazy
//! range-addition variant, the Binary Indexed Tree family, and a naive
//! baseline they can all be checked against.
//!
//! The segment trees are generic over a [`QueryObject`], the aggregation they
//! maintain (sum, minimum, maximum contiguous sum, ...), and share the
//! [`SegmentTree`] contract with [`NaiveArray`].

pub mod array_based;
pub mod bounded;
pub mod error;
pub mod lazy_sum;
pub mod naive;
pub mod node_based;
pub mod non_recursive;
pub mod purq;
pub mod purq_2d;
pub mod query_object;
pub mod query_objects;
pub mod rupq;
pub mod rurq;
pub mod segment_tree;
pub mod tree_index;
pub mod workload;

#[cfg(test)]
mod build_events;

pub use array_based::ArrayBasedSegmentTree;
pub use bounded::Bounded;
pub use error::RangeQueryError;
pub use lazy_sum::LazySumSegmentTree;
pub use naive::NaiveArray;
pub use node_based::NodeBasedSegmentTree;
pub use non_recursive::NonRecursiveSegmentTree;
pub use purq::PurqBinaryIndexedTree;
pub use purq_2d::PurqBinaryIndexedTree2D;
pub use query_object::QueryObject;
pub use query_objects::{
    MaximumIndexQuery, MaximumQuery, MaximumSumQuery, MinimumQuery, ProductQuery, SumQuery,
};
pub use rupq::RupqBinaryIndexedTree;
pub use rurq::RurqBinaryIndexedTree;
pub use segment_tree::SegmentTree;
pub use workload::{
    Operation, OperationKind, RangeMode, RangeSumStructure, Workload, WorkloadConfig,
};
