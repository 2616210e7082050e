use clap::{Parser, ValueEnum};
use range_query::workload::run;
use range_query::{
    ArrayBasedSegmentTree, LazySumSegmentTree, NaiveArray, NodeBasedSegmentTree,
    NonRecursiveSegmentTree, Operation, OperationKind, PurqBinaryIndexedTree, RangeMode,
    RangeQueryError, RangeSumStructure, RupqBinaryIndexedTree, RurqBinaryIndexedTree, SumQuery,
    Workload, WorkloadConfig,
};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Ranges {
    All,
    RightEnding,
    Random,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Operations {
    Queries,
    Updates,
    Mixed,
}

/// Times every range-sum structure on the same seeded workload and checks
/// that they all compute the same answers.
#[derive(Parser, Debug)]
#[command(name = "compare")]
struct Args {
    /// Number of elements of the source array.
    #[arg(long, default_value_t = 100_000)]
    size: usize,

    /// Number of random ranges.
    #[arg(long, default_value_t = 50_000)]
    operations: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, value_enum, default_value = "random")]
    ranges: Ranges,

    #[arg(long, value_enum, default_value = "mixed")]
    kind: Operations,

    /// Also run the O(n) baseline.
    #[arg(long)]
    naive: bool,
}

fn time<S: RangeSumStructure>(values: &[i64], operations: &[Operation]) -> i64 {
    let start = Instant::now();
    let checksum = run::<S>(values, operations);
    println!(
        "{:<28} {:>10.3} ms  checksum {}",
        S::name(),
        start.elapsed().as_secs_f64() * 1000.0,
        checksum
    );
    checksum
}

fn main() -> Result<(), RangeQueryError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let range_mode = match args.ranges {
        Ranges::All => RangeMode::AllRanges,
        Ranges::RightEnding => RangeMode::RightEndingRanges,
        Ranges::Random => RangeMode::RandomRanges,
    };
    let kind = match args.kind {
        Operations::Queries => OperationKind::SumQueries,
        Operations::Updates => OperationKind::RangeUpdates,
        Operations::Mixed => OperationKind::Mixed,
    };

    let config = WorkloadConfig::default()
        .with_array_size(args.size)
        .with_operation_count(args.operations)
        .with_seed(args.seed)
        .with_range_mode(range_mode);
    let workload = Workload::generate(config)?;
    let values = workload.values();
    let operations = workload.operations(kind).collect::<Vec<_>>();

    println!("{} elements, {} operations", values.len(), operations.len());

    let mut checksums = vec![
        time::<NodeBasedSegmentTree<SumQuery<i64>>>(values, &operations),
        time::<ArrayBasedSegmentTree<SumQuery<i64>>>(values, &operations),
        time::<NonRecursiveSegmentTree<SumQuery<i64>>>(values, &operations),
        time::<LazySumSegmentTree>(values, &operations),
        time::<PurqBinaryIndexedTree<i64>>(values, &operations),
        time::<RupqBinaryIndexedTree<i64>>(values, &operations),
        time::<RurqBinaryIndexedTree>(values, &operations),
    ];

    if args.naive {
        checksums.push(time::<NaiveArray<i64>>(values, &operations));
    }

    checksums.dedup();
    if checksums.len() != 1 {
        eprintln!("structures disagree: {:?}", checksums);
        std::process::exit(1);
    }

    Ok(())
}
