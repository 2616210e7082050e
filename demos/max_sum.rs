use range_query::{MaximumSumQuery, NaiveArray, NonRecursiveSegmentTree, QueryObject, SegmentTree};

fn main() {
    let prices = vec![3i64, -4, 5, -1, 2, -6, 4, 3, -2, 1, -7, 6];
    let mut tree = NonRecursiveSegmentTree::<MaximumSumQuery>::from_slice(&prices);
    let mut naive = NaiveArray::new(prices.clone());

    for end in 0..prices.len() {
        let best = tree.query(0, end);
        println!(
            "0..={:<2} best {:>3}  total {:>3}  prefix {:>3}  suffix {:>3}",
            end,
            best.answer(),
            best.sum(),
            best.maximum_prefix_sum(),
            best.maximum_suffix_sum()
        );
        assert_eq!(best.answer(), naive.maximum_sum(0, end));
    }

    tree.range_update(4, 6, |v| v + 5);
    naive.range_add(4, 6, 5);
    println!(
        "after adding 5 to 4..=6: best {}",
        tree.query(0, prices.len() - 1).answer()
    );
    assert_eq!(
        tree.query(0, prices.len() - 1).answer(),
        naive.maximum_sum(0, prices.len() - 1)
    );
}
