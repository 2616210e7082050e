/// The aggregation contract every segment tree is generic over.
///
/// A query object is the result of querying some contiguous segment of the
/// source array. Leaves are seeded from a single element with
/// [`from_leaf`](QueryObject::from_leaf), and any two adjacent segments are
/// merged with [`combine`](QueryObject::combine), the receiver covering the
/// indices immediately to the left of the argument.
///
/// Implementations must satisfy, for all objects `a`, `b` and `c` over
/// adjacent segments:
/// ```text
/// a.combine(&b.combine(&c)) == a.combine(&b).combine(&c)
/// Self::identity().combine(&a) == a
/// a.combine(&Self::identity()) == a
/// Self::from_leaf(i, v).leaf_value() == v
/// ```
/// The trees cannot detect a violation; a non associative `combine` simply
/// yields wrong answers, identically in every variant. `combine` need not be
/// commutative, and no tree ever swaps its operands.
pub trait QueryObject: Clone {
    /// Element type of the source array.
    type Value: Copy;

    /// What a caller reads out of a query result.
    type Answer;

    /// The neutral object, covering no element.
    fn identity() -> Self;

    /// Seeds the object for the leaf at `index` holding `value`.
    fn from_leaf(index: usize, value: Self::Value) -> Self;

    /// Merges `self` with the object of the segment adjacent and to its right.
    fn combine(&self, right_adjacent: &Self) -> Self;

    /// The element a leaf object was seeded from. Only meaningful on leaves.
    fn leaf_value(&self) -> Self::Value;

    fn answer(&self) -> Self::Answer;

    /// Reseeds a leaf after its element went through `updater`.
    fn reinitialize<F>(&self, index: usize, updater: F) -> Self
    where
        F: FnOnce(Self::Value) -> Self::Value,
    {
        Self::from_leaf(index, updater(self.leaf_value()))
    }
}
