/// A bounded value trait, giving access to the smallest and largest values
/// of a type.
///
/// The minimum and maximum query objects use these as their identity: the
/// identity of a minimum is the highest value, and the identity of a maximum
/// is the lowest one. Padding slots of the trees are seeded with them.
///
/// # Example
/// ```
/// use range_query::Bounded;
///
/// assert_eq!(i64::lowest(), i64::MIN);
/// assert_eq!(u32::highest(), u32::MAX);
/// ```
pub trait Bounded {
    /// Returns the smallest value of the type. Combining it with any value
    /// under `max` yields that value.
    fn lowest() -> Self;

    /// Returns the largest value of the type. Combining it with any value
    /// under `min` yields that value.
    fn highest() -> Self;
}

macro_rules! bounded_impl {
    ($($t:ty),*) => {
        $(
            impl Bounded for $t {
                fn lowest() -> Self {
                    <$t>::MIN
                }

                fn highest() -> Self {
                    <$t>::MAX
                }
            }
        )*
    };
}

bounded_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
