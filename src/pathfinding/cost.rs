use std::fmt::Debug;
use std::ops::Add;

/// Path cost accumulated by the search.
///
/// Costs must be non-negative and totally ordered. `ZERO` is the cost of the
/// start node and `INFINITY` the cost of a node no relaxation has priced yet.
pub trait Cost: Copy + Ord + Debug + Add<Output = Self> {
    const ZERO: Self;
    const INFINITY: Self;

    /// `2 * self / 3`, without overflowing for values near `INFINITY`.
    fn two_thirds(self) -> Self;
}

macro_rules! impl_cost {
    ($($ty:ty),*) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = 0;
                const INFINITY: Self = <$ty>::MAX;

                fn two_thirds(self) -> Self {
                    self / 3 * 2 + self % 3 * 2 / 3
                }
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, u128, usize, i32, i64);
