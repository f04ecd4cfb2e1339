use crate::range::{Inclusivity, Range};

///
/// RangeTo
///
/// Build a range starting from any ordered value: `1_i32.range_to(10)`.
///

pub trait RangeTo: PartialOrd + Sized {
    /// Fully inclusive range from `self` to `to`.
    fn range_to(self, to: Self) -> Range<Self> {
        Range::new(self, to)
    }

    fn range_to_with(self, to: Self, inclusivity: Inclusivity) -> Range<Self> {
        Range::with_inclusivity(self, to, inclusivity)
    }
}

impl<T: PartialOrd> RangeTo for T {}
