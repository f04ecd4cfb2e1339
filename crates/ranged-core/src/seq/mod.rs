//! Eager filtering and reduction of iterators by range membership.

mod filter;


pub use filter::{FilterByRange, FilterPresentByRange};

use crate::{
    error::RangeError,
    range::{Inclusivity, Range},
};

///
/// RangeIterExt
///
/// Range helpers for any iterator. The accessor projects each item to the
/// value tested against the range.
///

pub trait RangeIterExt: Iterator + Sized {
    /// Lazily keep the items whose projected value lies inside `range`.
    fn filter_by_range<T, F>(
        self,
        accessor: F,
        range: &Range<T>,
    ) -> FilterByRange<'_, Self, F, T>
    where
        T: PartialOrd,
        F: FnMut(&Self::Item) -> T,
    {
        FilterByRange::new(self, accessor, range)
    }

    /// Like `filter_by_range`, but for optional values; items whose value is
    /// absent are skipped.
    fn filter_present_by_range<T, F>(
        self,
        accessor: F,
        range: &Range<T>,
    ) -> FilterPresentByRange<'_, Self, F, T>
    where
        T: PartialOrd,
        F: FnMut(&Self::Item) -> Option<T>,
    {
        FilterPresentByRange::new(self, accessor, range)
    }

    /// Tightest range covering every projected value.
    ///
    /// An empty iterator has no bounding range.
    fn bounding_range<T, F>(
        self,
        accessor: F,
        inclusivity: Inclusivity,
    ) -> Result<Range<T>, RangeError>
    where
        T: Clone + PartialOrd,
        F: FnMut(Self::Item) -> T,
    {
        let mut values = self.map(accessor);
        let first = values.next().ok_or(RangeError::EmptySequence)?;

        let (minimum, maximum) = values.fold((first.clone(), first), |(low, high), value| {
            if value < low {
                (value, high)
            } else if value > high {
                (low, value)
            } else {
                (low, high)
            }
        });

        Ok(Range::with_inclusivity(minimum, maximum, inclusivity))
    }
}

impl<I: Iterator> RangeIterExt for I {}

/// Free-function form of [`RangeIterExt::filter_by_range`].
pub fn filter_by_range<I, T, F>(
    items: I,
    accessor: F,
    range: &Range<T>,
) -> FilterByRange<'_, I::IntoIter, F, T>
where
    I: IntoIterator,
    T: PartialOrd,
    F: FnMut(&I::Item) -> T,
{
    items.into_iter().filter_by_range(accessor, range)
}

/// Free-function form of [`RangeIterExt::bounding_range`].
pub fn bounding_range<I, T, F>(
    items: I,
    accessor: F,
    inclusivity: Inclusivity,
) -> Result<Range<T>, RangeError>
where
    I: IntoIterator,
    T: Clone + PartialOrd,
    F: FnMut(I::Item) -> T,
{
    items.into_iter().bounding_range(accessor, inclusivity)
}
