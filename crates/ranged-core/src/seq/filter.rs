use crate::range::Range;
use std::iter::FusedIterator;

///
/// FilterByRange
///
/// Iterator adapter yielding the items whose projected value lies inside a
/// range. Source order is preserved and nothing is buffered.
///

#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FilterByRange<'r, I, F, T> {
    iter: I,
    accessor: F,
    range: &'r Range<T>,
}

impl<'r, I, F, T> FilterByRange<'r, I, F, T> {
    pub(crate) const fn new(iter: I, accessor: F, range: &'r Range<T>) -> Self {
        Self {
            iter,
            accessor,
            range,
        }
    }
}

impl<I, F, T> Iterator for FilterByRange<'_, I, F, T>
where
    I: Iterator,
    T: PartialOrd,
    F: FnMut(&I::Item) -> T,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            iter,
            accessor,
            range,
        } = self;

        iter.find(|item| range.contains(&accessor(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, F, T> DoubleEndedIterator for FilterByRange<'_, I, F, T>
where
    I: DoubleEndedIterator,
    T: PartialOrd,
    F: FnMut(&I::Item) -> T,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let Self {
            iter,
            accessor,
            range,
        } = self;

        iter.rfind(|item| range.contains(&accessor(item)))
    }
}

impl<I, F, T> FusedIterator for FilterByRange<'_, I, F, T>
where
    I: FusedIterator,
    T: PartialOrd,
    F: FnMut(&I::Item) -> T,
{
}

///
/// FilterPresentByRange
///
/// Variant of `FilterByRange` for optional projections. Items whose value is
/// absent never reach the range test.
///

#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FilterPresentByRange<'r, I, F, T> {
    iter: I,
    accessor: F,
    range: &'r Range<T>,
}

impl<'r, I, F, T> FilterPresentByRange<'r, I, F, T> {
    pub(crate) const fn new(iter: I, accessor: F, range: &'r Range<T>) -> Self {
        Self {
            iter,
            accessor,
            range,
        }
    }
}

impl<I, F, T> Iterator for FilterPresentByRange<'_, I, F, T>
where
    I: Iterator,
    T: PartialOrd,
    F: FnMut(&I::Item) -> Option<T>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            iter,
            accessor,
            range,
        } = self;

        iter.find(|item| accessor(item).is_some_and(|value| range.contains(&value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, F, T> FusedIterator for FilterPresentByRange<'_, I, F, T>
where
    I: FusedIterator,
    T: PartialOrd,
    F: FnMut(&I::Item) -> Option<T>,
{
}
