//! Interval algebra over `Range`.
//!
//! Every test reads the two inclusivity bits independently, so each boundary
//! check is a single conditional rather than a four-way match.

use crate::range::Range;
use std::cmp::Ordering;

impl<T: PartialOrd> Range<T> {
    /// True when every member of the range lies strictly below `value`.
    #[must_use]
    pub fn less_than(&self, value: &T) -> bool {
        if self.inclusivity().max_inclusive() {
            self.maximum() < value
        } else {
            self.maximum() <= value
        }
    }

    /// True when every member of the range lies strictly above `value`.
    #[must_use]
    pub fn greater_than(&self, value: &T) -> bool {
        if self.inclusivity().min_inclusive() {
            self.minimum() > value
        } else {
            self.minimum() >= value
        }
    }

    /// Position of the range relative to `value`.
    ///
    /// `Less` means the range precedes the value, `Greater` means it follows
    /// the value, and `Equal` means the value is inside the range.
    #[must_use]
    pub fn compare(&self, value: &T) -> Ordering {
        if self.less_than(value) {
            Ordering::Less
        } else if self.greater_than(value) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let inclusivity = self.inclusivity();

        inclusivity.lower_op().test(value, self.minimum())
            && inclusivity.upper_op().test(value, self.maximum())
    }

    /// True when `other` is a subset of this range.
    ///
    /// At a shared boundary value an exclusive endpoint cannot contain an
    /// inclusive one, since only the inner range admits the boundary itself.
    #[must_use]
    pub fn contains_range(&self, other: &Self) -> bool {
        let (inner, outer) = (other.inclusivity(), self.inclusivity());

        let min_ok = self.minimum() < other.minimum()
            || (self.minimum() == other.minimum()
                && (outer.min_inclusive() || !inner.min_inclusive()));

        let max_ok = self.maximum() > other.maximum()
            || (self.maximum() == other.maximum()
                && (outer.max_inclusive() || !inner.max_inclusive()));

        min_ok && max_ok
    }

    /// A zero-width range without both endpoints inclusive has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minimum() == self.maximum() && !self.inclusivity().is_closed()
    }

    /// True when the two ranges share at least one point.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        reaches(self, other) && reaches(other, self)
    }

    /// Overlap of the two ranges, fully inclusive, or `None` when disjoint.
    #[must_use]
    pub fn try_intersect(&self, other: &Self) -> Option<Self>
    where
        T: Clone,
    {
        if !self.intersects(other) {
            return None;
        }

        let minimum = partial_max(self.minimum(), other.minimum());
        let maximum = partial_min(self.maximum(), other.maximum());

        Some(Self::new(minimum.clone(), maximum.clone()))
    }

    /// Smallest fully inclusive range spanning both ranges.
    ///
    /// The result also covers any gap between disjoint inputs; use
    /// `try_union` to reject those.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let minimum = partial_min(self.minimum(), other.minimum());
        let maximum = partial_max(self.maximum(), other.maximum());

        Self::new(minimum.clone(), maximum.clone())
    }

    /// Union of the two ranges, or `None` when they do not intersect.
    #[must_use]
    pub fn try_union(&self, other: &Self) -> Option<Self>
    where
        T: Clone,
    {
        self.intersects(other).then(|| self.union(other))
    }

    /// Map both endpoints through `f`, keeping the inclusivity.
    ///
    /// `f` is expected to preserve order; if it does not, the endpoints are
    /// swapped back into order like any other construction.
    #[must_use]
    pub fn convert<U, F>(self, mut f: F) -> Range<U>
    where
        U: PartialOrd,
        F: FnMut(T) -> U,
    {
        let inclusivity = self.inclusivity();
        let (minimum, maximum) = self.into_bounds();

        Range::with_inclusivity(f(minimum), f(maximum), inclusivity)
    }
}

// Whether `lower`'s minimum reaches down to `upper`'s maximum.
fn reaches<T: PartialOrd>(lower: &Range<T>, upper: &Range<T>) -> bool {
    lower.minimum() < upper.maximum()
        || (lower.minimum() == upper.maximum()
            && lower.inclusivity().min_inclusive()
            && upper.inclusivity().max_inclusive())
}

fn partial_min<'a, T: PartialOrd>(left: &'a T, right: &'a T) -> &'a T {
    if right < left { right } else { left }
}

fn partial_max<'a, T: PartialOrd>(left: &'a T, right: &'a T) -> &'a T {
    if right > left { right } else { left }
}
