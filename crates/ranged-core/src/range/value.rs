use crate::range::{Inclusivity, RangeBuilder};
#[cfg(feature = "serde")]
use serde::Serialize;
use std::{fmt, mem};

///
/// Range
///
/// A contiguous interval between two ordered endpoints.
///
/// `minimum <= maximum` holds after construction and after every mutation.
/// Violations are not reported: `new` swaps reversed endpoints, and the
/// setters move the displaced endpoint to the other slot. This is the one
/// place where an ordering failure is normalized instead of surfaced.
///
/// Ranges are plain values. Sharing one read-only is fine; the setters need
/// exclusive ownership.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Range<T> {
    minimum: T,
    maximum: T,
    inclusivity: Inclusivity,
}

impl<T: PartialOrd> Range<T> {
    /// Build a fully inclusive range, swapping reversed endpoints.
    #[must_use]
    pub fn new(minimum: T, maximum: T) -> Self {
        Self::with_inclusivity(minimum, maximum, Inclusivity::default())
    }

    /// Build a range with explicit inclusivity, swapping reversed endpoints.
    #[must_use]
    pub fn with_inclusivity(minimum: T, maximum: T, inclusivity: Inclusivity) -> Self {
        let (minimum, maximum) = if minimum > maximum {
            log::trace!("range constructed with reversed endpoints; swapping");
            (maximum, minimum)
        } else {
            (minimum, maximum)
        };

        Self {
            minimum,
            maximum,
            inclusivity,
        }
    }

    /// Assign a new minimum.
    ///
    /// A value above the current maximum becomes the new maximum and the old
    /// maximum moves into the minimum slot.
    pub fn set_minimum(&mut self, value: T) {
        if value > self.maximum {
            log::trace!("minimum assigned above maximum; swapping endpoints");
            self.minimum = mem::replace(&mut self.maximum, value);
        } else {
            self.minimum = value;
        }
    }

    /// Assign a new maximum.
    ///
    /// A value below the current minimum becomes the new minimum and the old
    /// minimum moves into the maximum slot.
    pub fn set_maximum(&mut self, value: T) {
        if self.minimum > value {
            log::trace!("maximum assigned below minimum; swapping endpoints");
            self.maximum = mem::replace(&mut self.minimum, value);
        } else {
            self.maximum = value;
        }
    }
}

impl<T> Range<T> {
    /// Start a default-then-assign construction.
    #[must_use]
    pub const fn builder() -> RangeBuilder<T> {
        RangeBuilder::new()
    }

    #[must_use]
    pub const fn minimum(&self) -> &T {
        &self.minimum
    }

    #[must_use]
    pub const fn maximum(&self) -> &T {
        &self.maximum
    }

    #[must_use]
    pub const fn inclusivity(&self) -> Inclusivity {
        self.inclusivity
    }

    pub const fn set_inclusivity(&mut self, inclusivity: Inclusivity) {
        self.inclusivity = inclusivity;
    }

    #[must_use]
    pub fn into_bounds(self) -> (T, T) {
        (self.minimum, self.maximum)
    }
}

// Inclusivity is deliberately left out of the display form.
impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.minimum, self.maximum)
    }
}
