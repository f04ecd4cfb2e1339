use crate::{
    error::{Endpoint, RangeError},
    range::{Inclusivity, Range},
};
use derive_more::Deref;

///
/// Settable
///
/// An endpoint cell that knows whether it has been assigned.
///

#[derive(Clone, Copy, Debug, Default, Deref, Eq, PartialEq)]
pub struct Settable<T>(Option<T>);

impl<T> Settable<T> {
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn set(&mut self, value: T) {
        self.0 = Some(value);
    }

    fn replace(&mut self, value: T) -> Option<T> {
        self.0.replace(value)
    }

    fn into_inner(self) -> Option<T> {
        self.0
    }
}

///
/// RangeBuilder
///
/// Default-then-assign construction for `Range`.
///
/// The swap rule only applies once the opposite endpoint has been assigned,
/// so assigning the maximum before the minimum never compares against a
/// placeholder value.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RangeBuilder<T> {
    minimum: Settable<T>,
    maximum: Settable<T>,
    inclusivity: Inclusivity,
}

impl<T> RangeBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            minimum: Settable::unset(),
            maximum: Settable::unset(),
            inclusivity: Inclusivity::InclusiveMinInclusiveMax,
        }
    }

    #[must_use]
    pub fn minimum(&self) -> Option<&T> {
        self.minimum.as_ref()
    }

    #[must_use]
    pub fn maximum(&self) -> Option<&T> {
        self.maximum.as_ref()
    }

    #[must_use]
    pub const fn inclusivity(&self) -> Inclusivity {
        self.inclusivity
    }

    pub const fn set_inclusivity(&mut self, inclusivity: Inclusivity) {
        self.inclusivity = inclusivity;
    }

    #[must_use]
    pub const fn with_inclusivity(mut self, inclusivity: Inclusivity) -> Self {
        self.inclusivity = inclusivity;
        self
    }

    /// Finish construction; both endpoints must have been assigned.
    pub fn build(self) -> Result<Range<T>, RangeError>
    where
        T: PartialOrd,
    {
        let minimum = self
            .minimum
            .into_inner()
            .ok_or(RangeError::UnsetEndpoint(Endpoint::Minimum))?;
        let maximum = self
            .maximum
            .into_inner()
            .ok_or(RangeError::UnsetEndpoint(Endpoint::Maximum))?;

        Ok(Range::with_inclusivity(minimum, maximum, self.inclusivity))
    }
}

impl<T: PartialOrd> RangeBuilder<T> {
    pub fn set_minimum(&mut self, value: T) {
        let above_maximum = self.maximum.as_ref().is_some_and(|maximum| value > *maximum);

        if above_maximum {
            log::trace!("minimum assigned above maximum; swapping endpoints");
            if let Some(previous) = self.maximum.replace(value) {
                self.minimum.set(previous);
            }
        } else {
            self.minimum.set(value);
        }
    }

    pub fn set_maximum(&mut self, value: T) {
        let below_minimum = self.minimum.as_ref().is_some_and(|minimum| *minimum > value);

        if below_minimum {
            log::trace!("maximum assigned below minimum; swapping endpoints");
            if let Some(previous) = self.minimum.replace(value) {
                self.maximum.set(previous);
            }
        } else {
            self.maximum.set(value);
        }
    }

    #[must_use]
    pub fn with_minimum(mut self, value: T) -> Self {
        self.set_minimum(value);
        self
    }

    #[must_use]
    pub fn with_maximum(mut self, value: T) -> Self {
        self.set_maximum(value);
        self
    }
}

impl<T> Default for RangeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Range<T>> for RangeBuilder<T> {
    fn from(range: Range<T>) -> Self {
        let inclusivity = range.inclusivity();
        let (minimum, maximum) = range.into_bounds();

        Self {
            minimum: Settable(Some(minimum)),
            maximum: Settable(Some(maximum)),
            inclusivity,
        }
    }
}
