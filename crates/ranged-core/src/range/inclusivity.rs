use crate::{compare::CompareOp, error::RangeError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MAX_INCLUSIVE: u8 = 0b01;
const MIN_INCLUSIVE: u8 = 0b10;

///
/// Inclusivity
///
/// Which endpoints of a range are members of the range.
///
/// The discriminant is a two-bit code: bit0 marks the maximum as inclusive,
/// bit1 marks the minimum as inclusive. Range tests read the bits one at a
/// time instead of matching all four variants.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(into = "u8", try_from = "u8")
)]
#[repr(u8)]
pub enum Inclusivity {
    ExclusiveMinExclusiveMax = 0b00,
    ExclusiveMinInclusiveMax = 0b01,
    InclusiveMinExclusiveMax = 0b10,
    #[default]
    InclusiveMinInclusiveMax = 0b11,
}

impl Inclusivity {
    pub const ALL: [Self; 4] = [
        Self::ExclusiveMinExclusiveMax,
        Self::ExclusiveMinInclusiveMax,
        Self::InclusiveMinExclusiveMax,
        Self::InclusiveMinInclusiveMax,
    ];

    /// Decode a two-bit inclusivity code.
    pub const fn from_bits(bits: u8) -> Result<Self, RangeError> {
        match bits {
            0b00 => Ok(Self::ExclusiveMinExclusiveMax),
            0b01 => Ok(Self::ExclusiveMinInclusiveMax),
            0b10 => Ok(Self::InclusiveMinExclusiveMax),
            0b11 => Ok(Self::InclusiveMinInclusiveMax),
            other => Err(RangeError::InvalidInclusivity(other)),
        }
    }

    #[must_use]
    pub const fn from_flags(min_inclusive: bool, max_inclusive: bool) -> Self {
        match (min_inclusive, max_inclusive) {
            (false, false) => Self::ExclusiveMinExclusiveMax,
            (false, true) => Self::ExclusiveMinInclusiveMax,
            (true, false) => Self::InclusiveMinExclusiveMax,
            (true, true) => Self::InclusiveMinInclusiveMax,
        }
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn min_inclusive(self) -> bool {
        self.bits() & MIN_INCLUSIVE == MIN_INCLUSIVE
    }

    #[must_use]
    pub const fn max_inclusive(self) -> bool {
        self.bits() & MAX_INCLUSIVE == MAX_INCLUSIVE
    }

    #[must_use]
    pub const fn is_closed(self) -> bool {
        self.min_inclusive() && self.max_inclusive()
    }

    /// Operator a candidate must satisfy against the minimum (`value <op> minimum`).
    #[must_use]
    pub const fn lower_op(self) -> CompareOp {
        if self.min_inclusive() {
            CompareOp::Gte
        } else {
            CompareOp::Gt
        }
    }

    /// Operator a candidate must satisfy against the maximum (`value <op> maximum`).
    #[must_use]
    pub const fn upper_op(self) -> CompareOp {
        if self.max_inclusive() {
            CompareOp::Lte
        } else {
            CompareOp::Lt
        }
    }
}

impl From<Inclusivity> for u8 {
    fn from(inclusivity: Inclusivity) -> Self {
        inclusivity.bits()
    }
}

impl TryFrom<u8> for Inclusivity {
    type Error = RangeError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}
