#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

///
/// CompareOp
///
/// Ordering operators shared by eager range tests and deferred predicates.
/// Both paths pick their operators through `Inclusivity::lower_op` and
/// `Inclusivity::upper_op`, so they cannot drift apart.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[repr(u8)]
pub enum CompareOp {
    Lt = 0x01,
    Lte = 0x02,
    Gt = 0x03,
    Gte = 0x04,
}

impl CompareOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }

    /// Returns true when the inclusive form of the operator admits equality.
    #[must_use]
    pub const fn is_inclusive(self) -> bool {
        matches!(self, Self::Lte | Self::Gte)
    }

    /// Apply the operator as `left <op> right`.
    ///
    /// Incomparable operands (e.g. NaN) never satisfy any operator.
    #[must_use]
    pub fn test<T: PartialOrd + ?Sized>(self, left: &T, right: &T) -> bool {
        let ordering = left.partial_cmp(right);

        match self {
            Self::Lt => ordering.is_some_and(Ordering::is_lt),
            Self::Lte => ordering.is_some_and(Ordering::is_le),
            Self::Gt => ordering.is_some_and(Ordering::is_gt),
            Self::Gte => ordering.is_some_and(Ordering::is_ge),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
