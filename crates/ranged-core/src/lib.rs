//! Core of ranged: the `Range` value type, its interval algebra, eager
//! iterator filtering, and deferred predicates for query back-ends.

pub mod compare;
pub mod error;
pub mod query;
pub mod range;
pub mod seq;

///
/// Prelude
///
/// Prelude contains the vocabulary needed to build and apply ranges.
/// Errors and iterator adapter types stay in their modules.
///

pub mod prelude {
    pub use crate::{
        compare::CompareOp,
        query::{Field, OptionalField, Predicate, Query, build_predicate},
        range::{Inclusivity, Range, RangeBuilder, RangeTo as _},
        seq::RangeIterExt as _,
    };
}
