//! ## Crate layout
//! - `core`: range values, interval algebra, iterator filters, and deferred
//!   predicates.
//!
//! The `prelude` module brings the range vocabulary and the extension traits
//! into scope.

pub use ranged_core as core;

pub use ranged_core::{
    error::{EvalError, RangeError},
    query::build_predicate,
    seq::{bounding_range, filter_by_range},
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        compare::CompareOp,
        error::{EvalError, RangeError},
        query::{Field, OptionalField, Predicate, Query, build_predicate},
        range::{Inclusivity, Range, RangeBuilder, RangeTo as _},
        seq::RangeIterExt as _,
    };
}
