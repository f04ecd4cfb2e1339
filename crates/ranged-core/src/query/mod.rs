//! Deferred range predicates.
//!
//! `build_predicate` turns a range and a field accessor into a predicate tree
//! equivalent to `Range::contains`. A back-end can translate the tree, or
//! evaluate it in memory through `Predicate::eval`; `Query` is the in-memory
//! back-end.

mod build;
mod deferred;
mod eval;
mod field;
mod predicate;

#[cfg(test)]
mod tests;

pub use build::build_predicate;
pub use deferred::{EntityFilter, Query};
pub use field::{Field, OptionalField};
pub use predicate::{ComparePredicate, Operand, Predicate};
