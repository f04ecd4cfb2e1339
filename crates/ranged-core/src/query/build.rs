use crate::{
    query::predicate::{Operand, Predicate},
    range::Range,
};

/// Build the deferred form of `range.contains(operand)`.
///
/// The result is `operand <lower> minimum AND operand <upper> maximum`, with
/// both operators taken from the range's inclusivity exactly as `contains`
/// takes them. Optional operands are unwrapped without a presence check;
/// callers filter absent values upstream.
#[must_use]
pub fn build_predicate<E, T>(operand: impl Into<Operand<E, T>>, range: &Range<T>) -> Predicate<E, T>
where
    T: Clone,
{
    let operand = operand.into();
    let inclusivity = range.inclusivity();

    Predicate::and(vec![
        Predicate::compare(operand, inclusivity.lower_op(), range.minimum().clone()),
        Predicate::compare(operand, inclusivity.upper_op(), range.maximum().clone()),
    ])
}
