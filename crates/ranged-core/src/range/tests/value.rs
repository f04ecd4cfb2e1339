use crate::range::{Inclusivity, Range, RangeTo};
use std::hash::{DefaultHasher, Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn new_keeps_ordered_endpoints() {
    let range = Range::new(1, 10);

    assert_eq!(*range.minimum(), 1);
    assert_eq!(*range.maximum(), 10);
    assert_eq!(range.inclusivity(), Inclusivity::InclusiveMinInclusiveMax);
}

#[test]
fn new_swaps_reversed_endpoints() {
    assert_eq!(Range::new(3, 1), Range::new(1, 3));
    assert_eq!(
        Range::with_inclusivity(9.5, -2.0, Inclusivity::ExclusiveMinInclusiveMax),
        Range::with_inclusivity(-2.0, 9.5, Inclusivity::ExclusiveMinInclusiveMax)
    );
}

#[test]
fn set_minimum_above_maximum_swaps_in_old_maximum() {
    let mut range = Range::new(1, 3);
    range.set_minimum(4);

    assert_eq!(range, Range::new(3, 4));
}

#[test]
fn set_maximum_below_minimum_swaps_in_old_minimum() {
    let mut range = Range::new(1, 3);
    range.set_maximum(0);

    assert_eq!(range, Range::new(0, 1));
}

#[test]
fn setters_within_bounds_assign_in_place() {
    let mut range = Range::new(1, 10);
    range.set_minimum(4);
    range.set_maximum(6);

    assert_eq!(range, Range::new(4, 6));
}

#[test]
fn setters_keep_inclusivity() {
    let mut range = Range::with_inclusivity(1, 3, Inclusivity::ExclusiveMinExclusiveMax);
    range.set_minimum(7);

    assert_eq!(
        range,
        Range::with_inclusivity(3, 7, Inclusivity::ExclusiveMinExclusiveMax)
    );
}

#[test]
fn equality_includes_inclusivity() {
    let closed = Range::new(1, 4);
    let mut open = Range::new(1, 4);
    open.set_inclusivity(Inclusivity::ExclusiveMinExclusiveMax);

    assert_ne!(closed, open);
    assert_eq!(open, Range::with_inclusivity(4, 1, Inclusivity::ExclusiveMinExclusiveMax));
}

#[test]
fn equal_ranges_hash_equally_regardless_of_construction_order() {
    assert_eq!(hash_of(&Range::new(1, 3)), hash_of(&Range::new(3, 1)));
}

#[test]
fn display_ignores_inclusivity() {
    assert_eq!(Range::new(1, 3).to_string(), "[1 - 3]");
    assert_eq!(
        Range::with_inclusivity(1, 3, Inclusivity::ExclusiveMinExclusiveMax).to_string(),
        "[1 - 3]"
    );
}

#[test]
fn range_to_builds_from_a_value() {
    assert_eq!(1_i32.range_to(10), Range::new(1, 10));
    assert_eq!(
        10_i32.range_to_with(1, Inclusivity::InclusiveMinExclusiveMax),
        Range::with_inclusivity(1, 10, Inclusivity::InclusiveMinExclusiveMax)
    );
}

#[test]
fn into_bounds_returns_ordered_pair() {
    assert_eq!(Range::new("b", "a").into_bounds(), ("a", "b"));
}

#[cfg(feature = "serde")]
#[test]
fn serializes_bounds_and_inclusivity_code() {
    let range = Range::with_inclusivity(2, 5, Inclusivity::ExclusiveMinInclusiveMax);
    let json = serde_json::to_value(range).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "minimum": 2, "maximum": 5, "inclusivity": 1 })
    );
}
