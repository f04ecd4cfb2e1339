use crate::range::{Inclusivity, Range};
use proptest::prelude::*;

fn arb_inclusivity() -> impl Strategy<Value = Inclusivity> {
    prop_oneof![
        Just(Inclusivity::ExclusiveMinExclusiveMax),
        Just(Inclusivity::ExclusiveMinInclusiveMax),
        Just(Inclusivity::InclusiveMinExclusiveMax),
        Just(Inclusivity::InclusiveMinInclusiveMax),
    ]
}

fn arb_range() -> impl Strategy<Value = Range<i32>> {
    (-50..50i32, -50..50i32, arb_inclusivity())
        .prop_map(|(a, b, inclusivity)| Range::with_inclusivity(a, b, inclusivity))
}

// Integer ranges are sampled at half steps so exclusive bounds still have
// interior points.
fn points(range: &Range<i32>) -> impl Iterator<Item = f64> {
    let min = f64::from(*range.minimum());
    let steps = (range.maximum() - range.minimum()) * 2;

    (0..=steps).map(move |step| f64::from(step).mul_add(0.5, min))
}

fn as_f64(range: &Range<i32>) -> Range<f64> {
    range.convert(f64::from)
}

proptest! {
    #[test]
    fn construction_orders_endpoints(a in any::<i32>(), b in any::<i32>()) {
        let range = Range::new(a, b);

        prop_assert!(range.minimum() <= range.maximum());
        prop_assert_eq!(range, Range::new(b, a));
    }

    #[test]
    fn closed_range_contains_its_endpoints(a in -1000..1000i32, b in -1000..1000i32) {
        let range = Range::new(a, b);
        let (min, max) = (*range.minimum(), *range.maximum());

        prop_assert!(range.contains(&min));
        prop_assert!(range.contains(&max));
        prop_assert!(!range.contains(&(min - 1)));
        prop_assert!(!range.contains(&(max + 1)));
    }

    #[test]
    fn set_minimum_above_maximum_matches_fresh_range(
        a in -1000..1000i32,
        b in -1000..1000i32,
        offset in 1..100i32,
    ) {
        let mut range = Range::new(a, b);
        let old_maximum = *range.maximum();
        range.set_minimum(old_maximum + offset);

        prop_assert_eq!(range, Range::new(old_maximum, old_maximum + offset));
    }

    #[test]
    fn setters_preserve_ordering(range in arb_range(), value in -100..100i32, minimum in any::<bool>()) {
        let mut range = range;
        if minimum {
            range.set_minimum(value);
        } else {
            range.set_maximum(value);
        }

        prop_assert!(range.minimum() <= range.maximum());
    }

    #[test]
    fn compare_agrees_with_contains(range in arb_range(), value in -60..60i32) {
        let inside = range.contains(&value);

        prop_assert_eq!(range.compare(&value).is_eq(), inside);
        prop_assert!(!(range.less_than(&value) && range.greater_than(&value)));
    }

    #[test]
    fn intersects_is_symmetric(a in arb_range(), b in arb_range()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn intersects_iff_a_shared_point_exists(a in arb_range(), b in arb_range()) {
        let (fa, fb) = (as_f64(&a), as_f64(&b));
        let shared = points(&a).any(|p| fa.contains(&p) && fb.contains(&p));

        prop_assert_eq!(a.intersects(&b), shared);
    }

    #[test]
    fn try_intersect_matches_intersects(a in arb_range(), b in arb_range()) {
        match a.try_intersect(&b) {
            Some(overlap) => {
                prop_assert!(a.intersects(&b));
                prop_assert_eq!(*overlap.minimum(), *a.minimum().max(b.minimum()));
                prop_assert_eq!(*overlap.maximum(), *a.maximum().min(b.maximum()));
                prop_assert_eq!(overlap.inclusivity(), Inclusivity::InclusiveMinInclusiveMax);
            }
            None => prop_assert!(!a.intersects(&b)),
        }
    }

    #[test]
    fn contains_range_is_reflexive(range in arb_range()) {
        prop_assert!(range.contains_range(&range));
    }

    #[test]
    fn contains_range_implies_point_containment(a in arb_range(), b in arb_range()) {
        if a.contains_range(&b) {
            let (fa, fb) = (as_f64(&a), as_f64(&b));
            for point in points(&b) {
                if fb.contains(&point) {
                    prop_assert!(fa.contains(&point));
                }
            }
        }
    }

    #[test]
    fn union_covers_both_ranges(a in arb_range(), b in arb_range()) {
        let union = a.union(&b);

        prop_assert!(union.contains_range(&a));
        prop_assert!(union.contains_range(&b));
    }
}
