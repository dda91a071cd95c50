use crate::{bound::Bound, multirange::Multirange, range::Range};
use proptest::prelude::*;

prop_compose! {
    /// Ranges over a small integer domain so overlap, adjacency, and
    /// unbounded sides all show up often.
    fn arb_range()(
        a in 0i32..=20,
        b in 0i32..=20,
        lower_inclusive in any::<bool>(),
        upper_inclusive in any::<bool>(),
        lower_unbounded in proptest::bool::weighted(0.1),
        upper_unbounded in proptest::bool::weighted(0.1),
    ) -> Range<i32> {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lower = if lower_unbounded {
            Bound::Unbounded
        } else if lower_inclusive {
            Bound::Inclusive(lo)
        } else {
            Bound::Exclusive(lo)
        };
        let upper = if upper_unbounded {
            Bound::Unbounded
        } else if upper_inclusive {
            Bound::Inclusive(hi)
        } else {
            Bound::Exclusive(hi)
        };

        Range::new(lower, upper).expect("bounds are ordered by construction")
    }
}

fn arb_ranges() -> impl Strategy<Value = Vec<Range<i32>>> {
    proptest::collection::vec(arb_range(), 0..8)
}

fn arb_multirange() -> impl Strategy<Value = Multirange<i32>> {
    arb_ranges().prop_map(Multirange::from_ranges)
}

/// Every value the inputs cover, and nothing else.
fn covered_values(set: &Multirange<i32>) -> Vec<i32> {
    (-1..=22).filter(|v| set.contains_value(v)).collect()
}

proptest! {
    #[test]
    fn merge_output_is_canonical(inputs in arb_ranges()) {
        let set = Multirange::from_ranges(inputs);

        for member in set.ranges() {
            prop_assert!(!member.is_empty());
        }
        for pair in set.ranges().windows(2) {
            prop_assert!(pair[0].strictly_left_of(&pair[1]));
            prop_assert!(!pair[0].adjacent_to(&pair[1]));
        }
    }

    #[test]
    fn merge_preserves_coverage(inputs in arb_ranges()) {
        let set = Multirange::from_ranges(inputs.clone());

        for value in -1..=22 {
            let in_inputs = inputs.iter().any(|range| range.contains_value(&value));
            prop_assert_eq!(set.contains_value(&value), in_inputs);
        }
    }

    #[test]
    fn merge_is_a_fixed_point(inputs in arb_ranges()) {
        let set = Multirange::from_ranges(inputs);
        let again = Multirange::from_ranges(set.ranges().to_vec());
        prop_assert_eq!(again, set);
    }

    #[test]
    fn merge_ignores_input_order(inputs in arb_ranges()) {
        let forward = Multirange::from_ranges(inputs.clone());
        let mut reversed = inputs;
        reversed.reverse();
        prop_assert_eq!(Multirange::from_ranges(reversed), forward);
    }

    #[test]
    fn difference_and_intersection_partition(
        a in arb_multirange(),
        b in arb_multirange(),
    ) {
        let diff = a.difference(&b);
        let common = a.intersect(&b);
        prop_assert_eq!(diff.union(&common), a);
    }

    #[test]
    fn difference_is_within_minuend_and_misses_subtrahend(
        a in arb_multirange(),
        b in arb_multirange(),
    ) {
        let diff = a.difference(&b);
        prop_assert!(a.contains_multirange(&diff));
        prop_assert!(!diff.overlaps(&b));
    }

    #[test]
    fn intersection_is_within_both(a in arb_multirange(), b in arb_multirange()) {
        let common = a.intersect(&b);
        prop_assert!(a.contains_multirange(&common));
        prop_assert!(b.contains_multirange(&common));
        prop_assert_eq!(b.intersect(&a), common);
    }

    #[test]
    fn union_covers_both(a in arb_multirange(), b in arb_multirange()) {
        let union = a.union(&b);
        prop_assert!(union.contains_multirange(&a));
        prop_assert!(union.contains_multirange(&b));
        prop_assert_eq!(covered_values(&union), {
            let mut values = covered_values(&a);
            for value in covered_values(&b) {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
            values.sort_unstable();
            values
        });
    }

    #[test]
    fn nonempty_ranges_are_left_overlapping_or_right(
        a in arb_range(),
        b in arb_range(),
    ) {
        prop_assume!(!a.is_empty() && !b.is_empty());

        let states = [
            a.strictly_left_of(&b),
            a.overlaps(&b),
            a.strictly_right_of(&b),
        ];
        prop_assert_eq!(states.iter().filter(|state| **state).count(), 1);
    }

    #[test]
    fn adjacency_excludes_overlap(a in arb_range(), b in arb_range()) {
        if a.adjacent_to(&b) {
            prop_assert!(!a.overlaps(&b));
        }
    }

    #[test]
    fn range_text_round_trips(range in arb_range()) {
        let parsed: Range<i32> = range.to_string().parse().unwrap();
        prop_assert_eq!(parsed, range);
    }

    #[test]
    fn multirange_text_round_trips(set in arb_multirange()) {
        let parsed: Multirange<i32> = set.to_string().parse().unwrap();
        prop_assert_eq!(parsed, set);
    }
}
