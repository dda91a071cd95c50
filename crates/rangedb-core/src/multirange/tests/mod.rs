mod property;

use crate::{multirange::Multirange, range::Range};
use std::cmp::Ordering;

// ---- helpers -----------------------------------------------------------

fn int(literal: &str) -> Range<i32> {
    literal.parse().expect("int range literal")
}

fn mr(literal: &str) -> Multirange<i32> {
    literal.parse().expect("int multirange literal")
}

// ---- predicates --------------------------------------------------------

#[test]
fn contains_value() {
    let set = mr("{[1,3),[8,10)}");
    assert!(set.contains_value(&1));
    assert!(set.contains_value(&9));
    assert!(!set.contains_value(&3));
    assert!(!set.contains_value(&5));
    assert!(!Multirange::<i32>::empty().contains_value(&1));
}

#[test]
fn contains_range() {
    let set = mr("{[1,5),[8,10)}");
    assert!(set.contains_range(&int("[2,4)")));
    assert!(set.contains_range(&int("[8,10)")));
    // spans the gap between members
    assert!(!set.contains_range(&int("[4,9)")));
    assert!(!set.contains_range(&int("[6,7)")));
    // every set covers the empty range, including {}
    assert!(set.contains_range(&Range::empty()));
    assert!(mr("{}").contains_range(&Range::empty()));
}

#[test]
fn contains_multirange() {
    let set = mr("{[1,5),[8,12)}");
    assert!(set.contains_multirange(&mr("{[2,3),[9,10)}")));
    assert!(set.contains_multirange(&set));
    assert!(set.contains_multirange(&mr("{}")));
    assert!(!set.contains_multirange(&mr("{[2,3),[6,7)}")));
    assert!(!mr("{}").contains_multirange(&set));
    assert!(mr("{}").contains_multirange(&mr("{}")));
    assert!(mr("{[2,3)}").contained_by(&set));
}

#[test]
fn overlap() {
    let set = mr("{[1,3),[8,10)}");
    assert!(set.overlaps_range(&int("[2,9)")));
    assert!(!set.overlaps_range(&int("[4,6)")));
    assert!(!set.overlaps_range(&Range::empty()));

    assert!(set.overlaps(&mr("{[4,6),[9,20)}")));
    assert!(!set.overlaps(&mr("{[3,8),[10,20)}")));
    assert!(!set.overlaps(&mr("{}")));
    assert!(!mr("{}").overlaps(&mr("{}")));
}

#[test]
fn overlap_skips_members_between_the_others() {
    // the co-sweep has to step past [10,11) on the left side
    let a = mr("{[1,2),[10,11),[20,21)}");
    let b = mr("{[5,6),[20,30)}");
    assert!(a.overlaps(&b));
    assert!(!a.overlaps(&mr("{[5,6),[15,16)}")));
}

#[test]
fn strict_position() {
    let left = mr("{[1,2),[3,4)}");
    let right = mr("{[4,5),[9,10)}");
    assert!(left.strictly_left_of(&right));
    assert!(right.strictly_right_of(&left));
    assert!(!right.strictly_left_of(&left));
    // extreme members decide: [3,4) reaches right's first member
    assert!(!mr("{[1,2),[3,5)}").strictly_left_of(&right));
    assert!(!mr("{}").strictly_left_of(&right));
    assert!(!left.strictly_left_of(&mr("{}")));
}

#[test]
fn adjacency() {
    assert!(mr("{[1,3)}").adjacent_to(&mr("{[3,5)}")));
    assert!(mr("{[3,5)}").adjacent_to(&mr("{[1,3)}")));
    // one operand fills the other's gap exactly
    assert!(mr("{[1,3),[5,10)}").adjacent_to(&mr("{[3,5)}")));
    assert!(!mr("{[1,3)}").adjacent_to(&mr("{[4,5)}")));
    assert!(!mr("{[1,3)}").adjacent_to(&mr("{[2,5)}")));
    assert!(!mr("{}").adjacent_to(&mr("{[1,3)}")));
    // touching but the union still has a gap elsewhere
    assert!(!mr("{[1,3),[5,10),[20,21)}").adjacent_to(&mr("{[3,5)}")));
    assert!(!mr("{[5,6)}").adjacent_to(&mr("{[1,3),[6,8)}")));
}

#[test]
fn range_position_predicates() {
    let set = mr("{[3,5),[8,10)}");
    assert!(set.strictly_right_of_range(&int("[1,3)")));
    assert!(set.strictly_left_of_range(&int("[10,12)")));
    assert!(!set.strictly_left_of_range(&int("[9,12)")));
    assert!(!set.strictly_right_of_range(&int("[1,4)")));
    assert!(!mr("{}").strictly_left_of_range(&int("[1,2)")));

    assert!(mr("{[3,5)}").adjacent_to_range(&int("[5,8)")));
    assert!(mr("{[3,5),[8,10)}").adjacent_to_range(&int("[5,8)")));
    assert!(!mr("{[3,5)}").adjacent_to_range(&int("[6,8)")));
    assert!(!mr("{[3,5)}").adjacent_to_range(&Range::empty()));
}

// ---- set algebra -------------------------------------------------------

#[test]
fn union_re_merges() {
    assert_eq!(mr("{[1,3)}").union(&mr("{[3,5)}")), mr("{[1,5)}"));
    assert_eq!(
        mr("{[1,2),[8,9)}").union(&mr("{[4,5)}")),
        mr("{[1,2),[4,5),[8,9)}")
    );
    assert_eq!(mr("{}").union(&mr("{[1,2)}")), mr("{[1,2)}"));
}

#[test]
fn intersect_emits_pairwise_overlaps() {
    assert_eq!(
        mr("{[1,5),[7,10)}").intersect(&mr("{[3,8)}")),
        mr("{[3,5),[7,8)}")
    );
    assert_eq!(mr("{[1,5)}").intersect(&mr("{[5,9)}")), mr("{}"));
    assert_eq!(mr("{[1,5)}").intersect(&mr("{}")), mr("{}"));
    assert_eq!(
        mr("{[1,20)}").intersect(&mr("{[2,3),[5,6),[9,10)}")),
        mr("{[2,3),[5,6),[9,10)}")
    );
}

#[test]
fn difference_carries_the_remainder_forward() {
    assert_eq!(
        mr("{[1,8)}").difference(&mr("{[2,3),[5,)}")),
        mr("{[1,2),[3,5)}")
    );
    assert_eq!(
        mr("{[1,5),[8,12)}").difference(&mr("{[3,9)}")),
        mr("{[1,3),[9,12)}")
    );
    assert_eq!(mr("{[1,5)}").difference(&mr("{[1,5)}")), mr("{}"));
    assert_eq!(mr("{[1,5)}").difference(&mr("{}")), mr("{[1,5)}"));
    assert_eq!(mr("{}").difference(&mr("{[1,5)}")), mr("{}"));
}

#[test]
fn difference_of_disjoint_sets_is_identity() {
    let a: Multirange<rust_decimal::Decimal> =
        "{[1.1,2.2)}".parse().expect("numeric multirange");
    let b = "{[3.3,4.4)}".parse().expect("numeric multirange");
    assert_eq!(a.difference(&b), a);
}

// ---- conversions and ordering ------------------------------------------

#[test]
fn from_range() {
    assert_eq!(Multirange::from(int("[1,2)")), mr("{[1,2)}"));
    assert_eq!(Multirange::from(Range::<i32>::empty()), mr("{}"));
}

#[test]
fn collects_from_iterator() {
    let set: Multirange<i32> = [int("[3,4)"), int("[1,2)"), int("[2,3)")]
        .into_iter()
        .collect();
    assert_eq!(set, mr("{[1,4)}"));
}

#[test]
fn order_is_member_wise_then_length() {
    assert_eq!(mr("{}").cmp(&mr("{[1,2)}")), Ordering::Less);
    assert_eq!(mr("{[1,2)}").cmp(&mr("{[1,2),[4,5)}")), Ordering::Less);
    assert_eq!(mr("{[1,2)}").cmp(&mr("{[1,3)}")), Ordering::Less);
    assert_eq!(mr("{[2,3)}").cmp(&mr("{[1,2),[4,5)}")), Ordering::Greater);
    assert_eq!(mr("{[1,2)}").cmp(&mr("{[1,2)}")), Ordering::Equal);
}
