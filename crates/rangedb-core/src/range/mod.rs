
use crate::{
    bound::{Bound, BoundSide, cmp_bounds},
    error::{AlgebraError, RangeError},
    multirange::Multirange,
    subtype::Subtype,
};
use std::cmp::Ordering;

///
/// Range
///
/// A contiguous interval over the subtype's total order, or the
/// distinguished empty range. Canonical on construction:
/// - provably-empty bound pairs collapse to the empty range;
/// - discrete subtypes rewrite bounds to the `[inclusive, exclusive)`
///   normal form via `Subtype::step`;
/// - the canonical empty range carries no bounds.
///
/// Never mutated after construction; the algebra produces new values.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Range<T: Subtype> {
    inner: Inner<T>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Inner<T: Subtype> {
    Empty,
    Bounded { lower: Bound<T>, upper: Bound<T> },
}

/// Rewrite one bound to the discrete normal form: exclusive lower bounds
/// and inclusive upper bounds step to the successor value. A bound at the
/// domain maximum (no successor) is kept as written.
fn canonicalize<T: Subtype>(bound: Bound<T>, side: BoundSide) -> Bound<T> {
    match (side, bound) {
        (BoundSide::Lower, Bound::Exclusive(value)) => match value.step() {
            Some(next) => Bound::Inclusive(next),
            None => Bound::Exclusive(value),
        },
        (BoundSide::Upper, Bound::Inclusive(value)) => match value.step() {
            Some(next) => Bound::Exclusive(next),
            None => Bound::Inclusive(value),
        },
        (_, bound) => bound,
    }
}

/// Whether `upper` (an upper bound) and `lower` (a lower bound) touch with
/// no gap and no overlap. At equal values, exactly one side must be
/// inclusive. At distinct values, the probe range between the two facing
/// bounds is built with toggled inclusivity; the bounds are adjacent iff
/// it canonicalizes to empty, which can only happen on discrete subtypes.
fn bounds_adjacent<T: Subtype>(upper: &Bound<T>, lower: &Bound<T>) -> bool {
    let (Some(a), Some(b)) = (upper.value(), lower.value()) else {
        return false;
    };

    match a.compare(b) {
        Ordering::Equal => upper.is_inclusive() != lower.is_inclusive(),
        Ordering::Less => {
            Range::new(upper.flipped(), lower.flipped()).is_ok_and(|between| between.is_empty())
        }
        Ordering::Greater => false,
    }
}

impl<T: Subtype> Range<T> {
    /// Construct a range from two bounds, canonicalizing on the way in.
    ///
    /// Fails with `InvertedBounds` when the lower bound value is strictly
    /// greater than the upper bound value. Bound pairs that denote nothing
    /// (`(v,v)`, `[v,v)`, `(v,v]`) collapse to the empty range.
    pub fn new(lower: Bound<T>, upper: Bound<T>) -> Result<Self, RangeError> {
        if let (Some(lo), Some(hi)) = (lower.value(), upper.value()) {
            match lo.compare(hi) {
                Ordering::Greater => return Err(RangeError::InvertedBounds),
                Ordering::Equal if !(lower.is_inclusive() && upper.is_inclusive()) => {
                    return Ok(Self::empty());
                }
                _ => {}
            }
        }

        let lower = canonicalize(lower, BoundSide::Lower);
        let upper = canonicalize(upper, BoundSide::Upper);

        // stepping may collapse the interval, e.g. integer (1,2) -> [2,2)
        if let (Some(lo), Some(hi)) = (lower.value(), upper.value()) {
            let cmp = lo.compare(hi);
            debug_assert!(cmp != Ordering::Greater, "canonicalization inverted bounds");
            if cmp == Ordering::Equal && !(lower.is_inclusive() && upper.is_inclusive()) {
                return Ok(Self::empty());
            }
        }

        Ok(Self {
            inner: Inner::Bounded { lower, upper },
        })
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            inner: Inner::Empty,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.inner, Inner::Empty)
    }

    /// Lower bound; `None` for the empty range.
    #[must_use]
    pub const fn lower(&self) -> Option<&Bound<T>> {
        match &self.inner {
            Inner::Empty => None,
            Inner::Bounded { lower, .. } => Some(lower),
        }
    }

    /// Upper bound; `None` for the empty range.
    #[must_use]
    pub const fn upper(&self) -> Option<&Bound<T>> {
        match &self.inner {
            Inner::Empty => None,
            Inner::Bounded { upper, .. } => Some(upper),
        }
    }

    pub(crate) const fn bounds(&self) -> Option<(&Bound<T>, &Bound<T>)> {
        match &self.inner {
            Inner::Empty => None,
            Inner::Bounded { lower, upper } => Some((lower, upper)),
        }
    }

    pub(crate) fn into_bounds(self) -> Option<(Bound<T>, Bound<T>)> {
        match self.inner {
            Inner::Empty => None,
            Inner::Bounded { lower, upper } => Some((lower, upper)),
        }
    }

    /// Build from bounds that are already canonical and ordered.
    pub(crate) fn from_canonical(lower: Bound<T>, upper: Bound<T>) -> Self {
        debug_assert!(
            cmp_bounds(&lower, BoundSide::Lower, &upper, BoundSide::Upper) != Ordering::Greater,
            "canonical bounds out of order"
        );

        Self {
            inner: Inner::Bounded { lower, upper },
        }
    }

    /// Whether a single value lies within this range.
    #[must_use]
    pub fn contains_value(&self, value: &T) -> bool {
        let Some((lower, upper)) = self.bounds() else {
            return false;
        };

        let above_lower = match lower {
            Bound::Unbounded => true,
            Bound::Inclusive(lo) => lo.compare(value) != Ordering::Greater,
            Bound::Exclusive(lo) => lo.compare(value) == Ordering::Less,
        };
        let below_upper = match upper {
            Bound::Unbounded => true,
            Bound::Inclusive(hi) => hi.compare(value) != Ordering::Less,
            Bound::Exclusive(hi) => hi.compare(value) == Ordering::Greater,
        };

        above_lower && below_upper
    }

    /// Whether every point of `other` lies within this range. The empty
    /// range is contained by everything and contains only itself.
    #[must_use]
    pub fn contains_range(&self, other: &Self) -> bool {
        let Some((other_lower, other_upper)) = other.bounds() else {
            return true;
        };
        let Some((lower, upper)) = self.bounds() else {
            return false;
        };

        cmp_bounds(lower, BoundSide::Lower, other_lower, BoundSide::Lower) != Ordering::Greater
            && cmp_bounds(upper, BoundSide::Upper, other_upper, BoundSide::Upper)
                != Ordering::Less
    }

    #[must_use]
    pub fn contained_by(&self, other: &Self) -> bool {
        other.contains_range(self)
    }

    /// Whether some value lies in both ranges. Empty operands overlap
    /// nothing, including each other.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let (Some((lower, upper)), Some((other_lower, other_upper))) =
            (self.bounds(), other.bounds())
        else {
            return false;
        };

        cmp_bounds(lower, BoundSide::Lower, other_upper, BoundSide::Upper) != Ordering::Greater
            && cmp_bounds(other_lower, BoundSide::Lower, upper, BoundSide::Upper)
                != Ordering::Greater
    }

    /// Whether this range ends before `other` begins. Always false for
    /// empty operands.
    #[must_use]
    pub fn strictly_left_of(&self, other: &Self) -> bool {
        let (Some((_, upper)), Some((other_lower, _))) = (self.bounds(), other.bounds()) else {
            return false;
        };

        cmp_bounds(upper, BoundSide::Upper, other_lower, BoundSide::Lower) == Ordering::Less
    }

    #[must_use]
    pub fn strictly_right_of(&self, other: &Self) -> bool {
        other.strictly_left_of(self)
    }

    /// Whether the union of the two ranges is a single contiguous range
    /// with no gap and no overlap.
    #[must_use]
    pub fn adjacent_to(&self, other: &Self) -> bool {
        let (Some((lower, upper)), Some((other_lower, other_upper))) =
            (self.bounds(), other.bounds())
        else {
            return false;
        };

        bounds_adjacent(upper, other_lower) || bounds_adjacent(other_upper, lower)
    }

    /// Union of two contiguous ranges. An empty operand passes the other
    /// through; operands separated by a true gap fail with
    /// `NonContiguous`.
    pub fn union(&self, other: &Self) -> Result<Self, AlgebraError> {
        let Some((lower, upper)) = self.bounds() else {
            return Ok(other.clone());
        };
        let Some((other_lower, other_upper)) = other.bounds() else {
            return Ok(self.clone());
        };
        if !self.overlaps(other) && !self.adjacent_to(other) {
            return Err(AlgebraError::NonContiguous);
        }

        let lower = min_bound(lower, other_lower, BoundSide::Lower);
        let upper = max_bound(upper, other_upper, BoundSide::Upper);

        Ok(Self::from_canonical(lower.clone(), upper.clone()))
    }

    /// Pointwise overlap of two ranges; empty when they do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let (Some((lower, upper)), Some((other_lower, other_upper))) =
            (self.bounds(), other.bounds())
        else {
            return Self::empty();
        };
        if !self.overlaps(other) {
            return Self::empty();
        }

        let lower = max_bound(lower, other_lower, BoundSide::Lower);
        let upper = min_bound(upper, other_upper, BoundSide::Upper);

        Self::from_canonical(lower.clone(), upper.clone())
    }

    /// Points of this range not in `other`. The result is a multirange:
    /// zero members when `other` covers this range, two when it splits it,
    /// one when it truncates one side or does not overlap at all.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Multirange<T> {
        let Some((lower, upper)) = self.bounds() else {
            return Multirange::empty();
        };
        let Some((other_lower, other_upper)) = other.bounds() else {
            return Multirange::from(self.clone());
        };
        if !self.overlaps(other) {
            return Multirange::from(self.clone());
        }

        let mut pieces = Vec::with_capacity(2);

        if cmp_bounds(lower, BoundSide::Lower, other_lower, BoundSide::Lower) == Ordering::Less {
            pieces.push(Self::from_canonical(lower.clone(), other_lower.flipped()));
        }
        if cmp_bounds(upper, BoundSide::Upper, other_upper, BoundSide::Upper) == Ordering::Greater
        {
            pieces.push(Self::from_canonical(other_upper.flipped(), upper.clone()));
        }

        Multirange::from_ranges(pieces)
    }
}

fn min_bound<'a, T: Subtype>(a: &'a Bound<T>, b: &'a Bound<T>, side: BoundSide) -> &'a Bound<T> {
    if cmp_bounds(a, side, b, side) == Ordering::Greater {
        b
    } else {
        a
    }
}

fn max_bound<'a, T: Subtype>(a: &'a Bound<T>, b: &'a Bound<T>, side: BoundSide) -> &'a Bound<T> {
    if cmp_bounds(a, side, b, side) == Ordering::Less {
        b
    } else {
        a
    }
}

impl<T: Subtype> Ord for Range<T> {
    /// Total order for sorting and indexing: the empty range sorts first,
    /// then lower bounds, then upper bounds.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.bounds(), other.bounds()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some((lower, upper)), Some((other_lower, other_upper))) => {
                cmp_bounds(lower, BoundSide::Lower, other_lower, BoundSide::Lower).then_with(|| {
                    cmp_bounds(upper, BoundSide::Upper, other_upper, BoundSide::Upper)
                })
            }
        }
    }
}

impl<T: Subtype> PartialOrd for Range<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
