use crate::subtype::Subtype;
use std::cmp::Ordering;

///
/// BoundSide
///
/// Which side of a range a bound occupies. Bounds do not store their side;
/// it is implied by position and passed explicitly to comparisons.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoundSide {
    Lower,
    Upper,
}

///
/// Bound
///
/// One endpoint of a range: unbounded, or a value tagged inclusive or
/// exclusive. An unbounded lower bound sorts below every value, an
/// unbounded upper bound above every value.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Bound<T> {
    Unbounded,
    Inclusive(T),
    Exclusive(T),
}

impl<T> Bound<T> {
    /// The bound value, if the bound is finite.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Unbounded => None,
            Self::Inclusive(value) | Self::Exclusive(value) => Some(value),
        }
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    #[must_use]
    pub const fn is_inclusive(&self) -> bool {
        matches!(self, Self::Inclusive(_))
    }

    /// Toggle inclusivity, keeping the value. Identity on `Unbounded`.
    ///
    /// Flipping a bound and moving it to the opposite side yields the
    /// bound of the complementary interval; difference and adjacency are
    /// built on this.
    #[must_use]
    pub(crate) fn flipped(&self) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Unbounded => Self::Unbounded,
            Self::Inclusive(value) => Self::Exclusive(value.clone()),
            Self::Exclusive(value) => Self::Inclusive(value.clone()),
        }
    }
}

/// Total order over bounds, aware of the side each bound occupies.
///
/// Values order first. At equal values the tie-break is exhaustive over
/// inclusivity and side:
/// - both inclusive: equal (the bounds denote the same point);
/// - inclusive vs. exclusive: the exclusive bound is past the value in its
///   own direction, so an exclusive lower sorts above and an exclusive
///   upper sorts below the inclusive bound;
/// - both exclusive: equal on the same side, otherwise the lower bound
///   sorts above the upper bound (the point itself belongs to neither).
#[must_use]
pub fn cmp_bounds<T: Subtype>(
    a: &Bound<T>,
    a_side: BoundSide,
    b: &Bound<T>,
    b_side: BoundSide,
) -> Ordering {
    match (a, b) {
        (Bound::Unbounded, Bound::Unbounded) => match (a_side, b_side) {
            (BoundSide::Lower, BoundSide::Lower) | (BoundSide::Upper, BoundSide::Upper) => {
                Ordering::Equal
            }
            (BoundSide::Lower, BoundSide::Upper) => Ordering::Less,
            (BoundSide::Upper, BoundSide::Lower) => Ordering::Greater,
        },
        (Bound::Unbounded, _) => match a_side {
            BoundSide::Lower => Ordering::Less,
            BoundSide::Upper => Ordering::Greater,
        },
        (_, Bound::Unbounded) => match b_side {
            BoundSide::Lower => Ordering::Greater,
            BoundSide::Upper => Ordering::Less,
        },
        (
            Bound::Inclusive(a_value) | Bound::Exclusive(a_value),
            Bound::Inclusive(b_value) | Bound::Exclusive(b_value),
        ) => {
            let cmp = a_value.compare(b_value);
            if cmp != Ordering::Equal {
                return cmp;
            }

            match (a.is_inclusive(), b.is_inclusive()) {
                (true, true) => Ordering::Equal,
                (true, false) => match b_side {
                    BoundSide::Lower => Ordering::Less,
                    BoundSide::Upper => Ordering::Greater,
                },
                (false, true) => match a_side {
                    BoundSide::Lower => Ordering::Greater,
                    BoundSide::Upper => Ordering::Less,
                },
                (false, false) => {
                    if a_side == b_side {
                        Ordering::Equal
                    } else {
                        match a_side {
                            BoundSide::Lower => Ordering::Greater,
                            BoundSide::Upper => Ordering::Less,
                        }
                    }
                }
            }
        }
    }
}
