#[cfg(test)]
mod tests;

use crate::{
    bound::{BoundSide, cmp_bounds},
    range::Range,
    subtype::Subtype,
};
use derive_more::Deref;
use std::cmp::Ordering;

///
/// Multirange
///
/// A canonical disjoint union of ranges. Invariants, established by the
/// merge sweep and preserved by every operation:
/// 1. no member is empty;
/// 2. members are strictly sorted by lower bound;
/// 3. no two members overlap;
/// 4. no two members are adjacent.
///
/// The empty multirange (`{}`) is a valid value, distinct from SQL NULL
/// (which is modelled as `Option::None` at the aggregation layer).
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct Multirange<T: Subtype> {
    ranges: Vec<Range<T>>,
}

impl<T: Subtype> Multirange<T> {
    #[must_use]
    pub const fn empty() -> Self {
        Self { ranges: Vec::new() }
    }

    /// The merge algorithm: drop empties, sort by lower then upper bound,
    /// then sweep once left to right, folding each range into the current
    /// accumulator when it overlaps or touches it.
    ///
    /// Idempotent: re-running on its own output is a fixed point. The sort
    /// is `O(n log n)` (cheap on already-sorted input), the sweep `O(n)`.
    #[must_use]
    pub fn from_ranges(ranges: impl IntoIterator<Item = Range<T>>) -> Self {
        let mut pending: Vec<Range<T>> = ranges
            .into_iter()
            .filter(|range| !range.is_empty())
            .collect();
        pending.sort();

        let mut merged: Vec<Range<T>> = Vec::with_capacity(pending.len());
        for range in pending {
            let Some(acc) = merged.last_mut() else {
                merged.push(range);
                continue;
            };

            if acc.overlaps(&range) || acc.adjacent_to(&range) {
                extend_upper(acc, range);
            } else {
                merged.push(range);
            }
        }

        Self { ranges: merged }
    }

    /// Member ranges in canonical order.
    #[must_use]
    pub fn ranges(&self) -> &[Range<T>] {
        &self.ranges
    }

    #[must_use]
    pub fn into_ranges(self) -> Vec<Range<T>> {
        self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range<T>> {
        self.ranges.iter()
    }

    /// Whether a single value lies within any member.
    #[must_use]
    pub fn contains_value(&self, value: &T) -> bool {
        self.ranges.iter().any(|range| range.contains_value(value))
    }

    /// Whether every point of `range` is covered. Members are disjoint and
    /// non-adjacent, so a contiguous range is covered iff one member
    /// contains it whole.
    #[must_use]
    pub fn contains_range(&self, range: &Range<T>) -> bool {
        if range.is_empty() {
            return true;
        }

        self.ranges.iter().any(|member| member.contains_range(range))
    }

    /// Whether every point of `other` is covered, by walking both sorted
    /// sequences in lock-step.
    #[must_use]
    pub fn contains_multirange(&self, other: &Self) -> bool {
        let mut index = 0;

        'members: for range in &other.ranges {
            while index < self.ranges.len() {
                let member = &self.ranges[index];
                if member.contains_range(range) {
                    continue 'members;
                }
                if member.strictly_left_of(range) {
                    index += 1;
                    continue;
                }
                return false;
            }
            return false;
        }

        true
    }

    #[must_use]
    pub fn contained_by(&self, other: &Self) -> bool {
        other.contains_multirange(self)
    }

    /// Whether any member overlaps `range`.
    #[must_use]
    pub fn overlaps_range(&self, range: &Range<T>) -> bool {
        self.ranges.iter().any(|member| member.overlaps(range))
    }

    /// Whether every member ends before `range` begins.
    #[must_use]
    pub fn strictly_left_of_range(&self, range: &Range<T>) -> bool {
        self.ranges
            .last()
            .is_some_and(|last| last.strictly_left_of(range))
    }

    /// Whether every member begins after `range` ends.
    #[must_use]
    pub fn strictly_right_of_range(&self, range: &Range<T>) -> bool {
        self.ranges
            .first()
            .is_some_and(|first| first.strictly_right_of(range))
    }

    /// Whether `range` plugs against this multirange with no gap and no
    /// overlap. Same contiguous-union rule as the multirange form.
    #[must_use]
    pub fn adjacent_to_range(&self, range: &Range<T>) -> bool {
        self.adjacent_to(&range.clone().into())
    }

    /// Whether any cross-pair of members overlaps, via a merge-style
    /// co-sweep over the two sorted sequences.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let mut i = 0;
        let mut j = 0;

        while i < self.ranges.len() && j < other.ranges.len() {
            let a = &self.ranges[i];
            let b = &other.ranges[j];
            if a.overlaps(b) {
                return true;
            }

            // disjoint: the one ending first is entirely to the left
            if upper_cmp(a, b) == Ordering::Less {
                i += 1;
            } else {
                j += 1;
            }
        }

        false
    }

    /// Whether every member ends before `other` begins; decided on the
    /// extreme bounds. Always false for empty operands.
    #[must_use]
    pub fn strictly_left_of(&self, other: &Self) -> bool {
        match (self.ranges.last(), other.ranges.first()) {
            (Some(last), Some(first)) => last.strictly_left_of(first),
            _ => false,
        }
    }

    #[must_use]
    pub fn strictly_right_of(&self, other: &Self) -> bool {
        other.strictly_left_of(self)
    }

    /// Whether the two multiranges touch with no gap and no overlap, so
    /// that their union collapses to one contiguous range.
    #[must_use]
    pub fn adjacent_to(&self, other: &Self) -> bool {
        if self.ranges.is_empty() || other.ranges.is_empty() || self.overlaps(other) {
            return false;
        }

        self.union(other).ranges.len() == 1
    }

    /// Union: concatenate and re-run the merge sweep. Never fails; a gap
    /// simply yields a multi-member result.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_ranges(self.ranges.iter().chain(&other.ranges).cloned())
    }

    /// Intersection via co-sweep: emit the pointwise overlap of each
    /// overlapping cross-pair, advancing the side that ends first.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut i = 0;
        let mut j = 0;
        let mut out = Vec::new();

        while i < self.ranges.len() && j < other.ranges.len() {
            let a = &self.ranges[i];
            let b = &other.ranges[j];

            let piece = a.intersect(b);
            if !piece.is_empty() {
                out.push(piece);
            }

            if upper_cmp(a, b) == Ordering::Less {
                i += 1;
            } else {
                j += 1;
            }
        }

        // pieces inherit order and the gaps of both operands
        debug_assert!(is_canonical(&out));

        Self { ranges: out }
    }

    /// Difference: subtract `other`'s members from each member in a
    /// two-pointer walk over the sorted sequences. Pieces cut loose on the
    /// left of a subtrahend are final; the right remainder keeps going
    /// against later subtrahends.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut j = 0;
        let mut out = Vec::new();

        for range in &self.ranges {
            let mut current = range.clone();

            while j < other.ranges.len() && !current.is_empty() {
                let b = &other.ranges[j];
                if b.strictly_left_of(&current) {
                    // never relevant again: members of self only move right
                    j += 1;
                    continue;
                }
                if current.strictly_left_of(b) {
                    break;
                }

                // overlap: the piece left of b is final, the piece right of
                // b keeps going against later subtrahends
                let pieces = current.difference(b);
                current = Range::empty();
                for piece in pieces {
                    if piece.strictly_left_of(b) {
                        out.push(piece);
                    } else {
                        current = piece;
                    }
                }
            }

            if !current.is_empty() {
                out.push(current);
            }
        }

        debug_assert!(is_canonical(&out));

        Self { ranges: out }
    }
}

/// Grow `acc`'s upper bound to cover `range` when the sweep folds them.
/// The sort order guarantees `acc`'s lower bound is the smaller one.
fn extend_upper<T: Subtype>(acc: &mut Range<T>, range: Range<T>) {
    let extend = match (acc.upper(), range.upper()) {
        (Some(acc_upper), Some(range_upper)) => {
            cmp_bounds(acc_upper, BoundSide::Upper, range_upper, BoundSide::Upper)
                == Ordering::Less
        }
        _ => false,
    };
    if !extend {
        return;
    }

    let taken = std::mem::replace(acc, Range::empty());
    if let (Some((lower, _)), Some((_, upper))) = (taken.into_bounds(), range.into_bounds()) {
        *acc = Range::from_canonical(lower, upper);
    }
}

fn upper_cmp<T: Subtype>(a: &Range<T>, b: &Range<T>) -> Ordering {
    match (a.upper(), b.upper()) {
        (Some(a_upper), Some(b_upper)) => {
            cmp_bounds(a_upper, BoundSide::Upper, b_upper, BoundSide::Upper)
        }
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// Internal consistency check: sorted, disjoint, non-adjacent, empty-free.
fn is_canonical<T: Subtype>(ranges: &[Range<T>]) -> bool {
    ranges.windows(2).all(|pair| {
        !pair[0].is_empty()
            && !pair[1].is_empty()
            && pair[0].strictly_left_of(&pair[1])
            && !pair[0].adjacent_to(&pair[1])
    }) && ranges.first().is_none_or(|first| !first.is_empty())
}

impl<T: Subtype> From<Range<T>> for Multirange<T> {
    fn from(range: Range<T>) -> Self {
        if range.is_empty() {
            Self::empty()
        } else {
            Self {
                ranges: vec![range],
            }
        }
    }
}

impl<T: Subtype> FromIterator<Range<T>> for Multirange<T> {
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        Self::from_ranges(iter)
    }
}

impl<T: Subtype> IntoIterator for Multirange<T> {
    type Item = Range<T>;
    type IntoIter = std::vec::IntoIter<Range<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a, T: Subtype> IntoIterator for &'a Multirange<T> {
    type Item = &'a Range<T>;
    type IntoIter = std::slice::Iter<'a, Range<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl<T: Subtype> Ord for Multirange<T> {
    /// Total order: member-wise range order, then member count.
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.ranges.iter().zip(&other.ranges) {
            let cmp = a.cmp(b);
            if cmp != Ordering::Equal {
                return cmp;
            }
        }

        self.ranges.len().cmp(&other.ranges.len())
    }
}

impl<T: Subtype> PartialOrd for Multirange<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
