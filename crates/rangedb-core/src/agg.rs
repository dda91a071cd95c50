//! Aggregation folds over streams of range or multirange inputs.
//!
//! SQL NULL is modelled as `Option::None`: NULL inputs are skipped, and a
//! group with no non-NULL input aggregates to `None`. That is distinct
//! from `Some(Multirange::empty())`, which is the `{}` value.

use crate::{multirange::Multirange, subtype::Subtype};

/// Fold a stream of inputs into their merged union.
///
/// Members are collected first and merged once at the end; the result is
/// identical to re-merging after every element, and the fold is
/// insensitive to input permutation.
pub fn range_agg<T, I, R>(inputs: I) -> Option<Multirange<T>>
where
    T: Subtype,
    I: IntoIterator<Item = Option<R>>,
    R: Into<Multirange<T>>,
{
    let mut collected = Vec::new();
    let mut non_null = false;

    for input in inputs {
        let Some(input) = input else { continue };
        non_null = true;
        collected.extend(input.into().into_ranges());
    }

    non_null.then(|| Multirange::from_ranges(collected))
}

/// Fold a stream of inputs into their common intersection.
///
/// The first non-NULL input seeds the accumulator; every later input
/// narrows it. Once the accumulator is empty the remaining intersections
/// are skipped (the result is monotonically non-growing).
pub fn range_intersect_agg<T, I, R>(inputs: I) -> Option<Multirange<T>>
where
    T: Subtype,
    I: IntoIterator<Item = Option<R>>,
    R: Into<Multirange<T>>,
{
    let mut acc: Option<Multirange<T>> = None;

    for input in inputs {
        let Some(input) = input else { continue };

        acc = Some(match acc {
            None => input.into(),
            Some(prev) if prev.is_empty() => prev,
            Some(prev) => prev.intersect(&input.into()),
        });
    }

    acc
}
