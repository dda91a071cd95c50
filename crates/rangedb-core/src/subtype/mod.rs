mod decimal;
mod int;
mod text;
mod time;

use crate::error::ElementError;
use std::{cmp::Ordering, fmt::Debug};

///
/// Subtype
///
/// The element-domain contract that parameterizes `Range` and `Multirange`:
/// a total order, a text codec for single values, and an optional discrete
/// successor.
///
/// Contract:
/// - `compare` is a total order and must agree with `Eq`.
/// - `format` output must `parse` back to an equal value.
/// - `step` returns the immediate successor for discrete domains (`None`
///   at the domain maximum); continuous domains return `None` always,
///   which disables discrete canonicalization.
///

pub trait Subtype: Clone + Debug + Eq {
    /// Name used in parse diagnostics.
    const NAME: &'static str;

    /// Total order over the element domain.
    fn compare(&self, other: &Self) -> Ordering;

    /// Parse one element value from its text form.
    fn parse(text: &str) -> Result<Self, ElementError>;

    /// Format one element value.
    fn format(&self) -> String;

    /// Successor for discrete domains.
    fn step(&self) -> Option<Self> {
        None
    }
}
