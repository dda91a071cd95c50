//! Core value engine for rangedb: canonical range and multirange values,
//! the merge algorithm that keeps multiranges minimal, the predicate and
//! set-algebra surface built on top of them, and the text codec for the
//! `[a,b)` / `{...}` literal syntax.
//!
//! Everything here is an immutable value: construction canonicalizes, and
//! every operation returns a fresh value. The engine is parameterized over
//! the element domain through the [`subtype::Subtype`] trait.

pub mod agg;
pub mod bound;
pub mod codec;
pub mod error;
pub mod multirange;
pub mod range;
pub mod subtype;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors and codec internals are not re-exported here.
///

pub mod prelude {
    pub use crate::{
        agg::{range_agg, range_intersect_agg},
        bound::{Bound, BoundSide},
        multirange::Multirange,
        range::Range,
        subtype::Subtype,
    };
}
