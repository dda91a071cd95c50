//! Range and multirange interval sets with PostgreSQL semantics.
//!
//! ## Crate layout
//! - `core`: bounds, ranges, multiranges, subtype adapters, the set
//!   algebra, aggregation folds, and the text codec.
//!
//! The `prelude` module mirrors the surface application code uses.

pub use rangedb_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::error::{AlgebraError, ElementError, ParseError, RangeError};

///
/// Prelude
/// the working vocabulary: value types, the subtype seam, and the
/// aggregation folds
///

pub mod prelude {
    pub use crate::core::{
        agg::{range_agg, range_intersect_agg},
        bound::{Bound, BoundSide},
        multirange::Multirange,
        range::Range,
        subtype::Subtype,
    };
}
