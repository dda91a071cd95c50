use thiserror::Error as ThisError;

///
/// ElementError
///
/// A subtype value that failed the element parser.
///
/// Distinct from an omitted bound, which is the deliberate `Unbounded`
/// marker and never an error.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("invalid {type_name} value {input:?}: {message}")]
pub struct ElementError {
    pub type_name: &'static str,
    pub input: String,
    pub message: String,
}

impl ElementError {
    #[must_use]
    pub fn new(
        type_name: &'static str,
        input: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            type_name,
            input: input.into(),
            message: message.into(),
        }
    }
}

///
/// RangeError
///
/// Construction-time failures. Degenerate-but-defined inputs (bounds that
/// denote nothing) canonicalize to the empty range instead of erroring.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum RangeError {
    #[error("range lower bound must be less than or equal to range upper bound")]
    InvertedBounds,
}

///
/// AlgebraError
///
/// Set-algebra failures. Only the single-range union can fail; every other
/// operator handles empty or disjoint operands as a defined case.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum AlgebraError {
    #[error("result of range union would not be contiguous")]
    NonContiguous,
}

///
/// ParseError
///
/// Malformed literal text. Surfaced verbatim to the caller; never
/// recovered locally.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ParseError {
    /// A bound value was rejected by the subtype's element parser.
    #[error(transparent)]
    Element(#[from] ElementError),

    /// The literal's structure is wrong: stray characters, unbalanced
    /// delimiters, an unterminated quote.
    #[error("malformed range literal: {message} at character {position}")]
    Malformed { message: String, position: usize },

    /// The literal parsed structurally but the bounds are inverted.
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl ParseError {
    pub(crate) fn malformed(message: impl Into<String>, position: usize) -> Self {
        Self::Malformed {
            message: message.into(),
            position,
        }
    }
}
