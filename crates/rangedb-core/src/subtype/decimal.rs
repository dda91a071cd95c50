use crate::{error::ElementError, subtype::Subtype};
use rust_decimal::Decimal;
use std::{cmp::Ordering, str::FromStr};

/// Arbitrary-precision decimal domain. Continuous: no `step`, so bound
/// inclusivity is preserved exactly as written.
impl Subtype for Decimal {
    const NAME: &'static str = "numeric";

    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    fn parse(text: &str) -> Result<Self, ElementError> {
        Self::from_str(text.trim()).map_err(|err| ElementError::new("numeric", text, err.to_string()))
    }

    fn format(&self) -> String {
        self.to_string()
    }
}
