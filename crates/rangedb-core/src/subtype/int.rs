use crate::{error::ElementError, subtype::Subtype};
use std::cmp::Ordering;

// Discrete integer domains. `step` makes range canonicalization rewrite
// every bound pair to the `[inclusive, exclusive)` normal form, so two
// ranges denoting the same integer set always compare and print the same.
macro_rules! impl_discrete_int {
    ($($type:ty => $name:literal),* $(,)?) => {$(
        impl Subtype for $type {
            const NAME: &'static str = $name;

            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            fn parse(text: &str) -> Result<Self, ElementError> {
                text.trim()
                    .parse()
                    .map_err(|err: std::num::ParseIntError| {
                        ElementError::new($name, text, err.to_string())
                    })
            }

            fn format(&self) -> String {
                self.to_string()
            }

            fn step(&self) -> Option<Self> {
                self.checked_add(1)
            }
        }
    )*};
}

impl_discrete_int!(i32 => "integer", i64 => "bigint");
