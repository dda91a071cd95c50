use crate::{error::ElementError, subtype::Subtype};
use std::cmp::Ordering;

/// Text domain. Continuous, byte-wise collation; every string is a valid
/// element, so `parse` never fails. Whitespace is significant and kept.
impl Subtype for String {
    const NAME: &'static str = "text";

    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    fn parse(text: &str) -> Result<Self, ElementError> {
        Ok(text.to_string())
    }

    fn format(&self) -> String {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use crate::subtype::Subtype;

    #[test]
    fn parse_keeps_text_verbatim() {
        assert_eq!(<String as Subtype>::parse(" a b ").unwrap(), " a b ");
        assert_eq!(<String as Subtype>::parse("").unwrap(), "");
    }
}
