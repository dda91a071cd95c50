use crate::{error::ElementError, subtype::Subtype};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use std::cmp::Ordering;

/// Calendar-date domain. Discrete at day granularity, so date ranges
/// canonicalize to `[inclusive, exclusive)` like the integer domains.
impl Subtype for NaiveDate {
    const NAME: &'static str = "date";

    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    fn parse(text: &str) -> Result<Self, ElementError> {
        Self::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|err| ElementError::new("date", text, err.to_string()))
    }

    fn format(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }

    fn step(&self) -> Option<Self> {
        self.succ_opt()
    }
}

/// UTC timestamp domain. Continuous; RFC 3339 text form.
impl Subtype for DateTime<Utc> {
    const NAME: &'static str = "timestamptz";

    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    fn parse(text: &str) -> Result<Self, ElementError> {
        DateTime::parse_from_rfc3339(text.trim())
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|err| ElementError::new("timestamptz", text, err.to_string()))
    }

    fn format(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}
