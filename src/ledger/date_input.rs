//! Parsing of user-supplied dates and the date-range filter for the ledger.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Parse a user-supplied date in `YYYY-MM-DD` form.
///
/// Returns `Some` only if `text` exactly matches the format and denotes a
/// real calendar date. Empty or malformed input yields `None`, never an
/// error.
pub fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text, DATE_FORMAT).ok()
}

/// The optional date boundaries for a ledger range query.
///
/// Malformed boundary text is treated as if the boundary were absent.
/// This permissive behavior is deliberate: a bad filter degrades to a
/// wider query instead of an error page.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DateFilter {
    /// Matching entries must have a date on or after this date.
    pub start: Option<Date>,
    /// Matching entries must have a date on or before this date.
    pub end: Option<Date>,
}

impl DateFilter {
    /// Build a filter from the raw `start` and `end` query parameters.
    pub fn from_params(start: &str, end: &str) -> Self {
        Self {
            start: parse_date(start),
            end: parse_date(end),
        }
    }
}
