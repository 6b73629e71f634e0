//! Regex patterns and value-shape checks for form validation

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `local@domain.tld` shape; no whitespace or extra `@`
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Optional `$`, comma-groupable digits, optional `.` with up to 2 decimals
    static ref CURRENCY_PATTERN: Regex = Regex::new(r"^\$?[\d,]+\.?\d{0,2}$").unwrap();

    /// Strict currency for field-level checks: leading `$` mandatory
    static ref STRICT_CURRENCY_PATTERN: Regex = Regex::new(r"^\$[\d,]+\.?\d{0,2}$").unwrap();

    /// `(XXX) XXX-XXXX`
    static ref PHONE_PATTERN: Regex = Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").unwrap();
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_currency(value: &str) -> bool {
    CURRENCY_PATTERN.is_match(value)
}

pub fn is_strict_currency(value: &str) -> bool {
    STRICT_CURRENCY_PATTERN.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Parse the date formats users actually type.
///
/// Accepts exactly `YYYY-MM-DD`, `MM/DD/YYYY`, `MM-DD-YYYY`, and
/// `Month D, YYYY` (calendar dates only, no datetimes). Anything else is
/// treated as unparseable rather than guessed at.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    for format in ["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y", "%B %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    None
}

/// Any parseable calendar date counts (lenient, generation-time policy)
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Strictly-future check (field-level, UI-time policy)
pub fn is_future_date(value: &str, today: NaiveDate) -> bool {
    parse_date(value).map(|date| date > today).unwrap_or(false)
}
