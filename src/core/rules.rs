//! Atomic value checks and coercions used by field rules.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

/// Date-string layout required by the e-invoice standard.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A regular expression that must match the whole value.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: &'static str,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &'static str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{source})$"))?;
        Ok(Self { source, regex })
    }

    /// The pattern as written, without the anchoring added for full matching.
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// How a decimal field treats values with more fractional digits than allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalPlaces {
    /// Reject values with more than `n` decimal places; keep the scale as given.
    AtMost(u32),
    /// Round to exactly `n` decimal places (midpoint away from zero).
    RoundTo(u32),
}

/// Post-validation normalization of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// `true` → `"YES"`, `false` → `"NO"`.
    YesNo,
}

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date shape compiles"));

/// Check a date string against `YYYY-MM-DD`, including calendar validity.
///
/// chrono skips padding spaces and accepts signed years, so the layout is
/// matched byte for byte first.
pub fn is_date_string(value: &str) -> bool {
    DATE_SHAPE.is_match(value) && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

/// Format a date as `YYYY-MM-DD`, or `None` when the year needs other than
/// four digits.
pub fn format_date(date: NaiveDate) -> Option<String> {
    (0..=9999)
        .contains(&date.year())
        .then(|| date.format(DATE_FORMAT).to_string())
}

/// Check `value` against a decimal-places policy.
///
/// Returns the (possibly rounded) value, or the violation message.
pub fn apply_decimal_places(value: Decimal, places: DecimalPlaces) -> Result<Decimal, String> {
    match places {
        DecimalPlaces::AtMost(n) => {
            if value.scale() > n {
                Err(format!("must not have more than {n} decimal places"))
            } else {
                Ok(value)
            }
        }
        DecimalPlaces::RoundTo(n) => Ok(round_to(value, n)),
    }
}

/// Round to exactly `places` fractional digits, padding with zeros if needed.
pub fn round_to(value: Decimal, places: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "YES" } else { "NO" }
}
