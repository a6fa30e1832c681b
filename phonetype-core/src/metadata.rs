//! Region metadata capability
//!
//! The formatting engine only needs three things from numbering-plan data:
//! how long a typical mobile number is, the calling code, and how a digit
//! string reads as a national significant number.

use crate::classify::normalize_digits_only;
use crate::error::ParseError;

/// Shortest national significant number accepted by parsing
pub const MIN_LENGTH_FOR_NSN: usize = 2;

/// Longest national significant number accepted by parsing
pub const MAX_LENGTH_FOR_NSN: usize = 17;

/// Lookup of per-region numbering data
pub trait RegionMetadata: Send + Sync {
    /// Example mobile national number for the region, digits only
    fn example_mobile_national_number(&self, region: &str) -> Option<String>;

    /// Calling code registered for the region
    fn calling_code(&self, region: &str) -> Option<u16>;

    /// Read `text` as a national number of `region`
    fn parse_national_number(&self, text: &str, region: &str) -> Result<String, ParseError>;
}

/// Read `text` as a national significant number
///
/// The trunk prefix is dropped only when what follows it is at least
/// `min_length` digits long, i.e. already a complete national number.
/// Leading zeros are dropped since the result is numeric.
pub fn parse_national_number(
    text: &str,
    national_prefix: Option<&str>,
    min_length: usize,
) -> Result<String, ParseError> {
    let digits = normalize_digits_only(text);

    if digits.is_empty() {
        return Err(ParseError::NotANumber);
    }
    if digits.len() < MIN_LENGTH_FOR_NSN {
        return Err(ParseError::TooShort);
    }
    if digits.len() > MAX_LENGTH_FOR_NSN {
        return Err(ParseError::TooLong);
    }

    let mut national = digits.as_str();
    if let Some(prefix) = national_prefix.filter(|p| !p.is_empty()) {
        if let Some(rest) = national.strip_prefix(prefix) {
            if rest.len() >= min_length.max(MIN_LENGTH_FOR_NSN) {
                national = rest;
            }
        }
    }

    let significant = national.trim_start_matches('0');
    if significant.is_empty() {
        return Err(ParseError::NotANumber);
    }

    Ok(significant.to_string())
}
