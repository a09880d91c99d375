//! Text field input policy — digits only, with a defined fallback for junk.

use tracing::warn;

use crate::error::PriceParseError;
use crate::range::UpperBound;

/// Keep only ASCII digits from `raw`.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse a price out of free-form field text.
///
/// Everything that is not a digit is dropped first, so `"1 000 ₽"` reads as
/// `1000`.
pub fn parse_price(raw: &str) -> Result<u64, PriceParseError> {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return Err(PriceParseError::Empty(raw.to_string()));
    }
    digits
        .parse::<u64>()
        .map_err(|_| PriceParseError::Overflow { digits })
}

/// Parse and clamp to `[0, upper]`.
///
/// Empty input falls back to 0; a digit run too long for `u64` falls back to
/// the upper bound.
pub fn resolve_price(raw: &str, upper: UpperBound) -> u64 {
    match parse_price(raw) {
        Ok(value) => upper.clamp(value),
        Err(err @ PriceParseError::Empty(_)) => {
            warn!(%err, "unparseable price, using 0");
            0
        }
        Err(err @ PriceParseError::Overflow { .. }) => {
            warn!(%err, upper = upper.get(), "price overflow, using upper bound");
            upper.get()
        }
    }
}
