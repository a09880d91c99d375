//! Error types for the price range model.

use thiserror::Error;

/// Errors raised when building or reconfiguring a slider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliderError {
    #[error("upper bound must be positive, got 0")]
    ZeroUpperBound,

    #[error("range {min}..={max} is inverted")]
    InvertedRange { min: u64, max: u64 },

    #[error("range {min}..={max} exceeds upper bound {upper}")]
    OutOfBounds { min: u64, max: u64, upper: u64 },
}

/// Why a text field value could not be read as a price.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    #[error("no digits in {0:?}")]
    Empty(String),

    #[error("{digits} does not fit in a price")]
    Overflow { digits: String },
}
