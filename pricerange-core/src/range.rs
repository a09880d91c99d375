//! Range model — the selected `{min, max}` pair and the bound it lives under.
//!
//! Every constructor and mutator keeps `min <= max <= upper`.

use serde::{Deserialize, Serialize};

use crate::error::SliderError;

/// One of the two slider handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Min,
    Max,
}

impl Handle {
    pub fn label(self) -> &'static str {
        match self {
            Handle::Min => "From",
            Handle::Max => "To",
        }
    }

    pub fn other(self) -> Handle {
        match self {
            Handle::Min => Handle::Max,
            Handle::Max => Handle::Min,
        }
    }
}

/// Maximum selectable price. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct UpperBound(u64);

impl UpperBound {
    pub fn new(value: u64) -> Result<Self, SliderError> {
        if value == 0 {
            return Err(SliderError::ZeroUpperBound);
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Clamp `value` into `[0, upper]`.
    pub fn clamp(self, value: u64) -> u64 {
        value.min(self.0)
    }

    /// Position of `value` along the bound as a percentage in `[0, 100]`.
    pub fn percent_of(self, value: u64) -> f64 {
        100.0 * self.clamp(value) as f64 / self.0 as f64
    }

    /// Shift the bound by `delta`, never going below 1.
    pub fn shifted(self, delta: i64) -> Self {
        let next = if delta.is_negative() {
            self.0.saturating_sub(delta.unsigned_abs())
        } else {
            self.0.saturating_add(delta as u64)
        };
        Self(next.max(1))
    }
}

impl TryFrom<u64> for UpperBound {
    type Error = SliderError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UpperBound> for u64 {
    fn from(bound: UpperBound) -> Self {
        bound.0
    }
}

/// The currently selected price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    min: u64,
    max: u64,
}

impl PriceRange {
    /// The full range `{0, upper}` a slider starts with.
    pub fn full(upper: UpperBound) -> Self {
        Self {
            min: 0,
            max: upper.get(),
        }
    }

    /// Build a range, rejecting inverted or out-of-bound pairs.
    pub fn new(min: u64, max: u64, upper: UpperBound) -> Result<Self, SliderError> {
        if min > max {
            return Err(SliderError::InvertedRange { min, max });
        }
        if max > upper.get() {
            return Err(SliderError::OutOfBounds {
                min,
                max,
                upper: upper.get(),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn get(&self, handle: Handle) -> u64 {
        match handle {
            Handle::Min => self.min,
            Handle::Max => self.max,
        }
    }

    /// Move one handle toward `candidate` without crossing the other.
    ///
    /// The min handle stops at `max`, the max handle stops at `min`.
    pub fn with_handle(self, handle: Handle, candidate: u64) -> Self {
        match handle {
            Handle::Min => Self {
                min: candidate.min(self.max),
                max: self.max,
            },
            Handle::Max => Self {
                min: self.min,
                max: candidate.max(self.min),
            },
        }
    }

    /// Re-clamp both ends under a new bound.
    pub fn clamped_to(self, upper: UpperBound) -> Self {
        Self {
            min: upper.clamp(self.min),
            max: upper.clamp(self.max),
        }
    }

    /// Which handle is closer to `value`.
    ///
    /// Coincident handles resolve to `Min` so the pair can be pulled apart,
    /// except at 0 where only `Max` can move.
    pub fn nearest_handle(&self, value: u64) -> Handle {
        let to_min = value.abs_diff(self.min);
        let to_max = value.abs_diff(self.max);
        if to_min < to_max {
            return Handle::Min;
        }
        if to_max < to_min {
            return Handle::Max;
        }
        if self.min == 0 && value <= self.max {
            Handle::Max
        } else if value <= self.min {
            Handle::Min
        } else {
            Handle::Max
        }
    }
}
