//! Track geometry — mapping pointer positions to prices and prices to fill bands.

use crate::range::{PriceRange, UpperBound};

/// Horizontal extent of the track in the host's pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub left: f64,
    pub width: f64,
}

impl TrackGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Fraction of the track at `x`, clamped to `[0, 1]`.
    ///
    /// `None` when the track has no usable width.
    pub fn fraction_at(&self, x: f64) -> Option<f64> {
        if !self.width.is_finite() || self.width <= 0.0 || !x.is_finite() {
            return None;
        }
        Some(((x - self.left) / self.width).clamp(0.0, 1.0))
    }

    /// Price under the pointer at `x`, rounded to the nearest integer.
    pub fn price_at(&self, x: f64, upper: UpperBound) -> Option<u64> {
        self.fraction_at(x)
            .map(|fraction| (upper.get() as f64 * fraction).round() as u64)
    }

    /// Pointer coordinate of `value` along the track.
    pub fn position_of(&self, value: u64, upper: UpperBound) -> f64 {
        self.left + self.width * upper.percent_of(value) / 100.0
    }
}

/// Percent stops splitting the track into below/selected/above bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillBands {
    pub min_stop: f64,
    pub max_stop: f64,
}

impl FillBands {
    pub fn new(range: PriceRange, upper: UpperBound) -> Self {
        Self {
            min_stop: upper.percent_of(range.min()),
            max_stop: upper.percent_of(range.max()),
        }
    }

    /// Which band a point at `percent` along the track falls into.
    pub fn band_at(&self, percent: f64) -> Band {
        if percent < self.min_stop {
            Band::Below
        } else if percent <= self.max_stop {
            Band::Selected
        } else {
            Band::Above
        }
    }
}

/// A segment of the track fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Below,
    Selected,
    Above,
}
