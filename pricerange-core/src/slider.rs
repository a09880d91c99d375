//! Slider state machine — pure `(state, event) -> state` transitions.
//!
//! Every transition goes through [`PriceRange::with_handle`] or
//! [`PriceRange::clamped_to`], so `min <= max <= upper` holds after each
//! event regardless of the order events arrive in.

use tracing::debug;

use crate::range::{Handle, PriceRange, UpperBound};
use crate::text::resolve_price;
use crate::track::{FillBands, TrackGeometry};

/// Which handle, if any, follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Handle),
}

impl DragState {
    pub fn handle(self) -> Option<Handle> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(handle) => Some(handle),
        }
    }
}

/// Everything that can happen to a slider.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderEvent {
    /// The host supplied a new upper bound.
    BoundChanged(UpperBound),
    /// Pointer pressed on a handle.
    DragStarted(Handle),
    /// Pointer moved to `x` while the capture is held.
    PointerMoved { x: f64, track: TrackGeometry },
    /// Pointer released.
    DragEnded,
    /// A keystroke changed a field's text.
    TextInput { handle: Handle, raw: String },
    /// A field lost focus with `raw` in it.
    TextBlur { handle: Handle, raw: String },
    /// Keyboard step of one handle.
    Nudged { handle: Handle, delta: i64 },
}

/// The widget's whole state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    range: PriceRange,
    dragging: DragState,
    upper: UpperBound,
}

impl SliderState {
    /// Fresh state spanning `{0, upper}`.
    pub fn new(upper: UpperBound) -> Self {
        Self {
            range: PriceRange::full(upper),
            dragging: DragState::Idle,
            upper,
        }
    }

    /// State with an explicit starting range.
    pub fn with_range(range: PriceRange, upper: UpperBound) -> Self {
        Self {
            range: range.clamped_to(upper),
            dragging: DragState::Idle,
            upper,
        }
    }

    pub fn range(&self) -> PriceRange {
        self.range
    }

    pub fn dragging(&self) -> DragState {
        self.dragging
    }

    pub fn upper(&self) -> UpperBound {
        self.upper
    }

    pub fn bands(&self) -> FillBands {
        FillBands::new(self.range, self.upper)
    }

    /// Apply one event.
    pub fn apply(self, event: SliderEvent) -> Self {
        let next = match event {
            SliderEvent::BoundChanged(upper) => Self {
                range: self.range.clamped_to(upper),
                upper,
                ..self
            },
            SliderEvent::DragStarted(handle) => Self {
                dragging: DragState::Dragging(handle),
                ..self
            },
            SliderEvent::PointerMoved { x, track } => self.pointer_moved(x, track),
            SliderEvent::DragEnded => Self {
                dragging: DragState::Idle,
                ..self
            },
            SliderEvent::TextInput { handle, raw } | SliderEvent::TextBlur { handle, raw } => {
                let value = resolve_price(&raw, self.upper);
                Self {
                    range: self.range.with_handle(handle, value),
                    ..self
                }
            }
            SliderEvent::Nudged { handle, delta } => {
                let current = self.range.get(handle);
                let candidate = if delta.is_negative() {
                    current.saturating_sub(delta.unsigned_abs())
                } else {
                    current.saturating_add(delta as u64)
                };
                Self {
                    range: self.range.with_handle(handle, self.upper.clamp(candidate)),
                    ..self
                }
            }
        };
        debug!(
            min = next.range.min(),
            max = next.range.max(),
            upper = next.upper.get(),
            dragging = ?next.dragging,
            "slider transition"
        );
        next
    }

    fn pointer_moved(self, x: f64, track: TrackGeometry) -> Self {
        let Some(handle) = self.dragging.handle() else {
            return self;
        };
        let Some(candidate) = track.price_at(x, self.upper) else {
            return self;
        };
        Self {
            range: self.range.with_handle(handle, candidate),
            ..self
        }
    }
}
