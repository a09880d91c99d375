//! PriceRange Core — the dual-handle price range slider, without a UI.
//!
//! This crate holds everything about the slider that does not depend on a
//! rendering backend:
//! - Range model with the `min <= max <= upper` invariant
//! - Pure `(state, event) -> state` transitions for drags, text fields, nudges and bound changes
//! - Track geometry (pointer position ↔ price, fill band stops)
//! - Text field parsing with a fixed fallback policy
//! - Currency formatting
//! - A mounted widget with change listeners and a drag-scoped pointer capture

pub mod error;
pub mod format;
pub mod range;
pub mod slider;
pub mod text;
pub mod track;
pub mod widget;

pub use error::{PriceParseError, SliderError};
pub use format::{CurrencyFormat, SymbolPosition};
pub use range::{Handle, PriceRange, UpperBound};
pub use slider::{DragState, SliderEvent, SliderState};
pub use track::{Band, FillBands, TrackGeometry};
pub use widget::{PointerCapture, RangeSlider};

#[cfg(test)]
mod tests {
    use super::*;

    /// The model types cross threads freely even though the widget itself
    /// stays on the UI thread.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<PriceRange>();
        require_sync::<PriceRange>();
        require_send::<SliderState>();
        require_sync::<SliderState>();
        require_send::<SliderEvent>();
        require_sync::<SliderEvent>();
        require_send::<CurrencyFormat>();
        require_sync::<CurrencyFormat>();
        require_send::<SliderError>();
        require_sync::<SliderError>();
    }
}
