//! The mounted slider — state plus change listeners plus drag capture.

use std::fmt;

use tracing::{debug, trace};

use crate::range::{Handle, PriceRange, UpperBound};
use crate::slider::{DragState, SliderEvent, SliderState};
use crate::track::TrackGeometry;

/// Callback fired after a committed range change.
pub type ChangeListener = Box<dyn FnMut(PriceRange)>;

/// A slider instance owning its state and notifying listeners synchronously.
pub struct RangeSlider {
    state: SliderState,
    listeners: Vec<ChangeListener>,
}

impl RangeSlider {
    pub fn new(upper: UpperBound) -> Self {
        Self::with_state(SliderState::new(upper))
    }

    pub fn with_state(state: SliderState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn range(&self) -> PriceRange {
        self.state.range()
    }

    pub fn upper(&self) -> UpperBound {
        self.state.upper()
    }

    pub fn dragging(&self) -> DragState {
        self.state.dragging()
    }

    /// Register a listener. Listeners run in registration order.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(PriceRange) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Apply `event`; returns true if the range changed.
    ///
    /// Listeners only hear about transitions that moved `min` or `max`.
    pub fn dispatch(&mut self, event: SliderEvent) -> bool {
        let before = self.state.range();
        self.state = self.state.apply(event);
        let after = self.state.range();
        if before == after {
            return false;
        }
        trace!(listeners = self.listeners.len(), "notifying range change");
        for listener in &mut self.listeners {
            listener(after);
        }
        true
    }

    pub fn set_upper_bound(&mut self, upper: UpperBound) -> bool {
        debug!(upper = upper.get(), "upper bound changed");
        self.dispatch(SliderEvent::BoundChanged(upper))
    }

    pub fn text_input(&mut self, handle: Handle, raw: &str) -> bool {
        self.dispatch(SliderEvent::TextInput {
            handle,
            raw: raw.to_string(),
        })
    }

    pub fn text_blur(&mut self, handle: Handle, raw: &str) -> bool {
        self.dispatch(SliderEvent::TextBlur {
            handle,
            raw: raw.to_string(),
        })
    }

    pub fn nudge(&mut self, handle: Handle, delta: i64) -> bool {
        self.dispatch(SliderEvent::Nudged { handle, delta })
    }

    /// Start dragging `handle`. Pointer moves reach the slider only through
    /// the returned capture, and releasing it ends the drag.
    pub fn begin_drag(&mut self, handle: Handle) -> PointerCapture {
        self.dispatch(SliderEvent::DragStarted(handle));
        PointerCapture { handle }
    }
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Drag-scoped pointer subscription.
///
/// Exists exactly while a handle is being dragged. `release` consumes it, so
/// each acquisition ends with exactly one `DragEnded`.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a capture without releasing it leaves the slider dragging"]
pub struct PointerCapture {
    handle: Handle,
}

impl PointerCapture {
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Route a pointer move to the slider.
    pub fn pointer_moved(&self, slider: &mut RangeSlider, x: f64, track: TrackGeometry) -> bool {
        slider.dispatch(SliderEvent::PointerMoved { x, track })
    }

    /// End the drag.
    pub fn release(self, slider: &mut RangeSlider) {
        slider.dispatch(SliderEvent::DragEnded);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn slider(upper: u64) -> RangeSlider {
        RangeSlider::new(UpperBound::new(upper).unwrap())
    }

    fn recorder(slider: &mut RangeSlider) -> Rc<RefCell<Vec<(u64, u64)>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        slider.on_change(move |r| sink.borrow_mut().push((r.min(), r.max())));
        seen
    }

    #[test]
    fn listener_hears_committed_changes_only() {
        let mut s = slider(1000);
        let seen = recorder(&mut s);

        assert!(s.text_input(Handle::Max, "500"));
        assert!(!s.text_input(Handle::Max, "500"));
        assert!(!s.nudge(Handle::Min, -10));
        assert!(s.nudge(Handle::Min, 25));

        assert_eq!(*seen.borrow(), vec![(0, 500), (25, 500)]);
    }

    #[test]
    fn listeners_run_in_order() {
        let mut s = slider(100);
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            s.on_change(move |_| order.borrow_mut().push(tag));
        }
        s.text_input(Handle::Min, "10");
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn capture_scopes_drag() {
        let mut s = slider(1000);
        let seen = recorder(&mut s);
        let track = TrackGeometry::new(0.0, 10.0);

        let capture = s.begin_drag(Handle::Min);
        assert_eq!(s.dragging(), DragState::Dragging(Handle::Min));
        assert!(capture.pointer_moved(&mut s, 3.0, track));
        assert!(!capture.pointer_moved(&mut s, 3.0, track));
        capture.release(&mut s);

        assert_eq!(s.dragging(), DragState::Idle);
        assert_eq!(*seen.borrow(), vec![(300, 1000)]);
    }

    #[test]
    fn bound_change_notifies_when_clamped() {
        let mut s = slider(1000);
        let seen = recorder(&mut s);
        assert!(s.set_upper_bound(UpperBound::new(400).unwrap()));
        assert!(!s.set_upper_bound(UpperBound::new(900).unwrap()));
        assert_eq!(*seen.borrow(), vec![(0, 400)]);
        assert_eq!(s.upper().get(), 900);
    }
}
