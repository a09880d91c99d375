//! Property tests for slider invariants.
//!
//! Uses proptest to verify:
//! 1. Ordering — `min <= max` after every event in any sequence
//! 2. Bounds — after a bound change to `U`, both ends are `<= U`
//! 3. Idempotent moves — repeating a pointer move changes nothing
//! 4. No crossing — a dragged handle stops at the other one

use proptest::prelude::*;
use pricerange_core::{Handle, PriceRange, SliderEvent, SliderState, TrackGeometry, UpperBound};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_upper() -> impl Strategy<Value = UpperBound> {
    (1u64..100_000).prop_map(|v| UpperBound::new(v).unwrap())
}

fn arb_handle() -> impl Strategy<Value = Handle> {
    prop_oneof![Just(Handle::Min), Just(Handle::Max)]
}

fn arb_track() -> impl Strategy<Value = TrackGeometry> {
    (0.0..200.0_f64, 1.0..400.0_f64).prop_map(|(left, width)| TrackGeometry::new(left, width))
}

fn arb_raw_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{0,7}",
        "[a-z ]{0,5}",
        "[0-9 ,₽$]{0,9}",
    ]
}

fn arb_event() -> impl Strategy<Value = SliderEvent> {
    prop_oneof![
        arb_upper().prop_map(SliderEvent::BoundChanged),
        arb_handle().prop_map(SliderEvent::DragStarted),
        (-100.0..700.0_f64, arb_track()).prop_map(|(x, track)| SliderEvent::PointerMoved { x, track }),
        Just(SliderEvent::DragEnded),
        (arb_handle(), arb_raw_text()).prop_map(|(handle, raw)| SliderEvent::TextInput { handle, raw }),
        (arb_handle(), arb_raw_text()).prop_map(|(handle, raw)| SliderEvent::TextBlur { handle, raw }),
        (arb_handle(), -5_000i64..5_000).prop_map(|(handle, delta)| SliderEvent::Nudged { handle, delta }),
    ]
}

fn arb_state() -> impl Strategy<Value = SliderState> {
    arb_upper().prop_flat_map(|upper| {
        (0..=upper.get(), 0..=upper.get()).prop_map(move |(a, b)| {
            let range = PriceRange::new(a.min(b), a.max(b), upper).unwrap();
            SliderState::with_range(range, upper)
        })
    })
}

proptest! {
    /// No event sequence can invert the range or leave it above the bound.
    #[test]
    fn ordering_holds_after_every_event(
        start in arb_state(),
        events in prop::collection::vec(arb_event(), 1..40),
    ) {
        let mut state = start;
        for event in events {
            state = state.apply(event);
            let r = state.range();
            prop_assert!(r.min() <= r.max());
            prop_assert!(r.max() <= state.upper().get());
        }
    }

    /// A bound change leaves both ends at or under the new bound.
    #[test]
    fn bound_change_clamps(start in arb_state(), upper in arb_upper()) {
        let state = start.apply(SliderEvent::BoundChanged(upper));
        prop_assert!(state.range().min() <= upper.get());
        prop_assert!(state.range().max() <= upper.get());
        prop_assert_eq!(state.upper(), upper);
    }

    /// Repeating the same move at the same position is a no-op.
    #[test]
    fn pointer_move_is_idempotent(
        start in arb_state(),
        handle in arb_handle(),
        x in -100.0..700.0_f64,
        track in arb_track(),
    ) {
        let dragging = start.apply(SliderEvent::DragStarted(handle));
        let once = dragging.apply(SliderEvent::PointerMoved { x, track });
        let twice = once.apply(SliderEvent::PointerMoved { x, track });
        prop_assert_eq!(once, twice);
    }

    /// Dragging min anywhere never takes it past max, and max never below min.
    #[test]
    fn handles_never_cross(
        start in arb_state(),
        x in -100.0..700.0_f64,
        track in arb_track(),
    ) {
        let before = start.range();

        let min_dragged = start
            .apply(SliderEvent::DragStarted(Handle::Min))
            .apply(SliderEvent::PointerMoved { x, track });
        prop_assert_eq!(min_dragged.range().max(), before.max());
        prop_assert!(min_dragged.range().min() <= before.max());

        let max_dragged = start
            .apply(SliderEvent::DragStarted(Handle::Max))
            .apply(SliderEvent::PointerMoved { x, track });
        prop_assert_eq!(max_dragged.range().min(), before.min());
        prop_assert!(max_dragged.range().max() >= before.min());
    }
}

// ── Scenarios ────────────────────────────────────────────────────────

fn upper(v: u64) -> UpperBound {
    UpperBound::new(v).unwrap()
}

#[test]
fn drag_min_to_thirty_percent_of_track() {
    let track = TrackGeometry::new(20.0, 500.0);
    let state = SliderState::new(upper(1000))
        .apply(SliderEvent::DragStarted(Handle::Min))
        .apply(SliderEvent::PointerMoved { x: 170.0, track });
    assert_eq!(state.range().min(), 300);
    assert_eq!(state.range().max(), 1000);
}

#[test]
fn typed_max_with_min_set() {
    let state = SliderState::with_range(PriceRange::new(300, 1000, upper(1000)).unwrap(), upper(1000))
        .apply(SliderEvent::TextInput {
            handle: Handle::Max,
            raw: "500".to_string(),
        });
    assert_eq!((state.range().min(), state.range().max()), (300, 500));
}

#[test]
fn typed_letters_into_min() {
    let state = SliderState::new(upper(1000)).apply(SliderEvent::TextInput {
        handle: Handle::Min,
        raw: "abc".to_string(),
    });
    assert_eq!(state.range().min(), 0);
}

#[test]
fn bound_shrinks_under_selection() {
    let state = SliderState::with_range(PriceRange::new(300, 800, upper(1000)).unwrap(), upper(1000))
        .apply(SliderEvent::BoundChanged(upper(500)));
    assert_eq!((state.range().min(), state.range().max()), (300, 500));
}
