//! Application state — single-owner, main-thread only.
//!
//! The host mounts one slider and owns everything around it: focus, the
//! field edit buffer, the pointer capture, and the last reported range.

use std::sync::mpsc::{self, Receiver};

use ratatui::layout::Rect;
use tracing::{debug, info};

use pricerange_core::{
    CurrencyFormat, Handle, PointerCapture, PriceRange, RangeSlider, TrackGeometry, UpperBound,
};

use crate::config::{AppConfig, ConfigError};
use crate::theme::Theme;

/// What receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Track,
    Field(Handle),
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Track => Focus::Field(Handle::Min),
            Focus::Field(Handle::Min) => Focus::Field(Handle::Max),
            Focus::Field(Handle::Max) => Focus::Track,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Track => Focus::Field(Handle::Max),
            Focus::Field(Handle::Max) => Focus::Field(Handle::Min),
            Focus::Field(Handle::Min) => Focus::Track,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Text being typed into a price field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub handle: Handle,
    pub text: String,
    /// Untouched since focus; the first keystroke replaces the contents.
    pub pristine: bool,
}

impl EditBuffer {
    fn new(handle: Handle, value: u64) -> Self {
        Self {
            handle,
            text: value.to_string(),
            pristine: true,
        }
    }
}

pub struct AppState {
    pub slider: RangeSlider,
    pub capture: Option<PointerCapture>,
    pub focus: Focus,
    /// Handle the arrow keys move while the track has focus.
    pub selected_handle: Handle,
    pub edit: Option<EditBuffer>,
    pub currency: CurrencyFormat,
    pub theme: Theme,
    pub step: u64,
    pub bound_step: u64,
    /// Terminal area as of the last frame; used for mouse hit-testing.
    pub viewport: Rect,
    pub running: bool,
    pub show_help: bool,
    pub status_message: Option<(String, StatusLevel)>,
    /// Range as of the last change notification; the mounted range until then.
    pub reported: PriceRange,
    changes_rx: Receiver<PriceRange>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let upper = config.upper_bound()?;
        let currency = config.currency_format()?;

        let (changes_tx, changes_rx) = mpsc::channel();
        let mut slider = RangeSlider::new(upper);
        slider.on_change(move |range| {
            let _ = changes_tx.send(range);
        });

        let reported = slider.range();
        info!(upper = upper.get(), "slider mounted");

        Ok(Self {
            slider,
            capture: None,
            focus: Focus::Track,
            selected_handle: Handle::Min,
            edit: None,
            currency,
            theme: Theme::default(),
            step: config.step,
            bound_step: config.bound_step,
            viewport: Rect::default(),
            running: true,
            show_help: false,
            status_message: None,
            reported,
            changes_rx,
        })
    }

    /// Pull queued change notifications into `reported`.
    pub fn drain_changes(&mut self) {
        while let Ok(range) = self.changes_rx.try_recv() {
            info!(min = range.min(), max = range.max(), "range committed");
            self.reported = range;
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn format_price(&self, value: u64) -> String {
        self.currency.format(value)
    }

    /// Text shown in a price field: the live buffer while editing, else the
    /// formatted value.
    pub fn field_text(&self, handle: Handle) -> String {
        match &self.edit {
            Some(edit) if edit.handle == handle => edit.text.clone(),
            _ => self.format_price(self.slider.range().get(handle)),
        }
    }

    // ── Focus and text fields ────────────────────────────────────────

    /// Move focus, committing any open edit first.
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        self.commit_edit();
        self.focus = focus;
        if let Focus::Field(handle) = focus {
            let value = self.slider.range().get(handle);
            self.edit = Some(EditBuffer::new(handle, value));
            self.selected_handle = handle;
        }
        debug!(?focus, "focus changed");
    }

    /// Blur the open field, recommitting whatever it holds.
    pub fn commit_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            self.slider.text_blur(edit.handle, &edit.text);
        }
    }

    /// Append typed text to the open field and apply it immediately.
    pub fn type_text(&mut self, text: &str) {
        let Some(edit) = self.edit.as_mut() else {
            return;
        };
        if edit.pristine {
            edit.text.clear();
            edit.pristine = false;
        }
        edit.text.push_str(text);
        let (handle, raw) = (edit.handle, edit.text.clone());
        self.slider.text_input(handle, &raw);
    }

    pub fn backspace(&mut self) {
        let Some(edit) = self.edit.as_mut() else {
            return;
        };
        if edit.pristine {
            edit.text.clear();
            edit.pristine = false;
        } else {
            edit.text.pop();
        }
        let (handle, raw) = (edit.handle, edit.text.clone());
        self.slider.text_input(handle, &raw);
    }

    // ── Pointer capture ──────────────────────────────────────────────

    /// Grab `handle`, replacing any capture still held.
    pub fn begin_drag(&mut self, handle: Handle) {
        self.end_drag();
        self.set_focus(Focus::Track);
        self.selected_handle = handle;
        self.capture = Some(self.slider.begin_drag(handle));
        debug!(?handle, "pointer captured");
    }

    /// Route a pointer position to the dragged handle. No-op without a capture.
    pub fn drag_to(&mut self, x: f64, track: TrackGeometry) {
        if let Some(capture) = &self.capture {
            capture.pointer_moved(&mut self.slider, x, track);
        }
    }

    /// Release the capture if one is held.
    pub fn end_drag(&mut self) {
        if let Some(capture) = self.capture.take() {
            debug!(handle = ?capture.handle(), "pointer released");
            capture.release(&mut self.slider);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.capture.is_some()
    }

    // ── Keyboard equivalents ─────────────────────────────────────────

    pub fn nudge_selected(&mut self, direction: i64) {
        let delta = direction.saturating_mul(i64::try_from(self.step).unwrap_or(i64::MAX));
        self.slider.nudge(self.selected_handle, delta);
    }

    pub fn toggle_selected_handle(&mut self) {
        self.selected_handle = self.selected_handle.other();
    }

    /// Shift the upper bound by `direction * bound_step`.
    pub fn shift_upper_bound(&mut self, direction: i64) {
        let delta = direction.saturating_mul(i64::try_from(self.bound_step).unwrap_or(i64::MAX));
        let current = self.slider.upper();
        let upper = current.shifted(delta);
        if upper == current {
            self.set_warning(format!("Upper bound already at {}", self.format_price(current.get())));
            return;
        }
        self.set_upper_bound(upper);
    }

    pub fn set_upper_bound(&mut self, upper: UpperBound) {
        self.slider.set_upper_bound(upper);
        info!(upper = upper.get(), "upper bound changed");
        self.set_status(format!("Upper bound: {}", self.format_price(upper.get())));
    }
}
