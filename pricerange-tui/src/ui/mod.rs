//! Top-level UI layout — slider panel with price fields, status bar, help overlay.

pub mod help;
pub mod price_field;
pub mod slider_view;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use pricerange_core::{Handle, TrackGeometry, UpperBound};

use crate::app::{AppState, Focus};
use price_field::PriceField;
use slider_view::SliderView;

/// Horizontal inset of the track inside the panel.
const TRACK_PADDING: u16 = 2;

/// Screen regions for one frame. Computed the same way for drawing and for
/// mouse hit-testing so both agree on where the track is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderLayout {
    pub panel: Rect,
    pub hint: Rect,
    pub track: Rect,
    pub scale: Rect,
    pub min_field: Rect,
    pub max_field: Rect,
    pub status: Rect,
}

impl SliderLayout {
    pub fn compute(area: Rect) -> Self {
        // Split: main area + 1-line status bar.
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);
        let panel = chunks[0];
        let status = chunks[1];

        let inner = Block::default().borders(Borders::ALL).inner(panel);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // hint
                Constraint::Length(1),
                Constraint::Length(1), // track
                Constraint::Length(1), // scale
                Constraint::Length(1),
                Constraint::Length(3), // fields
                Constraint::Min(0),
            ])
            .split(inner);

        let track = pad_x(rows[2], TRACK_PADDING);
        let scale = pad_x(rows[3], TRACK_PADDING);

        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(2), Constraint::Fill(1)])
            .split(pad_x(rows[5], TRACK_PADDING));

        Self {
            panel,
            hint: pad_x(rows[0], 1),
            track,
            scale,
            min_field: fields[0],
            max_field: fields[2],
            status,
        }
    }

    pub fn field(&self, handle: Handle) -> Rect {
        match handle {
            Handle::Min => self.min_field,
            Handle::Max => self.max_field,
        }
    }
}

fn pad_x(area: Rect, pad: u16) -> Rect {
    let pad = pad.min(area.width / 2);
    Rect {
        x: area.x + pad,
        width: area.width - pad * 2,
        ..area
    }
}

/// Pointer geometry of a track drawn in `track`.
///
/// The first cell maps to 0 % and the last cell to 100 %.
pub fn track_geometry(track: Rect) -> TrackGeometry {
    TrackGeometry::new(f64::from(track.x), f64::from(track.width.saturating_sub(1)))
}

/// Column a handle at `value` is drawn in.
pub fn handle_column(track: Rect, value: u64, upper: UpperBound) -> u16 {
    let x = track_geometry(track).position_of(value, upper).round();
    (x as u16).clamp(track.x, track.right().saturating_sub(1).max(track.x))
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let layout = SliderLayout::compute(f.area());
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(app.focus == Focus::Track))
        .title(" Price Range ")
        .title_style(theme.accent_bold());
    f.render_widget(block, layout.panel);

    let hint = Paragraph::new(Span::styled(
        "drag a handle or type a price  ·  ? help",
        theme.muted_style(),
    ));
    f.render_widget(hint, layout.hint);

    let view = SliderView::new(app.slider.state(), theme)
        .focused(app.focus == Focus::Track)
        .selected(app.selected_handle);
    f.render_widget(view, layout.track);

    let upper = app.slider.upper().get();
    let low = Paragraph::new(Span::styled(app.format_price(0), theme.muted_style()));
    let high = Paragraph::new(Span::styled(app.format_price(upper), theme.muted_style()))
        .alignment(Alignment::Right);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout.scale);
    f.render_widget(low, halves[0]);
    f.render_widget(high, halves[1]);

    for handle in [Handle::Min, Handle::Max] {
        let focused = app.focus == Focus::Field(handle);
        let editing = app.edit.as_ref().is_some_and(|edit| edit.handle == handle);
        let field = PriceField::new(handle.label(), app.field_text(handle), theme)
            .focused(focused)
            .editing(editing);
        f.render_widget(field, layout.field(handle));
    }

    status_bar::render(f, layout.status, app);

    if app.show_help {
        help::render(f, layout.panel, theme);
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
