//! Input dispatch — global keys → drag capture → focus-specific handlers.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use pricerange_core::Handle;

use crate::app::{AppState, Focus};
use crate::ui::{self, SliderLayout};

/// Handle any terminal event.
pub fn handle_event(app: &mut AppState, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => app.type_text(&text),
        Event::FocusLost => app.end_drag(),
        Event::Resize(width, height) => app.viewport = Rect::new(0, 0, width, height),
        Event::FocusGained => {}
    }
}

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Ctrl-C always quits.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    // 2. A held capture swallows keys; Esc cancels the drag.
    if app.is_dragging() {
        if key.code == KeyCode::Esc {
            app.end_drag();
        }
        return;
    }

    // 3. Help overlay consumes input while open.
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // 4. Focus cycling.
    match key.code {
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.set_focus(app.focus.prev());
            } else {
                app.set_focus(app.focus.next());
            }
            return;
        }
        KeyCode::BackTab => {
            app.set_focus(app.focus.prev());
            return;
        }
        _ => {}
    }

    // 5. Focus-specific keys.
    match app.focus {
        Focus::Track => handle_track_key(app, key),
        Focus::Field(_) => handle_field_key(app, key),
    }
}

fn handle_track_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('h') | KeyCode::Left => app.nudge_selected(-1),
        KeyCode::Char('l') | KeyCode::Right => app.nudge_selected(1),
        KeyCode::Char(' ') => app.toggle_selected_handle(),
        KeyCode::Char('[') => app.shift_upper_bound(-1),
        KeyCode::Char(']') => app.shift_upper_bound(1),
        KeyCode::Enter => app.set_focus(Focus::Field(app.selected_handle)),
        _ => {}
    }
}

fn handle_field_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.set_focus(Focus::Track),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => {
            let mut utf8 = [0u8; 4];
            app.type_text(c.encode_utf8(&mut utf8));
        }
        _ => {}
    }
}

/// Handle a mouse event against the layout of the last frame.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    // Help overlay covers the track; a left press dismisses it and nothing
    // reaches the slider.
    if app.show_help {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            app.show_help = false;
        }
        return;
    }

    let layout = SliderLayout::compute(app.viewport);
    let x = f64::from(mouse.column);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // A press while captured means the release was lost; start over.
            app.end_drag();
            let pos = Position::new(mouse.column, mouse.row);
            if track_hit_area(layout.track).contains(pos) {
                press_track(app, layout.track, mouse.column);
            } else if layout.min_field.contains(pos) {
                app.set_focus(Focus::Field(Handle::Min));
            } else if layout.max_field.contains(pos) {
                app.set_focus(Focus::Field(Handle::Max));
            } else {
                app.set_focus(Focus::Track);
            }
        }
        // While captured every move counts, wherever the pointer is.
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            app.drag_to(x, ui::track_geometry(layout.track));
        }
        MouseEventKind::Up(MouseButton::Left) => app.end_drag(),
        _ => {}
    }
}

/// The track row plus one cell of slack on every side.
fn track_hit_area(track: Rect) -> Rect {
    Rect {
        x: track.x.saturating_sub(1),
        y: track.y.saturating_sub(1),
        width: track.width.saturating_add(2),
        height: 3,
    }
}

/// Grab the handle nearest to `column`. Pressing beside a handle also jumps
/// it to the pointer; pressing on it leaves it in place.
fn press_track(app: &mut AppState, track: Rect, column: u16) {
    let geometry = ui::track_geometry(track);
    let upper = app.slider.upper();
    let range = app.slider.range();
    let value = geometry.price_at(f64::from(column), upper).unwrap_or(0);
    let handle = range.nearest_handle(value);
    let thumb = ui::handle_column(track, range.get(handle), upper);

    app.begin_drag(handle);
    if column != thumb {
        app.drag_to(f64::from(column), geometry);
    }
}
