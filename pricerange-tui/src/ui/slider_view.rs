//! Track widget — three fill bands and two handle glyphs on a single row.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use pricerange_core::{DragState, Handle, SliderState};

use crate::theme::Theme;
use crate::ui::handle_column;

const TRACK: &str = "━";
const THUMB: &str = "●";
/// Both handles on the same cell.
const THUMB_STACKED: &str = "◆";

pub struct SliderView<'a> {
    state: &'a SliderState,
    theme: &'a Theme,
    focused: bool,
    selected: Handle,
}

impl<'a> SliderView<'a> {
    pub fn new(state: &'a SliderState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            focused: false,
            selected: Handle::Min,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn selected(mut self, handle: Handle) -> Self {
        self.selected = handle;
        self
    }

    fn thumb_style(&self, handle: Handle) -> Style {
        let active = match self.state.dragging() {
            DragState::Dragging(dragged) => dragged == handle,
            DragState::Idle => self.focused && self.selected == handle,
        };
        if active {
            self.theme.accent_bold()
        } else {
            Style::default().fg(self.theme.thumb).add_modifier(Modifier::BOLD)
        }
    }
}

impl Widget for SliderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            return;
        }
        let y = area.y;
        let bands = self.state.bands();
        let span = f64::from(area.width.saturating_sub(1).max(1));

        for offset in 0..area.width {
            let percent = 100.0 * f64::from(offset) / span;
            let color = self.theme.band_color(bands.band_at(percent));
            if let Some(cell) = buf.cell_mut((area.x + offset, y)) {
                cell.set_symbol(TRACK).set_style(Style::default().fg(color));
            }
        }

        let range = self.state.range();
        let upper = self.state.upper();
        let min_col = handle_column(area, range.min(), upper);
        let max_col = handle_column(area, range.max(), upper);

        if min_col == max_col {
            let style = self.thumb_style(Handle::Min).patch(self.thumb_style(Handle::Max));
            if let Some(cell) = buf.cell_mut((min_col, y)) {
                cell.set_symbol(THUMB_STACKED).set_style(style);
            }
            return;
        }
        for (handle, col) in [(Handle::Min, min_col), (Handle::Max, max_col)] {
            let style = self.thumb_style(handle);
            if let Some(cell) = buf.cell_mut((col, y)) {
                cell.set_symbol(THUMB).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use pricerange_core::{PriceRange, SliderEvent, UpperBound};

    fn state(min: u64, max: u64) -> SliderState {
        let upper = UpperBound::new(1000).unwrap();
        SliderState::with_range(PriceRange::new(min, max, upper).unwrap(), upper)
    }

    fn render(state: &SliderState, focused: bool, selected: Handle) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 11, 1);
        let mut buf = Buffer::empty(area);
        SliderView::new(state, &theme)
            .focused(focused)
            .selected(selected)
            .render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn handles_sit_at_their_percentages() {
        let buf = render(&state(200, 700), false, Handle::Min);
        assert_eq!(row(&buf), "━━●━━━━●━━━");
    }

    #[test]
    fn bands_are_colored() {
        let theme = Theme::default();
        let buf = render(&state(200, 700), false, Handle::Min);
        assert_eq!(buf.cell((0, 0)).unwrap().fg, theme.track_unselected);
        assert_eq!(buf.cell((4, 0)).unwrap().fg, theme.track_selected);
        assert_eq!(buf.cell((10, 0)).unwrap().fg, theme.track_unselected);
    }

    #[test]
    fn stacked_handles_share_a_glyph() {
        let buf = render(&state(500, 500), false, Handle::Min);
        assert_eq!(row(&buf), "━━━━━◆━━━━━");
    }

    #[test]
    fn selected_handle_highlighted_when_focused() {
        let theme = Theme::default();
        let buf = render(&state(0, 1000), true, Handle::Max);
        assert_eq!(buf.cell((10, 0)).unwrap().fg, theme.accent);
        assert_eq!(buf.cell((0, 0)).unwrap().fg, Color::White);
    }

    #[test]
    fn dragged_handle_highlighted() {
        let theme = Theme::default();
        let dragging = state(0, 1000).apply(SliderEvent::DragStarted(Handle::Min));
        let buf = render(&dragging, false, Handle::Max);
        assert_eq!(buf.cell((0, 0)).unwrap().fg, theme.accent);
        assert_eq!(buf.cell((10, 0)).unwrap().fg, Color::White);
    }

    #[test]
    fn zero_area_is_ignored() {
        let theme = Theme::default();
        let s = state(0, 1000);
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 1));
        SliderView::new(&s, &theme).render(Rect::new(0, 0, 0, 0), &mut buf);
    }
}
