//! Labelled price text field.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

const CURSOR: &str = "▏";

pub struct PriceField<'a> {
    label: &'a str,
    text: String,
    theme: &'a Theme,
    focused: bool,
    editing: bool,
}

impl<'a> PriceField<'a> {
    pub fn new(label: &'a str, text: String, theme: &'a Theme) -> Self {
        Self {
            label,
            text,
            theme,
            focused: false,
            editing: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show the raw buffer with a cursor instead of the formatted value.
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for PriceField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(self.focused))
            .title(format!(" {} ", self.label))
            .title_style(if self.focused {
                self.theme.accent_bold()
            } else {
                self.theme.muted_style()
            });

        let mut spans = vec![Span::styled(self.text, self.theme.text_style())];
        if self.editing {
            spans.push(Span::styled(CURSOR, self.theme.accent_style()));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.cell((x, y)).unwrap().symbol());
            }
        }
        out
    }

    #[test]
    fn shows_label_and_text() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        PriceField::new("From", "300\u{a0}₽".to_string(), &theme).render(area, &mut buf);
        let text = content(&buf);
        assert!(text.contains("From"));
        assert!(text.contains("300\u{a0}₽"));
        assert!(!text.contains(CURSOR));
    }

    #[test]
    fn editing_shows_cursor() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        PriceField::new("To", "45".to_string(), &theme)
            .focused(true)
            .editing(true)
            .render(area, &mut buf);
        let text = content(&buf);
        assert!(text.contains(&format!("45{CURSOR}")));
        assert_eq!(buf.cell((0, 0)).unwrap().fg, theme.accent);
    }
}
