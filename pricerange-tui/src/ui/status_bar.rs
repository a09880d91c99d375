//! Bottom status bar — last reported range, status message, key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = Vec::new();

    // Range as last delivered through the change listener.
    let selected = format!(
        " Selected: {} – {}",
        app.format_price(app.reported.min()),
        app.format_price(app.reported.max())
    );
    spans.push(Span::styled(selected, theme.accent_style()));

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme.text_style(),
            StatusLevel::Warning => theme.warning_style(),
        };
        spans.push(Span::styled(msg.as_str(), style));
        spans.push(Span::raw(" | "));
    }

    spans.push(Span::styled("Tab:focus ?:help q:quit", theme.muted_style()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
