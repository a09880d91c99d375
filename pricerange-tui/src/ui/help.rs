//! Help overlay — keyboard and mouse reference.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, theme, "Mouse");
    key(&mut lines, theme, "press on track", "Grab the nearest handle");
    key(&mut lines, theme, "drag", "Move it; the pointer may leave the track");
    key(&mut lines, theme, "press on field", "Edit that price");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Keyboard — track");
    key(&mut lines, theme, "h / l, ← / →", "Nudge the selected handle");
    key(&mut lines, theme, "Space", "Switch selected handle");
    key(&mut lines, theme, "Enter", "Edit the selected handle's price");
    key(&mut lines, theme, "[ / ]", "Lower / raise the upper bound");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Keyboard — fields");
    key(&mut lines, theme, "0-9", "Type a price (applied as you type)");
    key(&mut lines, theme, "Enter / Esc", "Commit and return to the track");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Keyboard — global");
    key(&mut lines, theme, "Tab / Shift+Tab", "Cycle focus");
    key(&mut lines, theme, "Esc", "Cancel a drag");
    key(&mut lines, theme, "q / Ctrl+C", "Quit");

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(" Help — press ? to close ")
        .title_style(theme.accent_bold());
    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section(lines: &mut Vec<Line<'static>>, theme: &Theme, title: &'static str) {
    lines.push(Line::from(Span::styled(title, theme.accent_bold())));
}

fn key(lines: &mut Vec<Line<'static>>, theme: &Theme, keys: &'static str, desc: &'static str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:<18}"), theme.text_style()),
        Span::styled(desc, theme.muted_style()),
    ]));
}
