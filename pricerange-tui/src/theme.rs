//! Color tokens for the PriceRange TUI
//!
//! Warm amber palette on a dark surface:
//! - **Selected band**: amber (the chosen price span)
//! - **Unselected band**: pale cream (outside the span)
//! - **Accent**: bright amber (focus, active handle)
//! - **Muted**: gray (hints, scale labels)

use ratatui::style::{Color, Modifier, Style};

use pricerange_core::Band;

/// Theme for the slider host
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Track outside the selection
    pub track_unselected: Color,
    /// Track inside the selection
    pub track_selected: Color,
    /// Handle glyphs
    pub thumb: Color,
    /// Focus and highlights
    pub accent: Color,
    /// Warnings in the status bar
    pub warning: Color,
    /// Hints, scale labels
    pub muted: Color,
    /// Field text
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::amber()
    }
}

impl Theme {
    pub fn amber() -> Self {
        Self {
            // #FFECBB
            track_unselected: Color::Rgb(255, 236, 187),
            // #FDC840
            track_selected: Color::Rgb(253, 200, 64),
            thumb: Color::White,
            accent: Color::Rgb(255, 170, 0),
            warning: Color::Rgb(255, 99, 71),
            muted: Color::Rgb(140, 140, 140),
            text_primary: Color::White,
        }
    }

    /// Fill color for a track band.
    pub fn band_color(&self, band: Band) -> Color {
        match band {
            Band::Selected => self.track_selected,
            Band::Below | Band::Above => self.track_unselected,
        }
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Border style for a panel or field, brighter when focused.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.accent_style()
        } else {
            self.muted_style()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.track_selected, Color::Rgb(253, 200, 64));
        assert_eq!(theme.track_unselected, Color::Rgb(255, 236, 187));
    }

    #[test]
    fn test_band_color() {
        let theme = Theme::default();
        assert_eq!(theme.band_color(Band::Selected), theme.track_selected);
        assert_eq!(theme.band_color(Band::Below), theme.track_unselected);
        assert_eq!(theme.band_color(Band::Above), theme.track_unselected);
    }

    #[test]
    fn test_border_focus() {
        let theme = Theme::default();
        assert_eq!(theme.border(true).fg, Some(theme.accent));
        assert_eq!(theme.border(false).fg, Some(theme.muted));
    }
}
