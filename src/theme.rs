//! Visual styling.
//!
//! A [`Theme`] holds semantic colors and [`Theme::styles`] turns them into
//! ready-to-use [`Style`] values for each part of the control. Hosts that
//! already carry their own palette can build a `Theme` from it instead of
//! using the presets.

use ratatui::style::{Color, Modifier, Style};

/// Semantic colors for the pagination strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub is_dark: bool,

    pub primary: Color,

    pub bg_base: Color,
    pub bg_subtle: Color,

    pub fg_base: Color,
    pub fg_muted: Color,
    pub fg_subtle: Color,
    pub fg_selected: Color,

    pub border: Color,
    pub border_focus: Color,
}

/// Pre-built styles for each rendered segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Styles {
    pub base: Style,

    pub arrow_enabled: Style,
    pub arrow_disabled: Style,
    pub arrow_focused: Style,

    pub page_field: Style,
    pub page_field_focused: Style,
    pub max_indicator: Style,

    pub count_select: Style,
    pub count_select_focused: Style,
    pub count_select_highlight: Style,
}

impl Theme {
    /// Dark preset.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            is_dark: true,
            primary: Color::Rgb(137, 180, 250),
            bg_base: Color::Rgb(30, 30, 46),
            bg_subtle: Color::Rgb(49, 50, 68),
            fg_base: Color::Rgb(205, 214, 244),
            fg_muted: Color::Rgb(147, 153, 178),
            fg_subtle: Color::Rgb(108, 112, 134),
            fg_selected: Color::Rgb(30, 30, 46),
            border: Color::Rgb(69, 71, 90),
            border_focus: Color::Rgb(137, 180, 250),
        }
    }

    /// Light preset.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            is_dark: false,
            primary: Color::Rgb(30, 102, 245),
            bg_base: Color::Rgb(239, 241, 245),
            bg_subtle: Color::Rgb(204, 208, 218),
            fg_base: Color::Rgb(76, 79, 105),
            fg_muted: Color::Rgb(108, 111, 133),
            fg_subtle: Color::Rgb(156, 160, 176),
            fg_selected: Color::Rgb(239, 241, 245),
            border: Color::Rgb(188, 192, 204),
            border_focus: Color::Rgb(30, 102, 245),
        }
    }

    /// Build segment styles from the theme colors.
    pub fn styles(&self) -> Styles {
        let base = Style::default().fg(self.fg_base);

        Styles {
            base,

            arrow_enabled: base,
            arrow_disabled: base.fg(self.fg_subtle),
            arrow_focused: base.fg(self.primary).add_modifier(Modifier::BOLD),

            page_field: base,
            page_field_focused: base.fg(self.primary).add_modifier(Modifier::BOLD),
            max_indicator: base.fg(self.fg_muted),

            count_select: base.fg(self.fg_muted),
            count_select_focused: base,
            count_select_highlight: base.bg(self.primary).fg(self.fg_selected),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_dark() {
        let theme = Theme::default();
        assert!(theme.is_dark);
        assert_eq!(theme.name, "dark");
        assert!(!Theme::light().is_dark);
    }

    #[test]
    fn test_styles_derive_from_theme_colors() {
        let theme = Theme::dark();
        let styles = theme.styles();
        assert_eq!(styles.arrow_disabled.fg, Some(theme.fg_subtle));
        assert_eq!(styles.arrow_focused.fg, Some(theme.primary));
        assert_eq!(styles.max_indicator.fg, Some(theme.fg_muted));
        assert_eq!(styles.count_select_highlight.bg, Some(theme.primary));
    }

    #[test]
    fn test_presets_differ() {
        assert_ne!(Theme::dark(), Theme::light());
    }
}
