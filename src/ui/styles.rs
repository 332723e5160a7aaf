use ratatui::style::{Modifier, Style};

use super::theme::{ColorPalette, Theme};

/// Pre-computed styles for the UI
#[derive(Clone)]
pub struct Styles {
    pub palette: ColorPalette,

    // Text styles
    pub normal_text: Style,
    pub title: Style,
    pub label: Style,
    pub muted_text: Style,
    pub error_text: Style,
    pub success_text: Style,
    pub warning_text: Style,

    // Input fields
    pub input_text: Style,
    pub input_focused: Style,
    pub input_placeholder: Style,

    // Border styles
    pub border_focused: Style,
    pub border_unfocused: Style,

    // Buttons and links
    pub button_primary: Style,
    pub button_primary_focused: Style,
    pub button_accent: Style,
    pub button_accent_focused: Style,
    pub button_disabled: Style,
    pub link: Style,
    pub link_focused: Style,

    // Status indicators
    pub status_connected: Style,
    pub status_disconnected: Style,
    pub status_unknown: Style,
}

impl Styles {
    /// Create styles from a theme
    pub fn from_theme(theme: Theme) -> Self {
        let palette = theme.palette();
        Self::from_palette(palette)
    }

    /// Create styles from a color palette
    pub fn from_palette(palette: ColorPalette) -> Self {
        Self {
            normal_text: Style::default().fg(palette.text),
            title: Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(palette.label),
            muted_text: Style::default().fg(palette.muted),
            error_text: Style::default().fg(palette.error),
            success_text: Style::default().fg(palette.success),
            warning_text: Style::default().fg(palette.warning),

            input_text: Style::default().fg(palette.text).bg(palette.surface),
            input_focused: Style::default().fg(palette.text).bg(palette.selection_bg),
            input_placeholder: Style::default().fg(palette.muted).bg(palette.surface),

            border_focused: Style::default().fg(palette.primary),
            border_unfocused: Style::default().fg(palette.border),

            button_primary: Style::default()
                .fg(palette.background)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
            button_primary_focused: Style::default()
                .fg(palette.background)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            button_accent: Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
            button_accent_focused: Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            button_disabled: Style::default().fg(palette.muted).bg(palette.surface),
            link: Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED),
            link_focused: Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED | Modifier::BOLD | Modifier::REVERSED),

            status_connected: Style::default().fg(palette.success),
            status_disconnected: Style::default().fg(palette.error),
            status_unknown: Style::default().fg(palette.warning),

            palette,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::from_theme(Theme::default())
    }
}
