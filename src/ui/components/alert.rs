//! Blocking message popup for validation and service errors

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::centered_rect;
use crate::ui::styles::Styles;
use crate::ui::theme::Theme;

/// Kind of message, controls the border color
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertKind {
    Info,
    Error,
}

/// Modal popup showing one blocking message
pub struct AlertPopup {
    styles: Styles,
    title: String,
    message: String,
    kind: AlertKind,
}

impl AlertPopup {
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            styles: Styles::from_theme(theme),
            title: "Notice".to_string(),
            message: String::new(),
            kind: AlertKind::Info,
        }
    }

    /// Set the message to display
    pub fn set_content(&mut self, title: &str, message: &str, kind: AlertKind) {
        self.title = title.to_string();
        self.message = message.to_string();
        self.kind = kind;
    }

    pub fn render(&self, frame: &mut Frame) {
        let popup_area = centered_rect(50, 25, frame.area());

        // Clear background
        frame.render_widget(Clear, popup_area);

        let border_style = match self.kind {
            AlertKind::Info => self.styles.border_focused,
            AlertKind::Error => self.styles.error_text,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(border_style)
            .title(format!(" {} ", self.title));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Dismiss hint
            ])
            .split(inner);

        let message = Paragraph::new(Line::from(Span::styled(
            &self.message,
            self.styles.normal_text,
        )))
        .wrap(Wrap { trim: true })
        .centered();
        frame.render_widget(message, chunks[0]);

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[", self.styles.muted_text),
            Span::styled("Enter", self.styles.title),
            Span::styled("] OK", self.styles.muted_text),
        ]))
        .centered();
        frame.render_widget(hint, chunks[1]);
    }
}

impl Default for AlertPopup {
    fn default() -> Self {
        Self::new()
    }
}
