//! About screen

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::layout::centered_column;
use crate::ui::styles::Styles;

pub struct AboutScreen;

impl AboutScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, styles: &Styles) {
        let column = centered_column(area, 56);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1), // Title
                Constraint::Length(2),
                Constraint::Min(0), // Body
            ])
            .split(column);

        let title = Paragraph::new(Line::from(Span::styled("A B O U T", styles.title))).centered();
        frame.render_widget(title, rows[1]);

        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("AI Track Car v{}", env!("CARGO_PKG_VERSION")),
                styles.normal_text,
            )),
            Line::default(),
            Line::from(Span::styled(
                "A roadside camera counts vehicles passing the gate.",
                styles.normal_text,
            )),
            Line::from(Span::styled(
                "This client mirrors the live counters from the realtime",
                styles.normal_text,
            )),
            Line::from(Span::styled(
                "database: entries, exits, and vehicles currently inside.",
                styles.normal_text,
            )),
            Line::default(),
            Line::from(Span::styled("[Esc] Back", styles.muted_text)),
        ])
        .centered();
        frame.render_widget(body, rows[3]);
    }
}

impl Default for AboutScreen {
    fn default() -> Self {
        Self::new()
    }
}
