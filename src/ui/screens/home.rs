//! Home / connect screen
//!
//! Entry point of the app: shows which realtime database the client is
//! wired to and offers the two ways in, connecting straight to the live
//! dashboard or going through sign-in first.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::auth::Session;
use crate::ui::components::TextInput;
use crate::ui::layout::centered_column;
use crate::ui::styles::Styles;

/// Focusable controls on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeButton {
    Connect,
    Login,
}

pub struct HomeScreen {
    database_url: TextInput,
    focused: HomeButton,
    // Captured at render time; the transition starts from this button
    connect_button: Option<Rect>,
}

impl HomeScreen {
    pub fn new(database_url: &str) -> Self {
        Self {
            database_url: TextInput::new("Realtime Database", "").read_only(database_url),
            focused: HomeButton::Connect,
            connect_button: None,
        }
    }

    pub fn focused(&self) -> HomeButton {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            HomeButton::Connect => HomeButton::Login,
            HomeButton::Login => HomeButton::Connect,
        };
    }

    pub fn focus_prev(&mut self) {
        // Two controls, so previous and next coincide
        self.focus_next();
    }

    /// Screen position the transition circle expands from: the center of
    /// the CONNECT SYSTEM button as last rendered
    pub fn connect_origin(&self) -> Option<(u16, u16)> {
        self.connect_button
            .map(|r| (r.x + r.width / 2, r.y + r.height / 2))
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        styles: &Styles,
        session: Option<&Session>,
    ) {
        let column = centered_column(area, 44);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Top spacer
                Constraint::Length(1), // Title
                Constraint::Length(2), // Spacer
                Constraint::Length(2), // Database url (label + value)
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Connect button
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Login button
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Status line
                Constraint::Min(0),
            ])
            .split(column);

        let title = Paragraph::new(Line::from(Span::styled("A I   T R A C K   C A R", styles.title)))
            .centered();
        frame.render_widget(title, rows[1]);

        self.database_url.render(frame, rows[3], false, styles);

        let connect_style = if self.focused == HomeButton::Connect {
            styles.button_accent_focused
        } else {
            styles.button_accent
        };
        let connect = Paragraph::new(vec![
            Line::default(),
            Line::from("CONNECT SYSTEM"),
            Line::default(),
        ])
        .centered()
        .style(connect_style);
        frame.render_widget(connect, rows[5]);
        self.connect_button = Some(rows[5]);

        let login_style = if self.focused == HomeButton::Login {
            styles.button_primary_focused
        } else {
            styles.button_primary
        };
        let login = Paragraph::new(vec![Line::default(), Line::from("LOGIN"), Line::default()])
            .centered()
            .style(login_style);
        frame.render_widget(login, rows[7]);

        let status = match session {
            Some(session) => Line::from(vec![
                Span::styled("Signed in as ", styles.muted_text),
                Span::styled(session.display_label().to_string(), styles.normal_text),
                Span::styled("   [o] Sign out", styles.muted_text),
            ]),
            None => Line::from(Span::styled("Already logged in?", styles.muted_text)),
        };
        frame.render_widget(Paragraph::new(status).centered(), rows[9]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_between_buttons() {
        let mut screen = HomeScreen::new("https://db.example.com");
        assert_eq!(screen.focused(), HomeButton::Connect);
        screen.focus_next();
        assert_eq!(screen.focused(), HomeButton::Login);
        screen.focus_next();
        assert_eq!(screen.focused(), HomeButton::Connect);
    }

    #[test]
    fn test_connect_origin_unknown_before_first_render() {
        let screen = HomeScreen::new("https://db.example.com");
        assert!(screen.connect_origin().is_none());
    }
}
