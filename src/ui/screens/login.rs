//! Login screen

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::TextInput;
use crate::ui::layout::centered_column;
use crate::ui::styles::Styles;

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
    Submit,
    SignupLink,
}

pub struct LoginScreen {
    email: TextInput,
    password: TextInput,
    focused: LoginField,
    loading: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            email: TextInput::new("Email Address", "example@email.com"),
            password: TextInput::new("Password", "Enter your password").masked(),
            focused: LoginField::Email,
            loading: false,
        }
    }

    pub fn focused(&self) -> LoginField {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Submit,
            LoginField::Submit => LoginField::SignupLink,
            LoginField::SignupLink => LoginField::Email,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focused = match self.focused {
            LoginField::Email => LoginField::SignupLink,
            LoginField::Password => LoginField::Email,
            LoginField::Submit => LoginField::Password,
            LoginField::SignupLink => LoginField::Submit,
        };
    }

    /// The text input currently holding focus, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            _ => None,
        }
    }

    pub fn toggle_password_reveal(&mut self) {
        self.password.toggle_reveal();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Check the form and hand back the credentials to submit
    pub fn validate(&self) -> Result<(String, String), &'static str> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err("Please fill in all fields");
        }
        Ok((
            self.email.value().to_string(),
            self.password.value().to_string(),
        ))
    }

    /// Drop the password after a finished attempt; the email stays
    pub fn clear_password(&mut self) {
        self.password.clear();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, styles: &Styles) {
        let column = centered_column(area, 44);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Top spacer
                Constraint::Length(1), // Title
                Constraint::Length(2), // Spacer
                Constraint::Length(2), // Email
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Password
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Submit button
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Signup link
                Constraint::Min(0),
            ])
            .split(column);

        let title = Paragraph::new(Line::from(Span::styled("L O G I N", styles.title))).centered();
        frame.render_widget(title, rows[1]);

        self.email
            .render(frame, rows[3], self.focused == LoginField::Email, styles);
        self.password
            .render(frame, rows[5], self.focused == LoginField::Password, styles);

        let (label, style) = if self.loading {
            ("SIGNING IN...", styles.button_disabled)
        } else if self.focused == LoginField::Submit {
            ("LOGIN", styles.button_primary_focused)
        } else {
            ("LOGIN", styles.button_primary)
        };
        let submit = Paragraph::new(vec![Line::default(), Line::from(label), Line::default()])
            .centered()
            .style(style);
        frame.render_widget(submit, rows[7]);

        let link_style = if self.focused == LoginField::SignupLink {
            styles.link_focused
        } else {
            styles.link
        };
        let link = Paragraph::new(Line::from(vec![
            Span::styled("Don't have an account? ", styles.label),
            Span::styled("Sign Up", link_style),
        ]))
        .centered();
        frame.render_widget(link, rows[9]);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(screen: &mut LoginScreen, text: &str) {
        if let Some(input) = screen.focused_input_mut() {
            for c in text.chars() {
                input.insert_char(c);
            }
        }
    }

    #[test]
    fn test_validate_requires_both_fields() {
        let mut screen = LoginScreen::new();
        assert_eq!(screen.validate(), Err("Please fill in all fields"));

        type_into(&mut screen, "driver@example.com");
        assert_eq!(screen.validate(), Err("Please fill in all fields"));

        screen.focus_next();
        type_into(&mut screen, "hunter2");
        assert_eq!(
            screen.validate(),
            Ok(("driver@example.com".to_string(), "hunter2".to_string()))
        );
    }

    #[test]
    fn test_tab_order_wraps() {
        let mut screen = LoginScreen::new();
        screen.focus_prev();
        assert_eq!(screen.focused(), LoginField::SignupLink);
        screen.focus_next();
        assert_eq!(screen.focused(), LoginField::Email);
    }

    #[test]
    fn test_clear_password_keeps_email() {
        let mut screen = LoginScreen::new();
        type_into(&mut screen, "driver@example.com");
        screen.focus_next();
        type_into(&mut screen, "hunter2");
        screen.clear_password();
        assert_eq!(screen.validate(), Err("Please fill in all fields"));
        screen.focus_prev();
        if let Some(input) = screen.focused_input_mut() {
            assert_eq!(input.value(), "driver@example.com");
        }
    }
}
