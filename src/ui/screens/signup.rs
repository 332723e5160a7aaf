//! Signup screen

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
pub enum SignupField {
    FullName,
    Email,
    Password,
    Confirm,
    Terms,
    Submit,
    LoginLink,
}

/// The validated payload handed to the account-creation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

pub struct SignupScreen {
    full_name: TextInput,
    email: TextInput,
    password: TextInput,
    confirm: TextInput,
    agree_terms: bool,
    focused: SignupField,
    loading: bool,
}

impl SignupScreen {
    pub fn new() -> Self {
        Self {
            full_name: TextInput::new("Full Name", "Your Name"),
            email: TextInput::new("Email Address", "example@email.com"),
            password: TextInput::new("Password", "Enter your password").masked(),
            confirm: TextInput::new("Confirm Password", "Confirm your password").masked(),
            agree_terms: false,
            focused: SignupField::FullName,
            loading: false,
        }
    }

    pub fn focused(&self) -> SignupField {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            SignupField::FullName => SignupField::Email,
            SignupField::Email => SignupField::Password,
            SignupField::Password => SignupField::Confirm,
            SignupField::Confirm => SignupField::Terms,
            SignupField::Terms => SignupField::Submit,
            SignupField::Submit => SignupField::LoginLink,
            SignupField::LoginLink => SignupField::FullName,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focused = match self.focused {
            SignupField::FullName => SignupField::LoginLink,
            SignupField::Email => SignupField::FullName,
            SignupField::Password => SignupField::Email,
            SignupField::Confirm => SignupField::Password,
            SignupField::Terms => SignupField::Confirm,
            SignupField::Submit => SignupField::Terms,
            SignupField::LoginLink => SignupField::Submit,
        };
    }

    /// The text input currently holding focus, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            SignupField::FullName => Some(&mut self.full_name),
            SignupField::Email => Some(&mut self.email),
            SignupField::Password => Some(&mut self.password),
            SignupField::Confirm => Some(&mut self.confirm),
            _ => None,
        }
    }

    pub fn toggle_password_reveal(&mut self) {
        self.password.toggle_reveal();
        self.confirm.toggle_reveal();
    }

    pub fn toggle_terms(&mut self) {
        self.agree_terms = !self.agree_terms;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Check the form; only a fully valid form yields a payload, so the
    /// account-creation call can never run with bad input.
    pub fn validate(&self) -> Result<SignupForm, &'static str> {
        if self.full_name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm.is_empty()
        {
            return Err("Please fill in all fields");
        }

        if self.password.value() != self.confirm.value() {
            return Err("Passwords do not match");
        }

        if !self.agree_terms {
            return Err("Please accept the terms and conditions");
        }

        Ok(SignupForm {
            full_name: self.full_name.value().to_string(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        })
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, styles: &Styles) {
        let column = centered_column(area, 44);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Top spacer
                Constraint::Length(1), // Title
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Full name
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Email
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Password
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Confirm password
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Terms checkbox
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Submit button
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Login link
                Constraint::Min(0),
            ])
            .split(column);

        let title =
            Paragraph::new(Line::from(Span::styled("S I G N   U P", styles.title))).centered();
        frame.render_widget(title, rows[1]);

        self.full_name
            .render(frame, rows[3], self.focused == SignupField::FullName, styles);
        self.email
            .render(frame, rows[5], self.focused == SignupField::Email, styles);
        self.password
            .render(frame, rows[7], self.focused == SignupField::Password, styles);
        self.confirm
            .render(frame, rows[9], self.focused == SignupField::Confirm, styles);

        let checkbox = if self.agree_terms { "[x]" } else { "[ ]" };
        let terms_style = if self.focused == SignupField::Terms {
            styles.title
        } else {
            styles.label
        };
        let terms = Paragraph::new(Line::from(vec![
            Span::styled(format!("{checkbox} "), terms_style),
            Span::styled("I agree to the Terms and Conditions", styles.label),
        ]));
        frame.render_widget(terms, rows[11]);

        let (label, style) = if self.loading {
            ("CREATING ACCOUNT...", styles.button_disabled)
        } else if self.focused == SignupField::Submit {
            ("SIGN UP", styles.button_accent_focused)
        } else {
            ("SIGN UP", styles.button_accent)
        };
        let submit = Paragraph::new(vec![Line::default(), Line::from(label), Line::default()])
            .centered()
            .style(style);
        frame.render_widget(submit, rows[13]);

        let link_style = if self.focused == SignupField::LoginLink {
            styles.link_focused
        } else {
            styles.link
        };
        let link = Paragraph::new(Line::from(vec![
            Span::styled("Already have an account? ", styles.label),
            Span::styled("Login", link_style),
        ]))
        .centered();
        frame.render_widget(link, rows[15]);
    }
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_screen() -> SignupScreen {
        let mut screen = SignupScreen::new();
        for (field, text) in [
            (SignupField::FullName, "Driver One"),
            (SignupField::Email, "driver@example.com"),
            (SignupField::Password, "hunter2"),
            (SignupField::Confirm, "hunter2"),
        ] {
            screen.focused = field;
            if let Some(input) = screen.focused_input_mut() {
                for c in text.chars() {
                    input.insert_char(c);
                }
            }
        }
        screen
    }

    #[test]
    fn test_mismatched_passwords_never_yield_a_payload() {
        let mut screen = filled_screen();
        screen.agree_terms = true;
        screen.focused = SignupField::Confirm;
        if let Some(input) = screen.focused_input_mut() {
            input.insert_char('x');
        }
        assert_eq!(screen.validate(), Err("Passwords do not match"));
    }

    #[test]
    fn test_valid_form_yields_payload_with_agreement() {
        let mut screen = filled_screen();
        assert_eq!(
            screen.validate(),
            Err("Please accept the terms and conditions")
        );

        screen.toggle_terms();
        let form = screen.validate().unwrap();
        assert_eq!(form.full_name, "Driver One");
        assert_eq!(form.email, "driver@example.com");
        assert_eq!(form.password, "hunter2");
    }

    #[test]
    fn test_empty_fields_rejected_before_password_check() {
        let mut screen = SignupScreen::new();
        screen.agree_terms = true;
        assert_eq!(screen.validate(), Err("Please fill in all fields"));
    }

    #[test]
    fn test_tab_order_covers_every_control() {
        let mut screen = SignupScreen::new();
        let mut seen = vec![screen.focused()];
        for _ in 0..6 {
            screen.focus_next();
            seen.push(screen.focused());
        }
        assert_eq!(seen.len(), 7);
        screen.focus_next();
        assert_eq!(screen.focused(), SignupField::FullName);
    }
}
