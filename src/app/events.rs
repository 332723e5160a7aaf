//! Event handling for keyboard input
//!
//! Keys are dispatched per screen. Text inputs swallow printable
//! characters, so global shortcuts on form screens sit on non-printable
//! keys (Esc, Tab, F2).

use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;

use crate::ui::components::{AlertKind, LinkStatus};
use crate::ui::screens::{HomeButton, LoginField, SignupField};

use super::{App, AppMode, Route};

impl App {
    pub(super) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Ctrl+C always quits
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Alert modal swallows everything until dismissed
        if self.mode == AppMode::Alert {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.mode = AppMode::Normal;
            }
            return;
        }

        match self.router.current() {
            Route::Home => self.handle_home_key(code),
            Route::Login => self.handle_login_key(code),
            Route::Signup => self.handle_signup_key(code),
            Route::Dashboard => self.handle_dashboard_key(code),
            Route::About => self.handle_about_key(code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::BackTab => self.home.focus_prev(),
            KeyCode::Down | KeyCode::Tab => self.home.focus_next(),
            KeyCode::Enter => match self.home.focused() {
                HomeButton::Connect => self.start_dashboard_transition(),
                HomeButton::Login => self.go(Route::Login, false),
            },
            KeyCode::Char('a') => self.go(Route::About, false),
            KeyCode::Char('o') => {
                if let Some(session) = self.session.current() {
                    let token = session.access_token.clone();
                    self.spawn_sign_out(token);
                    self.session.clear();
                }
            }
            _ => {}
        }
    }

    /// Kick off the circular transition from the CONNECT SYSTEM button
    /// toward the dashboard. Re-triggers while one runs are ignored by
    /// the sequencer.
    fn start_dashboard_transition(&mut self) {
        let color = self.styles.palette.accent;
        match self.home.connect_origin() {
            Some((x, y)) => {
                self.transition
                    .trigger(x, y, color, Route::Dashboard, Instant::now());
            }
            // Not rendered yet; navigate without the effect
            None => self.go(Route::Dashboard, false),
        }
    }

    fn handle_login_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab | KeyCode::Down => self.login.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.login.focus_prev(),
            KeyCode::F(2) => self.login.toggle_password_reveal(),
            KeyCode::Enter => match self.login.focused() {
                LoginField::Submit => self.submit_login(),
                LoginField::SignupLink => self.go(Route::Signup, false),
                _ => self.login.focus_next(),
            },
            KeyCode::Backspace => {
                if let Some(input) = self.login.focused_input_mut() {
                    input.delete_char();
                }
            }
            KeyCode::Left => {
                if let Some(input) = self.login.focused_input_mut() {
                    input.move_cursor_left();
                }
            }
            KeyCode::Right => {
                if let Some(input) = self.login.focused_input_mut() {
                    input.move_cursor_right();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.login.focused_input_mut() {
                    input.insert_char(c);
                }
            }
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        if self.login.is_loading() {
            return;
        }
        match self.login.validate() {
            Ok((email, password)) => {
                self.login.set_loading(true);
                self.status_bar.set_busy(true);
                self.spawn_sign_in(email, password);
            }
            Err(message) => self.show_alert("Notice", message, AlertKind::Info),
        }
    }

    fn handle_signup_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab | KeyCode::Down => self.signup.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.signup.focus_prev(),
            KeyCode::F(2) => self.signup.toggle_password_reveal(),
            KeyCode::Enter => match self.signup.focused() {
                SignupField::Submit => self.submit_signup(),
                SignupField::LoginLink => self.go(Route::Login, false),
                SignupField::Terms => self.signup.toggle_terms(),
                _ => self.signup.focus_next(),
            },
            KeyCode::Char(' ') if self.signup.focused() == SignupField::Terms => {
                self.signup.toggle_terms();
            }
            KeyCode::Backspace => {
                if let Some(input) = self.signup.focused_input_mut() {
                    input.delete_char();
                }
            }
            KeyCode::Left => {
                if let Some(input) = self.signup.focused_input_mut() {
                    input.move_cursor_left();
                }
            }
            KeyCode::Right => {
                if let Some(input) = self.signup.focused_input_mut() {
                    input.move_cursor_right();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.signup.focused_input_mut() {
                    input.insert_char(c);
                }
            }
            _ => {}
        }
    }

    fn submit_signup(&mut self) {
        if self.signup.is_loading() {
            return;
        }
        match self.signup.validate() {
            Ok(form) => {
                self.signup.set_loading(true);
                self.status_bar.set_busy(true);
                self.spawn_sign_up(form.full_name, form.email, form.password);
            }
            Err(message) => self.show_alert("Notice", message, AlertKind::Info),
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('q') => self.should_quit = true,
            // Re-running the subscription is the user's retry, not an
            // automatic one
            KeyCode::Char('r') => {
                if self.link == LinkStatus::Lost {
                    self.spawn_counter_listener();
                }
            }
            _ => {}
        }
    }

    fn handle_about_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter => self.go_back(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}
