//! Message types and handling for async communication
//!
//! Background tasks never touch app state directly; they report back
//! through these messages and the loop applies the results.

use chrono::Local;

use crate::auth::{AuthError, Session, SessionEvent};
use crate::remote::CounterSnapshot;
use crate::ui::components::{AlertKind, LinkStatus};

use super::{App, Route};

/// Async message types for communication between tasks and the app
pub enum AppMessage {
    /// Sign-in attempt finished
    SignInFinished(Result<Session, AuthError>),

    /// Account creation attempt finished
    SignUpFinished(Result<(), AuthError>),

    /// The session holder notified a change
    SessionChanged(SessionEvent),

    /// The counter stream delivered a fresh snapshot
    CountersUpdated(CounterSnapshot),

    /// The counter stream dropped; no automatic retry
    ListenerLost(String),
}

impl App {
    pub(super) fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::SignInFinished(result) => {
                self.login.set_loading(false);
                self.status_bar.set_busy(false);

                match result {
                    Ok(session) => {
                        tracing::info!(email = %session.email, "Sign-in succeeded");
                        self.login.clear_password();
                        self.session.set(session);
                        self.go(Route::Home, true);
                    }
                    Err(error) => {
                        tracing::warn!(error = %error, status = ?error.status(), "Sign-in failed");
                        self.show_alert("Login failed", &error.to_string(), AlertKind::Error);
                    }
                }
            }
            AppMessage::SignUpFinished(result) => {
                self.signup.set_loading(false);
                self.status_bar.set_busy(false);

                match result {
                    Ok(()) => {
                        tracing::info!("Account created");
                        self.go(Route::Login, true);
                        self.show_alert(
                            "Welcome",
                            "Signup successful! You can now login.",
                            AlertKind::Info,
                        );
                    }
                    Err(error) => {
                        tracing::warn!(error = %error, status = ?error.status(), "Sign-up failed");
                        self.show_alert("Signup failed", &error.to_string(), AlertKind::Error);
                    }
                }
            }
            AppMessage::SessionChanged(event) => {
                tracing::debug!(?event, "Session changed");
                let label = self.session.current().map(|s| s.display_label().to_string());
                self.status_bar.set_session_label(label);
            }
            // Stream messages can trail behind a teardown; they only
            // matter while the dashboard is showing
            AppMessage::CountersUpdated(snapshot) => {
                if self.router.current() == Route::Dashboard {
                    self.link = LinkStatus::Live;
                    self.dashboard.apply_snapshot(snapshot, Local::now());
                }
            }
            AppMessage::ListenerLost(reason) => {
                tracing::error!(%reason, "Counter stream lost");
                if self.router.current() == Route::Dashboard {
                    self.link = LinkStatus::Lost;
                }
            }
        }
    }
}
