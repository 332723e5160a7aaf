//! Application module
//!
//! This module contains the main App struct and its supporting types,
//! split into focused submodules for maintainability.

mod events;
mod messages;
mod router;
mod tasks;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::auth::{AuthClient, SessionHolder};
use crate::config::{Config, ConfigLoader, Timeouts};
use crate::transition::TransitionSequencer;
use crate::ui::components::{
    render_transition_overlay, AlertKind, AlertPopup, LinkStatus, StatusBar,
};
use crate::ui::screens::{AboutScreen, DashboardScreen, HomeScreen, LoginScreen, SignupScreen};
use crate::ui::{AppLayout, Styles};

pub use messages::AppMessage;
pub use router::{Route, Router};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Normal,
    Alert,
}

/// Main application
pub struct App {
    // Configuration
    config: Config,
    timeouts: Timeouts,

    // Collaborators
    auth_client: Arc<AuthClient>,
    session: SessionHolder,

    // Navigation
    router: Router,
    transition: TransitionSequencer,

    // Screens
    home: HomeScreen,
    login: LoginScreen,
    signup: SignupScreen,
    dashboard: DashboardScreen,
    about: AboutScreen,

    // Chrome
    status_bar: StatusBar,
    alert: AlertPopup,
    styles: Styles,

    // State
    mode: AppMode,
    link: LinkStatus,
    should_quit: bool,

    // Async channels
    message_tx: mpsc::Sender<AppMessage>,
    message_rx: mpsc::Receiver<AppMessage>,

    // Counter stream teardown
    listener_cancel: Option<CancellationToken>,
}

impl App {
    pub fn new(config_path: Option<&str>) -> Result<Self> {
        let loader = ConfigLoader::new(config_path);
        let config = loader.load().unwrap_or_default();

        let _ = crate::logging::init_logging(&config.logging);
        for warning in crate::config::validate(&config) {
            tracing::warn!("Config warning: {}", warning);
        }

        let timeouts = Timeouts::default();
        let auth_client = Arc::new(AuthClient::new(&config.service, &timeouts)?);
        let (message_tx, message_rx) = mpsc::channel(100);
        let theme = config.theme;

        // The session holder reports every change back into the message
        // loop; the status bar picks the label up from there.
        let mut session = SessionHolder::new();
        let session_tx = message_tx.clone();
        session.subscribe(Box::new(move |event, _session| {
            let _ = session_tx.try_send(AppMessage::SessionChanged(event));
        }));

        let home = HomeScreen::new(&config.remote.database_url);

        let mut app = Self {
            timeouts,
            auth_client,
            session,
            router: Router::new(),
            transition: TransitionSequencer::new(),
            home,
            login: LoginScreen::new(),
            signup: SignupScreen::new(),
            dashboard: DashboardScreen::new(),
            about: AboutScreen::new(),
            status_bar: StatusBar::with_theme(theme),
            alert: AlertPopup::with_theme(theme),
            styles: Styles::from_theme(theme),
            mode: AppMode::Normal,
            link: LinkStatus::Idle,
            should_quit: false,
            message_tx,
            message_rx,
            listener_cancel: None,
            config,
        };
        app.update_status_hints();
        Ok(app)
    }

    /// Run the application event loop
    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            // Short poll while the transition animates so the overlay
            // advances smoothly; relaxed otherwise
            let poll_timeout = if self.transition.is_active() {
                Duration::from_millis(16)
            } else {
                Duration::from_millis(100)
            };

            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            // Process async messages
            while let Ok(msg) = self.message_rx.try_recv() {
                self.handle_message(msg);
            }

            // Advance the transition; navigation fires when the expand
            // phase completes
            if let Some(route) = self.transition.tick(Instant::now()) {
                self.go(route, false);
            }

            self.status_bar.tick_spinner();

            if self.should_quit {
                break;
            }
        }

        self.stop_counter_listener();
        Ok(())
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        let layout = AppLayout::calculate(frame.area());

        match self.router.current() {
            Route::Home => {
                self.home
                    .render(frame, layout.content, &self.styles, self.session.current())
            }
            Route::Login => self.login.render(frame, layout.content, &self.styles),
            Route::Signup => self.signup.render(frame, layout.content, &self.styles),
            Route::Dashboard => {
                self.dashboard
                    .render(frame, layout.content, &self.styles, &self.link)
            }
            Route::About => self.about.render(frame, layout.content, &self.styles),
        }

        self.status_bar.render(frame, layout.status_bar, &self.link);

        if self.mode == AppMode::Alert {
            self.alert.render(frame);
        }

        // The overlay must cover everything else
        let area = frame.area();
        if let Some(circle) = self.transition.overlay(area.width, area.height, Instant::now()) {
            render_transition_overlay(frame, &circle);
        }
    }

    /// Navigate, tearing down or starting the counter subscription as the
    /// dashboard comes and goes
    pub(crate) fn go(&mut self, route: Route, replace: bool) {
        let from = self.router.current();
        if from == route {
            return;
        }
        if replace {
            self.router.replace(route);
        } else {
            self.router.push(route);
        }
        self.on_route_change(from, route);
    }

    pub(crate) fn go_back(&mut self) {
        let from = self.router.current();
        if self.router.back() {
            let to = self.router.current();
            self.on_route_change(from, to);
        }
    }

    fn on_route_change(&mut self, from: Route, to: Route) {
        tracing::info!(from = from.title(), to = to.title(), "Navigated");

        if from == Route::Dashboard {
            self.stop_counter_listener();
        }
        if to == Route::Dashboard {
            self.spawn_counter_listener();
        }

        self.update_status_hints();
    }

    fn show_alert(&mut self, title: &str, message: &str, kind: AlertKind) {
        self.alert.set_content(title, message, kind);
        self.mode = AppMode::Alert;
    }

    fn update_status_hints(&mut self) {
        let hints = match self.router.current() {
            Route::Home => "[Enter] Select  [Tab] Switch  [a] About  [o] Sign out  [q] Quit",
            Route::Login => "[Tab] Next  [Enter] Submit  [F2] Show password  [Esc] Back",
            Route::Signup => "[Tab] Next  [Space] Accept terms  [F2] Show password  [Esc] Back",
            Route::Dashboard => "[r] Reconnect  [Esc] Back  [q] Quit",
            Route::About => "[Esc] Back",
        };
        self.status_bar.set_hints(hints);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Walks the signup form through the key handler: a mismatched confirm
    /// password blocks the account-creation call; fixing it submits once,
    /// and a second Enter while the call is in flight is swallowed.
    #[tokio::test]
    async fn test_signup_submission_gating() {
        let mut app = App::new(None).unwrap();
        app.go(Route::Signup, false);

        type_text(&mut app, "Driver One");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "driver@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "hunter2");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "hunter3");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' ')); // accept terms
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter); // submit with mismatched passwords

        assert_eq!(app.mode, AppMode::Alert);
        assert!(!app.signup.is_loading(), "no call on mismatched passwords");

        press(&mut app, KeyCode::Enter); // dismiss the alert
        assert_eq!(app.mode, AppMode::Normal);

        // Fix the confirm field and submit again
        press(&mut app, KeyCode::BackTab); // Terms
        press(&mut app, KeyCode::BackTab); // Confirm
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert!(app.signup.is_loading(), "valid form submits the call");
        assert_eq!(app.mode, AppMode::Normal);

        // A second Enter while in flight must not submit again
        press(&mut app, KeyCode::Enter);
        assert!(app.signup.is_loading());
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[tokio::test]
    async fn test_login_empty_form_blocks_with_message() {
        let mut app = App::new(None).unwrap();
        app.go(Route::Login, false);

        // Straight to the submit button without typing anything
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, AppMode::Alert);
        assert!(!app.login.is_loading());
    }

    #[tokio::test]
    async fn test_leaving_dashboard_tears_down_subscription() {
        let mut app = App::new(None).unwrap();
        app.go(Route::Dashboard, false);
        assert!(app.listener_cancel.is_some());
        assert_eq!(app.link, LinkStatus::Connecting);

        app.go_back();
        assert!(app.listener_cancel.is_none());
        assert_eq!(app.link, LinkStatus::Idle);
    }
}
