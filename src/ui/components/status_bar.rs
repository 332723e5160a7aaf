use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::styles::Styles;
use crate::ui::theme::Theme;

/// State of the realtime counter link
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LinkStatus {
    /// No subscription (not on the dashboard)
    #[default]
    Idle,
    /// Subscription being established
    Connecting,
    /// Stream open, snapshots flowing
    Live,
    /// Stream dropped; re-enter the dashboard to resubscribe
    Lost,
}

impl LinkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStatus::Idle => "Offline",
            LinkStatus::Connecting => "Connecting",
            LinkStatus::Live => "Live",
            LinkStatus::Lost => "Link lost",
        }
    }
}

/// Spinner animation frames
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Bottom status bar: key hints, session, link state
pub struct StatusBar {
    styles: Styles,
    is_busy: bool,
    spinner_frame: usize,
    hints: String,
    session_label: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            styles: Styles::from_theme(theme),
            is_busy: false,
            spinner_frame: 0,
            hints: String::new(),
            session_label: None,
        }
    }

    /// Key hints for the active screen
    pub fn set_hints(&mut self, hints: impl Into<String>) {
        self.hints = hints.into();
    }

    pub fn set_session_label(&mut self, label: Option<String>) {
        self.session_label = label;
    }

    /// Show the spinner while a network call is in flight
    pub fn set_busy(&mut self, busy: bool) {
        self.is_busy = busy;
    }

    /// Advance the spinner animation (call every loop iteration)
    pub fn tick_spinner(&mut self) {
        if self.is_busy {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, link: &LinkStatus) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(30), // Left: key hints or busy spinner
                Constraint::Min(20), // Center: session
                Constraint::Min(15), // Right: link status
            ])
            .split(area);

        // Left side: spinner while busy, otherwise key hints
        let mut left_spans = vec![];
        if self.is_busy {
            left_spans.push(Span::styled(
                format!("{} ", self.spinner()),
                self.styles.warning_text,
            ));
            left_spans.push(Span::styled("Working...", self.styles.muted_text));
        } else {
            left_spans.push(Span::styled(&self.hints, self.styles.muted_text));
        }
        frame.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

        // Center: who is signed in
        let session_line = match &self.session_label {
            Some(label) => Line::from(vec![
                Span::styled("● ", self.styles.success_text),
                Span::styled(label.clone(), self.styles.normal_text),
            ]),
            None => Line::from(Span::styled("Not signed in", self.styles.muted_text)),
        };
        frame.render_widget(Paragraph::new(session_line).centered(), chunks[1]);

        // Right side: link status indicator
        let (icon, style) = match link {
            LinkStatus::Live => ("[OK]", self.styles.status_connected),
            LinkStatus::Lost => ("[X]", self.styles.status_disconnected),
            LinkStatus::Connecting => ("[~]", self.styles.status_unknown),
            LinkStatus::Idle => ("[-]", self.styles.muted_text),
        };
        let status = Paragraph::new(Line::from(Span::styled(
            format!("{} {}", icon, link.as_str()),
            style,
        )))
        .right_aligned();
        frame.render_widget(status, chunks[2]);
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
