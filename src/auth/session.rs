//! Authenticated-session state
//!
//! The holder is constructed once by the app and handed to whatever needs
//! it; interested parties register a callback and are told about every
//! change. Only the app's message loop mutates it.

/// The authenticated-user state held after a successful sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub access_token: String,
}

impl Session {
    /// Name to show in the UI: the display name when the account has one,
    /// otherwise the email address
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Session change notifications delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
}

/// Callback invoked on every session change
pub type SessionCallback = Box<dyn Fn(SessionEvent, Option<&Session>) + Send>;

/// Owner of the current session, with an explicit observer interface
pub struct SessionHolder {
    current: Option<Session>,
    callbacks: Vec<SessionCallback>,
}

impl SessionHolder {
    pub fn new() -> Self {
        Self {
            current: None,
            callbacks: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Register a callback invoked on every subsequent change
    pub fn subscribe(&mut self, callback: SessionCallback) {
        self.callbacks.push(callback);
    }

    /// Install a session (successful sign-in) and notify subscribers
    pub fn set(&mut self, session: Session) {
        tracing::info!(user_id = %session.user_id, "Session established");
        self.current = Some(session);
        self.notify(SessionEvent::SignedIn);
    }

    /// Drop the session (sign-out) and notify subscribers. No-op when
    /// there is nothing to clear.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            tracing::info!("Session cleared");
            self.notify(SessionEvent::SignedOut);
        }
    }

    fn notify(&self, event: SessionEvent) {
        for callback in &self.callbacks {
            callback(event, self.current.as_ref());
        }
    }
}

impl Default for SessionHolder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn session() -> Session {
        Session {
            user_id: "user-1".to_string(),
            email: "driver@example.com".to_string(),
            display_name: Some("Driver".to_string()),
            access_token: "token".to_string(),
        }
    }

    #[test]
    fn test_subscribers_see_sign_in_and_sign_out() {
        let (tx, rx) = mpsc::channel();
        let mut holder = SessionHolder::new();
        holder.subscribe(Box::new(move |event, session| {
            let _ = tx.send((event, session.map(|s| s.email.clone())));
        }));

        holder.set(session());
        assert_eq!(
            rx.try_recv().unwrap(),
            (SessionEvent::SignedIn, Some("driver@example.com".to_string()))
        );
        assert!(holder.is_signed_in());

        holder.clear();
        assert_eq!(rx.try_recv().unwrap(), (SessionEvent::SignedOut, None));
        assert!(holder.current().is_none());
    }

    #[test]
    fn test_clear_without_session_is_silent() {
        let (tx, rx) = mpsc::channel();
        let mut holder = SessionHolder::new();
        holder.subscribe(Box::new(move |event, _| {
            let _ = tx.send(event);
        }));

        holder.clear();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_display_label_falls_back_to_email() {
        let mut s = session();
        assert_eq!(s.display_label(), "Driver");
        s.display_name = None;
        assert_eq!(s.display_label(), "driver@example.com");
    }
}
