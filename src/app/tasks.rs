//! Background tasks
//!
//! This module contains all spawn_* methods for network work. Each task
//! reports back over the message channel; nothing blocks the UI loop.

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::auth::AuthError;
use crate::remote::CounterListener;
use crate::ui::components::LinkStatus;

use super::{App, AppMessage};

impl App {
    pub(super) fn spawn_sign_in(&self, email: String, password: String) {
        let message_tx = self.message_tx.clone();
        let client = Arc::clone(&self.auth_client);
        let timeout = self.timeouts.auth_request;

        tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, client.sign_in(&email, &password)).await
            {
                Ok(result) => result,
                Err(_) => Err(AuthError::Timeout),
            };
            let _ = message_tx.send(AppMessage::SignInFinished(result)).await;
        });
    }

    pub(super) fn spawn_sign_up(&self, full_name: String, email: String, password: String) {
        let message_tx = self.message_tx.clone();
        let client = Arc::clone(&self.auth_client);
        let timeout = self.timeouts.auth_request;

        tokio::spawn(async move {
            let result = match tokio::time::timeout(
                timeout,
                client.sign_up(&full_name, &email, &password),
            )
            .await
            {
                Ok(result) => result,
                Err(_) => Err(AuthError::Timeout),
            };
            let _ = message_tx.send(AppMessage::SignUpFinished(result)).await;
        });
    }

    /// Revoke the token on the service side. The local session is already
    /// cleared; a failed revocation only gets logged.
    pub(super) fn spawn_sign_out(&self, access_token: String) {
        let client = Arc::clone(&self.auth_client);

        tokio::spawn(async move {
            if let Err(error) = client.sign_out(&access_token).await {
                tracing::warn!(error = %error, "Token revocation failed");
            }
        });
    }

    /// Open the counter subscription for a dashboard visit. Any previous
    /// subscription is torn down first, so at most one stream is live.
    pub(super) fn spawn_counter_listener(&mut self) {
        self.stop_counter_listener();
        self.dashboard.reset();
        self.link = LinkStatus::Connecting;

        let listener = match CounterListener::new(&self.config.remote, &self.timeouts) {
            Ok(listener) => listener,
            Err(error) => {
                tracing::error!(error = %error, "Failed to set up counter listener");
                self.link = LinkStatus::Lost;
                return;
            }
        };

        let message_tx = self.message_tx.clone();
        let token = CancellationToken::new();
        self.listener_cancel = Some(token.clone());

        tokio::spawn(async move {
            let mut stream = tokio::select! {
                _ = token.cancelled() => return,
                result = listener.subscribe() => match result {
                    Ok(stream) => stream,
                    Err(error) => {
                        let _ = message_tx
                            .send(AppMessage::ListenerLost(error.to_string()))
                            .await;
                        return;
                    }
                },
            };

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    next = stream.next_snapshot() => match next {
                        Ok(Some(snapshot)) => {
                            let _ = message_tx
                                .send(AppMessage::CountersUpdated(snapshot))
                                .await;
                        }
                        Ok(None) => {
                            let _ = message_tx
                                .send(AppMessage::ListenerLost(
                                    "stream closed by the server".to_string(),
                                ))
                                .await;
                            break;
                        }
                        Err(error) => {
                            let _ = message_tx
                                .send(AppMessage::ListenerLost(error.to_string()))
                                .await;
                            break;
                        }
                    },
                }
            }
        });
    }

    /// Deterministic teardown when the dashboard is left
    pub(super) fn stop_counter_listener(&mut self) {
        if let Some(token) = self.listener_cancel.take() {
            tracing::debug!("Counter stream cancelled");
            token.cancel();
        }
        self.link = LinkStatus::Idle;
    }
}
