//! Centralized timeout configuration
//!
//! All timing-related constants for network operations live here so they
//! can be tightened in one place (and shortened under test).

use std::time::Duration;

/// Operation timeouts for network calls
#[derive(Debug, Clone)]
pub struct Timeouts {
    /// Timeout for a single identity service request (sign-in, sign-up, sign-out)
    pub auth_request: Duration,

    /// Timeout for establishing the realtime counter stream
    pub listener_connect: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            auth_request: Duration::from_secs(10),
            listener_connect: Duration::from_secs(10),
        }
    }
}

impl Timeouts {
    /// Timeouts shortened for tests
    #[cfg(test)]
    #[allow(dead_code)]
    pub fn fast() -> Self {
        Self {
            auth_request: Duration::from_millis(200),
            listener_connect: Duration::from_millis(200),
        }
    }
}
