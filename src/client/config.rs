//! Client configuration.
//!
//! Timeouts are the only setting that changes after the client is built;
//! they are read at the start of every send.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of idle requests (and responses) kept for reuse.
pub const DEFAULT_POOL_CAPACITY: usize = 64;

/// Read and write timeouts applied to each send.
///
/// A zero duration means no timeout for that phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timeouts {
    /// Maximum time to wait for the full response.
    pub read_timeout: Duration,
    /// Maximum time to spend sending the request.
    pub write_timeout: Duration,
}

impl Timeouts {
    pub fn new(read_timeout: Duration, write_timeout: Duration) -> Self {
        Self {
            read_timeout,
            write_timeout,
        }
    }

    /// Returns the deadline for one round trip, if any.
    ///
    /// The transport enforces a single deadline per request, so the two
    /// phases are added together. A zero phase contributes nothing, and
    /// `None` is returned when both are zero.
    pub fn request_deadline(&self) -> Option<Duration> {
        let total = self.read_timeout.saturating_add(self.write_timeout);
        (!total.is_zero()).then_some(total)
    }
}

/// Construction-time settings for a [`Client`](crate::Client).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Initial timeouts; both zero by default.
    pub timeouts: Timeouts,

    /// Maximum number of released requests and responses kept for reuse.
    pub pool_capacity: usize,

    /// Value sent as `User-Agent` unless a request sets its own.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeouts: Timeouts::default(),
            pool_capacity: DEFAULT_POOL_CAPACITY,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.read_timeout = timeout;
        self
    }

    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.write_timeout = timeout;
        self
    }

    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
