//! Termination protocol values.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a process may take to exit after the graceful signal.
///
/// Zero skips the graceful phase entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GracePeriod(Duration);

impl GracePeriod {
    pub const ZERO: GracePeriod = GracePeriod(Duration::ZERO);

    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Default for GracePeriod {
    fn default() -> Self {
        Self::from_secs(3)
    }
}

impl From<Duration> for GracePeriod {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

/// Signals the terminator is allowed to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// Interrupt (SIGINT). The process may handle it and exit cleanly.
    Graceful,
    /// Kill (SIGKILL). Cannot be caught or ignored.
    Forceful,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Graceful => write!(f, "SIGINT"),
            SignalKind::Forceful => write!(f, "SIGKILL"),
        }
    }
}

/// Successful result of a termination attempt.
///
/// Failures are reported as [`Error::SignalFailed`](crate::Error::SignalFailed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TerminationOutcome {
    /// The process exited on its own after the graceful signal.
    ExitedGracefully,
    /// The process was killed.
    ExitedForced,
    /// The process was gone before anything was delivered.
    AlreadyGone,
}

impl TerminationOutcome {
    /// Whether a forced kill ended the process.
    pub fn forced(&self) -> bool {
        matches!(self, TerminationOutcome::ExitedForced)
    }
}
