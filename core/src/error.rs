//! Error types for the portk-core library.

use thiserror::Error;

use crate::domain::{Pid, Port};

/// Result type alias for portk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a port or terminating its process.
#[derive(Error, Debug)]
pub enum Error {
    /// Port number outside 1..=65535.
    #[error("Port number should be between 1 and 65535, got {0:?}")]
    InvalidPort(String),

    /// The socket-table query is not available on this platform.
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),

    /// No process could be resolved for the port.
    #[error("Could not find process for port {port}: {reason}")]
    Resolution { port: Port, reason: ResolutionError },

    /// The forced kill could not be delivered.
    #[error("Could not kill process {pid}: {reason}")]
    SignalFailed { pid: Pid, reason: SignalError },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reasons a port could not be mapped to a process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The socket query process could not be started.
    #[error("failed to launch socket query: {0}")]
    Launch(String),

    /// The query printed a header (or nothing) but no data rows.
    #[error("no process is bound to the port")]
    NoDataRows,

    /// The first data row has too few columns.
    #[error("malformed row: expected at least 5 fields, found {0}")]
    MalformedRow(usize),

    /// The PID column is not a positive integer.
    #[error("invalid process identifier {0:?}")]
    InvalidPid(String),
}

/// Errors reported by a [`ProcessHandle`](crate::ports::ProcessHandle).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The process no longer exists.
    #[error("process not found")]
    NotFound,

    /// Permission denied to signal the process.
    #[error("permission denied")]
    PermissionDenied,

    /// Signals cannot be delivered on this platform.
    #[error("signals not supported on {0}")]
    Unsupported(String),

    /// Any other OS failure.
    #[error("{0}")]
    Os(String),
}
