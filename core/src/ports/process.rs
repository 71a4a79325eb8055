//! Process handle port (interface).

use crate::domain::{Pid, SignalKind};
use crate::error::SignalError;

/// Capability to observe and signal one OS process.
///
/// The OS owns the process; a handle may refer to a process that has
/// already exited, and every operation must report that as
/// [`SignalError::NotFound`] (or `Ok(false)` for [`exists`](Self::exists))
/// rather than panic.
pub trait ProcessHandle: Send + Sync {
    /// The process identifier this handle refers to.
    fn pid(&self) -> Pid;

    /// Deliver a signal.
    fn signal(&self, kind: SignalKind) -> Result<(), SignalError>;

    /// Check whether the process still exists.
    fn exists(&self) -> Result<bool, SignalError>;
}
