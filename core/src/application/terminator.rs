//! Graceful-then-forced process termination.
//!
//! The protocol:
//! 1. With a zero grace period, send SIGKILL and stop.
//! 2. Otherwise send SIGINT. If that cannot be delivered, fall back to SIGKILL.
//! 3. Race a liveness poller against the grace period.
//! 4. If the process is still running at the deadline, send SIGKILL.

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::config::Config;
use crate::domain::{GracePeriod, SignalKind, TerminationOutcome};
use crate::error::{Error, Result, SignalError};
use crate::ports::ProcessHandle;

use super::poller::{LivenessPoller, DEFAULT_POLL_INTERVAL};

/// Drives one process to exit.
#[derive(Debug, Clone)]
pub struct ProcessTerminator {
    poll_interval: Duration,
}

impl ProcessTerminator {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.poll_interval())
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Terminate the process behind `handle`, waiting up to `grace` for it
    /// to exit after SIGINT before killing it.
    ///
    /// A handle observed gone is never signalled again. The poll task is
    /// stopped before this returns on every path.
    pub async fn terminate<H>(&self, handle: H, grace: GracePeriod) -> Result<TerminationOutcome>
    where
        H: ProcessHandle + Clone + 'static,
    {
        let pid = handle.pid().as_raw();

        if grace.is_zero() {
            debug!(pid, "No grace period, killing process");
            return force_kill(&handle, TerminationOutcome::AlreadyGone);
        }

        match handle.signal(SignalKind::Graceful) {
            Ok(()) => debug!(pid, "Interrupt sent, waiting for process to exit"),
            Err(SignalError::NotFound) => {
                debug!(pid, "Process not found, already terminated");
                return Ok(TerminationOutcome::AlreadyGone);
            }
            Err(e) => {
                debug!(pid, error = %e, "Failed to send interrupt, killing process");
                return force_kill(&handle, TerminationOutcome::AlreadyGone);
            }
        }

        if self.poll_interval >= grace.as_duration() {
            debug!(
                pid,
                poll_interval_ms = self.poll_interval.as_millis() as u64,
                grace_ms = grace.as_duration().as_millis() as u64,
                "Poll interval is not below the grace period, exit may only be seen at the deadline"
            );
        }

        let mut poller = LivenessPoller::spawn(handle.clone(), self.poll_interval);
        let exited = tokio::select! {
            biased;
            _ = poller.exited() => true,
            _ = sleep(grace.as_duration()) => false,
        };
        poller.stop();

        if exited {
            debug!(pid, "Process exited gracefully");
            return Ok(TerminationOutcome::ExitedGracefully);
        }

        debug!(pid, "Grace period elapsed, killing process");
        // Gone at this point means it exited on its own after the last poll
        force_kill(&handle, TerminationOutcome::ExitedGracefully)
    }
}

impl Default for ProcessTerminator {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

/// Send SIGKILL, reporting `if_gone` when the process has already exited.
fn force_kill<H: ProcessHandle>(
    handle: &H,
    if_gone: TerminationOutcome,
) -> Result<TerminationOutcome> {
    match handle.signal(SignalKind::Forceful) {
        Ok(()) => Ok(TerminationOutcome::ExitedForced),
        Err(SignalError::NotFound) => {
            debug!(pid = handle.pid().as_raw(), "Process not found during force kill");
            Ok(if_gone)
        }
        Err(reason) => Err(Error::SignalFailed {
            pid: handle.pid(),
            reason,
        }),
    }
}
