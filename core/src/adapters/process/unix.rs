//! Unix process handle using `kill(2)`.
//!
//! - `kill(pid, SIGINT)` for graceful termination
//! - `kill(pid, SIGKILL)` for forced termination
//! - `kill(pid, 0)` to check if the process exists

use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid as NixPid;
use tracing::{debug, trace};

use crate::domain::{Pid, SignalKind};
use crate::error::SignalError;
use crate::ports::ProcessHandle;

/// Handle to a process on a Unix-like OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnixProcess {
    pid: Pid,
}

impl UnixProcess {
    pub fn new(pid: Pid) -> Self {
        Self { pid }
    }

    /// PIDs above `i32::MAX` cannot exist on Unix.
    fn nix_pid(&self) -> Result<NixPid, SignalError> {
        i32::try_from(self.pid.as_raw())
            .map(NixPid::from_raw)
            .map_err(|_| SignalError::NotFound)
    }
}

impl From<SignalKind> for Signal {
    fn from(kind: SignalKind) -> Self {
        match kind {
            SignalKind::Graceful => Signal::SIGINT,
            SignalKind::Forceful => Signal::SIGKILL,
        }
    }
}

fn map_errno(errno: Errno) -> SignalError {
    match errno {
        Errno::ESRCH => SignalError::NotFound,
        Errno::EPERM => SignalError::PermissionDenied,
        other => SignalError::Os(other.desc().to_string()),
    }
}

impl ProcessHandle for UnixProcess {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn signal(&self, kind: SignalKind) -> Result<(), SignalError> {
        debug!(pid = self.pid.as_raw(), signal = %kind, "Sending signal to process");

        let result = kill(self.nix_pid()?, Signal::from(kind)).map_err(map_errno);
        if let Err(ref e) = result {
            debug!(pid = self.pid.as_raw(), signal = %kind, error = %e, "Signal not delivered");
        }
        result
    }

    fn exists(&self) -> Result<bool, SignalError> {
        let pid = match self.nix_pid() {
            Ok(pid) => pid,
            Err(SignalError::NotFound) => return Ok(false),
            Err(e) => return Err(e),
        };

        let exists = match kill(pid, None) {
            Ok(()) => Ok(true),
            // Alive, but owned by another user
            Err(Errno::EPERM) => Ok(true),
            Err(Errno::ESRCH) => Ok(false),
            Err(e) => Err(map_errno(e)),
        };
        trace!(pid = self.pid.as_raw(), exists = ?exists, "Process existence check");
        exists
    }
}
