//! Process handle for platforms without Unix signals.

use crate::domain::{Pid, SignalKind};
use crate::error::SignalError;
use crate::ports::ProcessHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedProcess {
    pid: Pid,
}

impl UnsupportedProcess {
    pub fn new(pid: Pid) -> Self {
        Self { pid }
    }

    fn unsupported() -> SignalError {
        SignalError::Unsupported(std::env::consts::OS.to_string())
    }
}

impl ProcessHandle for UnsupportedProcess {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn signal(&self, _kind: SignalKind) -> Result<(), SignalError> {
        Err(Self::unsupported())
    }

    fn exists(&self) -> Result<bool, SignalError> {
        Err(Self::unsupported())
    }
}
