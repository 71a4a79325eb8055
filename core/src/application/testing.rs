//! In-memory process handle for exercising the termination protocol.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::domain::{Pid, SignalKind};
use crate::error::SignalError;
use crate::ports::ProcessHandle;

#[derive(Debug, Clone, Copy)]
enum Behavior {
    /// Exits this long after the graceful signal arrives.
    ExitAfter(Duration),
    /// Keeps running until killed.
    IgnoreInterrupt,
    /// Never existed.
    Gone,
}

#[derive(Debug)]
struct State {
    behavior: Behavior,
    signals: Vec<SignalKind>,
    exists_calls: usize,
    interrupted_at: Option<Instant>,
    killed: bool,
    graceful_error: Option<SignalError>,
    forceful_error: Option<SignalError>,
    exists_error: Option<SignalError>,
}

/// Fake process whose clock follows tokio's (pausable) time.
#[derive(Debug, Clone)]
pub(crate) struct FakeProcess {
    pid: Pid,
    state: Arc<Mutex<State>>,
}

impl FakeProcess {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            pid: Pid::new(4242).unwrap(),
            state: Arc::new(Mutex::new(State {
                behavior,
                signals: Vec::new(),
                exists_calls: 0,
                interrupted_at: None,
                killed: false,
                graceful_error: None,
                forceful_error: None,
                exists_error: None,
            })),
        }
    }

    pub fn exits_after(delay: Duration) -> Self {
        Self::with_behavior(Behavior::ExitAfter(delay))
    }

    pub fn ignores_interrupt() -> Self {
        Self::with_behavior(Behavior::IgnoreInterrupt)
    }

    pub fn gone() -> Self {
        Self::with_behavior(Behavior::Gone)
    }

    pub fn fail_graceful(self, error: SignalError) -> Self {
        self.state.lock().graceful_error = Some(error);
        self
    }

    pub fn fail_forceful(self, error: SignalError) -> Self {
        self.state.lock().forceful_error = Some(error);
        self
    }

    pub fn fail_exists(self, error: SignalError) -> Self {
        self.state.lock().exists_error = Some(error);
        self
    }

    pub fn signals(&self) -> Vec<SignalKind> {
        self.state.lock().signals.clone()
    }

    pub fn count(&self, kind: SignalKind) -> usize {
        self.state.lock().signals.iter().filter(|s| **s == kind).count()
    }

    pub fn exists_calls(&self) -> usize {
        self.state.lock().exists_calls
    }
}

impl State {
    fn alive(&self) -> bool {
        if self.killed {
            return false;
        }
        match self.behavior {
            Behavior::Gone => false,
            Behavior::IgnoreInterrupt => true,
            Behavior::ExitAfter(delay) => match self.interrupted_at {
                Some(at) => at.elapsed() < delay,
                None => true,
            },
        }
    }
}

impl ProcessHandle for FakeProcess {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn signal(&self, kind: SignalKind) -> Result<(), SignalError> {
        let mut state = self.state.lock();
        state.signals.push(kind);

        if !state.alive() {
            return Err(SignalError::NotFound);
        }

        match kind {
            SignalKind::Graceful => {
                if let Some(e) = state.graceful_error.clone() {
                    return Err(e);
                }
                state.interrupted_at.get_or_insert_with(Instant::now);
            }
            SignalKind::Forceful => {
                if let Some(e) = state.forceful_error.clone() {
                    return Err(e);
                }
                state.killed = true;
            }
        }
        Ok(())
    }

    fn exists(&self) -> Result<bool, SignalError> {
        let mut state = self.state.lock();
        state.exists_calls += 1;
        if let Some(e) = state.exists_error.clone() {
            return Err(e);
        }
        Ok(state.alive())
    }
}
