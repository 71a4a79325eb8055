//! Application layer - Use case services.
//!
//! This module contains the two services a caller drives in sequence:
//! - `PortResolver` maps a port to the process bound to it
//! - `ProcessTerminator` runs the graceful-then-forced termination protocol
//!
//! Both depend only on the traits in `ports`, so they are tested against
//! fakes instead of live sockets and processes.

mod poller;
mod resolver;
mod terminator;

#[cfg(test)]
pub(crate) mod testing;

pub use poller::{LivenessPoller, PollGuard, DEFAULT_POLL_INTERVAL};
pub use resolver::{parse_pid, PortResolver};
pub use terminator::ProcessTerminator;
