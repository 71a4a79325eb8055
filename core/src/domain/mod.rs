//! Domain layer - Pure data types.
//!
//! This module contains the values passed between the resolver, the
//! terminator and their callers. No I/O happens here.

mod port;
mod termination;

pub use port::{Pid, Port};
pub use termination::{GracePeriod, SignalKind, TerminationOutcome};
