//! portk Core Library
//!
//! Finds the process bound to a port and terminates it, asking it to
//! exit with SIGINT before resorting to SIGKILL.
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure data types
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: OS implementations (lsof, `kill(2)`)
//! - `application`: `PortResolver` and `ProcessTerminator`
//!
//! # Platform Support
//! - Linux and macOS: Uses `lsof` and Unix signals
//! - Others: Resolution fails with [`Error::UnsupportedPlatform`]
//!
//! The library emits `tracing` events but never prints or exits; the
//! caller installs a subscriber and turns errors into exit codes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export domain types (primary API)
pub use domain::{GracePeriod, Pid, Port, SignalKind, TerminationOutcome};

// Re-export other commonly used types
pub use adapters::{LsofQuery, OsProcess};
pub use application::{parse_pid, LivenessPoller, PortResolver, ProcessTerminator};
pub use config::{Config, ConfigStore};
pub use error::{Error, ResolutionError, Result, SignalError};
pub use ports::{ProcessHandle, SocketQuery};
