//! OS process handles.
//!
//! On Unix the handle sends signals with `kill(2)`. Elsewhere every
//! operation fails with [`SignalError::Unsupported`](crate::error::SignalError::Unsupported).

#[cfg(unix)]
mod unix;

#[cfg(not(unix))]
mod unsupported;

#[cfg(unix)]
pub use unix::UnixProcess as OsProcess;

#[cfg(not(unix))]
pub use unsupported::UnsupportedProcess as OsProcess;
