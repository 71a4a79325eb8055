//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter talks to the OS directly.

pub mod lsof;
pub mod process;

// Re-export main types for convenience
pub use lsof::{ensure_supported_platform, LsofQuery};
pub use process::OsProcess;
