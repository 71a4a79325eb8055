//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces that the application layer uses
//! to interact with the OS. Implementations live in `adapters`.

mod process;
mod query;

pub use process::ProcessHandle;
pub use query::SocketQuery;
