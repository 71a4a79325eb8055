//! Socket query port (interface).

use crate::domain::Port;
use crate::error::Result;

/// Port for listing the sockets bound to a port.
///
/// Implementations return the raw whitespace-delimited table printed by
/// the platform tool, header row included. Parsing happens in the
/// application layer so it can be tested against synthetic tables.
pub trait SocketQuery: Send + Sync {
    /// Run the query scoped to `port`.
    fn query(&self, port: Port) -> impl std::future::Future<Output = Result<String>> + Send;
}
