//! Port to process resolution.

use tracing::debug;

use crate::adapters::{LsofQuery, OsProcess};
use crate::config::Config;
use crate::domain::{Pid, Port};
use crate::error::{Error, ResolutionError, Result};
use crate::ports::SocketQuery;

/// Minimum number of columns in a usable data row.
const MIN_FIELDS: usize = 5;

/// Extract the PID from a socket-table listing.
///
/// The header row is skipped and only the first data row is consulted;
/// its second whitespace-delimited field is the PID. When several
/// processes share the port, the first one listed wins.
pub fn parse_pid(port: Port, table: &str) -> Result<Pid> {
    let failed = |reason| Error::Resolution { port, reason };

    let row = table
        .lines()
        .nth(1)
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| failed(ResolutionError::NoDataRows))?;

    let fields: Vec<&str> = row.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(failed(ResolutionError::MalformedRow(fields.len())));
    }

    fields[1]
        .parse::<u32>()
        .ok()
        .and_then(Pid::new)
        .ok_or_else(|| failed(ResolutionError::InvalidPid(fields[1].to_string())))
}

/// Resolves a port to the process bound to it.
pub struct PortResolver<Q: SocketQuery> {
    query: Q,
}

impl PortResolver<LsofQuery> {
    /// Resolver backed by the configured lsof binary.
    pub fn system(config: &Config) -> Self {
        Self::new(LsofQuery::with_program(config.lsof_path.clone()))
    }
}

impl<Q: SocketQuery> PortResolver<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    /// Find the PID bound to `port`.
    pub async fn resolve_pid(&self, port: Port) -> Result<Pid> {
        let table = self.query.query(port).await?;
        let pid = parse_pid(port, &table)?;
        debug!(port = port.get(), pid = pid.as_raw(), "Resolved port to process");
        Ok(pid)
    }

    /// Find the process bound to `port`.
    pub async fn resolve(&self, port: Port) -> Result<OsProcess> {
        self.resolve_pid(port).await.map(OsProcess::new)
    }
}
