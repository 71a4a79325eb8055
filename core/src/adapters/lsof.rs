//! Socket query implementation using lsof.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, trace};

use crate::domain::Port;
use crate::error::{Error, ResolutionError, Result};
use crate::ports::SocketQuery;

/// Program looked up on `PATH` when no explicit path is configured.
pub const DEFAULT_LSOF: &str = "lsof";

/// Operating systems whose lsof output layout is understood.
pub const SUPPORTED_PLATFORMS: &[&str] = &["linux", "macos"];

/// Fail with [`Error::UnsupportedPlatform`] unless running on a supported OS.
pub fn ensure_supported_platform() -> Result<()> {
    let os = std::env::consts::OS;
    if SUPPORTED_PLATFORMS.contains(&os) {
        Ok(())
    } else {
        Err(Error::UnsupportedPlatform(os.to_string()))
    }
}

/// Lists the sockets bound to a port with lsof.
#[derive(Debug, Clone)]
pub struct LsofQuery {
    program: PathBuf,
}

impl LsofQuery {
    /// Use `lsof` from `PATH`.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_LSOF)
    }

    /// Use a specific lsof binary.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for LsofQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SocketQuery for LsofQuery {
    /// Executes: `lsof -n -P -i :<port>`
    ///
    /// Expected output format:
    /// ```text
    /// COMMAND   PID USER   FD   TYPE DEVICE SIZE/OFF NODE NAME
    /// node    34805 code   19u  IPv6 0x3d80      0t0  TCP [::1]:3000 (LISTEN)
    /// ```
    ///
    /// lsof exits non-zero with empty output when nothing matches, so the
    /// exit status is ignored and the empty table is left to the parser.
    async fn query(&self, port: Port) -> Result<String> {
        ensure_supported_platform()?;

        debug!(port = port.get(), program = %self.program.display(), "Running socket query");

        let output = Command::new(&self.program)
            .args(["-n", "-P", "-i"])
            .arg(format!(":{}", port))
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| Error::Resolution {
                port,
                reason: ResolutionError::Launch(format!("{}: {}", self.program.display(), e)),
            })?;

        trace!(port = port.get(), status = ?output.status, bytes = output.stdout.len(), "Socket query finished");

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
