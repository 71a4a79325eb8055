//! Kill command - terminate the process bound to a port.

use std::path::PathBuf;

use anyhow::Result;
use portk_core::{
    Config, ConfigStore, GracePeriod, Pid, Port, PortResolver, ProcessHandle, ProcessTerminator,
    TerminationOutcome,
};
use serde::Serialize;
use tracing::debug;

/// Options collected from the command line.
#[derive(Debug, Clone)]
pub struct KillOptions {
    pub port: Port,
    pub wait: Option<GracePeriod>,
    pub force: bool,
    pub config: Option<PathBuf>,
    pub json: bool,
}

#[derive(Serialize)]
struct Report {
    port: Port,
    pid: Pid,
    outcome: TerminationOutcome,
    forced: bool,
}

impl Report {
    fn new(port: Port, pid: Pid, outcome: TerminationOutcome) -> Self {
        Self {
            port,
            pid,
            outcome,
            forced: outcome.forced(),
        }
    }
}

/// `--force` beats `--wait`, which beats the config file.
pub fn grace_period(force: bool, wait: Option<GracePeriod>, config: &Config) -> GracePeriod {
    if force {
        GracePeriod::ZERO
    } else {
        wait.unwrap_or_else(|| config.grace_period())
    }
}

pub async fn run(opts: KillOptions) -> Result<()> {
    let store = match &opts.config {
        Some(path) => ConfigStore::with_path(path),
        None => ConfigStore::new()?,
    };
    let config = store.load().await?;
    let grace = grace_period(opts.force, opts.wait, &config);

    let handle = PortResolver::system(&config).resolve(opts.port).await?;
    let pid = handle.pid();
    debug!(port = opts.port.get(), pid = pid.as_raw(), grace_ms = grace.as_duration().as_millis() as u64, "Terminating");

    let outcome = ProcessTerminator::from_config(&config)
        .terminate(handle, grace)
        .await?;

    if opts.json {
        let report = Report::new(opts.port, pid, outcome);
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    println!("{}", describe(pid, outcome));
    println!("Done");
    Ok(())
}

fn describe(pid: Pid, outcome: TerminationOutcome) -> String {
    match outcome {
        TerminationOutcome::ExitedGracefully => format!("Process {} exited gracefully", pid),
        TerminationOutcome::ExitedForced => format!("Process {} killed", pid),
        TerminationOutcome::AlreadyGone => format!("Process {} had already exited", pid),
    }
}
