//! portk CLI - Kill the process listening on a port
//!
//! Finds the process bound to a port with lsof, asks it to exit with
//! SIGINT and kills it if it is still running after the wait time.

mod commands;
mod duration;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use portk_core::{GracePeriod, Port};
use tracing::Level;

use commands::kill::KillOptions;

#[derive(Parser, Debug)]
#[command(name = "portk")]
#[command(author, version, about = "Kill process with port")]
#[command(long_about = "\
Kill the process that is using a port on this machine.

portk looks up the process ID bound to <PORT>, sends it SIGINT so it can
shut down cleanly, and sends SIGKILL if it is still running once the wait
time has passed.

Examples:
  portk 8080             interrupt, then kill after 3s
  portk --wait 10s 8080  allow 10 seconds before killing
  portk --force 8080     kill immediately")]
struct Cli {
    /// Port the target process is bound to (1-65535)
    port: Port,

    /// Wait time before forcefully killing the process (e.g. 500ms, 10s, 1m)
    #[arg(short, long, value_parser = duration::parse_duration, conflicts_with = "force")]
    wait: Option<Duration>,

    /// Kill immediately (SIGKILL) without graceful shutdown
    #[arg(short, long)]
    force: bool,

    /// Config file (default: ~/.portk/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Log progress to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<&Cli> for KillOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            port: cli.port,
            wait: cli.wait.map(GracePeriod::from),
            force: cli.force,
            config: cli.config.clone(),
            json: cli.json,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// First line of a clap error, without the usage block.
fn usage_error_line(e: &clap::Error) -> String {
    e.render()
        .to_string()
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("error: invalid arguments")
        .to_string()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{}", usage_error_line(&e));
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose);

    match commands::kill::run(KillOptions::from(&cli)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
