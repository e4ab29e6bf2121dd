use std::path::PathBuf;
use std::time::Duration;

use birdctl::client::{connect_with_config, ClientConfig, Daemon};
use clap::{Args, Subcommand};
use tracing::debug;

use crate::exit::{client_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod details;
pub mod protocols;
pub mod raw;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List configured protocols (`show protocols`).
    Protocols,
    /// Show protocol details with route counters (`show protocols all`).
    Details,
    /// Send one command and print the daemon's reply.
    Raw(RawArgs),
    /// Show version information.
    Version(VersionArgs),
}

/// Where and how to reach the daemon.
#[derive(Debug, Clone)]
pub struct Target {
    pub socket: PathBuf,
    pub timeout: String,
}

pub fn run(command: Command, target: &Target, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Protocols => protocols::run(target, format),
        Command::Details => details::run(target, format),
        Command::Raw(args) => raw::run(args, target, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct RawArgs {
    /// Command words, joined with single spaces (e.g. `show route count`).
    #[arg(required = true, num_args = 1.., value_name = "COMMAND")]
    pub command: Vec<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Open a connection and consume the greeting.
pub fn open(target: &Target) -> CliResult<Daemon> {
    let timeout = parse_duration(&target.timeout)?;
    let config = ClientConfig::with_timeout(timeout);
    let context = format!("connect {}", target.socket.display());
    let daemon =
        connect_with_config(&target.socket, &config).map_err(|err| client_error(&context, err))?;
    debug!(
        socket = %target.socket.display(),
        greeting = daemon.greeting().unwrap_or_default(),
        "connected"
    );
    Ok(daemon)
}

pub fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        _ => Ok(Duration::from_secs(value)),
    }
}
