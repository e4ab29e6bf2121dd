mod cmd;
mod exit;
mod logging;
mod output;

use std::path::PathBuf;

use birdctl::transport::DEFAULT_SOCKET_PATH;
use clap::Parser;

use crate::cmd::{Command, Target};
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "birdctl", version, about = "BIRD control socket client")]
struct Cli {
    /// Control socket path.
    #[arg(long, short = 's', value_name = "PATH", default_value = DEFAULT_SOCKET_PATH, global = true)]
    socket: PathBuf,

    /// Read/write timeout on the control socket (e.g. 5s, 500ms).
    #[arg(long, value_name = "DURATION", default_value = "5s", global = true)]
    timeout: String,

    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Log filter directives (e.g. `birdctl_client=debug`); overrides --log-level.
    #[arg(long, value_name = "DIRECTIVES", env = "BIRDCTL_LOG", global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level, cli.log_filter.as_deref());

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let target = Target {
        socket: cli.socket,
        timeout: cli.timeout,
    };
    let result = cmd::run(cli.command, &target, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
