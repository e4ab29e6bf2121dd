use tracing::info;

use crate::cmd::{open, Target};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_summaries, OutputFormat};

pub fn run(target: &Target, format: OutputFormat) -> CliResult<i32> {
    let mut daemon = open(target)?;
    let summaries = daemon
        .protocols()
        .map_err(|err| client_error("show protocols", err))?;
    info!(count = summaries.len(), "protocols listed");

    print_summaries(&summaries, format);
    let _ = daemon.close();
    Ok(SUCCESS)
}
