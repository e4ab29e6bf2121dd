use tracing::info;

use crate::cmd::{open, Target};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_states, OutputFormat};

pub fn run(target: &Target, format: OutputFormat) -> CliResult<i32> {
    let mut daemon = open(target)?;
    let states = daemon
        .protocol_details()
        .map_err(|err| client_error("show protocols all", err))?;
    info!(
        count = states.len(),
        with_routes = states.iter().filter(|s| !s.routes.is_unreported()).count(),
        "protocol details parsed"
    );

    print_states(&states, format);
    let _ = daemon.close();
    Ok(SUCCESS)
}
