use crate::cmd::{open, RawArgs, Target};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_response, OutputFormat};

pub fn run(args: RawArgs, target: &Target, format: OutputFormat) -> CliResult<i32> {
    let command = args.command.join(" ");
    let mut daemon = open(target)?;

    daemon
        .send(&command)
        .map_err(|err| client_error(&command, err))?;
    let response = daemon
        .receive()
        .map_err(|err| client_error(&command, err))?;

    print_response(&command, &response, format);
    let _ = daemon.close();
    Ok(SUCCESS)
}
