use std::io::Read;

use birdctl_frame::{collect_response, status, LineReader};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Read the banner the daemon sends right after accepting a connection.
///
/// ```text
/// 0001 BIRD 2.0.12 ready.
/// ```
///
/// The banner is a complete response on its own. Anything other than a
/// `0001` line means the socket is not a daemon control socket, or the
/// daemon refused the client.
pub fn read_greeting<R: Read>(reader: &mut LineReader<R>) -> Result<String> {
    let response = collect_response(reader)?;
    let text = response.text.trim().to_string();

    if response.code != status::WELCOME {
        return Err(ClientError::UnexpectedGreeting {
            code: response.code,
            text,
        });
    }

    debug!(greeting = %text, "daemon ready");
    Ok(text)
}
