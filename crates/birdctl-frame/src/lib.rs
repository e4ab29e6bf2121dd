//! Reply framing for the routing daemon's control protocol.
//!
//! The daemon answers every command with one or more text lines. Each line
//! either starts with a 4-digit status code and a separator byte:
//!
//! ```text
//! 1002-bgp1       BGP        ---        up     2023-05-01 10:00:00  Established
//! ```
//!
//! or with a single continuation marker byte (a space) when it extends the
//! previous coded line. A status code whose leading digit is `0`, `8` or `9`
//! closes the response.
//!
//! [`LineReader`] turns a byte stream into [`ReplyLine`]s, and
//! [`collect`]/[`collect_response`] drain exactly one response.

pub mod assembler;
pub mod codec;
pub mod error;
pub mod reader;
pub mod status;
pub mod writer;

pub use assembler::{collect, collect_response, Response};
pub use codec::{classify_line, FrameConfig, ReplyLine, DEFAULT_MAX_LINE_LEN};
pub use error::{FrameError, Result};
pub use reader::LineReader;
pub use status::{ReplyClass, StatusCode};
pub use writer::{encode_command, write_command};
