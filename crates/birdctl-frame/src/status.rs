//! Reply status codes.
//!
//! The leading digit of a code selects its class; the remaining three digits
//! identify the message. Only the class matters for framing.

use std::fmt;

/// Command completed.
pub const OK: StatusCode = StatusCode(0);

/// Greeting sent once when a client connects.
pub const WELCOME: StatusCode = StatusCode(1);

/// Protocol table row.
pub const PROTOCOL_LIST: StatusCode = StatusCode(1002);

/// Protocol detail continuation (description, channels, route counters).
pub const PROTOCOL_DETAILS: StatusCode = StatusCode(1006);

/// Protocol table column header.
pub const PROTOCOL_HEADING: StatusCode = StatusCode(2002);

/// Generic runtime error.
pub const RUNTIME_ERROR: StatusCode = StatusCode(8001);

/// Command parse error.
pub const PARSE_ERROR: StatusCode = StatusCode(9001);

/// Reply class, taken from the leading digit of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyClass {
    /// `0xxx`: action completed, ends the response.
    Success,
    /// `1xxx`: table entry or data line.
    Data,
    /// `2xxx`: table heading.
    Heading,
    /// `8xxx`: runtime error, ends the response.
    RuntimeError,
    /// `9xxx`: command parse error, ends the response.
    ParseError,
    /// Any other leading digit.
    Other,
}

/// A 4-digit reply status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Parse the 4 ASCII digits at the start of a reply line.
    pub fn from_prefix(line: &[u8]) -> Option<Self> {
        let digits = line.get(..4)?;
        if !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let code = digits
            .iter()
            .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));
        Some(Self(code))
    }

    /// Leading digit of the code.
    pub fn leading_digit(self) -> u16 {
        self.0 / 1000
    }

    pub fn class(self) -> ReplyClass {
        match self.leading_digit() {
            0 => ReplyClass::Success,
            1 => ReplyClass::Data,
            2 => ReplyClass::Heading,
            8 => ReplyClass::RuntimeError,
            9 => ReplyClass::ParseError,
            _ => ReplyClass::Other,
        }
    }

    /// Whether a line with this code is the last line of its response.
    pub fn is_terminal(self) -> bool {
        matches!(self.leading_digit(), 0 | 8 | 9)
    }

    /// Whether this code reports a failed command.
    pub fn is_error(self) -> bool {
        matches!(
            self.class(),
            ReplyClass::RuntimeError | ReplyClass::ParseError
        )
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}
