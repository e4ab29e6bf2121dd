use chrono::NaiveDateTime;
use serde::Serialize;

/// Timestamp layout of the Since column.
pub const SINCE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the protocol listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolSummary {
    pub name: String,
    pub proto: String,
    pub table: String,
    pub state: String,
    pub since: NaiveDateTime,
    /// Free-form remainder of the row; may be empty.
    pub info: String,
}

/// Route exchange counters of one protocol.
///
/// Each counter is either a count or [`Routes::NOT_REPORTED`] when the
/// daemon did not print that label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Routes {
    pub imported: i64,
    pub filtered: i64,
    pub exported: i64,
    pub preferred: i64,
}

impl Routes {
    /// Sentinel for a counter the daemon did not report.
    pub const NOT_REPORTED: i64 = -1;

    /// All four counters unreported.
    pub const fn unreported() -> Self {
        Self {
            imported: Self::NOT_REPORTED,
            filtered: Self::NOT_REPORTED,
            exported: Self::NOT_REPORTED,
            preferred: Self::NOT_REPORTED,
        }
    }

    pub const fn new(imported: i64, filtered: i64, exported: i64, preferred: i64) -> Self {
        Self {
            imported,
            filtered,
            exported,
            preferred,
        }
    }

    /// Whether no counter was reported at all.
    pub fn is_unreported(&self) -> bool {
        *self == Self::unreported()
    }

    /// Mutable slot for a counter label, if the label is known.
    pub(crate) fn slot_mut(&mut self, label: &str) -> Option<&mut i64> {
        match label {
            "imported" => Some(&mut self.imported),
            "filtered" => Some(&mut self.filtered),
            "exported" => Some(&mut self.exported),
            "preferred" => Some(&mut self.preferred),
            _ => None,
        }
    }
}

impl Default for Routes {
    fn default() -> Self {
        Self::unreported()
    }
}

/// One block of the detailed protocol report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolState {
    pub name: String,
    pub proto: String,
    pub table: String,
    pub state: String,
    pub since: NaiveDateTime,
    pub info: String,
    pub routes: Routes,
}

impl ProtocolState {
    pub fn from_summary(summary: ProtocolSummary, routes: Routes) -> Self {
        Self {
            name: summary.name,
            proto: summary.proto,
            table: summary.table,
            state: summary.state,
            since: summary.since,
            info: summary.info,
            routes,
        }
    }

    /// The identity fields without the route counters.
    pub fn summary(&self) -> ProtocolSummary {
        ProtocolSummary {
            name: self.name.clone(),
            proto: self.proto.clone(),
            table: self.table.clone(),
            state: self.state.clone(),
            since: self.since,
            info: self.info.clone(),
        }
    }
}
