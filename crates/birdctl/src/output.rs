use std::io::{IsTerminal, Write};

use birdctl::frame::Response;
use birdctl::parse::{ProtocolState, ProtocolSummary, Routes, SINCE_FORMAT};
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct RawOutput<'a> {
    command: &'a str,
    code: u16,
    text: &'a str,
}

pub fn print_summaries(summaries: &[ProtocolSummary], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&summaries),
        OutputFormat::Table => {
            let mut table = new_table(vec!["NAME", "PROTO", "TABLE", "STATE", "SINCE", "INFO"]);
            for summary in summaries {
                table.add_row(vec![
                    summary.name.clone(),
                    summary.proto.clone(),
                    summary.table.clone(),
                    summary.state.clone(),
                    summary.since.format(SINCE_FORMAT).to_string(),
                    summary.info.clone(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for summary in summaries {
                println!("{}", summary_line(summary));
            }
        }
    }
}

pub fn print_states(states: &[ProtocolState], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&states),
        OutputFormat::Table => {
            let mut table = new_table(vec![
                "NAME", "PROTO", "TABLE", "STATE", "SINCE", "IMPORTED", "FILTERED", "EXPORTED",
                "PREFERRED",
            ]);
            for state in states {
                table.add_row(vec![
                    state.name.clone(),
                    state.proto.clone(),
                    state.table.clone(),
                    state.state.clone(),
                    state.since.format(SINCE_FORMAT).to_string(),
                    counter(state.routes.imported),
                    counter(state.routes.filtered),
                    counter(state.routes.exported),
                    counter(state.routes.preferred),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for state in states {
                println!("{}", summary_line(&state.summary()));
                if !state.routes.is_unreported() {
                    println!("  routes: {}", routes_line(&state.routes));
                }
            }
        }
    }
}

pub fn print_response(command: &str, response: &Response, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&RawOutput {
            command,
            code: response.code.0,
            text: &response.text,
        }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["CODE", "TEXT"]);
            table.add_row(vec![
                response.code.to_string(),
                response.text.trim_end().to_string(),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("[{}] {command}", response.code);
            print!("{}", response.text);
        }
        OutputFormat::Raw => print_raw(response.text.as_bytes()),
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
    );
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn summary_line(summary: &ProtocolSummary) -> String {
    let line = format!(
        "{} {} {} {} {}",
        summary.name,
        summary.proto,
        summary.table,
        summary.state,
        summary.since.format(SINCE_FORMAT)
    );
    if summary.info.is_empty() {
        line
    } else {
        format!("{line} {}", summary.info)
    }
}

fn routes_line(routes: &Routes) -> String {
    format!(
        "imported={} filtered={} exported={} preferred={}",
        counter(routes.imported),
        counter(routes.filtered),
        counter(routes.exported),
        counter(routes.preferred)
    )
}

/// Unreported counters render as `-`.
fn counter(value: i64) -> String {
    if value == Routes::NOT_REPORTED {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use birdctl::parse::parse_summary_line;

    use super::*;

    #[test]
    fn unreported_counters_render_as_dash() {
        assert_eq!(counter(Routes::NOT_REPORTED), "-");
        assert_eq!(counter(0), "0");
        assert_eq!(
            routes_line(&Routes::new(5, -1, 3, 3)),
            "imported=5 filtered=- exported=3 preferred=3"
        );
    }

    #[test]
    fn summary_line_omits_empty_info() {
        let summary = parse_summary_line("device1 Device --- up 2023-05-01 09:59:58").unwrap();
        assert_eq!(
            summary_line(&summary),
            "device1 Device --- up 2023-05-01 09:59:58"
        );

        let summary =
            parse_summary_line("bgp1 BGP master4 up 2023-05-01 10:00:00 Established").unwrap();
        assert!(summary_line(&summary).ends_with(" Established"));
    }
}
