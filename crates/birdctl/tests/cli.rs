#![cfg(all(unix, feature = "cli"))]

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread::{self, JoinHandle};

use birdctl::transport::{ControlSocket, ControlStream};

const GREETING: &str = "0001 BIRD 2.0.12 ready.\n";

const PROTOCOLS_REPLY: &str = "\
2002-Name       Proto      Table      State  Since         Info
1002-device1    Device     ---        up     2023-05-01 09:59:58
 bgp1       BGP        master4    up     2023-05-01 10:00:00  Established
0000 
";

const DETAILS_REPLY: &str = "\
2002-Name       Proto      Table      State  Since         Info
1002-device1    Device     ---        up     2023-05-01 09:59:58
1006-
1002-bgp1       BGP        master4    up     2023-05-01 10:00:00  Established
1006-  Description:    upstream
     Routes:         120 imported, 4 filtered, 100 exported, 95 preferred

0000 
";

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = PathBuf::from(format!(
        "/tmp/birdctl-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn read_command(stream: &mut ControlStream) -> Option<String> {
    let mut line = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        if stream.read(&mut byte).ok()? == 0 {
            return None;
        }
        if byte[0] == b'\n' {
            return String::from_utf8(line).ok();
        }
        line.push(byte[0]);
    }
}

/// Accept one client, greet it, and answer its first command.
fn fake_daemon(path: &Path, reply: &'static str) -> JoinHandle<Option<String>> {
    let socket = ControlSocket::bind(path).expect("fake daemon should bind");
    thread::spawn(move || {
        let mut stream = socket.accept().expect("client should connect");
        stream.write_all(GREETING.as_bytes()).ok()?;
        let command = read_command(&mut stream)?;
        stream.write_all(reply.as_bytes()).ok()?;
        // Wait for the client to hang up before dropping the socket.
        let _ = read_command(&mut stream);
        Some(command)
    })
}

fn birdctl(socket: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_birdctl"))
        .arg("--log-level")
        .arg("error")
        .arg("--socket")
        .arg(socket)
        .arg("--timeout")
        .arg("2s")
        .args(args)
        .output()
        .expect("birdctl should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn protocols_prints_json_summaries() {
    let dir = unique_temp_dir("protocols");
    let sock = dir.join("bird.ctl");
    let server = fake_daemon(&sock, PROTOCOLS_REPLY);

    let output = birdctl(&sock, &["--format", "json", "protocols"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");

    let value = stdout_json(&output);
    let rows = value.as_array().expect("array of protocols");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "device1");
    assert_eq!(rows[0]["info"], "");
    assert_eq!(rows[1]["name"], "bgp1");
    assert_eq!(rows[1]["table"], "master4");
    assert_eq!(rows[1]["info"], "Established");

    assert_eq!(server.join().unwrap().as_deref(), Some("show protocols"));
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn details_reports_route_counters_and_sentinels() {
    let dir = unique_temp_dir("details");
    let sock = dir.join("bird.ctl");
    let server = fake_daemon(&sock, DETAILS_REPLY);

    let output = birdctl(&sock, &["--format", "json", "details"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");

    let value = stdout_json(&output);
    let states = value.as_array().expect("array of states");
    assert_eq!(states.len(), 2);
    assert_eq!(states[0]["routes"]["imported"], -1);
    assert_eq!(states[1]["name"], "bgp1");
    assert_eq!(states[1]["routes"]["imported"], 120);
    assert_eq!(states[1]["routes"]["filtered"], 4);
    assert_eq!(states[1]["routes"]["exported"], 100);
    assert_eq!(states[1]["routes"]["preferred"], 95);

    assert_eq!(server.join().unwrap().as_deref(), Some("show protocols all"));
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn details_pretty_marks_unreported_counters() {
    let dir = unique_temp_dir("details-pretty");
    let sock = dir.join("bird.ctl");
    let server = fake_daemon(
        &sock,
        "1002-bgp1 BGP master4 up 2023-05-01 10:00:00\n1006-  Routes: 7 imported, 2 exported\n0000 \n",
    );

    let output = birdctl(&sock, &["--format", "pretty", "details"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bgp1 BGP master4 up 2023-05-01 10:00:00"));
    assert!(stdout.contains("imported=7 filtered=- exported=2 preferred=-"));

    server.join().unwrap();
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn raw_prints_assembled_text_verbatim() {
    let dir = unique_temp_dir("raw");
    let sock = dir.join("bird.ctl");
    let server = fake_daemon(&sock, "1000-BIRD 2.0.12\n0013 Daemon is up and running\n");

    let output = birdctl(&sock, &["--format", "raw", "raw", "show", "status"]);
    assert_eq!(output.status.code(), Some(0), "{output:?}");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "BIRD 2.0.12\nDaemon is up and running\n"
    );

    assert_eq!(server.join().unwrap().as_deref(), Some("show status"));
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn daemon_error_reply_exits_61() {
    let dir = unique_temp_dir("daemon-error");
    let sock = dir.join("bird.ctl");
    let server = fake_daemon(&sock, "8003 No protocols match\n");

    let output = birdctl(&sock, &["raw", "show", "protocols", "nope"]);
    assert_eq!(output.status.code(), Some(61), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No protocols match"), "{stderr}");

    server.join().unwrap();
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn malformed_listing_exits_60() {
    let dir = unique_temp_dir("malformed");
    let sock = dir.join("bird.ctl");
    let server = fake_daemon(&sock, "1002-bgp1 BGP master4\n0000 \n");

    let output = birdctl(&sock, &["--format", "json", "protocols"]);
    assert_eq!(output.status.code(), Some(60), "{output:?}");
    assert!(output.stdout.is_empty());

    server.join().unwrap();
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn missing_socket_exits_with_transport_error() {
    let dir = unique_temp_dir("missing");
    let output = birdctl(&dir.join("bird.ctl"), &["protocols"]);
    assert_eq!(output.status.code(), Some(3), "{output:?}");
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn invalid_timeout_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_birdctl"))
        .args(["--timeout", "0s", "protocols"])
        .output()
        .expect("birdctl should run");
    assert_eq!(output.status.code(), Some(64), "{output:?}");
}

#[test]
fn version_extended_prints_build_details() {
    let output = Command::new(env!("CARGO_BIN_EXE_birdctl"))
        .args(["version", "--extended"])
        .output()
        .expect("birdctl should run");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("name: birdctl"));
    assert!(stdout.contains("default_socket: /run/bird/bird.ctl"));
}
