use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bitblick_bin() -> &'static str {
    env!("CARGO_BIN_EXE_bitblick")
}

fn run_bitblick(args: &[&str]) -> Output {
    Command::new(bitblick_bin())
        .args(args)
        .output()
        .expect("run bitblick")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn cli_renders_grouped_hex() {
    let out = run_bitblick(&["0xc0ded", "-w", "24", "-g", ":6:3:5"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout_lines(&out), vec!["0000110000 001101 111 01101"]);
}

#[test]
fn cli_negative_literal() {
    let out = run_bitblick(&["-w", "8", "-1"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout_lines(&out), vec!["11111111"]);
}

#[test]
fn cli_auto_width() {
    let out = run_bitblick(&["255"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout_lines(&out), vec!["11111111"]);
}

#[test]
fn cli_numbered_ruler() {
    let out = run_bitblick(&["-n", "5"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        stdout_lines(&out),
        vec!["76543210", "--------", "00000101"]
    );
}

#[test]
fn cli_labels_multiple_values() {
    let out = run_bitblick(&["5", "255"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        stdout_lines(&out),
        vec!["  5  00000101", "255  11111111"]
    );
}

#[test]
fn cli_width_too_small_fails() {
    let out = run_bitblick(&["300", "-w", "8"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Fehler"), "{stderr}");
    assert!(stderr.contains("too small"), "{stderr}");
    assert!(stdout_lines(&out).is_empty(), "keine Teilausgabe bei Fehlern");
}

#[test]
fn cli_unrecognized_literal_fails() {
    let out = run_bitblick(&["zz--"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unrecognized"), "{stderr}");
    assert!(stderr.contains("zz--"), "{stderr}");
}

#[test]
fn cli_color_survives_piping() {
    let out = run_bitblick(&["--color", "-g", "4", "255"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let line = &stdout_lines(&out)[0];
    // Escape-Codes muessen die Pipe ueberleben, sonst sind die
    // Gruppengrenzen unsichtbar (Farb-Modus hat keine Leerzeichen)
    assert!(line.contains("\x1b[36m"), "{line:?}");
    assert!(line.contains("\x1b[33m"), "{line:?}");
    assert!(!line.contains(' '), "{line:?}");
}

#[test]
fn cli_highlight_set_bits() {
    let out = run_bitblick(&["--on", "-w", "4", "6"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout_lines(&out), vec!["0\x1b[1m11\x1b[22m0"]);
}

#[test]
fn cli_reads_literals_from_stdin() {
    let mut child = Command::new(bitblick_bin())
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn bitblick");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"255\n")
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait bitblick");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout_lines(&out), vec!["11111111"]);
}

#[test]
fn cli_empty_stdin_fails() {
    let mut child = Command::new(bitblick_bin())
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn bitblick");
    drop(child.stdin.take());
    let out = child.wait_with_output().expect("wait bitblick");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("keine Literale"), "{stderr}");
}
