#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str =
    "No\tTMNo\tEnNo\tName\tGMNo\tMode\tIn/Out\tAntipass\tDaily\tDateTime";

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Unique path inside the system temp dir; any leftover file is removed.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// A config path that never exists, so every CLI test runs on defaults.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
        .to_string_lossy()
        .to_string()
}

/// One ALOG data line in the column order of `HEADER`.
pub fn row(no: u32, en_no: &str, name: &str, in_out: &str, datetime: &str) -> String {
    format!("{no}\t1\t{en_no}\t{name}\t1\tFP\t{in_out}\t0\t0\t{datetime}")
}

/// Header plus lines, joined with CRLF like the device export.
pub fn alog(lines: &[String]) -> String {
    let mut text = String::from(HEADER);
    for l in lines {
        text.push_str("\r\n");
        text.push_str(l);
    }
    text.push_str("\r\n");
    text
}

pub fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut out = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

pub fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
}

pub fn utf16be(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(|u| u.to_be_bytes()).collect()
}

/// Write `bytes` to a temp file and return its path as String.
pub fn write_input(name: &str, ext: &str, bytes: &[u8]) -> String {
    let path = temp_path(name, ext);
    fs::write(&path, bytes).expect("write input file");
    path.to_string_lossy().to_string()
}

/// Two employees over two days plus the usual device noise.
pub fn sample_log() -> String {
    alog(&[
        row(1, "00000001", "Alice", "DutyOn", "2024/01/15  08:00:00"),
        row(2, "00000001", "Alice", "DutyOn", "2024/01/15  08:00:00"),
        row(3, "00000002", "Bob", "DutyOn", "2024/01/15  09:15:00"),
        row(4, "00000000", "Ghost", "DutyOn", "2024/01/15  10:00:00"),
        row(5, "00000001", "Alice", "DutyOff", "2024/01/15  17:30:00"),
        row(6, "00000002", "Bob", "DutyOff", "2024/01/15  18:00:00...edited"),
        row(7, "00000001", "Alice", "DutyOn", "2024/01/16  08:30:00"),
        row(8, "00000003", "", "DutyOn", "2024/01/16  08:31:00"),
        row(9, "00000001", "Alice", "DutyOff", "not a date"),
    ])
}
