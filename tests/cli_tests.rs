mod common;
use common::{alog, no_config, rat, row, sample_log, temp_path, utf16le_with_bom, write_input};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_process_writes_csv_table() {
    let cfg = no_config("process_csv");
    let input = write_input("process_csv", "txt", &utf16le_with_bom(&sample_log()));
    let out = temp_path("process_csv_out", "csv");

    rat()
        .args(["--config", &cfg, "process", &input, "--out"])
        .arg(&out)
        .arg("--force")
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("09:30"))
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines[0],
        "Name,2024-01-15 IN,2024-01-15 OUT,2024-01-15 Hours,2024-01-16 IN,2024-01-16 OUT,2024-01-16 Hours"
    );
    assert_eq!(lines[1], "Alice,08:00,17:30,09:30,08:30,08:30,00:00");
    assert_eq!(lines[2], "Bob,09:15,18:00,08:45,,,");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_process_utf8_input_matches_utf16() {
    let cfg = no_config("process_utf8");
    let in16 = write_input("process_utf8_16", "txt", &utf16le_with_bom(&sample_log()));
    let in8 = write_input("process_utf8_8", "tsv", sample_log().as_bytes());
    let out16 = temp_path("process_utf8_out16", "csv");
    let out8 = temp_path("process_utf8_out8", "csv");

    for (input, out) in [(&in16, &out16), (&in8, &out8)] {
        rat()
            .args(["--config", &cfg, "process", input, "-f", "--out"])
            .arg(out)
            .assert()
            .success();
    }

    let a = fs::read_to_string(&out16).expect("utf16 export");
    let b = fs::read_to_string(&out8).expect("utf8 export");
    assert_eq!(a, b);
}

#[test]
fn test_process_defaults_to_attendance_table_csv_in_cwd() {
    let cfg = no_config("process_default_out");
    let dir = std::env::temp_dir().join("process_default_out_rattendance");
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create work dir");

    let input = write_input("process_default_out", "txt", sample_log().as_bytes());

    rat()
        .current_dir(&dir)
        .args(["--config", &cfg, "process", &input])
        .assert()
        .success();

    let content = fs::read_to_string(dir.join("attendance_table.csv")).expect("default export");
    assert!(content.starts_with("Name,2024-01-15 IN"));
}

#[test]
fn test_process_header_only_reports_no_data() {
    let cfg = no_config("process_header_only");
    let input = write_input("process_header_only", "txt", &utf16le_with_bom(&alog(&[])));
    let out = temp_path("process_header_only_out", "csv");

    rat()
        .args(["--config", &cfg, "process", &input, "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("No data parsed."));

    assert!(!out.exists());
}

#[test]
fn test_process_unreadable_file_fails() {
    let cfg = no_config("process_unreadable");
    let input = write_input("process_unreadable", "txt", &[0xC3, 0x28, 0x41]);

    rat()
        .args(["--config", &cfg, "process", &input, "--no-export"])
        .assert()
        .failure()
        .stderr(contains("Cannot read file"));
}

#[test]
fn test_process_rejects_unknown_extension() {
    let cfg = no_config("process_bad_ext");
    let input = write_input("process_bad_ext", "csv", sample_log().as_bytes());

    rat()
        .args(["--config", &cfg, "process", &input, "--no-export"])
        .assert()
        .failure()
        .stderr(contains("expected a .txt or .tsv ALOG file"));
}

#[test]
fn test_process_missing_column_fails() {
    let cfg = no_config("process_missing_col");
    let input = write_input(
        "process_missing_col",
        "txt",
        b"No\tName\tDateTime\r\n1\tAlice\t2024-01-15 08:00:00\r\n",
    );

    rat()
        .args(["--config", &cfg, "process", &input, "--no-export"])
        .assert()
        .failure()
        .stderr(contains("Missing required column 'EnNo'"));
}

#[test]
fn test_process_no_export_with_events_listing() {
    let cfg = no_config("process_events_listing");
    let input = write_input("process_events_listing", "txt", sample_log().as_bytes());

    rat()
        .args(["--config", &cfg, "process", &input, "--no-export", "--events"])
        .assert()
        .success()
        .stdout(contains("Parsed, filtered, de-bursted rows"))
        .stdout(contains("DutyOff"))
        .stdout(contains("2024/01/15  18:00:00...edited"))
        .stdout(contains("Ghost").not())
        .stdout(contains("export completed").not());
}

#[test]
fn test_process_json_export() {
    let cfg = no_config("process_json");
    let input = write_input("process_json", "txt", sample_log().as_bytes());
    let out = temp_path("process_json_out", "json");

    rat()
        .args(["--config", &cfg, "process", &input, "--format", "json", "-f", "--out"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(value["dates"][0], "2024-01-15");
    assert_eq!(value["rows"][0]["name"], "Alice");
    assert_eq!(value["rows"][0]["days"]["2024-01-15"]["Hours"], "09:30");
    assert_eq!(value["rows"][1]["days"]["2024-01-16"]["IN"], "");
}

#[test]
fn test_process_xlsx_export() {
    let cfg = no_config("process_xlsx");
    let input = write_input("process_xlsx", "txt", sample_log().as_bytes());
    let out = temp_path("process_xlsx_out", "xlsx");

    rat()
        .args(["--config", &cfg, "process", &input, "--format", "xlsx", "-f", "--out"])
        .arg(&out)
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_events_export_csv_and_json() {
    let cfg = no_config("events_export");
    let input = write_input("events_export", "txt", &utf16le_with_bom(&sample_log()));
    let out_csv = temp_path("events_export_out", "csv");
    let out_json = temp_path("events_export_out", "json");

    rat()
        .args(["--config", &cfg, "events", &input, "-f", "--out"])
        .arg(&out_csv)
        .assert()
        .success();

    let csv = fs::read_to_string(&out_csv).expect("read events csv");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("name,en_no,in_out,mode,datetime,dt"));
    assert_eq!(
        lines.next(),
        Some("Alice,00000001,DutyOn,FP,2024/01/15  08:00:00,2024-01-15 08:00:00")
    );
    assert_eq!(csv.lines().count(), 6);

    rat()
        .args(["--config", &cfg, "events", &input, "--format", "json", "-f", "--out"])
        .arg(&out_json)
        .assert()
        .success();

    let json = fs::read_to_string(&out_json).expect("read events json");
    assert!(json.contains("\"en_no\": \"00000002\""));
    assert!(!json.contains("00000000"));
}

#[test]
fn test_events_xlsx_is_rejected() {
    let cfg = no_config("events_xlsx");
    let input = write_input("events_xlsx", "txt", sample_log().as_bytes());
    let out = temp_path("events_xlsx_out", "xlsx");

    rat()
        .args(["--config", &cfg, "events", &input, "--format", "xlsx", "-f", "--out"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("Export format not supported"));
}

#[test]
fn test_events_listing_to_stdout() {
    let cfg = no_config("events_stdout");
    let input = write_input("events_stdout", "txt", sample_log().as_bytes());

    rat()
        .args(["--config", &cfg, "events", &input])
        .assert()
        .success()
        .stdout(contains("EnNo"))
        .stdout(contains("Bob"))
        .stdout(contains("5 events from 9 rows"));
}

#[test]
fn test_init_then_config_print() {
    let cfg = temp_path("init_config", "conf");
    let cfg_str = cfg.to_string_lossy().to_string();

    rat()
        .args(["--config", &cfg_str, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    assert!(cfg.exists());

    rat()
        .args(["--config", &cfg_str, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("output_file: attendance_table.csv"))
        .stdout(contains("export_format: csv"));
}

#[test]
fn test_config_day_first_and_format_are_honoured() {
    let cfg = temp_path("config_values", "conf");
    fs::write(&cfg, "day_first: true\nexport_format: json\ncolor: false\n").expect("write config");
    let cfg_str = cfg.to_string_lossy().to_string();

    let input = write_input(
        "config_values",
        "txt",
        alog(&[row(1, "00000001", "Alice", "DutyOn", "03/04/2024 08:00:00")]).as_bytes(),
    );
    let out = temp_path("config_values_out", "json");

    rat()
        .args(["--config", &cfg_str, "process", &input, "-f", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("2024-04-03 IN"));

    let json = fs::read_to_string(&out).expect("read json");
    assert!(json.contains("\"2024-04-03\""));
}

#[test]
fn test_invalid_config_fails() {
    let cfg = temp_path("config_invalid", "conf");
    fs::write(&cfg, "export_format: pdf\n").expect("write config");
    let cfg_str = cfg.to_string_lossy().to_string();
    let input = write_input("config_invalid", "txt", sample_log().as_bytes());

    rat()
        .args(["--config", &cfg_str, "process", &input, "--no-export"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_creates_file_and_runs_editor() {
    let cfg = temp_path("config_edit", "conf");
    let cfg_str = cfg.to_string_lossy().to_string();

    rat()
        .args(["--config", &cfg_str, "config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("edited successfully using 'true'"));

    let written = fs::read_to_string(&cfg).expect("config written before editing");
    assert!(written.contains("output_file: attendance_table.csv"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_fails_when_editor_fails() {
    let cfg = no_config("config_edit_fail");

    rat()
        .args(["--config", &cfg, "config", "--edit", "--editor", "false"])
        .assert()
        .failure()
        .stderr(contains("Editor failed"));

    rat()
        .args(["--config", &cfg, "config", "--edit", "--editor", "/nonexistent/editor"])
        .assert()
        .failure()
        .stderr(contains("cannot start '/nonexistent/editor'"));
}
