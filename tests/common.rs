#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use messroll::CheckInRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn mess() -> Command {
    cargo_bin_cmd!("messroll")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_messroll.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema through the CLI (test mode, config untouched)
pub fn init_db(db_path: &str) {
    mess()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one swipe through the CLI
pub fn add_swipe(db_path: &str, id: &str, name: &str, roll: &str, at: &str) {
    mess()
        .args([
            "--db", db_path, "add", id, "--name", name, "--roll", roll, "--at", at,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests:
/// A has two breakfast swipes and a dinner on 2024-01-01,
/// B has lunch on 2024-01-01 and breakfast on 2024-01-02.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_swipe(db_path, "A", "Alice", "CS-A101", "2024-01-01 08:00");
    add_swipe(db_path, "A", "Alice", "CS-A101", "2024-01-01 08:30");
    add_swipe(db_path, "A", "Alice", "CS-A101", "2024-01-01 20:00");
    add_swipe(db_path, "B", "Bob", "ME-B202", "2024-01-01 13:00");
    add_swipe(db_path, "B", "Bob", "ME-B202", "2024-01-02 09:15");
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid rfc3339")
        .with_timezone(&Utc)
}

/// Library-level record with an explicit clock string
pub fn rec(id: &str, roll: &str, timestamp: &str, time: &str) -> CheckInRecord {
    CheckInRecord {
        id: 0,
        identifier_id: id.to_string(),
        display_name: format!("Person {id}"),
        roll_number: roll.to_string(),
        timestamp: ts(timestamp),
        time: time.to_string(),
    }
}
