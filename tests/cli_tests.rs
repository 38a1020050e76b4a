use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::io::Read;

mod common;
use common::{add_swipe, init_db, init_db_with_data, mess, rec, setup_test_db, temp_out};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    mess()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    mess()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_add_reports_meal() {
    let db_path = setup_test_db("cli_add_meal");
    init_db(&db_path);

    mess()
        .args([
            "--db",
            &db_path,
            "add",
            "A",
            "--name",
            "Alice",
            "--roll",
            "CS-A101",
            "--at",
            "2024-01-01 13:05",
        ])
        .assert()
        .success()
        .stdout(contains("Lunch"));

    mess()
        .args([
            "--db", &db_path, "add", "A", "--at", "2024-01-01 11:00",
        ])
        .assert()
        .success()
        .stdout(contains("outside every meal window"));
}

#[test]
fn test_add_rejects_bad_instant() {
    let db_path = setup_test_db("cli_add_bad_at");
    init_db(&db_path);

    mess()
        .args(["--db", &db_path, "add", "A", "--at", "tomorrow"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_summary_shows_rows_and_totals() {
    let db_path = setup_test_db("cli_summary");
    init_db_with_data(&db_path);

    mess()
        .args([
            "--db",
            &db_path,
            "summary",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
        ])
        .assert()
        .success()
        .stdout(contains(
            "Total Present: Breakfast: 2 | Lunch: 1 | Snacks: 0 | Dinner: 1",
        ))
        .stdout(contains("Alice"))
        .stdout(contains("Bob"))
        .stdout(contains("2024-01-02"));
}

#[test]
fn test_summary_single_day_window() {
    let db_path = setup_test_db("cli_summary_single_day");
    init_db_with_data(&db_path);

    mess()
        .args([
            "--db",
            &db_path,
            "summary",
            "--from",
            "2024-01-02",
            "--to",
            "2024-01-02",
        ])
        .assert()
        .success()
        .stdout(contains(
            "Total Present: Breakfast: 1 | Lunch: 0 | Snacks: 0 | Dinner: 0",
        ))
        .stdout(contains("Bob").and(contains("Alice").not()));
}

#[test]
fn test_summary_filter_by_roll_number() {
    let db_path = setup_test_db("cli_summary_filter");
    init_db_with_data(&db_path);

    mess()
        .args([
            "--db",
            &db_path,
            "summary",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--filter",
            "a1",
        ])
        .assert()
        .success()
        .stdout(contains("Alice").and(contains("Bob").not()))
        .stdout(contains(
            "Total Present: Breakfast: 1 | Lunch: 0 | Snacks: 0 | Dinner: 1",
        ));
}

#[test]
fn test_summary_empty_window() {
    let db_path = setup_test_db("cli_summary_empty");
    init_db_with_data(&db_path);

    mess()
        .args([
            "--db",
            &db_path,
            "summary",
            "--from",
            "2025-06-01",
            "--to",
            "2025-06-30",
        ])
        .assert()
        .success()
        .stdout(contains("No records found for the selected date range."));
}

#[test]
fn test_summary_rejects_reversed_range() {
    let db_path = setup_test_db("cli_summary_reversed");
    init_db_with_data(&db_path);

    mess()
        .args([
            "--db",
            &db_path,
            "summary",
            "--from",
            "2024-01-02",
            "--to",
            "2024-01-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));
}

#[test]
fn test_summary_requires_both_dates() {
    let db_path = setup_test_db("cli_summary_missing");
    init_db(&db_path);

    mess()
        .args(["--db", &db_path, "summary", "--from", "2024-01-01"])
        .assert()
        .failure();
}

#[test]
fn test_summary_fails_on_malformed_time() {
    let db_path = setup_test_db("cli_summary_malformed");
    init_db_with_data(&db_path);

    let mut pool = messroll::db::pool::DbPool::new(&db_path).expect("open db");
    messroll::db::queries::insert_check_ins(
        &mut pool,
        &[rec("Z", "R9", "2024-01-01T09:00:00Z", "9 o'clock")],
        "test",
    )
    .expect("insert");

    mess()
        .args([
            "--db",
            &db_path,
            "summary",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Malformed check-in record"));
}

#[test]
fn test_import_csv_then_summary() {
    let db_path = setup_test_db("cli_import_csv");
    init_db(&db_path);

    let input = temp_out("cli_import_csv_in", "csv");
    fs::write(
        &input,
        "identifier_id,display_name,roll_number,timestamp,time\n\
         A,Alice,CS-A101,2024-01-01T08:00:00Z,08:00 am\n\
         A,Alice,CS-A101,2024-01-01T08:30:00Z,08:30 am\n\
         B,Bob,ME-B202,2024-01-01T13:00:00Z,\n",
    )
    .expect("write csv");

    mess()
        .args(["--db", &db_path, "import", "--file", &input])
        .assert()
        .success()
        .stdout(contains("Imported 3 check-ins"));

    mess()
        .args([
            "--db",
            &db_path,
            "summary",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(contains(
            "Total Present: Breakfast: 1 | Lunch: 1 | Snacks: 0 | Dinner: 0",
        ));
}

#[test]
fn test_import_json_with_document_field_names() {
    let db_path = setup_test_db("cli_import_json");
    init_db(&db_path);

    let input = temp_out("cli_import_json_in", "json");
    fs::write(
        &input,
        r#"[
            {"uniqueId": "A", "name": "Alice", "rollNo": "CS-A101", "date": "2024-01-01T20:00:00.000Z", "time": "08:00 pm"},
            {"uniqueId": "B", "name": "Bob", "rollNo": "ME-B202", "date": "2024-01-01T17:30:00.000Z", "time": "05:30 pm"}
        ]"#,
    )
    .expect("write json");

    mess()
        .args(["--db", &db_path, "import", "--file", &input])
        .assert()
        .success()
        .stdout(contains("Imported 2 check-ins"));

    mess()
        .args([
            "--db",
            &db_path,
            "summary",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(contains(
            "Total Present: Breakfast: 0 | Lunch: 0 | Snacks: 1 | Dinner: 1",
        ));
}

#[test]
fn test_import_is_all_or_nothing() {
    let db_path = setup_test_db("cli_import_atomic");
    init_db(&db_path);

    let input = temp_out("cli_import_atomic_in", "csv");
    fs::write(
        &input,
        "identifier_id,display_name,roll_number,timestamp,time\n\
         A,Alice,CS-A101,2024-01-01T08:00:00Z,08:00 am\n\
         B,Bob,ME-B202,2024-01-01T13:00:00Z,1300\n",
    )
    .expect("write csv");

    mess()
        .args(["--db", &db_path, "import", "--file", &input])
        .assert()
        .failure()
        .stderr(contains("record #2"));

    mess()
        .args([
            "--db",
            &db_path,
            "summary",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("No records found"));
}

#[test]
fn test_export_csv_rows_verbatim() {
    let db_path = setup_test_db("cli_export_csv");
    init_db_with_data(&db_path);

    let out = temp_out("cli_export_csv", "csv");

    mess()
        .args([
            "--db",
            &db_path,
            "export",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--format",
            "csv",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "identifier_id,display_name,roll_number,date,breakfast,lunch,snacks,dinner"
    );
    assert_eq!(lines[1], "A,Alice,CS-A101,2024-01-01,Present,Absent,Absent,Present");
    assert_eq!(lines[2], "B,Bob,ME-B202,2024-01-01,Absent,Present,Absent,Absent");
    assert_eq!(lines[3], "B,Bob,ME-B202,2024-01-02,Present,Absent,Absent,Absent");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_export_json_includes_totals() {
    let db_path = setup_test_db("cli_export_json");
    init_db_with_data(&db_path);

    let out = temp_out("cli_export_json", "json");

    mess()
        .args([
            "--db",
            &db_path,
            "export",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--format",
            "json",
            "--file",
            &out,
            "--filter",
            "B2",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(v["rows"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(v["rows"][0]["identifier_id"], "B");
    assert_eq!(v["rows"][0]["lunch"], "Present");
    assert_eq!(v["totals"]["breakfast"], 1);
    assert_eq!(v["totals"]["lunch"], 1);
    assert_eq!(v["totals"]["dinner"], 0);
}

#[test]
fn test_export_xlsx_creates_file() {
    let db_path = setup_test_db("cli_export_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("cli_export_xlsx", "xlsx");

    mess()
        .args([
            "--db",
            &db_path,
            "export",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_xlsx_writes_dates_only_in_date_column() {
    let db_path = setup_test_db("cli_export_xlsx_date_column");
    init_db(&db_path);
    add_swipe(&db_path, "2024-05-05", "2024-06-06", "2024-07-07", "2024-01-01 08:00");

    let out = temp_out("cli_export_xlsx_date_column", "xlsx");

    mess()
        .args([
            "--db",
            &db_path,
            "export",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-01",
            "--format",
            "xlsx",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let file = fs::File::open(&out).expect("open exported xlsx");
    let mut archive = zip::ZipArchive::new(file).expect("xlsx is a zip container");
    let mut sheet = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .expect("first worksheet")
        .read_to_string(&mut sheet)
        .expect("read worksheet xml");

    let cell_tag = |cell: &str| -> String {
        let start = sheet
            .find(&format!("<c r=\"{cell}\""))
            .unwrap_or_else(|| panic!("cell {cell} missing"));
        let end = sheet[start..].find('>').expect("closed tag") + start;
        sheet[start..end].to_string()
    };

    // identifier, name and roll stay text, the date column is numeric
    for text_cell in ["A2", "B2", "C2"] {
        assert!(cell_tag(text_cell).contains("t=\"s\""), "{text_cell} should be text");
    }
    assert!(!cell_tag("D2").contains("t="), "D2 should be a date serial");
}

#[test]
fn test_summary_without_schema_reports_storage_error() {
    let db_path = setup_test_db("cli_summary_no_schema");

    mess()
        .args([
            "--db",
            &db_path,
            "summary",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Storage error"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("cli_export_relative");
    init_db_with_data(&db_path);

    mess()
        .args([
            "--db",
            &db_path,
            "export",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-02",
            "--file",
            "relative.csv",
            "--format",
            "csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_window_writes_nothing() {
    let db_path = setup_test_db("cli_export_empty");
    init_db_with_data(&db_path);

    let out = temp_out("cli_export_empty", "csv");

    mess()
        .args([
            "--db",
            &db_path,
            "export",
            "--from",
            "2030-01-01",
            "--to",
            "2030-01-31",
            "--format",
            "csv",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("nothing exported"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);
    add_swipe(&db_path, "A", "Alice", "CS-A101", "2024-01-01 08:00");

    mess()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("Check-in #1"));
}
