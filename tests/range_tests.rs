mod common;
use common::{rec, ts};
use messroll::core::summary::build_summary;
use messroll::db::initialize::init_db;
use messroll::db::pool::DbPool;
use messroll::db::queries::insert_check_ins;
use messroll::errors::AppError;
use messroll::{CheckInRecord, DateRange, fetch_range};

fn store() -> Vec<CheckInRecord> {
    vec![
        rec("early", "R0", "2023-12-31T23:59:59.999Z", "11:59 pm"),
        rec("lower", "R1", "2024-01-01T00:00:00.000Z", "12:00 am"),
        rec("mid", "R2", "2024-01-02T08:00:00Z", "08:00 am"),
        rec("upper", "R3", "2024-01-03T23:59:59.999Z", "11:59 pm"),
        rec("late", "R4", "2024-01-04T00:00:00.000Z", "12:00 am"),
    ]
}

fn ids(records: &[CheckInRecord]) -> Vec<&str> {
    records.iter().map(|r| r.identifier_id.as_str()).collect()
}

#[test]
fn test_bounds_are_whole_utc_days() {
    let range = DateRange::parse("2024-01-01", "2024-01-03").unwrap();
    let (lower, upper) = range.bounds();

    assert_eq!(lower, ts("2024-01-01T00:00:00.000Z"));
    assert_eq!(upper, ts("2024-01-03T23:59:59.999Z"));
}

#[test]
fn test_single_day_window() {
    let range = DateRange::parse("2024-02-29", "2024-02-29").unwrap();
    assert_eq!(range.lower_bound(), ts("2024-02-29T00:00:00Z"));
    assert_eq!(range.upper_bound(), ts("2024-02-29T23:59:59.999Z"));
}

#[test]
fn test_fetch_includes_both_bounds() {
    let records = fetch_range(&store(), "2024-01-01", "2024-01-03").unwrap();
    assert_eq!(ids(&records), vec!["lower", "mid", "upper"]);
}

#[test]
fn test_invalid_dates_are_rejected() {
    let s = store();
    for (from, to) in [
        ("", "2024-01-03"),
        ("2024-01-01", ""),
        ("2024/01/01", "2024-01-03"),
        ("2024-13-01", "2024-01-03"),
        ("2024-01-01", "2024-02-30"),
        ("yesterday", "today"),
        ("2024-1-1", "2024-01-03"),
    ] {
        let err = fetch_range(&s, from, to).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidRange(_)),
            "{from}..{to} gave {err}"
        );
    }
}

#[test]
fn test_fetcher_does_not_check_order() {
    let records = fetch_range(&store(), "2024-01-03", "2024-01-01").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_summary_rejects_reversed_window() {
    let err = build_summary(&store(), "2024-01-03", "2024-01-01", None).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));
}

#[test]
fn test_sqlite_store_includes_both_bounds() {
    let mut pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    insert_check_ins(&mut pool, &store(), "test").unwrap();

    let records = fetch_range(&pool, "2024-01-01", "2024-01-03").unwrap();
    assert_eq!(ids(&records), vec!["lower", "mid", "upper"]);

    let mid = &records[1];
    assert_eq!(mid.timestamp, ts("2024-01-02T08:00:00Z"));
    assert_eq!(mid.time, "08:00 am");
    assert_eq!(mid.roll_number, "R2");
    assert!(mid.id > 0);
}

#[test]
fn test_sqlite_store_feeds_summary() {
    let mut pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    insert_check_ins(
        &mut pool,
        &[
            rec("A", "R1", "2024-01-01T08:00:00Z", "08:00 am"),
            rec("A", "R1", "2024-01-01T08:30:00Z", "08:30 am"),
            rec("B", "R2", "2024-01-01T13:00:00Z", "01:00 pm"),
            rec("B", "R2", "2024-01-05T13:00:00Z", "01:00 pm"),
        ],
        "test",
    )
    .unwrap();

    let (_, summary) = build_summary(&pool, "2024-01-01", "2024-01-01", None).unwrap();

    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.totals.breakfast, 1);
    assert_eq!(summary.totals.lunch, 1);
}

#[test]
fn test_migrations_are_repeatable() {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    init_db(&pool.conn).unwrap();

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 2);
}

#[test]
fn test_missing_schema_surfaces_storage_error() {
    // no init_db: the check_ins table does not exist
    let pool = DbPool::in_memory().unwrap();

    let err = fetch_range(&pool, "2024-01-01", "2024-01-03").unwrap_err();
    assert!(matches!(err, AppError::Storage(_)), "got {err}");

    let err = build_summary(&pool, "2024-01-01", "2024-01-03", None).unwrap_err();
    assert!(matches!(err, AppError::Storage(_)), "got {err}");
}

#[test]
fn test_sub_millisecond_swipe_lands_on_same_side_in_every_store() {
    let swipe = CheckInRecord::new(
        "edge",
        "Edge",
        "R5",
        ts("2024-01-03T23:59:59.9995Z"),
    );
    assert_eq!(swipe.timestamp, ts("2024-01-03T23:59:59.999Z"));

    // a raw record that skipped the constructor
    let raw = rec("raw", "R6", "2024-01-03T23:59:59.9995Z", "11:59 pm");

    let memory = vec![swipe.clone(), raw.clone()];
    let in_memory = fetch_range(&memory, "2024-01-03", "2024-01-03").unwrap();

    let mut pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    insert_check_ins(&mut pool, &[swipe, raw], "test").unwrap();
    let in_sqlite = fetch_range(&pool, "2024-01-03", "2024-01-03").unwrap();

    assert_eq!(ids(&in_memory), vec!["edge", "raw"]);
    assert_eq!(ids(&in_sqlite), vec!["edge", "raw"]);
}
