use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `check_ins` table exists.
fn check_ins_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='check_ins'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `check_ins` table.
///
/// `timestamp` is fixed-width UTC text (`YYYY-MM-DDTHH:MM:SS.mmmZ`) so that
/// range queries can compare it as text.
fn create_check_ins_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS check_ins (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            identifier_id  TEXT NOT NULL,
            display_name   TEXT NOT NULL DEFAULT '',
            roll_number    TEXT NOT NULL DEFAULT '',
            timestamp      TEXT NOT NULL,
            time           TEXT NOT NULL,
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_check_ins_timestamp ON check_ins(timestamp);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Add the `source` column (where a swipe came from: cli, import).
fn migrate_add_source_column(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_add_check_in_source";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let has_source = {
        let mut stmt = conn.prepare("PRAGMA table_info('check_ins')")?;
        let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
        let mut found = false;
        for c in cols {
            if c? == "source" {
                found = true;
            }
        }
        found
    };

    if !has_source {
        conn.execute(
            "ALTER TABLE check_ins ADD COLUMN source TEXT NOT NULL DEFAULT 'cli';",
            [],
        )?;
    }

    mark_applied(conn, version, "Added source column to check_ins")?;
    success(format!(
        "Migration applied: {} → added 'source' to check_ins table",
        version
    ));

    Ok(())
}

/// Index used by `summary --filter` lookups and per-person reports.
fn migrate_add_identifier_index(conn: &Connection) -> Result<()> {
    let version = "20250301_0003_index_identifier_day";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_check_ins_identifier ON check_ins(identifier_id, timestamp);",
    )?;

    mark_applied(conn, version, "Indexed check_ins by identifier and timestamp")?;
    success(format!("Migration applied: {}", version));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !check_ins_table_exists(conn)? {
        create_check_ins_table(conn)?;
        success("Created check_ins table.");
    }

    migrate_add_source_column(conn)?;
    migrate_add_identifier_index(conn)?;

    Ok(())
}
