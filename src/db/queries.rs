use crate::core::range::CheckInStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::check_in::CheckInRecord;
use crate::utils::date::{format_timestamp, parse_timestamp};
use chrono::{DateTime, Utc};
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

const SELECT_CHECK_INS: &str =
    "SELECT id, identifier_id, display_name, roll_number, timestamp, time FROM check_ins";

pub fn map_row(row: &Row) -> Result<CheckInRecord> {
    let ts_str: String = row.get("timestamp")?;

    let timestamp = parse_timestamp(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(ts_str.clone())),
        )
    })?;

    Ok(CheckInRecord {
        id: row.get("id")?,
        identifier_id: row.get("identifier_id")?,
        display_name: row.get("display_name")?,
        roll_number: row.get("roll_number")?,
        timestamp,
        time: row.get("time")?,
    })
}

/// Insert one swipe and return its row id.
pub fn insert_check_in(conn: &Connection, rec: &CheckInRecord, source: &str) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO check_ins (identifier_id, display_name, roll_number, timestamp, time, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;

    stmt.execute(params![
        rec.identifier_id,
        rec.display_name,
        rec.roll_number,
        format_timestamp(&rec.timestamp),
        rec.time,
        source,
        Utc::now().to_rfc3339(),
    ])?;

    Ok(conn.last_insert_rowid())
}

/// Insert many swipes atomically: either all rows land or none.
pub fn insert_check_ins(pool: &mut DbPool, recs: &[CheckInRecord], source: &str) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;
    for rec in recs {
        insert_check_in(&tx, rec, source)?;
    }
    tx.commit()?;
    Ok(recs.len())
}

/// Every swipe with `lower <= timestamp <= upper`.
pub fn load_check_ins_between(
    conn: &Connection,
    lower: &DateTime<Utc>,
    upper: &DateTime<Utc>,
) -> AppResult<Vec<CheckInRecord>> {
    let sql = format!(
        "{SELECT_CHECK_INS}
         WHERE timestamp BETWEEN ?1 AND ?2
         ORDER BY timestamp ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map(
        params![format_timestamp(lower), format_timestamp(upper)],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

impl CheckInStore for DbPool {
    fn records_between(
        &self,
        lower: &DateTime<Utc>,
        upper: &DateTime<Utc>,
    ) -> AppResult<Vec<CheckInRecord>> {
        load_check_ins_between(&self.conn, lower, upper)
    }
}

pub fn load_log(pool: &DbPool) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
