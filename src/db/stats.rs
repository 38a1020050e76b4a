use crate::db::pool::DbPool;
use ansi_term::Colour::{Cyan, Fixed, Green, Yellow};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{} {}", Cyan.paint("• File:"), Yellow.paint(db_path));
    println!("{} {:.2} MB", Cyan.paint("• Size:"), file_mb);

    //
    // 2) TOTAL CHECK-INS / PEOPLE
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM check_ins", [], |row| row.get(0))?;
    println!(
        "{} {}",
        Cyan.paint("• Total check-ins:"),
        Green.paint(count.to_string())
    );

    let people: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT identifier_id) FROM check_ins",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{} {}",
        Cyan.paint("• Distinct people:"),
        Green.paint(people.to_string())
    );

    //
    // 3) TIMESTAMP SPAN
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM check_ins ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM check_ins ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let dash = Fixed(8).paint("--").to_string();

    println!("{}", Cyan.paint("• Timestamp span:"));
    println!("    from: {}", first.unwrap_or_else(|| dash.clone()));
    println!("    to:   {}", last.unwrap_or(dash));

    println!();
    Ok(())
}
