use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL ENTRIES / DAYS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_logs", [], |row| row.get(0))?;
    let days: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT log_date) FROM time_logs",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );
    println!("{}• Logged days:{} {}{}{}", CYAN, RESET, GREEN, days, RESET);

    //
    // 3) DATE RANGE
    //
    let (first, last): (Option<String>, Option<String>) = pool.conn.query_row(
        "SELECT MIN(log_date), MAX(log_date) FROM time_logs",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
