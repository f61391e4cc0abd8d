use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::time_log::{NewEntry, TimeLogEntry};
use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, Result, Row, params};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, warn};

/// Replace every entry of `date` for `user_id` with `rows`.
///
/// DELETE + INSERTs + audit line run in one transaction. If any statement
/// fails the transaction is dropped uncommitted, which rolls it back: the
/// entries that existed before the call are left exactly as they were.
/// Returns the number of inserted rows.
pub fn replace_day(
    conn: &mut Connection,
    date: NaiveDate,
    user_id: i64,
    rows: &[NewEntry],
) -> AppResult<usize> {
    let date_str = date.format("%Y-%m-%d").to_string();

    match replace_day_tx(conn, &date_str, user_id, rows) {
        Ok(removed) => {
            debug!(date = %date_str, removed, inserted = rows.len(), "time logs replaced");
            Ok(rows.len())
        }
        Err(e) => {
            warn!(date = %date_str, error = %e, "time log replace rolled back");
            Err(e)
        }
    }
}

fn replace_day_tx(
    conn: &mut Connection,
    date_str: &str,
    user_id: i64,
    rows: &[NewEntry],
) -> AppResult<usize> {
    let created_at = Utc::now().to_rfc3339();
    let tx = conn.transaction()?;

    let removed = tx.execute(
        "DELETE FROM time_logs WHERE log_date = ?1 AND user_id = ?2",
        params![date_str, user_id],
    )?;

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO time_logs (user_id, log_date, category, task_name, hours, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;

        for row in rows {
            stmt.execute(params![
                user_id,
                date_str,
                row.category.to_db_str(),
                row.task_name,
                row.hours.to_string(),
                created_at,
            ])?;
        }
    }

    ttlog(
        &tx,
        "save",
        date_str,
        &format!("replaced {} entries with {}", removed, rows.len()),
    )?;

    tx.commit()?;
    Ok(removed)
}

/// Load all entries of `date` for `user_id`, in insertion order.
pub fn query_day(conn: &Connection, date: NaiveDate, user_id: i64) -> AppResult<Vec<TimeLogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, user_id, log_date, category, task_name, hours, created_at
         FROM time_logs
         WHERE log_date = ?1 AND user_id = ?2
         ORDER BY id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![date_str, user_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<TimeLogEntry> {
    let date_str: String = row.get("log_date")?;
    let log_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    let cat_str: String = row.get("category")?;
    let category = Category::from_label(&cat_str).ok_or_else(|| {
        conversion_error(3, AppError::Other(format!("Invalid category: {}", cat_str)))
    })?;

    let hours_str: String = row.get("hours")?;
    let hours = Decimal::from_str(&hours_str).map_err(|_| {
        conversion_error(5, AppError::Other(format!("Invalid hours: {}", hours_str)))
    })?;

    Ok(TimeLogEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        log_date,
        category,
        task_name: row.get("task_name")?,
        hours,
        created_at: row.get("created_at")?,
    })
}
