use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Idempotent: every statement is `IF NOT EXISTS`, so it is safe to run on
/// every startup before serving requests.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL DEFAULT 1,
            log_date    TEXT NOT NULL,
            category    TEXT NOT NULL CHECK(category IN (
                            'INVESTMENT','WORK','TECH','PERSONAL TASKS','EXERCISE','OTHER')),
            task_name   TEXT NOT NULL,
            hours       TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            CONSTRAINT uq_time_log UNIQUE (log_date, user_id, category, task_name)
        );

        CREATE INDEX IF NOT EXISTS idx_time_logs_date_user ON time_logs(log_date, user_id);

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
