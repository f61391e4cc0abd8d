use super::category::Category;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Single owner of every entry; the log is single-user.
pub const DEFAULT_USER_ID: i64 = 1;

/// One persisted task-duration record.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLogEntry {
    pub id: i64,                // ⇔ time_logs.id
    pub user_id: i64,           // ⇔ time_logs.user_id
    pub log_date: NaiveDate,    // ⇔ time_logs.log_date (TEXT "YYYY-MM-DD")
    pub category: Category,     // ⇔ time_logs.category
    pub task_name: String,      // ⇔ time_logs.task_name
    pub hours: Decimal,         // ⇔ time_logs.hours (TEXT, exact decimal)
    pub created_at: String,     // ⇔ time_logs.created_at (TEXT, RFC 3339)
}

/// A validated row waiting to be inserted for some date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub category: Category,
    pub task_name: String,
    pub hours: Decimal,
}

impl TimeLogEntry {
    pub fn date_str(&self) -> String {
        self.log_date.format("%Y-%m-%d").to_string()
    }
}
