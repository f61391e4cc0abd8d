use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validate::{RowPayload, SubmissionPayload, validate_payload};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::replace_day;
use crate::errors::{AppError, AppResult};
use crate::models::time_log::DEFAULT_USER_ID;
use crate::ui::messages::success;
use serde_json::Value;

/// Replace a day's entries from the command line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save { date, rows } = cmd {
        let payload = SubmissionPayload {
            log_date: Some(date.clone()),
            rows: Some(
                rows.iter()
                    .map(|r| parse_row_arg(r))
                    .collect::<AppResult<Vec<_>>>()?,
            ),
        };

        let submission = validate_payload(payload)?;

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;
        let saved = pool.with_conn(|conn| {
            replace_day(conn, submission.log_date, DEFAULT_USER_ID, &submission.rows)
        })?;

        success(format!(
            "Saved {} time log(s) for {}",
            saved, submission.log_date
        ));
    }

    Ok(())
}

/// Split `CATEGORY;TASK;HOURS`. Task names may not contain `;`.
fn parse_row_arg(raw: &str) -> AppResult<RowPayload> {
    let parts: Vec<&str> = raw.split(';').collect();
    let [category, task, hours] = parts.as_slice() else {
        return Err(AppError::InvalidRequest(format!(
            "invalid --row '{}': expected CATEGORY;TASK;HOURS",
            raw
        )));
    };

    Ok(RowPayload {
        category: Some(category.to_string()),
        task_name: Some(task.to_string()),
        hours: Some(Value::String(hours.to_string())),
    })
}
