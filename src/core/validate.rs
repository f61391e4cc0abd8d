//! Request validation for day submissions.
//!
//! Top-level problems (missing body, bad date, no rows) short-circuit with a
//! single `AppError::InvalidRequest`. Row problems are collected, one message
//! per offending row, and returned together as `AppError::Validation`.

use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::time_log::NewEntry;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// Raw submission as sent by the client. Every field is optional so that
/// missing values are reported with our own messages instead of serde's.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionPayload {
    pub log_date: Option<String>,
    pub rows: Option<Vec<RowPayload>>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowPayload {
    pub category: Option<String>,
    pub task_name: Option<String>,
    /// JSON number or string.
    pub hours: Option<Value>,
}

/// A submission that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub log_date: NaiveDate,
    pub rows: Vec<NewEntry>,
}

/// Validate a JSON request body. `None` means no body was sent at all.
pub fn validate_submission(body: Option<Value>) -> AppResult<ValidSubmission> {
    let body = match body {
        None | Some(Value::Null) => return Err(empty_body()),
        Some(Value::Object(map)) if map.is_empty() => return Err(empty_body()),
        Some(v) => v,
    };

    let payload: SubmissionPayload = serde_json::from_value(body)
        .map_err(|e| AppError::InvalidRequest(format!("request body is malformed: {e}")))?;

    validate_payload(payload)
}

pub fn validate_payload(payload: SubmissionPayload) -> AppResult<ValidSubmission> {
    let log_date = parse_date_field(payload.log_date.as_deref(), "logDate")?;

    let rows = match payload.rows {
        Some(rows) if !rows.is_empty() => rows,
        _ => return Err(AppError::InvalidRequest("rows is empty".to_string())),
    };

    let mut errors = Vec::new();
    let mut validated = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        match validate_row(idx + 1, row) {
            Ok(entry) => validated.push(entry),
            Err(msg) => errors.push(msg),
        }
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(ValidSubmission {
        log_date,
        rows: validated,
    })
}

/// Parse a mandatory `YYYY-MM-DD` field. An empty string counts as missing.
pub fn parse_date_field(raw: Option<&str>, field: &str) -> AppResult<NaiveDate> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidRequest(format!("{field} is required")))?;

    parse_date(raw).ok_or_else(|| {
        AppError::InvalidRequest(format!(
            "{field} has an invalid format (expected YYYY-MM-DD)"
        ))
    })
}

/// Check one row; `n` is the 1-based row number used in the message.
/// The first failing check wins.
fn validate_row(n: usize, row: &RowPayload) -> Result<NewEntry, String> {
    let category_raw = row.category.as_deref().unwrap_or("").trim();
    let category = Category::from_label(category_raw)
        .ok_or_else(|| format!("row {n}: category \"{category_raw}\" is not allowed"))?;

    let task_name = row.task_name.as_deref().unwrap_or("").trim();
    if task_name.is_empty() {
        return Err(format!("row {n}: task name is empty"));
    }

    let hours = parse_hours(row.hours.as_ref()).ok_or_else(|| {
        format!(
            "row {n}: hours \"{}\" is not interpretable as a number",
            raw_hours(row.hours.as_ref())
        )
    })?;

    if hours <= Decimal::ZERO {
        return Err(format!("row {n}: hours must be greater than zero"));
    }

    if hours >= max_hours() {
        return Err(format!(
            "row {n}: hours must be less than {}",
            max_hours()
        ));
    }

    Ok(NewEntry {
        category,
        task_name: task_name.to_string(),
        hours,
    })
}

/// Upper bound (exclusive) for a single row: at most 8 integer digits,
/// which keeps every per-day sum far from `Decimal` overflow.
pub fn max_hours() -> Decimal {
    Decimal::from(100_000_000u32)
}

/// Exact decimal value of `hours`, whether sent as a JSON number or a string.
pub fn parse_hours(value: Option<&Value>) -> Option<Decimal> {
    match value? {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

fn raw_hours(value: Option<&Value>) -> String {
    match value {
        None => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn empty_body() -> AppError {
    AppError::InvalidRequest("request body is empty".to_string())
}
