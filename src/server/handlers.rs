use super::AppState;
use super::response::{ErrorBody, SaveResponse};
use crate::core::summary::summarize;
use crate::core::validate::{parse_date_field, validate_submission};
use crate::db::queries::{query_day, replace_day};
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DayLogs;
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

pub async fn health() -> &'static str {
    "ok"
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("not found")))
}

/// `POST /api/time-logs`: validate, then replace the whole day.
pub async fn save_time_logs(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveResponse>, AppError> {
    let submission = validate_submission(parse_body(&body)?)?;
    let log_date = submission.log_date;

    let saved_count = state
        .with_store(move |pool, user_id| {
            replace_day(&mut pool.conn, submission.log_date, user_id, &submission.rows)
        })
        .await?;

    info!(date = %log_date, saved_count, "time logs saved");
    Ok(Json(SaveResponse::saved(saved_count)))
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
}

/// `GET /api/time-logs?date=YYYY-MM-DD`
pub async fn get_time_logs(
    State(state): State<AppState>,
    query: Result<Query<DayQuery>, QueryRejection>,
) -> Result<Json<DayLogs>, AppError> {
    let Query(query) = query.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let label = query.date.unwrap_or_default();
    let date = parse_date_field(Some(label.as_str()), "date")?;

    let entries = state
        .with_store(move |pool, user_id| query_day(&pool.conn, date, user_id))
        .await?;

    Ok(Json(summarize(&label, &entries)))
}

/// Blank body counts as absent; anything else must be JSON.
fn parse_body(body: &[u8]) -> AppResult<Option<Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| AppError::InvalidRequest(format!("request body is malformed: {e}")))
}
