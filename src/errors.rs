//! Unified application error type.
//! All modules (db, core, cli, server) return AppError to keep the error
//! handling consistent. The HTTP mapping lives in `server::response`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Request / parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Request-shape or top-level field error; the message is user-facing.
    #[error("{0}")]
    InvalidRequest(String),

    /// One message per offending row, in row order.
    #[error("validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Server errors
    // ---------------------------
    #[error("Server error: {0}")]
    Server(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
