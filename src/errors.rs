//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so every failure
//! ends up as a single diagnostic line in `main`.

use std::io;
use std::path::PathBuf;
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
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Session state
    // ---------------------------
    #[error("Precondition violation: {0}")]
    PreconditionViolation(String),

    #[error("Cannot find an open session: run `up` first")]
    NoOpenSession,

    // ---------------------------
    // Arguments
    // ---------------------------
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration '{}': {reason}", .path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("Failed to save configuration '{}': {reason}", .path.display())]
    ConfigSave { path: PathBuf, reason: String },

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
