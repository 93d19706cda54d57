//! Unified application error type.
//! Every layer (discovery, reconcile, executor, db, cli) returns AppError so
//! the binary can report one message and exit with a single failure code.

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

    #[error("Migrations directory not found: {}", .0.display())]
    MigrationDirectoryNotFound(PathBuf),

    #[error("Migration file {} is too large ({size} bytes, limit {limit} bytes)", .path.display())]
    MigrationFileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    // ---------------------------
    // Discovery
    // ---------------------------
    #[error("Invalid migration filename '{0}' (expected <digits>_<name>.sql)")]
    InvalidFilenameFormat(String),

    #[error("Duplicate migration number {number}: '{first}' and '{second}'")]
    DuplicateMigrationNumber {
        number: u32,
        first: String,
        second: String,
    },

    // ---------------------------
    // Reconciliation
    // ---------------------------
    #[error(
        "Migration gap detected: '{name}' (number {number}) is not applied but migrations up to {max_applied} already are"
    )]
    MigrationGapDetected {
        name: String,
        number: u32,
        max_applied: u32,
    },

    #[error("Drift detected in '{name}': content hash {actual} does not match recorded hash {expected}")]
    DriftDetected {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("Migration file '{0}' was applied but is missing from the migrations directory")]
    MissingMigrationFile(String),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Migration '{name}' failed: {message}")]
    SqlExecution { name: String, message: String },

    #[error("Invalid history table name: '{0}'")]
    InvalidTableName(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
