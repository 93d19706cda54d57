//! Settings for one run: where the database and the migration scripts live,
//! and which history table to use.
//!
//! Values come from the command line first, then from an optional YAML file
//! (`--config <file>` or `./rmigrate.yml`), then from defaults.

use crate::db::history::DEFAULT_TABLE;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "rmigrate.yml";

/// Contents of the YAML config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub database: Option<String>,
    pub migrations: Option<String>,
    pub table: Option<String>,
}

impl FileConfig {
    /// Load `path`, or `./rmigrate.yml` when `path` is `None`. A missing
    /// default file is not an error; a missing explicit one is.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if explicit {
                return Err(AppError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: FileConfig = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        log::debug!("loaded configuration from {}", path.display());
        Ok(cfg)
    }
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: PathBuf,
    pub migrations: PathBuf,
    pub table: String,
}

impl Config {
    /// Merge command line values over the file values.
    pub fn resolve(
        database: Option<&str>,
        migrations: Option<&str>,
        table: Option<&str>,
        file: FileConfig,
    ) -> AppResult<Self> {
        let database = database
            .map(str::to_string)
            .or(file.database)
            .ok_or_else(|| AppError::Config("no database given (use --db)".to_string()))?;

        let migrations = migrations
            .map(str::to_string)
            .or(file.migrations)
            .ok_or_else(|| {
                AppError::Config("no migrations directory given (use --migrations)".to_string())
            })?;

        let table = table
            .map(str::to_string)
            .or(file.table)
            .unwrap_or_else(|| DEFAULT_TABLE.to_string());

        Ok(Self {
            database: expand_tilde(&database),
            migrations: expand_tilde(&migrations),
            table,
        })
    }
}
