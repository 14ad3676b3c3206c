// src/config.rs
//
// Runtime configuration
//
// Resolution order for the database location:
// 1. Explicit path (command line flag or MEDIASHELF_DB, both handled by clap)
// 2. {APP_DATA}/mediashelf/mediashelf.db

use log::LevelFilter;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Environment variable that overrides the database location
pub const DATABASE_ENV_VAR: &str = "MEDIASHELF_DB";

const APP_DIR_NAME: &str = "mediashelf";
const DATABASE_FILE_NAME: &str = "mediashelf.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
}

impl AppConfig {
    pub fn resolve(database_override: Option<PathBuf>) -> AppResult<Self> {
        let database_path = match database_override {
            Some(path) => path,
            None => default_database_path()?,
        };

        Ok(Self { database_path })
    }

    /// Make sure the directory holding the database exists
    pub fn ensure_database_dir(&self) -> AppResult<()> {
        if let Some(parent) = self.database_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

/// Default database file path
///
/// Path structure: {APP_DATA}/mediashelf/mediashelf.db
pub fn default_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join(APP_DIR_NAME).join(DATABASE_FILE_NAME))
}

/// Map `-v` occurrences to a log level; RUST_LOG still wins when set
pub fn log_level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
