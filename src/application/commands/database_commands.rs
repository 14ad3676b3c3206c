// src/application/commands/database_commands.rs
//
// Database maintenance commands

use crate::application::state::AppState;
use crate::db::{get_connection, get_database_stats, verify_database_integrity, DatabaseStats};
use crate::error::AppResult;

/// Run SQLite's integrity check, then report size and row counts
pub fn database_info(state: &AppState) -> AppResult<DatabaseStats> {
    let conn = get_connection(&state.pool)?;
    verify_database_integrity(&conn)?;
    get_database_stats(&conn)
}
