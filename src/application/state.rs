// src/application/state.rs

use log::info;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{create_connection_pool, get_connection, initialize_database, ConnectionPool};
use crate::error::AppResult;
use crate::events::{register_activity_log_handlers, EventBus};
use crate::repositories::{EntryRepository, SqliteEntryRepository};
use crate::services::{CatalogService, ReportService};

/// Shared state handed to every command.
/// All fields are Arc-wrapped for thread-safe sharing.
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub event_bus: Arc<EventBus>,
    pub catalog_service: Arc<CatalogService>,
    pub report_service: Arc<ReportService>,
}

impl AppState {
    /// Open (or create) the catalog described by `config` and wire the services
    pub fn bootstrap(config: &AppConfig) -> AppResult<Self> {
        config.ensure_database_dir()?;

        let pool = Arc::new(create_connection_pool(config.database_path())?);
        let state = Self::from_pool(pool)?;

        info!("Catalog ready at {}", config.database_path().display());
        Ok(state)
    }

    /// Wire services over an existing pool; the schema is applied idempotently
    pub fn from_pool(pool: Arc<ConnectionPool>) -> AppResult<Self> {
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }

        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());

        // 2. REPOSITORIES
        let entry_repo: Arc<dyn EntryRepository> =
            Arc::new(SqliteEntryRepository::new(Arc::clone(&pool)));

        // 3. SERVICES
        let catalog_service = Arc::new(CatalogService::new(
            Arc::clone(&entry_repo),
            Arc::clone(&event_bus),
        ));
        let report_service = Arc::new(ReportService::new(entry_repo, Arc::clone(&event_bus)));

        // 4. EVENT HANDLER REGISTRATION
        register_activity_log_handlers(&event_bus);

        Ok(Self {
            pool,
            event_bus,
            catalog_service,
            report_service,
        })
    }
}
