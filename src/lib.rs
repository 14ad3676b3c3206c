// src/lib.rs
// MediaShelf - Local-first personal media catalog
//
// Architecture:
// - Domain-centric: catalog rules and the yearly report live in `domain`
// - Event-driven: services announce changes through the event bus
// - Explicit: No implicit behavior, no magic
// - Local-first: one SQLite file the user owns
// - Application Layer: CLI boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod layout;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    available_years,
    compute_report,
    validate_entry,
    // Catalog
    CatalogEntry,
    DomainError,
    EntryDraft,
    EntryFilter,
    EntryStatus,
    // Report
    KindCount,
    MediaKind,
    SortOrder,
    YearlyReport,
};

// ============================================================================
// PUBLIC API - Errors, Config, Events
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use events::{DomainEvent, EventBus, EventLogEntry};

// ============================================================================
// PUBLIC API - Persistence
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use repositories::{EntryRepository, SqliteEntryRepository};

// ============================================================================
// PUBLIC API - Services & Infrastructure
// ============================================================================

pub use infrastructure::{ReportFormat, ReportRenderer};
pub use layout::{FlowLayout, FlowPlacement};
pub use services::{CatalogService, CreateEntryRequest, ReportService, UpdateEntryRequest};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;
