// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($ty:ident) => {
        impl DomainEvent for $ty {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($ty)
            }
        }
    };
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted when a new entry has been persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: Uuid,
    pub title: String,
    pub kind: String,
}

impl EntryCreated {
    pub fn new(entry_id: Uuid, title: String, kind: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
            title,
            kind,
        }
    }
}

impl_domain_event!(EntryCreated);

/// Emitted when a new version of an entry has been persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: Uuid,
}

impl EntryUpdated {
    pub fn new(entry_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
        }
    }
}

impl_domain_event!(EntryUpdated);

/// Emitted after an entry has been removed from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: Uuid,
}

impl EntryDeleted {
    pub fn new(entry_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
        }
    }
}

impl_domain_event!(EntryDeleted);

// ============================================================================
// REPORT EVENTS
// ============================================================================

/// Emitted each time a yearly report is computed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportGenerated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub year: i32,
    pub total_count: usize,
}

impl ReportGenerated {
    pub fn new(year: i32, total_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            year,
            total_count,
        }
    }
}

impl_domain_event!(ReportGenerated);

/// Emitted when a rendered report has been written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExported {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub year: i32,
    pub path: String,
    pub format: String,
}

impl ReportExported {
    pub fn new(year: i32, path: String, format: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            year,
            path,
            format,
        }
    }
}

impl_domain_event!(ReportExported);
