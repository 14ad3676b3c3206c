// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod entry;
pub mod report;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Catalog Entry Domain
pub use entry::{
    clamp_rating, normalize_tags, validate_entry, CatalogEntry, EntryDraft, EntryFilter,
    EntryStatus, MediaKind, SortOrder, MAX_RATING,
};

// Report Domain (Derived Data)
pub use report::{available_years, compute_report, entry_year, KindCount, YearlyReport, TOP_RATED_LIMIT};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unknown media kind: {0}")]
    UnknownKind(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
