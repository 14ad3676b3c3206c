// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are output-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::entry::CatalogEntry;
use crate::domain::report::{KindCount, YearlyReport};
use crate::infrastructure::cover_digest;
use crate::services::TagCount;

// ============================================================================
// ENTRY DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDto {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub kind: String,
    pub kind_label: String,
    pub release_date: Option<String>,
    pub year: i32,
    pub rating: u8,
    pub status: String,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    /// SHA-256 of the cover bytes; the blob itself never leaves the store
    pub cover_digest: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEntryDto {
    pub title: String,
    pub creator: Option<String>,
    pub kind: String,
    /// YYYY-MM-DD
    pub release_date: Option<String>,
    pub rating: Option<i64>,
    pub status: Option<String>,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    /// Image file to read as cover art
    pub cover_path: Option<String>,
}

/// Partial update; an empty `release_date` or `cover_path` clears the field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEntryDto {
    pub entry_id: String,
    pub title: Option<String>,
    pub creator: Option<String>,
    pub kind: Option<String>,
    pub release_date: Option<String>,
    pub rating: Option<i64>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_favorite: Option<bool>,
    pub cover_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseEntriesDto {
    pub kind: Option<String>,
    pub status: Option<String>,
    pub favorites_only: bool,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCountDto {
    pub tag: String,
    pub count: usize,
}

// ============================================================================
// REPORT DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindCountDto {
    pub kind: String,
    pub label: String,
    pub symbol: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyReportDto {
    pub year: i32,
    pub total_count: usize,
    pub favorite_count: usize,
    pub kind_breakdown: Vec<KindCountDto>,
    pub top_rated: Vec<EntryDto>,
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<CatalogEntry> for EntryDto {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            year: entry.year(),
            kind: entry.kind.to_string(),
            kind_label: entry.kind.display_name().to_string(),
            release_date: entry.release_date.map(|d| d.format("%Y-%m-%d").to_string()),
            status: entry.status.to_string(),
            cover_digest: entry.cover_image.as_deref().map(cover_digest),
            created_at: entry.created_at.to_rfc3339(),
            updated_at: entry.updated_at.to_rfc3339(),
            title: entry.title,
            creator: entry.creator,
            rating: entry.rating,
            tags: entry.tags,
            is_favorite: entry.is_favorite,
        }
    }
}

impl From<TagCount> for TagCountDto {
    fn from(tag: TagCount) -> Self {
        Self {
            tag: tag.tag,
            count: tag.count,
        }
    }
}

impl From<KindCount> for KindCountDto {
    fn from(kc: KindCount) -> Self {
        Self {
            kind: kc.kind.to_string(),
            label: kc.kind.display_name().to_string(),
            symbol: kc.kind.symbol().to_string(),
            count: kc.count,
        }
    }
}

impl From<YearlyReport> for YearlyReportDto {
    fn from(report: YearlyReport) -> Self {
        Self {
            year: report.year,
            total_count: report.total_count,
            favorite_count: report.favorite_count,
            kind_breakdown: report
                .kind_breakdown
                .into_iter()
                .map(KindCountDto::from)
                .collect(),
            top_rated: report.top_rated.into_iter().map(EntryDto::from).collect(),
        }
    }
}
