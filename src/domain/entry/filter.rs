// src/domain/entry/filter.rs
//
// Browse filters and sort orders, applied in memory over a catalog snapshot.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use super::entity::{CatalogEntry, EntryStatus, MediaKind};
use crate::domain::DomainError;

/// Every populated field must match for an entry to pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    pub kind: Option<MediaKind>,
    pub status: Option<EntryStatus>,
    pub favorites_only: bool,
    /// Exact tag, case-insensitive
    pub tag: Option<String>,
    /// Case-insensitive substring over title, creator and tags
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    RecentlyUpdated,
    Title,
    Rating,
    RecentlyCreated,
    ReleaseDate,
}

impl EntryFilter {
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        if let Some(status) = self.status {
            if entry.status != status {
                return false;
            }
        }
        if self.favorites_only && !entry.is_favorite {
            return false;
        }
        if let Some(tag) = self.tag.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            if !entry.has_tag(tag) {
                return false;
            }
        }
        if let Some(needle) = self.search_needle() {
            let hit = entry.title.to_lowercase().contains(&needle)
                || entry.creator.to_lowercase().contains(&needle)
                || entry.tags.iter().any(|t| t.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        true
    }

    /// Filter and sort a snapshot
    pub fn apply(&self, entries: Vec<CatalogEntry>, order: SortOrder) -> Vec<CatalogEntry> {
        let mut kept: Vec<CatalogEntry> = entries.into_iter().filter(|e| self.matches(e)).collect();
        kept.sort_by(|a, b| order.compare(a, b));
        kept
    }

    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

impl SortOrder {
    pub fn compare(&self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        let primary = match self {
            SortOrder::RecentlyUpdated => b.updated_at.cmp(&a.updated_at),
            SortOrder::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortOrder::Rating => b
                .rating
                .cmp(&a.rating)
                .then_with(|| b.updated_at.cmp(&a.updated_at)),
            SortOrder::RecentlyCreated => b.created_at.cmp(&a.created_at),
            // undated entries sink to the bottom
            SortOrder::ReleaseDate => match (a.release_date, b.release_date) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "updated" | "recently_updated" => Ok(SortOrder::RecentlyUpdated),
            "title" => Ok(SortOrder::Title),
            "rating" => Ok(SortOrder::Rating),
            "created" | "recently_created" => Ok(SortOrder::RecentlyCreated),
            "release" | "release_date" => Ok(SortOrder::ReleaseDate),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown sort order: {}",
                other
            ))),
        }
    }
}
