// src/domain/entry/draft.rs
//
// Mutable staging value for edits.
//
// A persisted CatalogEntry is treated as immutable: forms and commands edit
// an EntryDraft, and committing the draft produces a new record version.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::entity::{CatalogEntry, EntryStatus, MediaKind};
use super::invariants::{clamp_rating, normalize_tags, validate_entry};
use crate::domain::DomainResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub creator: String,
    pub kind: MediaKind,
    pub release_date: Option<NaiveDate>,
    /// Raw user input; clamped on commit
    pub rating: i64,
    pub status: EntryStatus,
    /// Raw user input; normalized on commit
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub cover_image: Option<Vec<u8>>,
}

impl EntryDraft {
    /// Empty draft for a new entry of the given kind
    pub fn new(kind: MediaKind) -> Self {
        Self {
            title: String::new(),
            creator: String::new(),
            kind,
            release_date: None,
            rating: 0,
            status: EntryStatus::Backlog,
            tags: Vec::new(),
            is_favorite: false,
            cover_image: None,
        }
    }

    /// Load an existing record into a draft for editing
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            title: entry.title.clone(),
            creator: entry.creator.clone(),
            kind: entry.kind,
            release_date: entry.release_date,
            rating: entry.rating as i64,
            status: entry.status,
            tags: entry.tags.clone(),
            is_favorite: entry.is_favorite,
            cover_image: entry.cover_image.clone(),
        }
    }

    /// Commit as a brand-new record
    pub fn commit(self) -> DomainResult<CatalogEntry> {
        self.commit_at(Utc::now())
    }

    pub fn commit_at(self, now: DateTime<Utc>) -> DomainResult<CatalogEntry> {
        let entry = self.into_record(Uuid::new_v4(), now, now);
        validate_entry(&entry)?;
        Ok(entry)
    }

    /// Commit as the next version of `previous`
    /// Identity and creation time are carried over, the update time is stamped
    pub fn commit_onto(self, previous: &CatalogEntry) -> DomainResult<CatalogEntry> {
        self.commit_onto_at(previous, Utc::now())
    }

    pub fn commit_onto_at(
        self,
        previous: &CatalogEntry,
        now: DateTime<Utc>,
    ) -> DomainResult<CatalogEntry> {
        // never earlier than the version being replaced, whatever the clock says
        let updated_at = now.max(previous.updated_at).max(previous.created_at);
        let entry = self.into_record(previous.id, previous.created_at, updated_at);
        validate_entry(&entry)?;
        Ok(entry)
    }

    fn into_record(
        self,
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> CatalogEntry {
        CatalogEntry {
            id,
            title: self.title.trim().to_string(),
            creator: self.creator.trim().to_string(),
            kind: self.kind,
            release_date: self.release_date,
            rating: clamp_rating(self.rating),
            status: self.status,
            tags: normalize_tags(&self.tags),
            is_favorite: self.is_favorite,
            cover_image: self.cover_image,
            created_at,
            updated_at,
        }
    }
}
