// src/services/catalog_service.rs
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entry::{
    CatalogEntry, EntryDraft, EntryFilter, EntryStatus, MediaKind, SortOrder,
};
use crate::error::{AppError, AppResult};
use crate::events::{EntryCreated, EntryDeleted, EntryUpdated, EventBus};
use crate::repositories::EntryRepository;

#[derive(Debug, Clone)]
pub struct CreateEntryRequest {
    pub title: String,
    pub creator: String,
    pub kind: MediaKind,
    pub release_date: Option<NaiveDate>,
    pub rating: i64,
    pub status: EntryStatus,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub cover_image: Option<Vec<u8>>,
}

/// Only `Some` fields are applied
#[derive(Debug, Clone)]
pub struct UpdateEntryRequest {
    pub entry_id: Uuid,
    pub title: Option<String>,
    pub creator: Option<String>,
    pub kind: Option<MediaKind>,
    pub release_date: Option<Option<NaiveDate>>,
    pub rating: Option<i64>,
    pub status: Option<EntryStatus>,
    pub tags: Option<Vec<String>>,
    pub is_favorite: Option<bool>,
    pub cover_image: Option<Option<Vec<u8>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

impl CreateEntryRequest {
    pub fn new(title: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            title: title.into(),
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

    fn into_draft(self) -> EntryDraft {
        EntryDraft {
            title: self.title,
            creator: self.creator,
            kind: self.kind,
            release_date: self.release_date,
            rating: self.rating,
            status: self.status,
            tags: self.tags,
            is_favorite: self.is_favorite,
            cover_image: self.cover_image,
        }
    }
}

impl UpdateEntryRequest {
    /// A request that changes nothing yet
    pub fn new(entry_id: Uuid) -> Self {
        Self {
            entry_id,
            title: None,
            creator: None,
            kind: None,
            release_date: None,
            rating: None,
            status: None,
            tags: None,
            is_favorite: None,
            cover_image: None,
        }
    }

    fn apply_to(self, draft: &mut EntryDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(creator) = self.creator {
            draft.creator = creator;
        }
        if let Some(kind) = self.kind {
            draft.kind = kind;
        }
        if let Some(release_date) = self.release_date {
            draft.release_date = release_date;
        }
        if let Some(rating) = self.rating {
            draft.rating = rating;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(tags) = self.tags {
            draft.tags = tags;
        }
        if let Some(fav) = self.is_favorite {
            draft.is_favorite = fav;
        }
        if let Some(cover) = self.cover_image {
            draft.cover_image = cover;
        }
    }
}

pub struct CatalogService {
    entry_repo: Arc<dyn EntryRepository>,
    event_bus: Arc<EventBus>,
}

impl CatalogService {
    pub fn new(entry_repo: Arc<dyn EntryRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            entry_repo,
            event_bus,
        }
    }

    pub fn create_entry(&self, request: CreateEntryRequest) -> AppResult<Uuid> {
        let entry = request.into_draft().commit().map_err(AppError::Domain)?;

        self.entry_repo.save(&entry)?;

        self.event_bus.emit(EntryCreated::new(
            entry.id,
            entry.title.clone(),
            entry.kind.to_string(),
        ));

        Ok(entry.id)
    }

    pub fn update_entry(&self, request: UpdateEntryRequest) -> AppResult<CatalogEntry> {
        let current = self
            .entry_repo
            .get_by_id(request.entry_id)?
            .ok_or(AppError::NotFound)?;

        let mut draft = EntryDraft::from_entry(&current);
        request.apply_to(&mut draft);

        let next = draft.commit_onto(&current).map_err(AppError::Domain)?;
        self.entry_repo.save(&next)?;

        self.event_bus.emit(EntryUpdated::new(next.id));
        Ok(next)
    }

    pub fn set_favorite(&self, entry_id: Uuid, is_favorite: bool) -> AppResult<CatalogEntry> {
        self.update_entry(UpdateEntryRequest {
            is_favorite: Some(is_favorite),
            ..UpdateEntryRequest::new(entry_id)
        })
    }

    /// Out-of-range ratings are clamped, not rejected
    pub fn set_rating(&self, entry_id: Uuid, rating: i64) -> AppResult<CatalogEntry> {
        self.update_entry(UpdateEntryRequest {
            rating: Some(rating),
            ..UpdateEntryRequest::new(entry_id)
        })
    }

    pub fn delete_entry(&self, entry_id: Uuid) -> AppResult<()> {
        if !self.entry_repo.exists(entry_id)? {
            return Err(AppError::NotFound);
        }

        self.entry_repo.delete(entry_id)?;
        self.event_bus.emit(EntryDeleted::new(entry_id));
        Ok(())
    }

    pub fn get_entry(&self, entry_id: Uuid) -> AppResult<Option<CatalogEntry>> {
        self.entry_repo.get_by_id(entry_id)
    }

    pub fn list_entries(&self) -> AppResult<Vec<CatalogEntry>> {
        self.entry_repo.list_all()
    }

    /// Filter and sort the current catalog snapshot
    pub fn browse(&self, filter: &EntryFilter, order: SortOrder) -> AppResult<Vec<CatalogEntry>> {
        let snapshot = self.entry_repo.list_all()?;
        let total = snapshot.len();
        let result = filter.apply(snapshot, order);

        debug!(
            "Browse {:?} / {:?}: {} of {} entries",
            filter,
            order,
            result.len(),
            total
        );
        Ok(result)
    }

    /// Distinct tags with usage counts, most used first
    pub fn tag_summary(&self) -> AppResult<Vec<TagCount>> {
        let snapshot = self.entry_repo.list_all()?;

        let mut counts: HashMap<String, usize> = HashMap::new();
        for entry in &snapshot {
            for tag in &entry.tags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        let mut summary: Vec<TagCount> = counts
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect();
        summary.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));

        Ok(summary)
    }
}
