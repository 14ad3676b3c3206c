// src/application/commands/entry_commands.rs
//
// Catalog Command Handlers
//
// RULES:
// - Accept DTOs / raw strings
// - Call services
// - Return DTOs
// - Never contain business logic

use chrono::NaiveDate;
use std::path::Path;
use uuid::Uuid;

use crate::application::{dto::*, state::AppState};
use crate::domain::entry::{EntryFilter, EntryStatus, MediaKind, SortOrder};
use crate::error::{AppError, AppResult};
use crate::infrastructure::load_cover;
use crate::layout::{FlowLayout, Size};
use crate::services::{CreateEntryRequest, UpdateEntryRequest};

// ============================================================================
// INPUT PARSING
// ============================================================================

pub(crate) fn parse_id(raw: &str) -> AppResult<Uuid> {
    Ok(Uuid::parse_str(raw.trim())?)
}

fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?)
}

/// Empty input clears the date
fn parse_optional_date(raw: &str) -> AppResult<Option<NaiveDate>> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(raw).map(Some)
    }
}

fn parse_kind(raw: &str) -> AppResult<MediaKind> {
    raw.parse::<MediaKind>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

fn parse_status(raw: &str) -> AppResult<EntryStatus> {
    raw.parse::<EntryStatus>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

fn parse_sort(raw: &str) -> AppResult<SortOrder> {
    raw.parse::<SortOrder>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// Empty input removes the cover
fn read_cover(raw: &str) -> AppResult<Option<Vec<u8>>> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        load_cover(Path::new(raw.trim())).map(Some)
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

/// List entries matching the filter, in the requested order
pub fn list_entries(state: &AppState, dto: BrowseEntriesDto) -> AppResult<Vec<EntryDto>> {
    let filter = EntryFilter {
        kind: dto.kind.as_deref().map(parse_kind).transpose()?,
        status: dto.status.as_deref().map(parse_status).transpose()?,
        favorites_only: dto.favorites_only,
        tag: dto.tag,
        search: dto.search,
    };
    let order = dto
        .sort
        .as_deref()
        .map(parse_sort)
        .transpose()?
        .unwrap_or_default();

    let entries = state.catalog_service.browse(&filter, order)?;
    Ok(entries.into_iter().map(EntryDto::from).collect())
}

pub fn get_entry(state: &AppState, entry_id: &str) -> AppResult<EntryDto> {
    let id = parse_id(entry_id)?;

    state
        .catalog_service
        .get_entry(id)?
        .map(EntryDto::from)
        .ok_or(AppError::NotFound)
}

/// Create an entry and return it as stored
pub fn create_entry(state: &AppState, dto: CreateEntryDto) -> AppResult<EntryDto> {
    let mut request = CreateEntryRequest::new(dto.title, parse_kind(&dto.kind)?);
    request.creator = dto.creator.unwrap_or_default();
    request.release_date = dto.release_date.as_deref().map(parse_date).transpose()?;
    request.rating = dto.rating.unwrap_or(0);
    if let Some(status) = dto.status.as_deref() {
        request.status = parse_status(status)?;
    }
    request.tags = dto.tags;
    request.is_favorite = dto.is_favorite;
    request.cover_image = match dto.cover_path.as_deref() {
        Some(path) => read_cover(path)?,
        None => None,
    };

    let entry_id = state.catalog_service.create_entry(request)?;

    state
        .catalog_service
        .get_entry(entry_id)?
        .map(EntryDto::from)
        .ok_or(AppError::NotFound)
}

pub fn update_entry(state: &AppState, dto: UpdateEntryDto) -> AppResult<EntryDto> {
    let request = UpdateEntryRequest {
        title: dto.title,
        creator: dto.creator,
        kind: dto.kind.as_deref().map(parse_kind).transpose()?,
        release_date: dto
            .release_date
            .as_deref()
            .map(parse_optional_date)
            .transpose()?,
        rating: dto.rating,
        status: dto.status.as_deref().map(parse_status).transpose()?,
        tags: dto.tags,
        is_favorite: dto.is_favorite,
        cover_image: dto.cover_path.as_deref().map(read_cover).transpose()?,
        ..UpdateEntryRequest::new(parse_id(&dto.entry_id)?)
    };

    let entry = state.catalog_service.update_entry(request)?;
    Ok(EntryDto::from(entry))
}

pub fn set_favorite(state: &AppState, entry_id: &str, is_favorite: bool) -> AppResult<EntryDto> {
    let entry = state
        .catalog_service
        .set_favorite(parse_id(entry_id)?, is_favorite)?;
    Ok(EntryDto::from(entry))
}

pub fn set_rating(state: &AppState, entry_id: &str, rating: i64) -> AppResult<EntryDto> {
    let entry = state.catalog_service.set_rating(parse_id(entry_id)?, rating)?;
    Ok(EntryDto::from(entry))
}

pub fn delete_entry(state: &AppState, entry_id: &str) -> AppResult<()> {
    state.catalog_service.delete_entry(parse_id(entry_id)?)
}

pub fn list_tags(state: &AppState) -> AppResult<Vec<TagCountDto>> {
    let tags = state.catalog_service.tag_summary()?;
    Ok(tags.into_iter().map(TagCountDto::from).collect())
}

/// Tags as `name (count)` chips wrapped into lines at most `max_width` columns wide
pub fn tag_cloud(state: &AppState, max_width: usize) -> AppResult<Vec<String>> {
    let chips: Vec<String> = state
        .catalog_service
        .tag_summary()?
        .into_iter()
        .map(|t| format!("{} ({})", t.tag, t.count))
        .collect();

    let sizes: Vec<Size> = chips
        .iter()
        .map(|chip| Size::new(chip.chars().count() as f64, 1.0))
        .collect();

    let placement = FlowLayout::new(max_width as f64, 2.0, 0.0).place(&sizes);

    let mut lines: Vec<String> = Vec::with_capacity(placement.line_count);
    let mut current_y = None;
    for (chip, origin) in chips.iter().zip(&placement.origins) {
        if current_y != Some(origin.y) {
            lines.push(String::new());
            current_y = Some(origin.y);
        }
        if let Some(line) = lines.last_mut() {
            let column = origin.x as usize;
            let used = line.chars().count();
            line.push_str(&" ".repeat(column.saturating_sub(used)));
            line.push_str(chip);
        }
    }

    Ok(lines)
}
