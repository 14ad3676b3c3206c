// src/repositories/entry_repository.rs
//
// Catalog entry persistence

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::entry::{CatalogEntry, EntryStatus, MediaKind};
use crate::error::{AppError, AppResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_COLUMNS: &str = "SELECT id, title, creator, kind, release_date, rating, status,
        tags, is_favorite, cover_image, created_at, updated_at
 FROM catalog_entries";

#[cfg_attr(test, mockall::automock)]
pub trait EntryRepository: Send + Sync {
    /// Insert or replace the full record
    fn save(&self, entry: &CatalogEntry) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<CatalogEntry>>;
    /// Read snapshot of the whole catalog, ordered by title
    fn list_all(&self) -> AppResult<Vec<CatalogEntry>>;
    fn delete(&self, id: Uuid) -> AppResult<()>;
    fn exists(&self, id: Uuid) -> AppResult<bool>;
}

pub struct SqliteEntryRepository {
    pool: Arc<ConnectionPool>,
}

fn conversion_error<E>(e: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::ToSqlConversionFailure(Box::new(e))
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(conversion_error)
}

impl SqliteEntryRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to CatalogEntry - returns rusqlite::Error for query_map compatibility
    fn row_to_entry(row: &Row) -> Result<CatalogEntry, rusqlite::Error> {
        let id_str: String = row.get("id")?;
        let id = Uuid::parse_str(&id_str).map_err(conversion_error)?;

        let kind_str: String = row.get("kind")?;
        let kind: MediaKind = kind_str.parse().map_err(conversion_error)?;

        let status_str: String = row.get("status")?;
        let status: EntryStatus = status_str.parse().map_err(conversion_error)?;

        let release_date = row
            .get::<_, Option<String>>("release_date")?
            .map(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(conversion_error))
            .transpose()?;

        let rating: i64 = row.get("rating")?;

        let tags_json: String = row.get("tags")?;
        let tags: Vec<String> = serde_json::from_str(&tags_json).map_err(conversion_error)?;

        let created_at = parse_timestamp(&row.get::<_, String>("created_at")?)?;
        let updated_at = parse_timestamp(&row.get::<_, String>("updated_at")?)?;

        Ok(CatalogEntry {
            id,
            title: row.get("title")?,
            creator: row.get("creator")?,
            kind,
            release_date,
            rating: rating.clamp(0, u8::MAX as i64) as u8,
            status,
            tags,
            is_favorite: row.get("is_favorite")?,
            cover_image: row.get("cover_image")?,
            created_at,
            updated_at,
        })
    }
}

impl EntryRepository for SqliteEntryRepository {
    fn save(&self, entry: &CatalogEntry) -> AppResult<()> {
        let conn = self.pool.get()?;

        let tags_json = serde_json::to_string(&entry.tags)?;

        conn.execute(
            "INSERT OR REPLACE INTO catalog_entries (
                id, title, creator, kind, release_date, rating, status,
                tags, is_favorite, cover_image, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                entry.id.to_string(),
                entry.title,
                entry.creator,
                entry.kind.as_str(),
                entry.release_date.map(|d| d.format(DATE_FORMAT).to_string()),
                entry.rating as i64,
                entry.status.as_str(),
                tags_json,
                entry.is_favorite,
                entry.cover_image,
                entry.created_at.to_rfc3339(),
                entry.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<CatalogEntry>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", SELECT_COLUMNS))?;

        match stmt.query_row(params![id.to_string()], Self::row_to_entry) {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<CatalogEntry>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "{} ORDER BY title COLLATE NOCASE, id",
            SELECT_COLUMNS
        ))?;

        let entries: Vec<CatalogEntry> = stmt
            .query_map([], Self::row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    fn delete(&self, id: Uuid) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "DELETE FROM catalog_entries WHERE id = ?1",
            params![id.to_string()],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn exists(&self, id: Uuid) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM catalog_entries WHERE id = ?1",
            params![id.to_string()],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
