use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::DomainError;

/// A single item in the personal catalog: a book, a film, an album...
/// This is the root entity for all catalog data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Display title (never empty)
    pub title: String,

    /// Author, director, artist, host... free text, may be empty
    pub creator: String,

    /// What sort of media this is
    pub kind: MediaKind,

    /// Original release date (if known)
    pub release_date: Option<NaiveDate>,

    /// 0 means unrated, otherwise 1..=5
    pub rating: u8,

    /// Where the user is with this item
    pub status: EntryStatus,

    /// Ordered, trimmed, non-empty, no duplicates
    pub tags: Vec<String>,

    pub is_favorite: bool,

    /// Raw cover art bytes. Never read by the report engine.
    #[serde(default)]
    pub cover_image: Option<Vec<u8>>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Kind of media. Declaration order is the canonical order used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Book,
    Movie,
    Album,
    Blog,
    Video,
    Podcast,
    Other,
}

/// Progress status of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Backlog,
    InProgress,
    Completed,
    Archived,
}

impl CatalogEntry {
    /// Create a new entry with default metadata
    /// Validation happens in the draft commit or the service
    pub fn new(title: String, creator: String, kind: MediaKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            creator,
            kind,
            release_date: None,
            rating: 0,
            status: EntryStatus::Backlog,
            tags: Vec::new(),
            is_favorite: false,
            cover_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Year used for grouping: the release year, or the year the entry was recorded
    pub fn year(&self) -> i32 {
        match self.release_date {
            Some(date) => date.year(),
            None => self.created_at.year(),
        }
    }

    pub fn is_rated(&self) -> bool {
        self.rating > 0
    }

    /// Exact tag match, ignoring case (Unicode-aware)
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

impl MediaKind {
    /// Every kind, in canonical order
    pub const ALL: [MediaKind; 7] = [
        MediaKind::Book,
        MediaKind::Movie,
        MediaKind::Album,
        MediaKind::Blog,
        MediaKind::Video,
        MediaKind::Podcast,
        MediaKind::Other,
    ];

    /// Stable identifier used in storage and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Book => "book",
            MediaKind::Movie => "movie",
            MediaKind::Album => "album",
            MediaKind::Blog => "blog",
            MediaKind::Video => "video",
            MediaKind::Podcast => "podcast",
            MediaKind::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MediaKind::Book => "Book",
            MediaKind::Movie => "Movie",
            MediaKind::Album => "Album",
            MediaKind::Blog => "Blog Post",
            MediaKind::Video => "Video",
            MediaKind::Podcast => "Podcast",
            MediaKind::Other => "Other",
        }
    }

    /// Icon name for front-ends that render a symbol next to the kind
    pub fn symbol(&self) -> &'static str {
        match self {
            MediaKind::Book => "book.closed",
            MediaKind::Movie => "film",
            MediaKind::Album => "music.note",
            MediaKind::Blog => "doc.text",
            MediaKind::Video => "play.rectangle",
            MediaKind::Podcast => "mic",
            MediaKind::Other => "square.grid.2x2",
        }
    }
}

impl EntryStatus {
    pub const ALL: [EntryStatus; 4] = [
        EntryStatus::Backlog,
        EntryStatus::InProgress,
        EntryStatus::Completed,
        EntryStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Backlog => "backlog",
            EntryStatus::InProgress => "in_progress",
            EntryStatus::Completed => "completed",
            EntryStatus::Archived => "archived",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntryStatus::Backlog => "Backlog",
            EntryStatus::InProgress => "In Progress",
            EntryStatus::Completed => "Completed",
            EntryStatus::Archived => "Archived",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            EntryStatus::Backlog => "tray",
            EntryStatus::InProgress => "hourglass",
            EntryStatus::Completed => "checkmark.circle",
            EntryStatus::Archived => "archivebox",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        MediaKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownKind(s.to_string()))
    }
}

// Accepts "in_progress", "in-progress", "inProgress" and "inprogress"
impl FromStr for EntryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        EntryStatus::ALL
            .iter()
            .copied()
            .find(|st| st.as_str().replace('_', "") == wanted)
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}
