pub mod draft;
pub mod entity;
pub mod filter;
pub mod invariants;

pub use draft::EntryDraft;
pub use entity::{CatalogEntry, EntryStatus, MediaKind};
pub use filter::{EntryFilter, SortOrder};
pub use invariants::{clamp_rating, normalize_tags, validate_entry, MAX_RATING};
