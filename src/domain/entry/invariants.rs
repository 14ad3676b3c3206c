use super::entity::CatalogEntry;
use crate::domain::{DomainError, DomainResult};

/// Highest rating an entry can carry
pub const MAX_RATING: u8 = 5;

/// Validates all CatalogEntry invariants
/// These are the absolute rules that must hold before an entry is persisted
pub fn validate_entry(entry: &CatalogEntry) -> DomainResult<()> {
    validate_title(&entry.title)?;
    validate_rating(entry.rating)?;
    validate_tags(&entry.tags)?;
    validate_timestamps(entry)?;
    Ok(())
}

/// Clamp any user-supplied rating into 0..=MAX_RATING
pub fn clamp_rating(raw: i64) -> u8 {
    raw.clamp(0, MAX_RATING as i64) as u8
}

/// Trim every tag, drop empty ones and drop repeats, keeping first occurrence order
pub fn normalize_tags<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = Vec::new();
    for tag in raw {
        let trimmed = tag.as_ref().trim();
        if trimmed.is_empty() || tags.iter().any(|t| t == trimmed) {
            continue;
        }
        tags.push(trimmed.to_string());
    }
    tags
}

/// Title cannot be empty
fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Entry title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_rating(rating: u8) -> DomainResult<()> {
    if rating > MAX_RATING {
        return Err(DomainError::InvariantViolation(format!(
            "Rating {} is outside 0..={}",
            rating, MAX_RATING
        )));
    }
    Ok(())
}

fn validate_tags(tags: &[String]) -> DomainResult<()> {
    for tag in tags {
        if tag.is_empty() || tag.trim() != tag {
            return Err(DomainError::InvariantViolation(format!(
                "Tag {:?} must be non-empty and trimmed",
                tag
            )));
        }
    }
    Ok(())
}

/// updated_at can never precede created_at
fn validate_timestamps(entry: &CatalogEntry) -> DomainResult<()> {
    if entry.updated_at < entry.created_at {
        return Err(DomainError::InvariantViolation(format!(
            "Updated timestamp {} is before created timestamp {}",
            entry.updated_at, entry.created_at
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the CatalogEntry domain:
///
/// 1. Identity (UUID) is immutable
/// 2. Title cannot be empty
/// 3. Rating is within 0..=5, 0 meaning unrated
/// 4. Tags are trimmed, non-empty and unique
/// 5. Created timestamp never changes
/// 6. Updated timestamp reflects last modification and is >= created
/// 7. The grouping year is derived, never stored
