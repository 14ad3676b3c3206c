// src/domain/report/aggregator.rs
//
// Pure yearly report computation.
//
// No I/O, no clock, no hidden state: every function here is a total
// function of its arguments and may be called from any context.

use std::cmp::Ordering;

use super::entity::{KindCount, YearlyReport};
use crate::domain::entry::{CatalogEntry, MediaKind};

/// How many entries the top-rated list holds at most
pub const TOP_RATED_LIMIT: usize = 3;

/// Grouping year of an entry: release year if known, otherwise creation year
pub fn entry_year(entry: &CatalogEntry) -> i32 {
    entry.year()
}

/// Build the report for `year` from a catalog snapshot in any order
pub fn compute_report(entries: &[CatalogEntry], year: i32) -> YearlyReport {
    let in_year: Vec<&CatalogEntry> = entries.iter().filter(|e| entry_year(e) == year).collect();

    if in_year.is_empty() {
        return YearlyReport::empty(year);
    }

    let favorite_count = in_year.iter().filter(|e| e.is_favorite).count();

    let kind_breakdown: Vec<KindCount> = MediaKind::ALL
        .iter()
        .map(|&kind| KindCount {
            kind,
            count: in_year.iter().filter(|e| e.kind == kind).count(),
        })
        .filter(|kc| kc.count > 0)
        .collect();

    let mut rated: Vec<&CatalogEntry> = in_year.iter().copied().filter(|e| e.is_rated()).collect();
    rated.sort_by(|a, b| rank(a, b));

    let top_rated = rated
        .into_iter()
        .take(TOP_RATED_LIMIT)
        .cloned()
        .collect();

    YearlyReport {
        year,
        total_count: in_year.len(),
        favorite_count,
        kind_breakdown,
        top_rated,
    }
}

/// Every year that has at least one entry, newest first
/// Falls back to `[fallback_year]` for an empty catalog
pub fn available_years(entries: &[CatalogEntry], fallback_year: i32) -> Vec<i32> {
    if entries.is_empty() {
        return vec![fallback_year];
    }

    let mut years: Vec<i32> = entries.iter().map(entry_year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Rating desc, then most recently updated, then id for a stable total order
fn rank(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    b.rating
        .cmp(&a.rating)
        .then_with(|| b.updated_at.cmp(&a.updated_at))
        .then_with(|| a.id.cmp(&b.id))
}
