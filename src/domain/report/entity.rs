use serde::{Deserialize, Serialize};

use crate::domain::entry::{CatalogEntry, MediaKind};

/// Summary of one calendar year of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyReport {
    pub year: i32,
    pub total_count: usize,
    pub favorite_count: usize,
    /// Canonical kind order, zero counts omitted
    pub kind_breakdown: Vec<KindCount>,
    /// Highest rated first, at most three
    pub top_rated: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCount {
    pub kind: MediaKind,
    pub count: usize,
}

impl YearlyReport {
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            total_count: 0,
            favorite_count: 0,
            kind_breakdown: Vec::new(),
            top_rated: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn count_for(&self, kind: MediaKind) -> usize {
        self.kind_breakdown
            .iter()
            .find(|kc| kc.kind == kind)
            .map(|kc| kc.count)
            .unwrap_or(0)
    }
}
