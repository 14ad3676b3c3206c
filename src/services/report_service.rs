// src/services/report_service.rs
use chrono::{Datelike, Utc};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::report::{available_years, compute_report, YearlyReport};
use crate::error::AppResult;
use crate::events::{EventBus, ReportExported, ReportGenerated};
use crate::infrastructure::report_export::{write_report, ReportFormat};
use crate::repositories::EntryRepository;

/// Reports are derived on demand from a catalog snapshot and never stored
pub struct ReportService {
    entry_repo: Arc<dyn EntryRepository>,
    event_bus: Arc<EventBus>,
}

impl ReportService {
    pub fn new(entry_repo: Arc<dyn EntryRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            entry_repo,
            event_bus,
        }
    }

    pub fn generate_report(&self, year: i32) -> AppResult<YearlyReport> {
        let snapshot = self.entry_repo.list_all()?;
        let report = compute_report(&snapshot, year);

        info!(
            "Report {}: {} entries, {} favorites, {} top rated",
            year,
            report.total_count,
            report.favorite_count,
            report.top_rated.len()
        );

        self.event_bus
            .emit(ReportGenerated::new(year, report.total_count));
        Ok(report)
    }

    /// Years that have entries, newest first; the current year for an empty catalog
    pub fn available_years(&self) -> AppResult<Vec<i32>> {
        let snapshot = self.entry_repo.list_all()?;
        Ok(available_years(&snapshot, current_year()))
    }

    /// Generate, render and write the report; returns the file written
    pub fn export_report(&self, year: i32, format: ReportFormat, target: &Path) -> AppResult<PathBuf> {
        let report = self.generate_report(year)?;
        let renderer = format.renderer();
        let path = write_report(&report, renderer.as_ref(), target)?;

        self.event_bus.emit(ReportExported::new(
            year,
            path.display().to_string(),
            format.as_str().to_string(),
        ));
        Ok(path)
    }

    /// Render without touching the filesystem
    pub fn render_report(&self, year: i32, format: ReportFormat) -> AppResult<String> {
        let report = self.generate_report(year)?;
        format.renderer().render(&report)
    }
}

pub fn current_year() -> i32 {
    Utc::now().year()
}
