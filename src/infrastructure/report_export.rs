// src/infrastructure/report_export.rs
//
// Report rendering and export
//
// CRITICAL RULES:
// - Renderers receive a fully computed, immutable report
// - Renderers NEVER touch catalog state
// - Writing a document never modifies anything but the target file

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::domain::entry::MAX_RATING;
use crate::domain::report::YearlyReport;
use crate::error::{AppError, AppResult};

/// Turns a report into a document
pub trait ReportRenderer {
    fn render(&self, report: &YearlyReport) -> AppResult<String>;

    /// File extension without the dot
    fn extension(&self) -> &'static str;
}

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Json,
}

impl ReportFormat {
    pub fn renderer(&self) -> Box<dyn ReportRenderer> {
        match self {
            ReportFormat::Markdown => Box::new(MarkdownReportRenderer),
            ReportFormat::Json => Box::new(JsonReportRenderer),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(AppError::Validation(format!(
                "Unknown report format: {}",
                other
            ))),
        }
    }
}

pub struct MarkdownReportRenderer;

pub struct JsonReportRenderer;

/// Serializable shape of a report, without cover art
#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    year: i32,
    total_count: usize,
    favorite_count: usize,
    kind_breakdown: Vec<KindLine<'a>>,
    top_rated: Vec<TopLine<'a>>,
}

#[derive(Debug, Serialize)]
struct KindLine<'a> {
    kind: &'a str,
    label: &'a str,
    count: usize,
}

#[derive(Debug, Serialize)]
struct TopLine<'a> {
    id: String,
    title: &'a str,
    creator: &'a str,
    kind: &'a str,
    rating: u8,
    updated_at: DateTime<Utc>,
}

impl<'a> From<&'a YearlyReport> for ReportDocument<'a> {
    fn from(report: &'a YearlyReport) -> Self {
        Self {
            year: report.year,
            total_count: report.total_count,
            favorite_count: report.favorite_count,
            kind_breakdown: report
                .kind_breakdown
                .iter()
                .map(|kc| KindLine {
                    kind: kc.kind.as_str(),
                    label: kc.kind.display_name(),
                    count: kc.count,
                })
                .collect(),
            top_rated: report
                .top_rated
                .iter()
                .map(|e| TopLine {
                    id: e.id.to_string(),
                    title: &e.title,
                    creator: &e.creator,
                    kind: e.kind.as_str(),
                    rating: e.rating,
                    updated_at: e.updated_at,
                })
                .collect(),
        }
    }
}

fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

impl ReportRenderer for MarkdownReportRenderer {
    fn render(&self, report: &YearlyReport) -> AppResult<String> {
        let mut out = String::new();
        let fmt_err = |e: std::fmt::Error| AppError::Other(format!("Render failed: {}", e));

        writeln!(out, "# {} in Review", report.year).map_err(fmt_err)?;
        writeln!(out).map_err(fmt_err)?;

        if report.is_empty() {
            writeln!(out, "_Nothing recorded for {}._", report.year).map_err(fmt_err)?;
            return Ok(out);
        }

        writeln!(out, "- Entries: {}", report.total_count).map_err(fmt_err)?;
        writeln!(out, "- Favorites: {}", report.favorite_count).map_err(fmt_err)?;
        writeln!(out).map_err(fmt_err)?;

        writeln!(out, "## By kind").map_err(fmt_err)?;
        writeln!(out).map_err(fmt_err)?;
        writeln!(out, "| Kind | Count |").map_err(fmt_err)?;
        writeln!(out, "|------|------:|").map_err(fmt_err)?;
        for kc in &report.kind_breakdown {
            writeln!(out, "| {} | {} |", kc.kind.display_name(), kc.count).map_err(fmt_err)?;
        }

        writeln!(out).map_err(fmt_err)?;
        writeln!(out, "## Top rated").map_err(fmt_err)?;
        writeln!(out).map_err(fmt_err)?;

        if report.top_rated.is_empty() {
            writeln!(out, "_No rated entries._").map_err(fmt_err)?;
        }
        for (rank, entry) in report.top_rated.iter().enumerate() {
            let by = if entry.creator.is_empty() {
                String::new()
            } else {
                format!(" by {}", entry.creator)
            };
            writeln!(
                out,
                "{}. **{}**{} ({}) {}",
                rank + 1,
                entry.title,
                by,
                entry.kind.display_name(),
                stars(entry.rating)
            )
            .map_err(fmt_err)?;
        }

        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, report: &YearlyReport) -> AppResult<String> {
        let document = ReportDocument::from(report);
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Render `report` and write it to `target`
///
/// If `target` is an existing directory the file is named
/// `mediashelf-{year}.{ext}` inside it. Missing parent directories are created.
/// Returns the path actually written.
pub fn write_report(
    report: &YearlyReport,
    renderer: &dyn ReportRenderer,
    target: &Path,
) -> AppResult<PathBuf> {
    let path = if target.is_dir() {
        target.join(format!("mediashelf-{}.{}", report.year, renderer.extension()))
    } else {
        target.to_path_buf()
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let document = renderer.render(report)?;
    fs::write(&path, document)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{CatalogEntry, MediaKind};
    use crate::domain::report::compute_report;
    use chrono::NaiveDate;

    fn sample_report() -> YearlyReport {
        let mut dune = CatalogEntry::new("Dune".to_string(), "Frank Herbert".to_string(), MediaKind::Book);
        dune.release_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        dune.rating = 4;
        dune.is_favorite = true;
        dune.cover_image = Some(vec![1, 2, 3]);

        let mut mix = CatalogEntry::new("Mixtape".to_string(), String::new(), MediaKind::Album);
        mix.release_date = NaiveDate::from_ymd_opt(2024, 6, 1);

        compute_report(&[dune, mix], 2024)
    }

    #[test]
    fn test_markdown_contains_sections() {
        let md = MarkdownReportRenderer.render(&sample_report()).unwrap();

        assert!(md.starts_with("# 2024 in Review"));
        assert!(md.contains("- Entries: 2"));
        assert!(md.contains("- Favorites: 1"));
        assert!(md.contains("| Book | 1 |"));
        assert!(md.contains("| Album | 1 |"));
        assert!(md.contains("1. **Dune** by Frank Herbert (Book) ★★★★☆"));
    }

    #[test]
    fn test_markdown_empty_report() {
        let md = MarkdownReportRenderer
            .render(&YearlyReport::empty(1999))
            .unwrap();
        assert!(md.contains("_Nothing recorded for 1999._"));
    }

    #[test]
    fn test_json_omits_cover_art() {
        let json = JsonReportRenderer.render(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["year"], 2024);
        assert_eq!(value["total_count"], 2);
        assert_eq!(value["kind_breakdown"][0]["kind"], "book");
        assert_eq!(value["top_rated"][0]["title"], "Dune");
        assert!(value["top_rated"][0].get("cover_image").is_none());
    }

    #[test]
    fn test_write_report_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();

        let written = write_report(&report, &MarkdownReportRenderer, dir.path()).unwrap();

        assert_eq!(written, dir.path().join("mediashelf-2024.md"));
        let content = fs::read_to_string(&written).unwrap();
        assert!(content.contains("Dune"));
    }

    #[test]
    fn test_write_report_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports/2024/summary.json");

        let written = write_report(&sample_report(), &JsonReportRenderer, &target).unwrap();

        assert_eq!(written, target);
        assert!(target.is_file());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("pdf".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Json.renderer().extension(), "json");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(5), "★★★★★");
    }
}
