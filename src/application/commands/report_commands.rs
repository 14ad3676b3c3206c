// src/application/commands/report_commands.rs
//
// Report Command Handlers
//
// RULES:
// - Reports are computed on demand, never stored
// - Missing year means the current one

use std::path::Path;

use crate::application::{dto::YearlyReportDto, state::AppState};
use crate::error::AppResult;
use crate::infrastructure::ReportFormat;
use crate::services::current_year;

pub fn generate_report(state: &AppState, year: Option<i32>) -> AppResult<YearlyReportDto> {
    let report = state
        .report_service
        .generate_report(year.unwrap_or_else(current_year))?;
    Ok(YearlyReportDto::from(report))
}

/// Years with at least one entry, newest first
pub fn list_years(state: &AppState) -> AppResult<Vec<i32>> {
    state.report_service.available_years()
}

pub fn render_report(state: &AppState, year: Option<i32>, format: &str) -> AppResult<String> {
    let format: ReportFormat = format.parse()?;
    state
        .report_service
        .render_report(year.unwrap_or_else(current_year), format)
}

/// Write the report under `output` and return the written path
pub fn export_report(
    state: &AppState,
    year: Option<i32>,
    format: &str,
    output: &str,
) -> AppResult<String> {
    let format: ReportFormat = format.parse()?;
    let path = state.report_service.export_report(
        year.unwrap_or_else(current_year),
        format,
        Path::new(output),
    )?;
    Ok(path.display().to_string())
}
