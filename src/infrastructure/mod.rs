// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod cover_image;
pub mod report_export;

pub use cover_image::{cover_digest, load_cover, sniff_image_format, MAX_COVER_BYTES};
pub use report_export::{
    write_report, JsonReportRenderer, MarkdownReportRenderer, ReportFormat, ReportRenderer,
};
