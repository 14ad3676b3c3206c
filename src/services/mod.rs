// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod report_service;

#[cfg(test)]
mod catalog_service_tests;
#[cfg(test)]
mod report_service_tests;

// Re-export all services and their types
pub use catalog_service::{CatalogService, CreateEntryRequest, TagCount, UpdateEntryRequest};

pub use report_service::{current_year, ReportService};
