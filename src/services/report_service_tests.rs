// src/services/report_service_tests.rs
//
// ReportService behaviour against a mocked repository

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::domain::entry::{CatalogEntry, MediaKind};
    use crate::events::EventBus;
    use crate::infrastructure::report_export::ReportFormat;
    use crate::repositories::entry_repository::MockEntryRepository;
    use crate::services::{current_year, ReportService};

    fn entry(title: &str, kind: MediaKind, released: (i32, u32, u32), rating: u8, favorite: bool) -> CatalogEntry {
        let mut e = CatalogEntry::new(title.to_string(), String::new(), kind);
        e.release_date = NaiveDate::from_ymd_opt(released.0, released.1, released.2);
        e.rating = rating;
        e.is_favorite = favorite;
        e
    }

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            entry("Dune", MediaKind::Book, (2024, 3, 1), 5, true),
            entry("Arrival", MediaKind::Movie, (2024, 7, 9), 4, false),
            entry("Piranesi", MediaKind::Book, (2024, 11, 2), 0, true),
            entry("Blade Runner", MediaKind::Movie, (1982, 6, 25), 5, true),
        ]
    }

    fn service_over(entries: Vec<CatalogEntry>) -> (ReportService, Arc<EventBus>) {
        let mut repo = MockEntryRepository::new();
        repo.expect_list_all().returning(move || Ok(entries.clone()));

        let bus = Arc::new(EventBus::new());
        (ReportService::new(Arc::new(repo), Arc::clone(&bus)), bus)
    }

    #[test]
    fn test_generate_report_for_year() {
        let (service, bus) = service_over(catalog());

        let report = service.generate_report(2024).unwrap();

        assert_eq!(report.year, 2024);
        assert_eq!(report.total_count, 3);
        assert_eq!(report.favorite_count, 2);
        assert_eq!(report.count_for(MediaKind::Book), 2);
        assert_eq!(report.count_for(MediaKind::Movie), 1);

        let top: Vec<&str> = report.top_rated.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(top, vec!["Dune", "Arrival"]);

        let log = bus.get_event_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_type, "ReportGenerated");
    }

    #[test]
    fn test_generate_report_for_empty_year() {
        let (service, _bus) = service_over(catalog());

        let report = service.generate_report(2003).unwrap();

        assert!(report.is_empty());
        assert!(report.kind_breakdown.is_empty());
        assert!(report.top_rated.is_empty());
    }

    #[test]
    fn test_available_years_newest_first() {
        let (service, _bus) = service_over(catalog());
        assert_eq!(service.available_years().unwrap(), vec![2024, 1982]);
    }

    #[test]
    fn test_available_years_falls_back_to_current_year() {
        let (service, _bus) = service_over(Vec::new());
        assert_eq!(service.available_years().unwrap(), vec![current_year()]);
    }

    #[test]
    fn test_export_report_writes_file_and_emits() {
        let (service, bus) = service_over(catalog());
        let dir = tempfile::tempdir().unwrap();

        let path = service
            .export_report(2024, ReportFormat::Markdown, dir.path())
            .unwrap();

        assert_eq!(path, dir.path().join("mediashelf-2024.md"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("# 2024 in Review"));
        assert!(content.contains("**Dune**"));

        let types: Vec<String> = bus
            .get_event_log()
            .into_iter()
            .map(|e| e.event_type)
            .collect();
        assert_eq!(types, vec!["ReportGenerated", "ReportExported"]);
    }

    #[test]
    fn test_render_report_json() {
        let (service, _bus) = service_over(catalog());

        let json = service.render_report(1982, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_count"], 1);
        assert_eq!(value["top_rated"][0]["title"], "Blade Runner");
    }
}
