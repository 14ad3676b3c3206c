// src/services/catalog_service_tests.rs
//
// CatalogService behaviour against a mocked repository

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{Duration, Utc};
    use mockall::predicate::eq;
    use uuid::Uuid;

    use crate::domain::entry::{CatalogEntry, EntryFilter, EntryStatus, MediaKind, SortOrder};
    use crate::error::AppError;
    use crate::events::{EntryCreated, EventBus};
    use crate::repositories::entry_repository::MockEntryRepository;
    use crate::services::{CatalogService, CreateEntryRequest, UpdateEntryRequest};

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn service(repo: MockEntryRepository) -> (CatalogService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        (CatalogService::new(Arc::new(repo), Arc::clone(&bus)), bus)
    }

    fn stored(title: &str, kind: MediaKind) -> CatalogEntry {
        let mut entry = CatalogEntry::new(title.to_string(), String::new(), kind);
        // pretend it was stored a while ago so updates are visibly later
        entry.created_at = Utc::now() - Duration::days(10);
        entry.updated_at = entry.created_at;
        entry
    }

    // ========================================================================
    // CREATE
    // ========================================================================

    #[test]
    fn test_create_entry_normalizes_saves_and_emits() {
        let saved: Arc<Mutex<Option<CatalogEntry>>> = Arc::new(Mutex::new(None));
        let saved_clone = Arc::clone(&saved);

        let mut repo = MockEntryRepository::new();
        repo.expect_save().times(1).returning(move |entry| {
            *saved_clone.lock().unwrap() = Some(entry.clone());
            Ok(())
        });

        let (service, bus) = service(repo);

        let announced = Arc::new(Mutex::new(Vec::new()));
        let announced_clone = Arc::clone(&announced);
        bus.subscribe::<EntryCreated, _>(move |event| {
            announced_clone
                .lock()
                .unwrap()
                .push((event.title.clone(), event.kind.clone()));
        });

        let mut request = CreateEntryRequest::new("  Station Eleven ", MediaKind::Book);
        request.rating = 11;
        request.tags = vec!["fiction ".to_string(), " ".to_string()];

        let id = service.create_entry(request).unwrap();

        let entry = saved.lock().unwrap().clone().unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.title, "Station Eleven");
        assert_eq!(entry.rating, 5);
        assert_eq!(entry.tags, vec!["fiction"]);

        let log = bus.get_event_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_type, "EntryCreated");
        assert_eq!(
            *announced.lock().unwrap(),
            vec![("Station Eleven".to_string(), "book".to_string())]
        );
    }

    #[test]
    fn test_create_entry_with_blank_title_is_rejected_before_saving() {
        let mut repo = MockEntryRepository::new();
        repo.expect_save().never();

        let (service, bus) = service(repo);

        let result = service.create_entry(CreateEntryRequest::new("   ", MediaKind::Movie));

        assert!(matches!(result, Err(AppError::Domain(_))));
        assert!(bus.get_event_log().is_empty());
    }

    // ========================================================================
    // UPDATE
    // ========================================================================

    #[test]
    fn test_update_applies_only_provided_fields() {
        let original = stored("Severance", MediaKind::Video);
        let id = original.id;
        let created_at = original.created_at;

        let mut repo = MockEntryRepository::new();
        repo.expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(original.clone())));
        repo.expect_save()
            .withf(move |e: &CatalogEntry| {
                e.id == id
                    && e.title == "Severance"
                    && e.status == EntryStatus::Completed
                    && e.created_at == created_at
                    && e.updated_at > created_at
            })
            .times(1)
            .returning(|_| Ok(()));

        let (service, bus) = service(repo);

        let updated = service
            .update_entry(UpdateEntryRequest {
                status: Some(EntryStatus::Completed),
                ..UpdateEntryRequest::new(id)
            })
            .unwrap();

        assert_eq!(updated.status, EntryStatus::Completed);
        assert_eq!(updated.kind, MediaKind::Video);
        assert_eq!(bus.get_event_log()[0].event_type, "EntryUpdated");
    }

    #[test]
    fn test_update_can_clear_optional_fields() {
        let mut original = stored("Blue Planet", MediaKind::Video);
        original.release_date = chrono::NaiveDate::from_ymd_opt(2001, 9, 12);
        original.cover_image = Some(vec![7, 7, 7]);
        let id = original.id;

        let mut repo = MockEntryRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(original.clone())));
        repo.expect_save().returning(|_| Ok(()));

        let (service, _bus) = service(repo);

        let updated = service
            .update_entry(UpdateEntryRequest {
                release_date: Some(None),
                cover_image: Some(None),
                ..UpdateEntryRequest::new(id)
            })
            .unwrap();

        assert_eq!(updated.release_date, None);
        assert_eq!(updated.cover_image, None);
    }

    #[test]
    fn test_update_missing_entry_is_not_found() {
        let mut repo = MockEntryRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_save().never();

        let (service, _bus) = service(repo);

        let result = service.update_entry(UpdateEntryRequest::new(Uuid::new_v4()));
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[test]
    fn test_set_rating_clamps() {
        let original = stored("Paprika", MediaKind::Movie);
        let id = original.id;

        let mut repo = MockEntryRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(original.clone())));
        repo.expect_save().returning(|_| Ok(()));

        let (service, _bus) = service(repo);

        assert_eq!(service.set_rating(id, -4).unwrap().rating, 0);
        assert_eq!(service.set_rating(id, 99).unwrap().rating, 5);
        assert!(service.set_favorite(id, true).unwrap().is_favorite);
    }

    // ========================================================================
    // DELETE
    // ========================================================================

    #[test]
    fn test_delete_existing_entry_emits() {
        let id = Uuid::new_v4();

        let mut repo = MockEntryRepository::new();
        repo.expect_exists().with(eq(id)).returning(|_| Ok(true));
        repo.expect_delete().with(eq(id)).times(1).returning(|_| Ok(()));

        let (service, bus) = service(repo);
        service.delete_entry(id).unwrap();

        assert_eq!(bus.get_event_log()[0].event_type, "EntryDeleted");
    }

    #[test]
    fn test_delete_missing_entry_is_not_found() {
        let mut repo = MockEntryRepository::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_delete().never();

        let (service, bus) = service(repo);

        assert!(matches!(
            service.delete_entry(Uuid::new_v4()),
            Err(AppError::NotFound)
        ));
        assert!(bus.get_event_log().is_empty());
    }

    // ========================================================================
    // BROWSE
    // ========================================================================

    #[test]
    fn test_browse_filters_snapshot() {
        let mut fav = stored("Kind of Blue", MediaKind::Album);
        fav.is_favorite = true;
        fav.tags = vec!["jazz".to_string()];
        let snapshot = vec![fav, stored("Heat", MediaKind::Movie), stored("Emma", MediaKind::Book)];

        let mut repo = MockEntryRepository::new();
        repo.expect_list_all()
            .returning(move || Ok(snapshot.clone()));

        let (service, _bus) = service(repo);

        let favorites = service
            .browse(
                &EntryFilter {
                    favorites_only: true,
                    ..Default::default()
                },
                SortOrder::Title,
            )
            .unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].title, "Kind of Blue");

        let all = service.browse(&EntryFilter::default(), SortOrder::Title).unwrap();
        let titles: Vec<&str> = all.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Emma", "Heat", "Kind of Blue"]);
    }

    #[test]
    fn test_tag_summary_counts_and_orders() {
        let mut a = stored("a", MediaKind::Book);
        a.tags = vec!["sci-fi".to_string(), "classic".to_string()];
        let mut b = stored("b", MediaKind::Book);
        b.tags = vec!["sci-fi".to_string()];
        let mut c = stored("c", MediaKind::Movie);
        c.tags = vec!["noir".to_string()];
        let snapshot = vec![a, b, c];

        let mut repo = MockEntryRepository::new();
        repo.expect_list_all()
            .returning(move || Ok(snapshot.clone()));

        let (service, _bus) = service(repo);
        let summary = service.tag_summary().unwrap();

        let pairs: Vec<(&str, usize)> = summary.iter().map(|t| (t.tag.as_str(), t.count)).collect();
        assert_eq!(pairs, vec![("sci-fi", 2), ("classic", 1), ("noir", 1)]);
    }
}
