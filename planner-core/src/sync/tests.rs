//! Place List Integration Tests
//!
//! Drives PlaceList through an in-memory TravelApi with scripted failures.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::json;

    use crate::api::{
        EnrichPlaceRequest, PlacesRequest, RecommendationsRequest, SavePlaceRequest, TravelApi,
    };
    use crate::clock::FixedClock;
    use crate::config::PlannerConfig;
    use crate::domain::{ApiError, GeoPoint, PlaceId, PlannerError, RemotePlace};
    use crate::session::{SessionContext, User};
    use crate::sync::{
        Applied, PlaceList, SyncOutcome, SyncState, FETCH_FALLBACK_MESSAGE,
        RECOMMEND_FAILED_MESSAGE,
    };

    #[derive(Default)]
    struct MemoryTravelApi {
        fail: Cell<bool>,
        next_id: Cell<i64>,
        saved: RefCell<Vec<SavePlaceRequest>>,
        deleted: RefCell<Vec<PlaceId>>,
        recommendation_requests: RefCell<Vec<RecommendationsRequest>>,
    }

    impl MemoryTravelApi {
        fn failing() -> Self {
            let api = Self::default();
            api.fail.set(true);
            api
        }

        fn check(&self, endpoint: &str) -> Result<(), ApiError> {
            if self.fail.get() {
                return Err(ApiError::Status {
                    endpoint: endpoint.to_string(),
                    status: 503,
                });
            }
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl TravelApi for MemoryTravelApi {
        async fn suggest_places(&self, request: &PlacesRequest) -> Result<Vec<RemotePlace>, ApiError> {
            self.check("/ai/places")?;
            Ok((0..request.count)
                .map(|i| {
                    let mut place = RemotePlace::named(format!("{} spot {}", request.destination, i));
                    if request.include_coordinates {
                        place.latitude = Some(32.0 + i as f64);
                        place.longitude = Some(77.0);
                    }
                    place
                })
                .collect())
        }

        async fn enrich_place(&self, request: &EnrichPlaceRequest) -> Result<RemotePlace, ApiError> {
            self.check("/ai/enrich-place")?;
            let mut place = RemotePlace::named(format!("{} ({})", request.place_name, request.destination));
            place.latitude = Some(32.27);
            place.longitude = Some(77.19);
            place.details.insert("description".to_string(), json!("Enriched"));
            Ok(place)
        }

        async fn save_place(&self, request: &SavePlaceRequest) -> Result<RemotePlace, ApiError> {
            self.check("/user/places")?;
            self.saved.borrow_mut().push(request.clone());
            let id = self.next_id.get() + 100;
            self.next_id.set(id);
            let mut saved = request.place.clone();
            saved.id = Some(PlaceId::Num(id));
            Ok(saved)
        }

        async fn delete_place(&self, id: &PlaceId) -> Result<(), ApiError> {
            self.check("/user/places")?;
            self.deleted.borrow_mut().push(id.clone());
            Ok(())
        }

        async fn recommendations(
            &self,
            request: &RecommendationsRequest,
        ) -> Result<Vec<RemotePlace>, ApiError> {
            self.check("/ai/recommendations")?;
            self.recommendation_requests.borrow_mut().push(request.clone());
            Ok(vec![RemotePlace::named("Vashisht Hot Springs"), RemotePlace::named("Old Manali")])
        }
    }

    fn list() -> PlaceList {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 4, 5).unwrap());
        PlaceList::new(Arc::new(PlannerConfig::default()), "Manali", Arc::new(clock))
    }

    fn session() -> SessionContext {
        SessionContext::signed_in(User::new("u-1", Some("traveller@example.com".to_string())))
    }

    #[tokio::test]
    async fn test_add_shows_immediately_then_confirms() {
        let api = MemoryTravelApi::default();
        let mut places = list();

        let ticket = places.add("Jogini Falls", &session()).unwrap();
        let local_id = ticket.local_id().clone();

        assert_eq!(places.len(), 1);
        assert_eq!(places.state_of(&local_id), Some(SyncState::PendingAdd));
        let color = places.entries()[0].place.color.clone();

        let applied = places.apply(ticket.execute(&api).await);

        assert_eq!(applied, Applied::Confirmed);
        let entry = &places.entries()[0];
        assert_eq!(entry.state, SyncState::Confirmed);
        assert_eq!(entry.place.id, PlaceId::Num(100));
        assert_eq!(entry.place.name, "Jogini Falls (Manali)");
        assert_eq!(entry.place.color, color);
        assert_eq!(entry.place.details["description"], "Enriched");
        assert!(api.saved.borrow()[0].user_added);
    }

    #[tokio::test]
    async fn test_add_keeps_position() {
        let api = MemoryTravelApi::default();
        let mut places = list();
        let first = places.add("First", &session()).unwrap();
        places.add("Second", &session()).unwrap();

        places.apply(first.execute(&api).await);

        assert_eq!(places.names()[0], "First (Manali)");
        assert_eq!(places.names()[1], "Second");
    }

    #[tokio::test]
    async fn test_failed_add_stays_visible_with_error() {
        let api = MemoryTravelApi::failing();
        let mut places = list();

        let ticket = places.add("Jogini Falls", &session()).unwrap();
        let local_id = ticket.local_id().clone();
        let applied = places.apply(ticket.execute(&api).await);

        assert_eq!(applied, Applied::AddFailed);
        assert!(places.contains(&local_id));
        assert_eq!(places.state_of(&local_id), Some(SyncState::Error));
        assert_eq!(places.names(), vec!["Jogini Falls"]);
    }

    #[test]
    fn test_empty_name_rejected_without_change() {
        let mut places = list();
        let result = places.add("   ", &session());
        assert!(matches!(result, Err(PlannerError::Validation(_))));
        assert!(places.is_empty());
    }

    #[test]
    fn test_unauthenticated_edits_blocked() {
        let mut places = list();
        let signed_out = SessionContext::new();

        assert!(matches!(places.add("X", &signed_out), Err(PlannerError::Unauthenticated)));
        assert!(places.is_empty());

        let ticket = places.add("X", &session()).unwrap();
        let result = places.remove(ticket.local_id(), &signed_out);
        assert!(matches!(result, Err(PlannerError::Unauthenticated)));
        assert_eq!(places.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_then_late_add_confirmation() {
        let api = MemoryTravelApi::default();
        let mut places = list();

        let add = places.add("X", &session()).unwrap();
        let id = add.local_id().clone();
        let remove = places.remove(&id, &session()).unwrap();
        assert!(!places.contains(&id));

        assert_eq!(places.apply(remove.execute(&api).await), Applied::RemoveConfirmed);
        assert_eq!(places.apply(add.execute(&api).await), Applied::Discarded);

        assert!(!places.contains(&id));
        assert!(places.is_empty());
        assert_eq!(places.state_of(&id), Some(SyncState::Confirmed));
    }

    #[tokio::test]
    async fn test_remove_then_early_add_confirmation() {
        let api = MemoryTravelApi::default();
        let mut places = list();

        let add = places.add("X", &session()).unwrap();
        let id = add.local_id().clone();
        let remove = places.remove(&id, &session()).unwrap();

        assert_eq!(places.apply(add.execute(&api).await), Applied::Discarded);
        assert_eq!(places.apply(remove.execute(&api).await), Applied::RemoveConfirmed);

        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_add_and_remove_settle_without_x() {
        let api = MemoryTravelApi::default();
        let mut places = list();

        let add = places.add("X", &session()).unwrap();
        let id = add.local_id().clone();
        let remove = places.remove(&id, &session()).unwrap();

        let (added, removed) = tokio::join!(add.execute(&api), remove.execute(&api));
        places.apply(removed);
        places.apply(added);

        assert!(!places.contains(&id));
    }

    #[tokio::test]
    async fn test_failed_remove_does_not_roll_back() {
        let api = MemoryTravelApi::failing();
        let mut places = list();
        places.apply(SyncOutcome::Refreshed(Ok(vec![RemotePlace::named("Solang")])));
        let id = places.entries()[0].local_id.clone();

        let remove = places.remove(&id, &session()).unwrap();
        let applied = places.apply(remove.execute(&api).await);

        assert_eq!(applied, Applied::RemoveFailed);
        assert!(places.is_empty());
        assert_eq!(places.state_of(&id), Some(SyncState::Error));
    }

    #[tokio::test]
    async fn test_remove_uses_server_id_after_confirmation() {
        let api = MemoryTravelApi::default();
        let mut places = list();
        let add = places.add("X", &session()).unwrap();
        let local_id = add.local_id().clone();
        places.apply(add.execute(&api).await);

        let remove = places.remove(&local_id, &session()).unwrap();
        assert_eq!(remove.remote_id(), Some(&PlaceId::Num(100)));
        places.apply(remove.execute(&api).await);

        assert_eq!(*api.deleted.borrow(), vec![PlaceId::Num(100)]);
        assert_eq!(places.state_of(&local_id), Some(SyncState::Confirmed));
    }

    #[test]
    fn test_double_remove_rejected() {
        let mut places = list();
        places.apply(SyncOutcome::Refreshed(Ok(vec![RemotePlace::named("Solang")])));
        let id = places.entries()[0].local_id.clone();
        places.remove(&id, &session()).unwrap();

        let again = places.remove(&id, &session());
        assert!(matches!(again, Err(PlannerError::Validation(_))));
    }

    #[tokio::test]
    async fn test_remove_targets_entry_when_server_id_collides() {
        let api = MemoryTravelApi::default();
        let mut places = list();
        places.apply(SyncOutcome::Refreshed(Err(ApiError::Status {
            endpoint: "/ai/places".to_string(),
            status: 503,
        })));

        let add = places.add("Jogini Falls", &session()).unwrap();
        let jogini = add.local_id().clone();
        let mut saved = RemotePlace::named("Jogini Falls");
        saved.id = Some(PlaceId::Num(2));
        places.apply(SyncOutcome::Added {
            local_id: jogini.clone(),
            result: Ok(saved),
        });
        assert_eq!(places.entries()[1].place.id, PlaceId::Num(2));
        assert_eq!(places.entries()[4].place.id, PlaceId::Num(2));

        let mut local_ids: Vec<_> = places.entries().iter().map(|e| e.local_id.clone()).collect();
        local_ids.sort_by_key(|id| id.to_string());
        local_ids.dedup();
        assert_eq!(local_ids.len(), 5);

        let remove = places.remove(&jogini, &session()).unwrap();
        places.apply(remove.execute(&api).await);

        assert_eq!(
            places.names(),
            vec!["Solang Valley", "Rohtang Pass", "Hadimba Temple", "Manali Sanctuary"]
        );
        assert_eq!(*api.deleted.borrow(), vec![PlaceId::Num(2)]);
    }

    #[tokio::test]
    async fn test_removing_unsaved_places_sends_no_delete() {
        let api = MemoryTravelApi::default();
        let mut places = list();

        let add = places.add("X", &session()).unwrap();
        let remove = places.remove(add.local_id(), &session()).unwrap();
        assert_eq!(remove.remote_id(), None);
        assert_eq!(places.apply(remove.execute(&api).await), Applied::RemoveConfirmed);

        let recommend = places.recommend();
        places.apply(recommend.execute(&api).await);
        let suggested = places.entries()[0].local_id.clone();
        let remove = places.remove(&suggested, &session()).unwrap();
        assert_eq!(remove.remote_id(), None);
        places.apply(remove.execute(&api).await);

        assert!(api.deleted.borrow().is_empty());
        assert_eq!(places.names(), vec!["Old Manali"]);
    }

    #[tokio::test]
    async fn test_refresh_clears_tombstones() {
        let api = MemoryTravelApi::default();
        let mut places = list();
        let refresh = places.refresh();
        places.apply(refresh.execute(&api).await);

        let removed = places.entries()[0].local_id.clone();
        places.remove(&removed, &session()).unwrap();
        assert_eq!(places.state_of(&removed), Some(SyncState::PendingRemove));

        let refresh = places.refresh();
        places.apply(refresh.execute(&api).await);

        assert_eq!(places.state_of(&removed), None);
        assert!(places.entries().iter().all(|e| e.local_id != removed));
        assert_eq!(places.len(), 5);
    }

    #[tokio::test]
    async fn test_refresh_replaces_list() {
        let api = MemoryTravelApi::default();
        let mut places = list();
        places.add("Mine", &session()).unwrap();

        let ticket = places.refresh();
        assert!(places.is_loading());
        let applied = places.apply(ticket.execute(&api).await);

        assert_eq!(applied, Applied::Replaced(5));
        assert!(!places.is_loading());
        assert_eq!(places.error(), None);
        let entries = places.entries();
        assert_eq!(entries[0].place.id, PlaceId::Num(1));
        assert_eq!(entries[4].place.id, PlaceId::Num(5));
        assert_eq!(entries[0].place.color, "text-red-500");
        assert_eq!(entries[4].place.color, "text-purple-500");
        assert!(entries.iter().all(|e| e.state == SyncState::Confirmed));
    }

    #[tokio::test]
    async fn test_failed_refresh_uses_fallback() {
        let api = MemoryTravelApi::failing();
        let mut places = list();

        let ticket = places.refresh();
        let applied = places.apply(ticket.execute(&api).await);

        assert_eq!(applied, Applied::FellBack(4));
        assert_eq!(
            places.names(),
            vec!["Solang Valley", "Rohtang Pass", "Hadimba Temple", "Manali Sanctuary"]
        );
        assert_eq!(places.error(), Some(FETCH_FALLBACK_MESSAGE));
        assert!(!places.error().unwrap_or_default().is_empty());
        assert_eq!(places.entries()[3].place.color, "text-sky-500");
        assert!(places.entries().iter().all(|e| e.state == SyncState::Idle));
    }

    #[tokio::test]
    async fn test_add_result_after_refresh_is_discarded() {
        let api = MemoryTravelApi::default();
        let mut places = list();
        let add = places.add("X", &session()).unwrap();
        let refresh = places.refresh();

        places.apply(refresh.execute(&api).await);
        let applied = places.apply(add.execute(&api).await);

        assert_eq!(applied, Applied::Discarded);
        assert_eq!(places.len(), 5);
    }

    #[tokio::test]
    async fn test_recommendations_append_flagged_places() {
        let api = MemoryTravelApi::default();
        let mut places = list();
        let refresh = places.refresh();
        places.apply(refresh.execute(&api).await);

        let ticket = places.recommend();
        let applied = places.apply(ticket.execute(&api).await);

        assert_eq!(applied, Applied::Appended(2));
        assert_eq!(places.len(), 7);
        let added = &places.entries()[5..];
        assert!(added.iter().all(|e| e.place.ai_recommended));
        assert_eq!(added[0].place.color, "text-red-500");
        assert_ne!(added[0].local_id, added[1].local_id);
        let sent = &api.recommendation_requests.borrow()[0];
        assert_eq!(sent.existing_places.len(), 5);
        assert_eq!(sent.destination, "Manali");
    }

    #[tokio::test]
    async fn test_failed_recommendations_leave_list_untouched() {
        let api = MemoryTravelApi::failing();
        let mut places = list();
        places.apply(SyncOutcome::Refreshed(Ok(vec![RemotePlace::named("Solang")])));

        let ticket = places.recommend();
        let applied = places.apply(ticket.execute(&api).await);

        assert_eq!(applied, Applied::RecommendFailed);
        assert_eq!(places.names(), vec!["Solang"]);
        assert_eq!(places.error(), Some(RECOMMEND_FAILED_MESSAGE));
    }

    #[test]
    fn test_map_center_prefers_first_located_place() {
        let mut places = list();
        assert_eq!(places.map_center(), GeoPoint { lat: 32.2396, lng: 77.1887 });

        let mut located = RemotePlace::named("Rohtang Pass");
        located.latitude = Some(32.37);
        located.longitude = Some(77.24);
        places.apply(SyncOutcome::Refreshed(Ok(vec![
            RemotePlace::named("Solang Valley"),
            located,
        ])));

        assert_eq!(places.map_center(), GeoPoint { lat: 32.37, lng: 77.24 });
    }
}
