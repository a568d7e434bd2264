//! Full search: guard, fetch, rank, filter, truncate.

use std::sync::Arc;

use itinera::{
    Dataset, EntityType, ItineraryRow, MemoryStore, OwnerSummary, SearchConfig, SearchFilters,
    SearchService, StoreError, UNKNOWN_USER_TITLE,
};

use super::common::{
    date, make_itinerary, make_itinerary_at, make_profile, service, titles, with_owner, StubStore,
};

fn all() -> SearchFilters {
    SearchFilters::default()
}

// ============================================================================
// GUARD
// ============================================================================

#[tokio::test]
async fn test_empty_query_never_touches_store() {
    let (store, service) = service(StubStore::new(
        vec![make_itinerary("1", "Beach Trip", 0)],
        vec![make_profile("u1", Some("beachlover"), None, 0)],
    ));

    for query in ["", "   ", "\t\n"] {
        let results = service.search(query, &all(), None).await;
        assert!(results.is_empty());
        assert_eq!(results.total_count, 0);
    }
    assert_eq!(store.total_calls(), 0);
}

#[tokio::test]
async fn test_empty_query_ignores_every_filter_combination() {
    let (store, service) = service(StubStore::new(
        vec![make_itinerary("1", "Beach Trip", 0)],
        vec![make_profile("u1", Some("beachlover"), None, 0)],
    ));

    let dated = |filters: SearchFilters| {
        filters.with_dates(Some(date(2024, 6, 1)), Some(date(2024, 6, 30)))
    };
    let combos = [
        SearchFilters::for_type(EntityType::Itinerary),
        SearchFilters::for_type(EntityType::User),
        all().with_location("TX"),
        dated(all()),
        dated(SearchFilters::for_type(EntityType::Itinerary).with_location("Austin, TX")),
        dated(SearchFilters::for_type(EntityType::User).with_location("NYC")),
    ];

    for filters in &combos {
        for query in ["", "  "] {
            let results = service.search(query, filters, Some(5)).await;
            assert!(results.is_empty(), "{filters:?}");
            assert_eq!(results.total_count, 0);
        }
    }
    assert_eq!(store.total_calls(), 0);
}

// ============================================================================
// FETCH
// ============================================================================

#[tokio::test]
async fn test_type_filter_skips_other_kind() {
    let (store, service) = service(StubStore::new(
        vec![make_itinerary("1", "Beach Trip", 0)],
        vec![make_profile("u1", Some("beachlover"), None, 0)],
    ));

    let results = service
        .search("beach", &SearchFilters::for_type(EntityType::User), None)
        .await;
    assert_eq!(store.itinerary_calls(), 0);
    assert_eq!(store.profile_calls(), 1);
    assert!(results.itineraries.is_empty());
    assert_eq!(results.users.len(), 1);

    let results = service
        .search("beach", &SearchFilters::for_type(EntityType::Itinerary), None)
        .await;
    assert_eq!(store.profile_calls(), 1);
    assert_eq!(results.itineraries.len(), 1);
    assert!(results.users.is_empty());
}

#[tokio::test]
async fn test_fetch_is_public_windowed_and_dated() {
    let (store, service) = service(StubStore::default());
    let filters = all().with_dates(Some(date(2024, 6, 1)), Some(date(2024, 6, 30)));

    service.search("beach", &filters, None).await;

    let fetches = store.fetches();
    assert_eq!(fetches.len(), 1);
    let (fetch, limit) = fetches[0];
    assert!(fetch.public_only);
    assert_eq!(fetch.date_range.start, Some(date(2024, 6, 1)));
    assert_eq!(fetch.date_range.end, Some(date(2024, 6, 30)));
    assert_eq!(limit, 100);
}

#[tokio::test]
async fn test_inverted_date_range_passes_through() {
    let mut row = make_itinerary("1", "Beach Trip", 0);
    row.start_date = Some(date(2024, 6, 10));
    row.end_date = Some(date(2024, 6, 15));
    let store = Arc::new(MemoryStore::new(Dataset {
        itineraries: vec![row],
        profiles: vec![make_profile("u1", Some("beachlover"), None, 0)],
    }));
    let service = SearchService::new(store, SearchConfig::default()).unwrap();

    // End before start: handed to the store as-is, which finds nothing
    let inverted = all().with_dates(Some(date(2024, 7, 1)), Some(date(2024, 6, 1)));
    let results = service.search("beach", &inverted, None).await;
    assert!(results.itineraries.is_empty());
    assert_eq!(results.users.len(), 1, "date filters only apply to itineraries");

    let covering = all().with_dates(Some(date(2024, 6, 1)), Some(date(2024, 6, 30)));
    let results = service.search("beach", &covering, None).await;
    assert_eq!(results.itineraries.len(), 1);
}

#[tokio::test]
async fn test_itinerary_failure_degrades_to_empty() {
    let (store, service) = service(
        StubStore::new(
            vec![make_itinerary("1", "Beach Trip", 0)],
            vec![make_profile("u1", Some("beachlover"), None, 0)],
        )
        .failing_itineraries(StoreError::Unavailable("connection refused".into())),
    );

    let results = service.search("beach", &all(), None).await;
    assert!(results.itineraries.is_empty());
    assert_eq!(titles(&results.users, |u| &u.title), vec!["beachlover"]);
    assert_eq!(results.total_count, 1);
    assert_eq!(store.itinerary_calls(), 1);
}

#[tokio::test]
async fn test_profile_failure_degrades_to_empty() {
    let (_, service) = service(
        StubStore::new(
            vec![make_itinerary("1", "Beach Trip", 0)],
            vec![make_profile("u1", Some("beachlover"), None, 0)],
        )
        .failing_profiles(StoreError::Timeout),
    );

    let results = service.search("beach", &all(), None).await;
    assert_eq!(results.itineraries.len(), 1);
    assert!(results.users.is_empty());
}

// ============================================================================
// RANKING AND TRUNCATION
// ============================================================================

#[tokio::test]
async fn test_truncation_happens_after_ranking() {
    // 24 newer near-misses, then the exact hit 25th by recency
    let mut rows: Vec<ItineraryRow> = (0..24)
        .map(|i| make_itinerary(&i.to_string(), &format!("Bech day {i}"), i))
        .collect();
    rows.push(make_itinerary("best", "Beach Vacation", 24));
    rows.extend((25..30).map(|i| make_itinerary(&i.to_string(), "Museum tour", i)));
    let (_, service) = service(StubStore::new(rows, Vec::new()));

    let results = service.search("beach", &all(), Some(5)).await;
    assert_eq!(results.itineraries.len(), 5);
    assert_eq!(results.itineraries[0].item.title, "Beach Vacation");
    assert_eq!(results.total_count, 5);
}

#[tokio::test]
async fn test_default_limit_is_twenty_per_kind() {
    let rows = (0..30)
        .map(|i| make_itinerary(&i.to_string(), "Beach Trip", i))
        .collect();
    let profiles = (0..30)
        .map(|i| make_profile(&i.to_string(), Some(&format!("beach{i}")), None, i))
        .collect();
    let (_, service) = service(StubStore::new(rows, profiles));

    let results = service.search("beach", &all(), None).await;
    assert_eq!(results.itineraries.len(), 20);
    assert_eq!(results.users.len(), 20);
    assert_eq!(results.total_count, 40);
}

#[tokio::test]
async fn test_equal_scores_keep_recency_order() {
    let rows = vec![
        make_itinerary("new", "Beach Trip", 0),
        make_itinerary("old", "Beach Trip", 5),
    ];
    let (_, service) = service(StubStore::new(rows, Vec::new()));

    let results = service.search("beach", &all(), None).await;
    let ids: Vec<&str> = results.itineraries.iter().map(|r| r.item.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "old"]);
}

#[tokio::test]
async fn test_title_hit_outranks_description_hit() {
    let mut in_description = make_itinerary("desc", "Weekend plans", 0);
    in_description.description = Some("Lots of beach time".to_string());
    let in_title = make_itinerary("title", "Beach time", 1);
    let (_, service) = service(StubStore::new(vec![in_description, in_title], Vec::new()));

    let results = service.search("beach", &all(), None).await;
    let ids: Vec<&str> = results.itineraries.iter().map(|r| r.item.id.as_str()).collect();
    assert_eq!(ids, vec!["title", "desc"]);
    assert_eq!(results.itineraries[0].matched_fields, vec!["title"]);
    assert_eq!(results.itineraries[1].matched_fields, vec!["description"]);
}

#[tokio::test]
async fn test_typos_still_match() {
    let (_, service) = service(StubStore::new(
        vec![make_itinerary("1", "Rocky Mountain High", 0)],
        Vec::new(),
    ));
    let results = service.search("mountian", &all(), None).await;
    assert_eq!(results.itineraries.len(), 1);
}

#[tokio::test]
async fn test_owner_fields_are_searchable() {
    let row = with_owner(make_itinerary("1", "Weekend plans", 0), "globetrotter", "Ana");
    let (_, service) = service(StubStore::new(vec![row], Vec::new()));

    let results = service.search("globetrotter", &all(), None).await;
    assert_eq!(results.itineraries[0].matched_fields, vec!["owner_username"]);
}

// ============================================================================
// LOCATIONS
// ============================================================================

#[tokio::test]
async fn test_query_matches_location_aliases() {
    let (_, service) = service(StubStore::new(
        vec![make_itinerary_at("1", "Weekend getaway", "Austin, TX", 0)],
        Vec::new(),
    ));

    let results = service.search("texas", &all(), None).await;
    assert_eq!(results.itineraries.len(), 1);
    assert!(results.itineraries[0]
        .matched_fields
        .contains(&"location_variants"));
    // Variants are for matching only; the displayed location is untouched
    assert_eq!(results.itineraries[0].item.location, "Austin, TX");
}

#[tokio::test]
async fn test_location_filter_uses_aliases() {
    let rows = vec![
        make_itinerary_at("austin", "Beach day", "Austin, Texas", 0),
        make_itinerary_at("miami", "Beach day", "Miami, FL", 1),
        make_itinerary("nowhere", "Beach day", 2),
    ];
    let (_, service) = service(StubStore::new(
        rows,
        vec![make_profile("u1", Some("beachlover"), None, 0)],
    ));

    let results = service
        .search("beach", &all().with_location("TX"), None)
        .await;
    let ids: Vec<&str> = results.itineraries.iter().map(|r| r.item.id.as_str()).collect();
    assert_eq!(ids, vec!["austin"]);
    assert_eq!(results.users.len(), 1, "location filter only applies to itineraries");
}

#[tokio::test]
async fn test_blank_location_filter_is_ignored() {
    let (_, service) = service(StubStore::new(
        vec![make_itinerary_at("1", "Beach day", "Miami, FL", 0)],
        Vec::new(),
    ));
    let results = service
        .search("beach", &all().with_location("  "), None)
        .await;
    assert_eq!(results.itineraries.len(), 1);
}

// ============================================================================
// USERS
// ============================================================================

#[tokio::test]
async fn test_user_title_fallbacks() {
    let mut bio_only = make_profile("u2", None, None, 1);
    bio_only.bio = Some("Beach addict".to_string());
    let profiles = vec![
        make_profile("u1", Some("beachlover"), None, 0),
        bio_only,
        make_profile("u3", Some("sandy"), Some("Beach Bum"), 2),
    ];
    let (_, service) = service(StubStore::new(Vec::new(), profiles));

    let results = service.search("beach", &all(), None).await;
    let mut found = titles(&results.users, |u| &u.title);
    found.sort();
    assert_eq!(found, vec!["Beach Bum", UNKNOWN_USER_TITLE, "beachlover"]);

    let unknown = results
        .users
        .iter()
        .find(|u| u.item.id == "u2")
        .expect("bio match");
    assert_eq!(unknown.item.description, "Beach addict");
}

// ============================================================================
// END TO END
// ============================================================================

#[tokio::test]
async fn test_end_to_end_single_itinerary() {
    let mut row = make_itinerary_at("trip-1", "Beach Vacation", "Miami, FL", 0);
    row.description = Some("A fun trip".to_string());
    row.owner = Some(OwnerSummary {
        username: Some("traveler".to_string()),
        name: None,
    });
    let store = Arc::new(MemoryStore::new(Dataset {
        itineraries: vec![row],
        profiles: Vec::new(),
    }));
    let service = SearchService::new(store, SearchConfig::default()).unwrap();

    let results = service
        .search("beach", &SearchFilters::for_type(EntityType::Itinerary), None)
        .await;

    assert_eq!(results.itineraries.len(), 1);
    assert!(results.users.is_empty());
    assert_eq!(results.total_count, 1);
    let hit = &results.itineraries[0];
    assert_eq!(hit.item.title, "Beach Vacation");
    assert!(hit.relevance_score.is_finite());
    assert!((0.0..=1.0).contains(&hit.relevance_score));
    assert!(hit.matched_fields.contains(&"title"));
}
