use chrono::NaiveDate;

use tripcraft_api::models::itinerary::{Activity, ActivityType, Itinerary, ItineraryDay};
use tripcraft_api::services::enrichment_service::{unique_locations, LocationEnricher};
use tripcraft_api::services::fallback_service::generate_fallback;
use tripcraft_api::services::image_search_service::PLACEHOLDER_IMAGE_URL;

fn activity(location: &str) -> Activity {
    Activity {
        time: "10:00".to_string(),
        activity: "Visit".to_string(),
        location: location.to_string(),
        description: "A stop on the route.".to_string(),
        activity_type: ActivityType::Sightseeing,
    }
}

fn itinerary_with_locations(days: Vec<Vec<&str>>) -> Itinerary {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    Itinerary {
        destination: "Kyoto".to_string(),
        summary: "Test plan.".to_string(),
        days: days
            .into_iter()
            .enumerate()
            .map(|(index, locations)| ItineraryDay {
                day: index as u32 + 1,
                date: start + chrono::Duration::days(index as i64),
                activities: locations.into_iter().map(activity).collect(),
            })
            .collect(),
    }
}

#[test]
fn test_unique_locations_dedupes_preserving_first_seen_order() {
    let itinerary = itinerary_with_locations(vec![
        vec!["Kinkaku-ji", "Nishiki Market", "Kinkaku-ji"],
        vec!["Gion", "Nishiki Market", "Arashiyama"],
    ]);

    assert_eq!(
        unique_locations(&itinerary),
        vec!["Kinkaku-ji", "Nishiki Market", "Gion", "Arashiyama"]
    );
}

#[test]
fn test_unique_locations_spans_all_days_of_fallback_plan() {
    let plan = generate_fallback(
        "Lima",
        3,
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
        "relaxed",
    );

    // Every day repeats the same six template locations.
    assert_eq!(unique_locations(&plan).len(), 6);
}

#[actix_rt::test]
async fn test_enrich_without_credentials_maps_every_location_to_placeholder() {
    let enricher = LocationEnricher::with_search_client(None);
    let itinerary = itinerary_with_locations(vec![
        vec!["Kinkaku-ji", "Nishiki Market"],
        vec!["Gion", "Kinkaku-ji"],
    ]);

    let images = enricher.enrich_locations(&itinerary).await;

    assert_eq!(images.len(), 3);
    let locations: Vec<&str> = images.iter().map(|i| i.location.as_str()).collect();
    assert_eq!(locations, vec!["Kinkaku-ji", "Nishiki Market", "Gion"]);
    for image in &images {
        assert_eq!(image.image_url, PLACEHOLDER_IMAGE_URL);
    }
}

#[actix_rt::test]
async fn test_resolve_query_without_credentials_returns_placeholder() {
    let enricher = LocationEnricher::with_search_client(None);
    assert_eq!(
        enricher.resolve_query("Eiffel Tower Paris").await,
        PLACEHOLDER_IMAGE_URL
    );
}

#[actix_rt::test]
async fn test_enrich_empty_itinerary_yields_empty_mapping() {
    let enricher = LocationEnricher::with_search_client(None);
    let itinerary = itinerary_with_locations(vec![]);

    let images = enricher.enrich_locations(&itinerary).await;
    assert!(images.is_empty());
}
