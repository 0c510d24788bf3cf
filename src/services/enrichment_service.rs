use futures::future::join_all;

use crate::config::AppConfig;
use crate::models::image::LocationImage;
use crate::models::itinerary::Itinerary;
use crate::services::image_search_service::{ImageSearchClient, PLACEHOLDER_IMAGE_URL};

/// Resolves every location referenced by an itinerary to a representative
/// image. Lookups are independent: one location failing never affects the
/// others, and any failure degrades that location to the placeholder.
pub struct LocationEnricher {
    search: Option<ImageSearchClient>,
}

impl LocationEnricher {
    pub fn new(config: &AppConfig, client: reqwest::Client) -> Self {
        let search = match (&config.google_search_api_key, &config.google_search_engine_id) {
            (Some(api_key), Some(engine_id)) => Some(ImageSearchClient::new(
                client,
                api_key.clone(),
                engine_id.clone(),
            )),
            _ => {
                println!("Image search credentials not configured. Locations will use the placeholder image.");
                None
            }
        };

        Self { search }
    }

    pub fn with_search_client(search: Option<ImageSearchClient>) -> Self {
        Self { search }
    }

    /// One entry per unique location across all days, in first-seen order.
    /// The mapping is complete before it is returned; lookups fan out
    /// concurrently and each writes only its own slot.
    pub async fn enrich_locations(&self, itinerary: &Itinerary) -> Vec<LocationImage> {
        let locations = unique_locations(itinerary);

        let lookups = locations.iter().map(|location| async move {
            LocationImage {
                location: location.clone(),
                image_url: self
                    .resolve_query(&format!("{} {}", location, itinerary.destination))
                    .await,
            }
        });

        join_all(lookups).await
    }

    /// Resolves a single search query to an image URL, degrading to the
    /// placeholder sentinel on missing credentials, transport failure, or an
    /// empty result set. Never fails.
    pub async fn resolve_query(&self, query: &str) -> String {
        let Some(search) = &self.search else {
            return PLACEHOLDER_IMAGE_URL.to_string();
        };

        match search.search_image(query).await {
            Ok(url) => url,
            Err(err) => {
                eprintln!("Image lookup failed for '{}': {}", query, err);
                PLACEHOLDER_IMAGE_URL.to_string()
            }
        }
    }
}

/// Flattens all activities and projects their locations, deduplicated in
/// first-seen order.
pub fn unique_locations(itinerary: &Itinerary) -> Vec<String> {
    let mut locations: Vec<String> = Vec::new();

    for day in &itinerary.days {
        for activity in &day.activities {
            if !locations.iter().any(|seen| seen == &activity.location) {
                locations.push(activity.location.clone());
            }
        }
    }

    locations
}
