use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::itinerary::Itinerary;
use crate::models::trip::{ItinerarySubmission, TripRequest};
use crate::services::enrichment_service::LocationEnricher;
use crate::services::synthesis_service::ItinerarySynthesizer;

/*
    /api/itineraries/generate
*/
/// Synthesizes an itinerary for a trip submission; upstream failure is
/// absorbed into the fallback plan, so only an invalid body yields an error.
pub async fn generate(
    synthesizer: web::Data<ItinerarySynthesizer>,
    input: web::Json<ItinerarySubmission>,
) -> impl Responder {
    let request = match TripRequest::try_from(input.into_inner()) {
        Ok(request) => request,
        Err(err) => {
            return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
        }
    };

    let itinerary = synthesizer.synthesize(&request).await;
    HttpResponse::Ok().json(itinerary)
}

/*
    /api/itineraries/enrich
*/
/// Resolves an itinerary's unique locations to images, in first-seen order.
pub async fn enrich(
    enricher: web::Data<LocationEnricher>,
    input: web::Json<Itinerary>,
) -> impl Responder {
    let images = enricher.enrich_locations(&input).await;
    HttpResponse::Ok().json(images)
}
