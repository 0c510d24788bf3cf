use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::services::enrichment_service::LocationEnricher;

#[derive(serde::Deserialize)]
pub struct ImageSearchParams {
    query: String,
}

/*
    /api/images/search

    Always responds 200 with an imageUrl; an unresolvable query degrades to
    the placeholder rather than an error.
*/
pub async fn search(
    enricher: web::Data<LocationEnricher>,
    input: web::Json<ImageSearchParams>,
) -> impl Responder {
    let image_url = enricher.resolve_query(&input.query).await;
    HttpResponse::Ok().json(json!({ "imageUrl": image_url }))
}
