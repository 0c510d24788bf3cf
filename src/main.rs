use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tripcraft_api::config::AppConfig;
use tripcraft_api::routes;
use tripcraft_api::services::enrichment_service::LocationEnricher;
use tripcraft_api::services::synthesis_service::ItinerarySynthesizer;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let config = AppConfig::from_env();
    let http_client = reqwest::Client::new();

    let config_data = web::Data::new(config.clone());
    let synthesizer = web::Data::new(ItinerarySynthesizer::new(&config, http_client.clone()));
    let enricher = web::Data::new(LocationEnricher::new(&config, http_client));

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(config_data.clone())
            .app_data(synthesizer.clone())
            .app_data(enricher.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(routes::health::health_check))
                    .service(
                        web::scope("/itineraries")
                            .route("/generate", web::post().to(routes::itinerary::generate))
                            .route("/enrich", web::post().to(routes::itinerary::enrich)),
                    )
                    .route("/images/search", web::post().to(routes::image::search)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
