use serde_json::Value;
use std::error::Error;

use crate::config::AppConfig;
use crate::models::itinerary::Itinerary;
use crate::models::trip::TripRequest;
use crate::services::completion_service::CompletionClient;
use crate::services::fallback_service::generate_fallback;
use crate::services::prompt_builder::build_prompt;

/// Orchestrates itinerary synthesis: one completion call, extraction of the
/// embedded JSON object, schema validation, and whole-plan fallback
/// substitution on any failure. A malformed model response is never
/// partially repaired; the caller always receives a valid plan.
pub struct ItinerarySynthesizer {
    completion: Option<CompletionClient>,
}

impl ItinerarySynthesizer {
    pub fn new(config: &AppConfig, client: reqwest::Client) -> Self {
        let completion = match &config.openai_api_key {
            Some(api_key) => Some(CompletionClient::new(client, api_key.clone())),
            None => {
                println!("Completion credential not configured. Itineraries will use the fallback planner.");
                None
            }
        };

        Self { completion }
    }

    pub fn with_completion_client(completion: Option<CompletionClient>) -> Self {
        Self { completion }
    }

    pub async fn synthesize(&self, request: &TripRequest) -> Itinerary {
        let fallback = || {
            generate_fallback(
                &request.destination,
                request.num_days(),
                request.start,
                &request.travel_style,
            )
        };

        let Some(completion) = &self.completion else {
            return fallback();
        };

        let prompt = build_prompt(request);
        let generated = match completion.complete(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Completion request failed: {}. Using fallback plan.", err);
                return fallback();
            }
        };

        match parse_generated_itinerary(&generated, request) {
            Ok(itinerary) => itinerary,
            Err(err) => {
                eprintln!("Rejected generated itinerary: {}. Using fallback plan.", err);
                fallback()
            }
        }
    }
}

fn parse_generated_itinerary(
    text: &str,
    request: &TripRequest,
) -> Result<Itinerary, Box<dyn Error>> {
    let span = extract_json_object(text).ok_or("no JSON object found in generated text")?;
    let value: Value = serde_json::from_str(span)?;
    Ok(Itinerary::from_model_output(&value, request)?)
}

/// Returns the first balanced `{...}` span in `text`. The model is asked for
/// bare JSON but routinely wraps it in prose, so brace depth is tracked
/// through string literals and escapes rather than trusting the whole body.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
