use chrono::NaiveDate;
use serde_json::{json, Value};

use tripcraft_api::models::itinerary::{ActivityType, Itinerary};
use tripcraft_api::models::trip::TripRequest;
use tripcraft_api::services::prompt_builder::build_prompt;
use tripcraft_api::services::synthesis_service::{extract_json_object, ItinerarySynthesizer};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn kyoto_request() -> TripRequest {
    TripRequest::new(
        "Kyoto".to_string(),
        100000.0,
        2,
        date(2024, 5, 1),
        date(2024, 5, 3),
        "sightseeing".to_string(),
    )
    .unwrap()
}

fn valid_day(day: u32, date: &str) -> Value {
    json!({
        "day": day,
        "date": date,
        "activities": [
            {
                "time": "09:00",
                "activity": "Visit Fushimi Inari",
                "location": "Fushimi Inari Taisha",
                "description": "Walk the torii gates.",
                "type": "sightseeing"
            },
            {
                "time": "12:30",
                "activity": "Lunch",
                "location": "Nishiki Market",
                "description": "Street food stalls.",
                "type": "meal"
            }
        ]
    })
}

fn valid_plan() -> Value {
    json!({
        "destination": "Kyoto",
        "summary": "Three days of temples, markets, and gardens in Kyoto.",
        "days": [
            valid_day(1, "2024-05-01"),
            valid_day(2, "2024-05-02"),
            valid_day(3, "2024-05-03")
        ]
    })
}

#[test]
fn test_extract_json_object_bare() {
    let text = r#"{"destination":"Kyoto"}"#;
    assert_eq!(extract_json_object(text), Some(text));
}

#[test]
fn test_extract_json_object_wrapped_in_prose() {
    let text = "Here you go: {\"destination\":\"Kyoto\",\"days\":[]} Enjoy the trip!";
    assert_eq!(
        extract_json_object(text),
        Some("{\"destination\":\"Kyoto\",\"days\":[]}")
    );
}

#[test]
fn test_extract_json_object_ignores_braces_in_strings() {
    let text = r#"note {"summary":"use {curly} braces \" carefully","days":[]} trailing"#;
    assert_eq!(
        extract_json_object(text),
        Some(r#"{"summary":"use {curly} braces \" carefully","days":[]}"#)
    );
}

#[test]
fn test_extract_json_object_none_when_absent() {
    assert_eq!(extract_json_object("Sorry, I cannot help with that."), None);
    assert_eq!(extract_json_object("unbalanced { oops"), None);
}

#[test]
fn test_validation_accepts_well_formed_plan() {
    let request = kyoto_request();
    let itinerary = Itinerary::from_model_output(&valid_plan(), &request).unwrap();

    assert_eq!(itinerary.destination, "Kyoto");
    assert_eq!(itinerary.days.len(), 3);
    assert_eq!(itinerary.days[1].date, date(2024, 5, 2));
    assert_eq!(
        itinerary.days[0].activities[0].activity_type,
        ActivityType::Sightseeing
    );
}

#[test]
fn test_validation_rejects_wrong_day_count() {
    let request = kyoto_request();
    let plan = json!({
        "destination": "Kyoto",
        "summary": "Too short.",
        "days": [valid_day(1, "2024-05-01"), valid_day(2, "2024-05-02")]
    });

    let err = Itinerary::from_model_output(&plan, &request).unwrap_err();
    assert_eq!(err.field, "days");
}

#[test]
fn test_validation_rejects_non_sequential_day_numbers() {
    let request = kyoto_request();
    let plan = json!({
        "destination": "Kyoto",
        "summary": "Day numbers skip.",
        "days": [
            valid_day(1, "2024-05-01"),
            valid_day(3, "2024-05-02"),
            valid_day(2, "2024-05-03")
        ]
    });

    let err = Itinerary::from_model_output(&plan, &request).unwrap_err();
    assert_eq!(err.field, "days[1].day");
}

#[test]
fn test_validation_rejects_misaligned_date() {
    let request = kyoto_request();
    let plan = json!({
        "destination": "Kyoto",
        "summary": "Second date drifts.",
        "days": [
            valid_day(1, "2024-05-01"),
            valid_day(2, "2024-05-05"),
            valid_day(3, "2024-05-03")
        ]
    });

    let err = Itinerary::from_model_output(&plan, &request).unwrap_err();
    assert_eq!(err.field, "days[1].date");
}

#[test]
fn test_validation_rejects_unknown_activity_type() {
    let request = kyoto_request();
    let mut plan = valid_plan();
    plan["days"][2]["activities"][1]["type"] = json!("shopping");

    let err = Itinerary::from_model_output(&plan, &request).unwrap_err();
    assert_eq!(err.field, "days[2].activities[1].type");
}

#[test]
fn test_validation_rejects_empty_activity_fields() {
    let request = kyoto_request();
    let mut plan = valid_plan();
    plan["days"][0]["activities"][0]["location"] = json!("   ");

    let err = Itinerary::from_model_output(&plan, &request).unwrap_err();
    assert_eq!(err.field, "days[0].activities[0].location");
}

#[test]
fn test_validation_rejects_day_without_activities() {
    let request = kyoto_request();
    let mut plan = valid_plan();
    plan["days"][1]["activities"] = json!([]);

    let err = Itinerary::from_model_output(&plan, &request).unwrap_err();
    assert_eq!(err.field, "days[1].activities");
}

#[test]
fn test_validation_rejects_non_object_payload() {
    let request = kyoto_request();
    let err = Itinerary::from_model_output(&json!(["not", "a", "plan"]), &request).unwrap_err();
    assert_eq!(err.field, "");
}

#[test]
fn test_prompt_carries_trip_parameters_and_shape_contract() {
    let request = kyoto_request();
    let prompt = build_prompt(&request);

    assert!(prompt.contains("Kyoto"));
    assert!(prompt.contains("100000"));
    assert!(prompt.contains("Number of travelers: 2"));
    assert!(prompt.contains("2024-05-01 to 2024-05-03 (3 days)"));
    assert!(prompt.contains("sightseeing"));

    // The field-name/shape contract with the validator.
    for field in ["\"destination\"", "\"summary\"", "\"days\"", "\"day\"", "\"date\"",
                  "\"activities\"", "\"time\"", "\"activity\"", "\"location\"",
                  "\"description\"", "\"type\""] {
        assert!(prompt.contains(field), "prompt missing field {}", field);
    }
    for variant in ["\"sightseeing\"", "\"meal\"", "\"accommodation\"", "\"transportation\""] {
        assert!(prompt.contains(variant), "prompt missing type {}", variant);
    }

    assert!(prompt.contains("breakfast, lunch, and dinner"));
    assert!(prompt.contains("single JSON object"));
}

#[actix_rt::test]
async fn test_synthesize_without_credential_returns_fallback() {
    let synthesizer = ItinerarySynthesizer::with_completion_client(None);
    let request = TripRequest::new(
        "京都".to_string(),
        100000.0,
        2,
        date(2024, 5, 1),
        date(2024, 5, 3),
        "観光".to_string(),
    )
    .unwrap();

    let itinerary = synthesizer.synthesize(&request).await;

    assert_eq!(itinerary.destination, "京都");
    assert_eq!(itinerary.days.len(), 3);
    assert_eq!(itinerary.days[1].date, date(2024, 5, 2));
    for day in &itinerary.days {
        assert_eq!(day.activities.len(), 6);
    }
}
