use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Wire shape of a trip submission. The form layer sends `budget` and
/// `people` as either JSON numbers or numeric strings, so both fields accept
/// either encoding.
#[derive(Debug, Deserialize, Clone)]
pub struct ItinerarySubmission {
    pub destination: String,
    #[serde(deserialize_with = "number_or_string_f64")]
    pub budget: f64,
    #[serde(deserialize_with = "number_or_string_u32")]
    pub people: u32,
    #[serde(rename = "dateRange")]
    pub date_range: DateRange,
    #[serde(rename = "travelStyle")]
    pub travel_style: String,
}

/// A validated trip submission. Constructed once per request and dropped
/// after synthesis.
#[derive(Debug, Clone)]
pub struct TripRequest {
    pub destination: String,
    pub budget: f64,
    pub party_size: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub travel_style: String,
}

#[derive(Debug, PartialEq)]
pub enum TripRequestError {
    EmptyDestination,
    NonPositiveBudget,
    ZeroPartySize,
    InvertedDateRange,
}

impl fmt::Display for TripRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripRequestError::EmptyDestination => write!(f, "destination must not be empty"),
            TripRequestError::NonPositiveBudget => write!(f, "budget must be a positive number"),
            TripRequestError::ZeroPartySize => write!(f, "people must be at least 1"),
            TripRequestError::InvertedDateRange => {
                write!(f, "dateRange.from must not be after dateRange.to")
            }
        }
    }
}

impl Error for TripRequestError {}

impl TripRequest {
    pub fn new(
        destination: String,
        budget: f64,
        party_size: u32,
        start: NaiveDate,
        end: NaiveDate,
        travel_style: String,
    ) -> Result<Self, TripRequestError> {
        if destination.trim().is_empty() {
            return Err(TripRequestError::EmptyDestination);
        }
        if !(budget > 0.0) {
            return Err(TripRequestError::NonPositiveBudget);
        }
        if party_size == 0 {
            return Err(TripRequestError::ZeroPartySize);
        }
        if start > end {
            return Err(TripRequestError::InvertedDateRange);
        }

        Ok(Self {
            destination,
            budget,
            party_size,
            start,
            end,
            travel_style,
        })
    }

    /// Inclusive day count for the trip. Guaranteed >= 1 by construction.
    pub fn num_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }
}

impl TryFrom<ItinerarySubmission> for TripRequest {
    type Error = TripRequestError;

    fn try_from(submission: ItinerarySubmission) -> Result<Self, Self::Error> {
        TripRequest::new(
            submission.destination,
            submission.budget,
            submission.people,
            submission.date_range.from,
            submission.date_range.to,
            submission.travel_style,
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn number_or_string_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric value: {}", s))),
    }
}

fn number_or_string_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => {
            if n.fract() == 0.0 && n >= 0.0 && n <= u32::MAX as f64 {
                Ok(n as u32)
            } else {
                Err(serde::de::Error::custom(format!(
                    "invalid integer value: {}",
                    n
                )))
            }
        }
        NumberOrString::Text(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| serde::de::Error::custom(format!("invalid integer value: {}", s))),
    }
}
