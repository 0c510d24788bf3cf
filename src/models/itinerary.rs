use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt;

use crate::models::trip::TripRequest;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Sightseeing,
    Meal,
    Accommodation,
    Transportation,
}

impl ActivityType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sightseeing" => Some(ActivityType::Sightseeing),
            "meal" => Some(ActivityType::Meal),
            "accommodation" => Some(ActivityType::Accommodation),
            "transportation" => Some(ActivityType::Transportation),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Activity {
    pub time: String,
    pub activity: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryDay {
    pub day: u32,
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    pub destination: String,
    pub summary: String,
    pub days: Vec<ItineraryDay>,
}

/// First structural violation found while checking a candidate plan.
/// Validation is fail-fast; `field` is the path of the offending value.
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid itinerary at `{}`: {}", self.field, self.message)
    }
}

impl Error for ValidationError {}

impl Itinerary {
    /// Checks an untyped candidate plan against the schema and the trip it
    /// was generated for, producing a typed `Itinerary` only when every
    /// check passes. Model output is untrusted text; nothing in it is used
    /// before it survives this function.
    pub fn from_model_output(
        value: &Value,
        request: &TripRequest,
    ) -> Result<Itinerary, ValidationError> {
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::new("", "expected a JSON object"))?;

        let destination = require_string(object.get("destination"), "destination")?;
        let summary = require_string(object.get("summary"), "summary")?;

        let days_value = object
            .get("days")
            .and_then(Value::as_array)
            .ok_or_else(|| ValidationError::new("days", "expected an array of days"))?;

        let expected_days = request.num_days() as usize;
        if days_value.len() != expected_days {
            return Err(ValidationError::new(
                "days",
                format!("expected {} days, found {}", expected_days, days_value.len()),
            ));
        }

        let mut days = Vec::with_capacity(days_value.len());
        for (index, day_value) in days_value.iter().enumerate() {
            days.push(validate_day(day_value, index, request.start)?);
        }

        Ok(Itinerary {
            destination,
            summary,
            days,
        })
    }
}

fn validate_day(
    value: &Value,
    index: usize,
    trip_start: NaiveDate,
) -> Result<ItineraryDay, ValidationError> {
    let path = format!("days[{}]", index);
    let object = value
        .as_object()
        .ok_or_else(|| ValidationError::new(path.as_str(), "expected a day object"))?;

    let expected_number = index as u64 + 1;
    let day = object
        .get("day")
        .and_then(Value::as_u64)
        .ok_or_else(|| ValidationError::new(format!("{}.day", path), "expected an integer"))?;
    if day != expected_number {
        return Err(ValidationError::new(
            format!("{}.day", path),
            format!("expected day number {}, found {}", expected_number, day),
        ));
    }

    let date_text = object
        .get("date")
        .and_then(Value::as_str)
        .ok_or_else(|| ValidationError::new(format!("{}.date", path), "expected a date string"))?;
    let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d").map_err(|_| {
        ValidationError::new(
            format!("{}.date", path),
            format!("not a calendar date: {}", date_text),
        )
    })?;

    let expected_date = trip_start
        .checked_add_days(Days::new(index as u64))
        .ok_or_else(|| ValidationError::new(format!("{}.date", path), "date out of range"))?;
    if date != expected_date {
        return Err(ValidationError::new(
            format!("{}.date", path),
            format!("expected {}, found {}", expected_date, date),
        ));
    }

    let activities_value = object
        .get("activities")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ValidationError::new(format!("{}.activities", path), "expected an array")
        })?;
    if activities_value.is_empty() {
        return Err(ValidationError::new(
            format!("{}.activities", path),
            "expected at least one activity",
        ));
    }

    let mut activities = Vec::with_capacity(activities_value.len());
    for (activity_index, activity_value) in activities_value.iter().enumerate() {
        let activity_path = format!("{}.activities[{}]", path, activity_index);
        activities.push(validate_activity(activity_value, &activity_path)?);
    }

    Ok(ItineraryDay {
        day: day as u32,
        date,
        activities,
    })
}

fn validate_activity(value: &Value, path: &str) -> Result<Activity, ValidationError> {
    let object = value
        .as_object()
        .ok_or_else(|| ValidationError::new(path, "expected an activity object"))?;

    let time = require_non_empty(object.get("time"), &format!("{}.time", path))?;
    let activity = require_non_empty(object.get("activity"), &format!("{}.activity", path))?;
    let location = require_non_empty(object.get("location"), &format!("{}.location", path))?;
    let description = require_string(object.get("description"), &format!("{}.description", path))?;

    let type_path = format!("{}.type", path);
    let type_text = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ValidationError::new(type_path.as_str(), "expected a string"))?;
    let activity_type = ActivityType::parse(type_text).ok_or_else(|| {
        ValidationError::new(
            type_path.as_str(),
            format!(
                "expected one of sightseeing, meal, accommodation, transportation; found {}",
                type_text
            ),
        )
    })?;

    Ok(Activity {
        time,
        activity,
        location,
        description,
        activity_type,
    })
}

fn require_string(value: Option<&Value>, path: &str) -> Result<String, ValidationError> {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ValidationError::new(path, "expected a string"))
}

fn require_non_empty(value: Option<&Value>, path: &str) -> Result<String, ValidationError> {
    let text = require_string(value, path)?;
    if text.trim().is_empty() {
        return Err(ValidationError::new(path, "must not be empty"));
    }
    Ok(text)
}
