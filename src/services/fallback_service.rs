use chrono::{Days, NaiveDate};

use crate::models::itinerary::{Activity, ActivityType, Itinerary, ItineraryDay};

/// Builds the template itinerary used whenever synthesis cannot produce a
/// valid plan. Pure and deterministic: no I/O, no parsing, identical inputs
/// always produce the identical plan.
pub fn generate_fallback(
    destination: &str,
    num_days: u32,
    trip_start: NaiveDate,
    travel_style: &str,
) -> Itinerary {
    let mut days = Vec::with_capacity(num_days as usize);

    for index in 0..num_days {
        // The synthesis path derives num_days and trip_start from the same
        // validated range, so every offset lands on a valid date. Saturate at
        // the calendar end for callers that pass an inconsistent pair.
        let date = trip_start
            .checked_add_days(Days::new(index as u64))
            .unwrap_or(NaiveDate::MAX);

        days.push(ItineraryDay {
            day: index + 1,
            date,
            activities: canonical_day_activities(destination, travel_style),
        });
    }

    Itinerary {
        destination: destination.to_string(),
        summary: format!(
            "A {}-day {} trip to {} balancing landmark sightseeing, local dining, \
             and comfortable lodging, with a steady rhythm of meals and activities \
             planned for every day of the stay.",
            num_days, travel_style, destination
        ),
        days,
    }
}

/// The canonical six-activity day: breakfast, morning sightseeing, lunch,
/// afternoon activity, dinner, lodging.
fn canonical_day_activities(destination: &str, travel_style: &str) -> Vec<Activity> {
    vec![
        Activity {
            time: "08:00".to_string(),
            activity: "Breakfast".to_string(),
            location: format!("Local cafe in {}", destination),
            description: format!(
                "Start the day with breakfast at a neighborhood cafe in {}.",
                destination
            ),
            activity_type: ActivityType::Meal,
        },
        Activity {
            time: "10:00".to_string(),
            activity: "Morning sightseeing".to_string(),
            location: format!("{} city center", destination),
            description: format!(
                "Explore the landmark sights of {} at a pace suited to a {} trip.",
                destination, travel_style
            ),
            activity_type: ActivityType::Sightseeing,
        },
        Activity {
            time: "12:30".to_string(),
            activity: "Lunch".to_string(),
            location: format!("{} market district", destination),
            description: format!("Sample local specialties for lunch in {}.", destination),
            activity_type: ActivityType::Meal,
        },
        Activity {
            time: "14:00".to_string(),
            activity: "Afternoon activity".to_string(),
            location: format!("{} old town", destination),
            description: format!(
                "An afternoon of {} experiences around {}.",
                travel_style, destination
            ),
            activity_type: ActivityType::Sightseeing,
        },
        Activity {
            time: "18:00".to_string(),
            activity: "Dinner".to_string(),
            location: format!("Downtown {}", destination),
            description: format!("Dinner at a well-regarded restaurant in {}.", destination),
            activity_type: ActivityType::Meal,
        },
        Activity {
            time: "20:00".to_string(),
            activity: "Return to lodging".to_string(),
            location: format!("{} hotel", destination),
            description: format!("Settle in for the night at your hotel in {}.", destination),
            activity_type: ActivityType::Accommodation,
        },
    ]
}
