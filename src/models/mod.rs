pub mod image;
pub mod itinerary;
pub mod trip;
