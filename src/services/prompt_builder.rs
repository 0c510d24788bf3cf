use crate::models::trip::TripRequest;

/// Turns a validated trip submission into the single instruction sent to the
/// completion endpoint. The field names and nesting in the example below are
/// a contract with the schema validation; the surrounding wording is not.
pub fn build_prompt(request: &TripRequest) -> String {
    format!(
        "Create a travel itinerary for a trip to {destination}.\n\
         \n\
         Trip details:\n\
         - Destination: {destination}\n\
         - Budget: {budget}\n\
         - Number of travelers: {people}\n\
         - Dates: {start} to {end} ({days} days)\n\
         - Travel style: {style}\n\
         \n\
         Respond with a single JSON object and no other text before or after \
         it. The object must have exactly this shape:\n\
         {{\n\
           \"destination\": \"{destination}\",\n\
           \"summary\": \"a short overview of the trip, around 200 characters\",\n\
           \"days\": [\n\
             {{\n\
               \"day\": 1,\n\
               \"date\": \"{start}\",\n\
               \"activities\": [\n\
                 {{\n\
                   \"time\": \"08:00\",\n\
                   \"activity\": \"name of the activity\",\n\
                   \"location\": \"name of the place\",\n\
                   \"description\": \"one or two sentences\",\n\
                   \"type\": \"sightseeing\"\n\
                 }}\n\
               ]\n\
             }}\n\
           ]\n\
         }}\n\
         \n\
         Rules:\n\
         - \"days\" must contain exactly {days} entries, numbered 1 through \
         {days}, with consecutive dates starting at {start}.\n\
         - \"type\" must be one of: \"sightseeing\", \"meal\", \
         \"accommodation\", \"transportation\".\n\
         - Every day must include at least breakfast, lunch, and dinner as \
         \"meal\" activities and an \"accommodation\" entry for the night, \
         plus sightseeing or activity entries in between.\n\
         - Use real, named places in {destination} that fit a {style} trip.\n\
         - List each day's activities in chronological order with \"time\" in \
         24-hour HH:MM format.",
        destination = request.destination,
        budget = request.budget,
        people = request.party_size,
        start = request.start.format("%Y-%m-%d"),
        end = request.end.format("%Y-%m-%d"),
        days = request.num_days(),
        style = request.travel_style,
    )
}
