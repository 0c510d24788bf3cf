use serde::{Deserialize, Serialize};

/// One resolved entry in the location-to-image mapping handed to the
/// rendering layer. `image_url` is either an absolute URL from the image
/// search upstream or the placeholder sentinel.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LocationImage {
    pub location: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
