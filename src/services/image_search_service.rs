use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use std::fmt;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Sentinel returned for any location whose image cannot be resolved.
pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder.svg?height=400&width=600";

#[derive(Debug, Deserialize)]
struct ImageSearchResponse {
    items: Option<Vec<ImageSearchItem>>,
}

#[derive(Debug, Deserialize)]
struct ImageSearchItem {
    link: String,
}

#[derive(Debug)]
pub enum ImageSearchError {
    HttpError(reqwest::Error),
    ResponseError(String),
    NoResults,
}

impl fmt::Display for ImageSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSearchError::HttpError(err) => write!(f, "HTTP error: {}", err),
            ImageSearchError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            ImageSearchError::NoResults => write!(f, "No results returned for query"),
        }
    }
}

impl Error for ImageSearchError {}

impl From<reqwest::Error> for ImageSearchError {
    fn from(err: reqwest::Error) -> Self {
        ImageSearchError::HttpError(err)
    }
}

/// Client for the image-search upstream. Each lookup is a single GET with
/// image mode enabled; the first result's link is the resolved URL.
#[derive(Clone)]
pub struct ImageSearchClient {
    client: Client,
    api_key: String,
    search_engine_id: String,
    base_url: String,
}

impl ImageSearchClient {
    pub fn new(client: Client, api_key: String, search_engine_id: String) -> Self {
        Self {
            client,
            api_key,
            search_engine_id,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn search_image(&self, query: &str) -> Result<String, ImageSearchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.search_engine_id.as_str()),
                ("q", query),
                ("searchType", "image"),
                ("num", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ImageSearchError::ResponseError(format!(
                "Image search failed with status {}: {}",
                status, error_text
            )));
        }

        let search_response: ImageSearchResponse = response.json().await.map_err(|e| {
            ImageSearchError::ResponseError(format!("Failed to parse response: {}", e))
        })?;

        search_response
            .items
            .and_then(|items| items.into_iter().next())
            .map(|item| item.link)
            .ok_or(ImageSearchError::NoResults)
    }
}
