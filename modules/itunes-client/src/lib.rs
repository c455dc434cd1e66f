pub mod error;
pub mod types;

pub use error::{ItunesError, Result};
pub use types::{PodcastResult, SearchResponse};

use std::time::Duration;

const BASE_URL: &str = "https://itunes.apple.com";

pub struct ItunesClient {
    client: reqwest::Client,
}

impl ItunesClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build iTunes HTTP client"),
        }
    }

    /// Search podcasts matching a term. One GET against `/search`.
    pub async fn search_podcasts(&self, term: &str, limit: u32) -> Result<Vec<PodcastResult>> {
        tracing::info!(term, limit, "iTunes podcast search");

        let url = format!("{}/search", BASE_URL);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("media", "podcast"),
                ("term", term),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ItunesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: SearchResponse = resp.json().await?;
        tracing::info!(count = data.results.len(), "iTunes search complete");
        Ok(data.results)
    }
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new()
    }
}
