pub mod error;
pub mod types;

pub use error::{Result, SpotifyError};
pub use types::{Episode, EpisodesResponse, SearchShowsResponse, Show};

use std::time::Duration;

const BASE_URL: &str = "https://api.spotify.com/v1";

/// Spotify Web API client. The bearer token is injected by the caller; this
/// crate never reads credentials itself.
pub struct SpotifyClient {
    client: reqwest::Client,
    token: String,
}

impl SpotifyClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build Spotify HTTP client"),
            token,
        }
    }

    /// Search shows matching a term.
    pub async fn search_shows(&self, term: &str, market: &str, limit: u32) -> Result<Vec<Show>> {
        tracing::info!(term, market, limit, "Spotify show search");

        let url = format!("{}/search", BASE_URL);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[
                ("q", term),
                ("type", "show"),
                ("market", market),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: SearchShowsResponse = resp.json().await?;
        tracing::info!(count = data.shows.items.len(), "Spotify show search complete");
        Ok(data.shows.items)
    }

    /// List episodes for one show — the secondary fetch of the
    /// show → episodes shape.
    pub async fn show_episodes(
        &self,
        show_id: &str,
        market: &str,
        limit: u32,
    ) -> Result<Vec<Episode>> {
        let url = format!("{}/shows/{}/episodes", BASE_URL, show_id);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("market", market), ("limit", &limit.to_string())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: EpisodesResponse = resp.json().await?;
        tracing::debug!(show_id, count = data.items.len(), "Fetched show episodes");
        Ok(data.items)
    }
}
