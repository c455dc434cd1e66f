//! Spotify source. Shows matching the query come back first; a per-show
//! episode listing fills in the rows — the one adapter with a secondary
//! fetch, serialized within the adapter and independent of the others.

use async_trait::async_trait;
use podscout_common::{EpisodeRecord, FailureKind, FetchQuery, SourceOutcome};
use spotify_client::{Episode, SpotifyClient, SpotifyError};
use tracing::{info, warn};

use crate::extract;
use crate::sources::SourceAdapter;

pub const SOURCE_ID: &str = "spotify";

pub struct SpotifyAdapter {
    client: SpotifyClient,
    market: String,
    limit: u32,
}

impl SpotifyAdapter {
    pub fn new(token: String, market: String, limit: u32) -> Self {
        Self {
            client: SpotifyClient::new(token),
            market,
            limit,
        }
    }
}

#[async_trait]
impl SourceAdapter for SpotifyAdapter {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch(&self, query: &FetchQuery) -> SourceOutcome {
        let shows = match self
            .client
            .search_shows(query.term(), &self.market, self.limit)
            .await
        {
            Ok(shows) => shows,
            Err(e) => return SourceOutcome::failure(SOURCE_ID, failure_kind(&e), e.to_string()),
        };

        let mut records = Vec::new();
        for show in shows {
            match self
                .client
                .show_episodes(&show.id, &self.market, self.limit)
                .await
            {
                Ok(episodes) => records.extend(
                    episodes
                        .into_iter()
                        .filter_map(|episode| map_episode(&show.name, episode)),
                ),
                Err(e) => {
                    warn!(source = SOURCE_ID, show = show.name.as_str(), error = %e, "Failed to fetch show episodes");
                }
            }
        }

        info!(source = SOURCE_ID, count = records.len(), "Normalized provider items");
        SourceOutcome::Success(records)
    }
}

fn failure_kind(err: &SpotifyError) -> FailureKind {
    match err {
        SpotifyError::Network(_) => FailureKind::Transport,
        SpotifyError::Api { status, .. } => FailureKind::Provider { status: *status },
        SpotifyError::Parse(_) => FailureKind::Parse,
    }
}

/// Map one episode under its show name. Episodes without a public link or
/// title are skipped.
fn map_episode(show_name: &str, episode: Episode) -> Option<EpisodeRecord> {
    if show_name.is_empty() || episode.name.is_empty() {
        return None;
    }
    let link = episode.external_urls.spotify.filter(|s| !s.is_empty())?;
    let found = extract::extract(episode.description.as_deref());

    Some(EpisodeRecord {
        podcast_name: show_name.to_string(),
        episode_title: episode.name,
        link,
        guest_name: found.name,
        guest_email: found.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(json: &str) -> Episode {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_maps_episode_with_extraction() {
        let record = map_episode(
            "Tech Talks",
            episode(
                r#"{
                    "name": "Scaling with Rust",
                    "description": "This week guest Jane Doe joins us. Reach her at jane@doe.dev",
                    "external_urls": {"spotify": "https://open.spotify.com/episode/1"}
                }"#,
            ),
        )
        .unwrap();

        assert_eq!(record.podcast_name, "Tech Talks");
        assert_eq!(record.link, "https://open.spotify.com/episode/1");
        assert_eq!(record.guest_name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.guest_email.as_deref(), Some("jane@doe.dev"));
    }

    #[test]
    fn test_skips_episode_without_link() {
        assert!(map_episode("Tech Talks", episode(r#"{"name": "No link"}"#)).is_none());
    }

    #[test]
    fn test_skips_episode_under_unnamed_show() {
        let ep = episode(
            r#"{"name": "Ep", "external_urls": {"spotify": "https://open.spotify.com/episode/2"}}"#,
        );
        assert!(map_episode("", ep).is_none());
    }
}
