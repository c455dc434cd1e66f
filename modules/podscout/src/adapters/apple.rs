//! Apple Podcasts source, backed by the iTunes Search API.

use async_trait::async_trait;
use itunes_client::{ItunesClient, ItunesError, PodcastResult};
use podscout_common::{EpisodeRecord, FailureKind, FetchQuery, SourceOutcome};
use tracing::info;

use crate::extract;
use crate::sources::SourceAdapter;

pub const SOURCE_ID: &str = "apple";

pub struct AppleAdapter {
    client: ItunesClient,
    limit: u32,
}

impl AppleAdapter {
    pub fn new(limit: u32) -> Self {
        Self {
            client: ItunesClient::new(),
            limit,
        }
    }
}

#[async_trait]
impl SourceAdapter for AppleAdapter {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch(&self, query: &FetchQuery) -> SourceOutcome {
        let items = match self.client.search_podcasts(query.term(), self.limit).await {
            Ok(items) => items,
            Err(e) => return SourceOutcome::failure(SOURCE_ID, failure_kind(&e), e.to_string()),
        };

        let records: Vec<EpisodeRecord> = items.into_iter().filter_map(map_item).collect();
        info!(source = SOURCE_ID, count = records.len(), "Normalized provider items");
        SourceOutcome::Success(records)
    }
}

fn failure_kind(err: &ItunesError) -> FailureKind {
    match err {
        ItunesError::Network(_) => FailureKind::Transport,
        ItunesError::Api { status, .. } => FailureKind::Provider { status: *status },
        ItunesError::Parse(_) => FailureKind::Parse,
    }
}

/// Map one provider item into the normalized record shape. Items missing a
/// show name, episode title, or link are skipped rather than exported with
/// empty required fields.
fn map_item(item: PodcastResult) -> Option<EpisodeRecord> {
    let podcast_name = item.collection_name.filter(|s| !s.is_empty())?;
    let episode_title = item.track_name.filter(|s| !s.is_empty())?;
    let link = item.track_view_url.filter(|s| !s.is_empty())?;
    let found = extract::extract(item.description.as_deref());

    Some(EpisodeRecord {
        podcast_name,
        episode_title,
        link,
        guest_name: found.name,
        guest_email: found.email,
    })
}
