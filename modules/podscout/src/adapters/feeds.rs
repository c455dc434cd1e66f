//! Curated RSS/Atom podcast feeds. No provider API here — plain feed fetch
//! and parse, filtered down to entries matching the query term.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use podscout_common::{EpisodeRecord, FetchQuery, SourceOutcome};
use tracing::{info, warn};

use crate::extract;
use crate::sources::{SourceAdapter, PODCAST_FEEDS};

pub const SOURCE_ID: &str = "feeds";

const FEED_MAX_ITEMS: usize = 20;
const FEED_MAX_AGE_DAYS: i64 = 365;

pub struct FeedsAdapter {
    client: reqwest::Client,
    feeds: Vec<String>,
}

impl FeedsAdapter {
    pub fn new() -> Self {
        Self::with_feeds(PODCAST_FEEDS.iter().map(|url| url.to_string()).collect())
    }

    pub fn with_feeds(feeds: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .expect("Failed to build feed HTTP client"),
            feeds,
        }
    }

    async fn fetch_feed(
        &self,
        feed_url: &str,
        query: &FetchQuery,
    ) -> anyhow::Result<Vec<EpisodeRecord>> {
        let resp = self
            .client
            .get(feed_url)
            .header("User-Agent", "podscout/0.1")
            .send()
            .await?;
        let bytes = resp.bytes().await?;
        let feed = feed_rs::parser::parse(&bytes[..])?;
        Ok(records_from_feed(feed, query.term()))
    }
}

impl Default for FeedsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceAdapter for FeedsAdapter {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch(&self, query: &FetchQuery) -> SourceOutcome {
        let mut records = Vec::new();
        for feed_url in &self.feeds {
            match self.fetch_feed(feed_url, query).await {
                Ok(items) => records.extend(items),
                Err(e) => {
                    warn!(source = SOURCE_ID, feed = feed_url.as_str(), error = %e, "Failed to fetch feed");
                }
            }
        }

        info!(source = SOURCE_ID, count = records.len(), "Normalized feed entries");
        SourceOutcome::Success(records)
    }
}

fn entry_date(entry: &feed_rs::model::Entry) -> Option<DateTime<Utc>> {
    entry.published.or(entry.updated)
}

/// Filter a parsed feed down to recent entries matching the query term and
/// map them into records. Matching is a case-insensitive substring check
/// over title and summary.
fn records_from_feed(feed: feed_rs::model::Feed, term: &str) -> Vec<EpisodeRecord> {
    let podcast_name = match feed.title.map(|t| t.content).filter(|t| !t.is_empty()) {
        Some(name) => name,
        None => return Vec::new(),
    };

    let needle = term.to_lowercase();
    let cutoff = Utc::now() - chrono::Duration::days(FEED_MAX_AGE_DAYS);

    let mut entries = feed.entries;
    entries.retain(|entry| match entry_date(entry) {
        Some(date) => date >= cutoff,
        None => true,
    });
    entries.sort_by_key(|entry| std::cmp::Reverse(entry_date(entry)));
    entries.truncate(FEED_MAX_ITEMS);

    entries
        .into_iter()
        .filter_map(|entry| {
            let title = entry.title.map(|t| t.content).filter(|t| !t.is_empty())?;
            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .or_else(|| entry.id.starts_with("http").then(|| entry.id.clone()))?;
            let summary = entry.summary.map(|t| t.content);

            let haystack = match summary.as_deref() {
                Some(s) => format!("{title}\n{s}").to_lowercase(),
                None => title.to_lowercase(),
            };
            if !haystack.contains(&needle) {
                return None;
            }

            let found = extract::extract(summary.as_deref());
            Some(EpisodeRecord {
                podcast_name: podcast_name.clone(),
                episode_title: title,
                link,
                guest_name: found.name,
                guest_email: found.email,
            })
        })
        .collect()
}
