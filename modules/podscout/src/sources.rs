use async_trait::async_trait;
use podscout_common::{FetchQuery, SourceOutcome};

/// One registered episode source.
///
/// `fetch` performs the provider round-trip and never escapes with an error:
/// transport failures, bad statuses, and malformed payloads all come back as
/// `SourceOutcome::Failure`, so one broken provider cannot block the others
/// from reaching the export.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Stable identifier used in failure reports and logs.
    fn id(&self) -> &'static str;

    async fn fetch(&self, query: &FetchQuery) -> SourceOutcome;
}

/// Hardcoded seed list of podcast RSS feeds for the feeds adapter.
pub const PODCAST_FEEDS: &[&str] = &[
    // Technology
    "https://feeds.twit.tv/twit.xml",
    "https://changelog.com/podcast/feed",
    "https://feeds.megaphone.fm/vergecast",
    "https://feeds.fireside.fm/linuxunplugged/rss",
    // Interview-heavy shows
    "https://lexfridman.com/feed/podcast/",
    "https://feeds.megaphone.fm/stuffyoushouldknow",
    // News and business
    "https://feeds.npr.org/510289/podcast.xml",
    "https://feeds.npr.org/510318/podcast.xml",
    "https://www.thisamericanlife.org/podcast/rss.xml",
];
