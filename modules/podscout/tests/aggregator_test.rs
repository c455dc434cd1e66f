//! Aggregator fan-out/merge behavior, exercised with adapter test doubles.

use std::time::Duration;

use async_trait::async_trait;
use podscout::aggregator::Aggregator;
use podscout::sources::SourceAdapter;
use podscout_common::{EpisodeRecord, FailureKind, FetchQuery, SourceOutcome};

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

fn record(podcast: &str, episode: &str) -> EpisodeRecord {
    EpisodeRecord {
        podcast_name: podcast.to_string(),
        episode_title: episode.to_string(),
        link: format!("https://example.com/{episode}"),
        guest_name: None,
        guest_email: None,
    }
}

fn query() -> FetchQuery {
    FetchQuery::new("technology").expect("valid query")
}

/// Succeeds with fixed records after an artificial delay.
struct DelayedAdapter {
    id: &'static str,
    delay: Duration,
    records: Vec<EpisodeRecord>,
}

#[async_trait]
impl SourceAdapter for DelayedAdapter {
    fn id(&self) -> &'static str {
        self.id
    }

    async fn fetch(&self, _query: &FetchQuery) -> SourceOutcome {
        tokio::time::sleep(self.delay).await;
        SourceOutcome::Success(self.records.clone())
    }
}

/// Always fails with a simulated transport error.
struct FailingAdapter {
    id: &'static str,
}

#[async_trait]
impl SourceAdapter for FailingAdapter {
    fn id(&self) -> &'static str {
        self.id
    }

    async fn fetch(&self, _query: &FetchQuery) -> SourceOutcome {
        SourceOutcome::failure(self.id, FailureKind::Transport, "connection refused")
    }
}

/// Never resolves within any reasonable test timeout.
struct HangingAdapter {
    id: &'static str,
}

#[async_trait]
impl SourceAdapter for HangingAdapter {
    fn id(&self) -> &'static str {
        self.id
    }

    async fn fetch(&self, _query: &FetchQuery) -> SourceOutcome {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        SourceOutcome::Success(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// Merge determinism
// ---------------------------------------------------------------------------

#[tokio::test]
async fn merge_order_follows_registration_not_completion() {
    let mut aggregator = Aggregator::new(Duration::from_secs(5));
    // A is slower than B; output must still lead with A's records.
    aggregator.register(Box::new(DelayedAdapter {
        id: "a",
        delay: Duration::from_millis(200),
        records: vec![record("Show A", "a1"), record("Show A", "a2")],
    }));
    aggregator.register(Box::new(DelayedAdapter {
        id: "b",
        delay: Duration::from_millis(10),
        records: vec![record("Show B", "b1")],
    }));

    let report = aggregator.run(&query()).await;

    let titles: Vec<&str> = report
        .records
        .iter()
        .map(|r| r.episode_title.as_str())
        .collect();
    assert_eq!(titles, vec!["a1", "a2", "b1"]);
    assert!(report.failures.is_empty());
}

// ---------------------------------------------------------------------------
// Failure isolation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn partial_failure_keeps_successful_sources() {
    let mut aggregator = Aggregator::new(Duration::from_secs(5));
    aggregator.register(Box::new(DelayedAdapter {
        id: "a",
        delay: Duration::from_millis(5),
        records: vec![record("Show A", "a1"), record("Show A", "a2")],
    }));
    aggregator.register(Box::new(FailingAdapter { id: "b" }));

    let report = aggregator.run(&query()).await;

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].source, "b");
    assert_eq!(report.failures[0].kind, FailureKind::Transport);
}

#[tokio::test]
async fn all_sources_failing_yields_empty_records_and_full_report() {
    let mut aggregator = Aggregator::new(Duration::from_secs(5));
    aggregator.register(Box::new(FailingAdapter { id: "a" }));
    aggregator.register(Box::new(FailingAdapter { id: "b" }));

    let report = aggregator.run(&query()).await;

    assert!(report.records.is_empty());
    assert_eq!(report.failures.len(), 2);
}

// ---------------------------------------------------------------------------
// Timeouts and deadlines
// ---------------------------------------------------------------------------

#[tokio::test]
async fn hung_source_becomes_timeout_failure() {
    let mut aggregator = Aggregator::new(Duration::from_millis(50));
    aggregator.register(Box::new(HangingAdapter { id: "slow" }));
    aggregator.register(Box::new(DelayedAdapter {
        id: "fast",
        delay: Duration::from_millis(1),
        records: vec![record("Show F", "f1")],
    }));

    let report = aggregator.run(&query()).await;

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].source, "slow");
    assert_eq!(report.failures[0].kind, FailureKind::Timeout);
}

#[tokio::test]
async fn deadline_finalizes_with_resolved_outcomes() {
    let mut aggregator =
        Aggregator::new(Duration::from_secs(3600)).with_deadline(Duration::from_millis(100));
    aggregator.register(Box::new(HangingAdapter { id: "slow" }));
    aggregator.register(Box::new(DelayedAdapter {
        id: "fast",
        delay: Duration::from_millis(5),
        records: vec![record("Show F", "f1")],
    }));

    let report = aggregator.run(&query()).await;

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].source, "slow");
    assert_eq!(report.failures[0].kind, FailureKind::Timeout);
}

#[tokio::test]
async fn deadline_with_all_sources_resolved_in_time() {
    let mut aggregator =
        Aggregator::new(Duration::from_secs(5)).with_deadline(Duration::from_secs(5));
    aggregator.register(Box::new(DelayedAdapter {
        id: "a",
        delay: Duration::from_millis(5),
        records: vec![record("Show A", "a1")],
    }));
    aggregator.register(Box::new(DelayedAdapter {
        id: "b",
        delay: Duration::from_millis(1),
        records: vec![record("Show B", "b1")],
    }));

    let report = aggregator.run(&query()).await;

    let titles: Vec<&str> = report
        .records
        .iter()
        .map(|r| r.episode_title.as_str())
        .collect();
    assert_eq!(titles, vec!["a1", "b1"]);
    assert!(report.failures.is_empty());
}

// ---------------------------------------------------------------------------
// Query validation
// ---------------------------------------------------------------------------

#[test]
fn empty_query_is_rejected_before_any_dispatch() {
    assert!(FetchQuery::new("").is_err());
    assert!(FetchQuery::new("  \t ").is_err());
}
