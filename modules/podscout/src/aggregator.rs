//! Fan-out/merge across registered source adapters.
//!
//! Every adapter is dispatched concurrently; outcomes are gathered at a
//! single barrier and merged single-threaded in registration order, so the
//! output is reproducible regardless of which source answered first.

use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use podscout_common::{EpisodeRecord, FailureKind, FetchQuery, SourceFailure, SourceOutcome};
use tracing::{info, warn};

use crate::sources::SourceAdapter;

/// Outcome of one aggregation run: merged records plus per-source failures.
/// Empty records alongside failures is a valid result, not an error.
#[derive(Debug, Default)]
pub struct RunReport {
    pub records: Vec<EpisodeRecord>,
    pub failures: Vec<SourceFailure>,
}

pub struct Aggregator {
    adapters: Vec<Box<dyn SourceAdapter>>,
    per_source_timeout: Duration,
    deadline: Option<Duration>,
}

impl Aggregator {
    pub fn new(per_source_timeout: Duration) -> Self {
        Self {
            adapters: Vec::new(),
            per_source_timeout,
            deadline: None,
        }
    }

    /// Overall run deadline. On expiry the merge is finalized with whatever
    /// outcomes have resolved; the rest are reported as timeouts.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Register an adapter. Registration order is the merge order of the
    /// final output. Panics on a duplicate source id.
    pub fn register(&mut self, adapter: Box<dyn SourceAdapter>) {
        assert!(
            self.adapters.iter().all(|a| a.id() != adapter.id()),
            "duplicate source adapter id: {}",
            adapter.id()
        );
        self.adapters.push(adapter);
    }

    /// Dispatch every adapter concurrently, gather all outcomes, merge in
    /// registration order. Source failures are reported, never propagated.
    pub async fn run(&self, query: &FetchQuery) -> RunReport {
        info!(
            term = query.term(),
            sources = self.adapters.len(),
            "Starting aggregation run"
        );

        let outcomes = self.collect_outcomes(query).await;

        // Merge after the barrier, never as outcomes arrive.
        let mut report = RunReport::default();
        for outcome in outcomes {
            match outcome {
                SourceOutcome::Success(records) => report.records.extend(records),
                SourceOutcome::Failure(failure) => {
                    warn!(
                        source = failure.source.as_str(),
                        kind = %failure.kind,
                        message = failure.message.as_str(),
                        "Source failed"
                    );
                    report.failures.push(failure);
                }
            }
        }

        info!(
            records = report.records.len(),
            failed_sources = report.failures.len(),
            "Aggregation run complete"
        );
        report
    }

    /// Returns one outcome per adapter, index-aligned with registration
    /// order. Each fetch is bounded by the per-source timeout; under an
    /// overall deadline, slots still unresolved at expiry become timeout
    /// failures.
    async fn collect_outcomes(&self, query: &FetchQuery) -> Vec<SourceOutcome> {
        if self.adapters.is_empty() {
            return Vec::new();
        }

        let per_source = self.per_source_timeout;
        let fetches = self.adapters.iter().map(|adapter| {
            let id = adapter.id();
            async move {
                match tokio::time::timeout(per_source, adapter.fetch(query)).await {
                    Ok(outcome) => outcome,
                    Err(_) => SourceOutcome::failure(
                        id,
                        FailureKind::Timeout,
                        format!("no response within {per_source:?}"),
                    ),
                }
            }
        });

        let Some(deadline) = self.deadline else {
            // join_all preserves input order: slot i is adapter i.
            return futures::future::join_all(fetches).await;
        };

        let mut slots: Vec<Option<SourceOutcome>> = Vec::new();
        slots.resize_with(self.adapters.len(), || None);

        let mut pending: FuturesUnordered<_> = fetches
            .enumerate()
            .map(|(i, fetch)| async move { (i, fetch.await) })
            .collect();

        let expiry = tokio::time::sleep(deadline);
        tokio::pin!(expiry);

        loop {
            tokio::select! {
                Some((i, outcome)) = pending.next() => {
                    slots[i] = Some(outcome);
                    if slots.iter().all(|slot| slot.is_some()) {
                        break;
                    }
                }
                () = &mut expiry => {
                    warn!("Run deadline expired, finalizing with resolved sources");
                    break;
                }
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.unwrap_or_else(|| {
                    SourceOutcome::failure(
                        self.adapters[i].id(),
                        FailureKind::Timeout,
                        format!("unresolved at run deadline {deadline:?}"),
                    )
                })
            })
            .collect()
    }
}
