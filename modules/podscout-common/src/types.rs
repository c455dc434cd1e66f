use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PodscoutError;

// --- Records ---

/// One normalized episode row — the provider-agnostic unit that flows from
/// adapter to aggregator to exporter.
///
/// `podcast_name` and `episode_title` are never empty for a record that
/// reaches the exporter; adapters skip provider items that would violate
/// that. Optional fields are `None` when extraction found nothing, never an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub podcast_name: String,
    pub episode_title: String,
    pub link: String,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
}

/// Input parameters for one aggregation run. Constructed once, immutable.
#[derive(Debug, Clone)]
pub struct FetchQuery {
    term: String,
}

impl FetchQuery {
    /// Rejects empty or whitespace-only terms, so a run never starts with an
    /// invalid query.
    pub fn new(term: impl Into<String>) -> Result<Self, PodscoutError> {
        let term = term.into();
        if term.trim().is_empty() {
            return Err(PodscoutError::EmptyQuery);
        }
        Ok(Self { term })
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

// --- Per-source outcomes ---

/// Result of one adapter invocation. Failures are data, not panics — one
/// broken provider must not take down the rest of the run.
#[derive(Debug, Clone)]
pub enum SourceOutcome {
    Success(Vec<EpisodeRecord>),
    Failure(SourceFailure),
}

impl SourceOutcome {
    pub fn failure(source: &str, kind: FailureKind, message: impl Into<String>) -> Self {
        SourceOutcome::Failure(SourceFailure {
            source: source.to_string(),
            kind,
            message: message.into(),
        })
    }
}

/// Diagnostic for one failed source, surfaced in the run report.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    pub source: String,
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.source, self.kind, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection, DNS, or request-level failure before any HTTP status.
    Transport,
    /// Non-success HTTP status from the provider.
    Provider { status: u16 },
    /// Payload did not match the expected shape.
    Parse,
    /// Per-source timeout or overall run deadline expiry.
    Timeout,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport error"),
            FailureKind::Provider { status } => write!(f, "provider error (status {status})"),
            FailureKind::Parse => write!(f, "parse error"),
            FailureKind::Timeout => write!(f, "timeout"),
        }
    }
}
