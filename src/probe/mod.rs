pub mod dispatcher;
pub mod http_probe;

pub use dispatcher::{DispatchSummary, ProbeDispatcher, TransportPolicy};
pub use http_probe::Fetcher;

/// Stage at which a probe failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never completed a round trip.
    Transport,
    /// Headers arrived but the body could not be read in full.
    Read,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Transport => f.write_str("transport"),
            FailureKind::Read => f.write_str("read"),
        }
    }
}

/// Captured result of probing one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success { status: u16, body: String },
    Failure { kind: FailureKind, detail: String },
}

impl ProbeOutcome {
    pub fn transport(detail: impl Into<String>) -> Self {
        ProbeOutcome::Failure { kind: FailureKind::Transport, detail: detail.into() }
    }

    pub fn read(detail: impl Into<String>) -> Self {
        ProbeOutcome::Failure { kind: FailureKind::Read, detail: detail.into() }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ProbeOutcome::Success { .. } => None,
            ProbeOutcome::Failure { kind, .. } => Some(*kind),
        }
    }
}
