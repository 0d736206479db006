use serde::Deserialize;
use tracing::{debug, error};

use crate::campaign::{CampaignSpec, Candidate};
use crate::error::ProbeError;
use crate::probe::{FailureKind, Fetcher, ProbeOutcome};

/// What to do when a candidate cannot reach the server at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportPolicy {
    /// Log the failed candidate, then stop the whole run.
    #[default]
    Abort,
    /// Log the failed candidate and move on to the next one.
    Continue,
}

/// Counters for one dispatched campaign.
#[derive(Debug, Default)]
pub struct DispatchSummary {
    pub probed: usize,
    pub successes: usize,
    pub read_failures: usize,
    pub transport_failures: usize,
    /// Set when the transport policy stopped the campaign early.
    pub aborted: Option<ProbeError>,
}

/// Sequential, single-attempt GET per candidate.
pub struct ProbeDispatcher<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
    policy: TransportPolicy,
}

impl<'a, F: Fetcher + ?Sized> ProbeDispatcher<'a, F> {
    pub fn new(fetcher: &'a F, policy: TransportPolicy) -> Self {
        Self { fetcher, policy }
    }

    /// Probe every candidate of `spec` in order. `on_outcome` sees each
    /// outcome before the next request goes out.
    pub async fn dispatch<C>(&self, spec: &CampaignSpec, mut on_outcome: C) -> DispatchSummary
    where
        C: FnMut(&Candidate, &ProbeOutcome),
    {
        let mut summary = DispatchSummary::default();

        for candidate in spec.candidates() {
            let url = spec.target_for(candidate);
            debug!(campaign = spec.label(), index = candidate.index, url = %url, "GET");

            let outcome = self.fetcher.fetch(&url).await;
            summary.probed += 1;
            on_outcome(candidate, &outcome);

            match &outcome {
                ProbeOutcome::Success { status, body } => {
                    summary.successes += 1;
                    debug!(index = candidate.index, status, bytes = body.len(), "response captured");
                }
                ProbeOutcome::Failure { kind: FailureKind::Read, detail } => {
                    summary.read_failures += 1;
                    debug!(index = candidate.index, error = %detail, "body read failed, continuing");
                }
                ProbeOutcome::Failure { kind: FailureKind::Transport, detail } => {
                    summary.transport_failures += 1;
                    if self.policy == TransportPolicy::Abort {
                        error!(campaign = spec.label(), index = candidate.index, error = %detail, "transport error, aborting run");
                        summary.aborted = Some(ProbeError::Transport { url, detail: detail.clone() });
                        break;
                    }
                    debug!(index = candidate.index, error = %detail, "transport error, continuing");
                }
            }
        }

        summary
    }
}
