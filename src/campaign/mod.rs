pub mod runner;
pub mod source;

pub use runner::{CampaignReport, CampaignRunner, RunReport};
pub use source::{Candidate, CandidateListSource};

/// One pass over one candidate list against one base endpoint.
///
/// Built after the candidate list has been loaded and never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct CampaignSpec {
    label: String,
    base_endpoint: String,
    candidates: Vec<Candidate>,
}

impl CampaignSpec {
    pub fn new(label: impl Into<String>, base_endpoint: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self {
            label: label.into(),
            base_endpoint: base_endpoint.into(),
            candidates,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Raw concatenation, no escaping.
    pub fn target_for(&self, candidate: &Candidate) -> String {
        format!("{}{}", self.base_endpoint, candidate.token)
    }
}

/// Lifecycle of a single campaign inside a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignState {
    Idle,
    LoadingCandidates,
    Probing,
    Complete,
    Skipped,
    Aborted,
}

impl std::fmt::Display for CampaignState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CampaignState::Idle => "idle",
            CampaignState::LoadingCandidates => "loading",
            CampaignState::Probing => "probing",
            CampaignState::Complete => "complete",
            CampaignState::Skipped => "skipped",
            CampaignState::Aborted => "aborted",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_plain_concatenation() {
        let spec = CampaignSpec::new("short", "https://example.test/p/", source::split_candidates("a b\n"));
        assert_eq!(spec.target_for(&spec.candidates()[0]), "https://example.test/p/a b");
        assert_eq!(spec.target_for(&spec.candidates()[1]), "https://example.test/p/");
    }
}
