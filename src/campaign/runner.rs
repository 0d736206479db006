use std::io::Write;

use tracing::{info, warn};

use crate::campaign::{CampaignSpec, CampaignState, CandidateListSource};
use crate::config::{CampaignConfig, Config};
use crate::error::ProbeError;
use crate::output::{LogRecord, ResultLogger};
use crate::probe::{Fetcher, ProbeDispatcher};

#[derive(Debug, Clone)]
pub struct CampaignReport {
    pub label: String,
    pub endpoint: String,
    pub state: CampaignState,
    pub probed: usize,
    pub successes: usize,
    pub read_failures: usize,
    pub transport_failures: usize,
}

impl CampaignReport {
    fn new(cfg: &CampaignConfig) -> Self {
        Self {
            label: cfg.label.clone(),
            endpoint: cfg.endpoint.clone(),
            state: CampaignState::Idle,
            probed: 0,
            successes: 0,
            read_failures: 0,
            transport_failures: 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub campaigns: Vec<CampaignReport>,
    /// The transport error that stopped the run, if any.
    pub aborted: Option<ProbeError>,
}

impl RunReport {
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }
}

/// Runs the configured campaigns one after another.
pub struct CampaignRunner<'a, F: Fetcher + ?Sized> {
    config: &'a Config,
    fetcher: &'a F,
}

impl<'a, F: Fetcher + ?Sized> CampaignRunner<'a, F> {
    pub fn new(config: &'a Config, fetcher: &'a F) -> Self {
        Self { config, fetcher }
    }

    pub async fn run<W: Write>(&self, logger: &mut ResultLogger<W>) -> RunReport {
        let dispatcher = ProbeDispatcher::new(self.fetcher, self.config.transport_policy);
        let mut report = RunReport::default();

        for cfg in &self.config.campaigns {
            let mut campaign = CampaignReport::new(cfg);
            logger.note(&format!("Base URL for {} is: {}", cfg.label, cfg.endpoint));

            set_state(&mut campaign, CampaignState::LoadingCandidates);
            let source = CandidateListSource::new(&cfg.candidates);
            let candidates = match source.load() {
                Ok(c) => c,
                Err(e) => {
                    warn!(campaign = %cfg.label, error = %e, "skipping campaign");
                    logger.note(&format!("There is a problem opening the file for {}: {}", cfg.label, e));
                    set_state(&mut campaign, CampaignState::Skipped);
                    report.campaigns.push(campaign);
                    continue;
                }
            };
            let spec = CampaignSpec::new(cfg.label.as_str(), cfg.endpoint.as_str(), candidates);

            set_state(&mut campaign, CampaignState::Probing);
            let summary = dispatcher
                .dispatch(&spec, |candidate, outcome| {
                    logger.record(&LogRecord {
                        campaign_label: spec.label(),
                        index: candidate.index,
                        token: &candidate.token,
                        outcome,
                    });
                })
                .await;

            campaign.probed = summary.probed;
            campaign.successes = summary.successes;
            campaign.read_failures = summary.read_failures;
            campaign.transport_failures = summary.transport_failures;

            if let Some(err) = summary.aborted {
                logger.note(&format!("Run aborted during {}: {}", cfg.label, err));
                set_state(&mut campaign, CampaignState::Aborted);
                report.campaigns.push(campaign);
                report.aborted = Some(err);
                break;
            }

            set_state(&mut campaign, CampaignState::Complete);
            report.campaigns.push(campaign);
        }

        report
    }
}

fn set_state(campaign: &mut CampaignReport, next: CampaignState) {
    info!(campaign = %campaign.label, from = %campaign.state, to = %next, "campaign state");
    campaign.state = next;
}
