use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

use crate::probe::TransportPolicy;

/// One campaign as configured: where to probe and which list to probe with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CampaignConfig {
    pub label: String,
    pub endpoint: String,
    pub candidates: PathBuf,
}

impl CampaignConfig {
    pub fn new(label: &str, endpoint: &str, candidates: impl Into<PathBuf>) -> Self {
        Self { label: label.to_string(), endpoint: endpoint.to_string(), candidates: candidates.into() }
    }
}

/// `LABEL=ENDPOINT=FILE`. The endpoint may itself contain `=`.
impl FromStr for CampaignConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, rest) = s.split_once('=').context("expected LABEL=ENDPOINT=FILE")?;
        let (endpoint, file) = rest.rsplit_once('=').context("expected LABEL=ENDPOINT=FILE")?;
        if file.is_empty() {
            bail!("missing candidate file in '{}'", s);
        }
        Ok(Self::new(label, endpoint, file))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub campaigns: Vec<CampaignConfig>,
    pub log_path: PathBuf,
    pub transport_policy: TransportPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            campaigns: vec![
                CampaignConfig::new("short", "https://ionaapp.com/assignment-magic/dk/short/", "first.txt"),
                CampaignConfig::new("long", "https://ionaapp.com/assignment-magic/dk/long/", "second.txt"),
            ],
            log_path: PathBuf::from("tester.log"),
            transport_policy: TransportPolicy::Abort,
        }
    }
}

impl Config {
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Config = serde_json::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.campaigns.is_empty() {
            bail!("no campaigns configured");
        }
        for c in &self.campaigns {
            if c.label.trim().is_empty() {
                bail!("campaign for endpoint '{}' has an empty label", c.endpoint);
            }
            // tokens are appended verbatim, so only warn
            if Url::parse(&c.endpoint).is_err() {
                tracing::warn!(campaign = %c.label, endpoint = %c.endpoint, "base endpoint is not a valid URL");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_two_reference_campaigns() {
        let cfg = Config::default();
        let labels: Vec<&str> = cfg.campaigns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["short", "long"]);
        assert_eq!(cfg.transport_policy, TransportPolicy::Abort);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: Config = serde_json::from_str(r#"{"transport_policy":"continue"}"#).unwrap();
        assert_eq!(cfg.transport_policy, TransportPolicy::Continue);
        assert_eq!(cfg.campaigns.len(), 2);
        assert_eq!(cfg.log_path, PathBuf::from("tester.log"));
    }

    #[test]
    fn json_campaigns_replace_defaults() {
        let cfg: Config = serde_json::from_str(
            r#"{"campaigns":[{"label":"x","endpoint":"http://h/x/","candidates":"x.txt"}]}"#,
        )
        .unwrap();
        assert_eq!(cfg.campaigns, vec![CampaignConfig::new("x", "http://h/x/", "x.txt")]);
    }

    #[test]
    fn parse_campaign_flag() {
        let c: CampaignConfig = "short=https://h/p?a=b=list.txt".parse().unwrap();
        assert_eq!(c, CampaignConfig::new("short", "https://h/p?a=b", "list.txt"));
        assert!("short".parse::<CampaignConfig>().is_err());
        assert!("short=https://h/=".parse::<CampaignConfig>().is_err());
    }

    #[test]
    fn empty_campaign_list_is_rejected() {
        let cfg = Config { campaigns: vec![], ..Config::default() };
        assert!(cfg.validate().is_err());
    }
}
