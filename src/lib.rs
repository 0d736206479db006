pub mod campaign;
pub mod config;
pub mod error;
pub mod http_client;
pub mod output;
pub mod probe;

// re-export the types the binary and tests reach for
pub use crate::campaign::{CampaignRunner, CampaignSpec, Candidate, CandidateListSource};
pub use crate::config::{CampaignConfig, Config};
pub use crate::error::ProbeError;
pub use crate::probe::{ProbeOutcome, TransportPolicy};
