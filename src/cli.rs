use std::path::PathBuf;

use clap::Parser;
use list_prober::CampaignConfig;

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Probe a base endpoint with every token of a candidate list", long_about = None)]
pub struct Cli {
    /// JSON config file (campaigns, log_path, transport_policy)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Campaign as LABEL=ENDPOINT=FILE; repeat to run several, in order (replaces configured campaigns)
    #[arg(long = "campaign", value_name = "LABEL=ENDPOINT=FILE")]
    pub campaigns: Vec<CampaignConfig>,

    /// Append results to this log file (default: tester.log)
    #[arg(short = 'l', long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Log transport errors and keep going instead of aborting the run
    #[arg(long, default_value_t = false)]
    pub continue_on_transport_error: bool,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
