use anyhow::Context;

use crate::cli::Cli;
use list_prober::campaign::CampaignState;
use list_prober::http_client::create_probe_client;
use list_prober::output::ResultLogger;
use list_prober::{CampaignRunner, Config, TransportPolicy};

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<i32> {
    // Our crate follows --debug/--verbose, HTTP internals stay at INFO.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!("list_prober={level},reqwest=info,hyper=info", level = crate_level);
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = build_config(&cli)?;
    config.validate()?;

    for c in &config.campaigns {
        println!("[*] {}: {} <- {}", c.label, c.endpoint, c.candidates.display());
    }
    println!("[~] Log: {} (transport errors: {:?})", config.log_path.display(), config.transport_policy);

    let mut logger = ResultLogger::open_append(&config.log_path)
        .with_context(|| format!("opening log file {}", config.log_path.display()))?;
    let client = create_probe_client()?;

    let report = CampaignRunner::new(&config, &client).run(&mut logger).await;

    for c in &report.campaigns {
        let mark = match c.state {
            CampaignState::Complete => "[+]",
            CampaignState::Skipped => "[-]",
            _ => "[!]",
        };
        println!(
            "{} {}: {} ({} probed, {} ok, {} read errors, {} transport errors)",
            mark, c.label, c.state, c.probed, c.successes, c.read_failures, c.transport_failures
        );
    }
    if logger.failed_writes() > 0 {
        eprintln!("[!] {} log line(s) could not be written", logger.failed_writes());
    }

    if let Some(err) = &report.aborted {
        eprintln!("[!] Run aborted: {}", err);
        return Ok(1);
    }
    Ok(0)
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if !cli.campaigns.is_empty() {
        config.campaigns = cli.campaigns.clone();
    }
    if let Some(log) = &cli.log {
        config.log_path = log.clone();
    }
    if cli.continue_on_transport_error {
        config.transport_policy = TransportPolicy::Continue;
    }
    Ok(config)
}
