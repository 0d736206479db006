use anyhow::Context;
use reqwest::{Client, ClientBuilder};

/// Client used for every probe of a run.
///
/// Timeouts and redirect policy stay at reqwest's defaults; a probe is a
/// single plain GET.
pub fn create_probe_client() -> anyhow::Result<Client> {
    ClientBuilder::new()
        .use_rustls_tls()
        .build()
        .context("failed to build HTTP client")
}
