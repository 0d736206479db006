use async_trait::async_trait;
use reqwest::Client;

use crate::probe::ProbeOutcome;

/// Issues a single GET and captures what came back.
///
/// Implementations must never retry and must keep the two failure stages
/// apart: no round trip is [`FailureKind::Transport`](crate::probe::FailureKind),
/// a broken body is [`FailureKind::Read`](crate::probe::FailureKind).
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> ProbeOutcome;
}

#[async_trait]
impl Fetcher for Client {
    async fn fetch(&self, url: &str) -> ProbeOutcome {
        let resp = match self.get(url).send().await {
            Ok(r) => r,
            Err(e) => return ProbeOutcome::transport(error_chain(&e)),
        };
        let status = resp.status().as_u16();
        match resp.bytes().await {
            // Body is kept as text whatever the content type says
            Ok(bytes) => ProbeOutcome::Success { status, body: String::from_utf8_lossy(&bytes).into_owned() },
            Err(e) => ProbeOutcome::read(error_chain(&e)),
        }
    }
}

/// reqwest hides the interesting part (refused, reset, eof) in the source chain.
fn error_chain(e: &(dyn std::error::Error + 'static)) -> String {
    let mut out = e.to_string();
    let mut cur = e.source();
    while let Some(src) = cur {
        let msg = src.to_string();
        if !out.contains(&msg) {
            out.push_str(": ");
            out.push_str(&msg);
        }
        cur = src.source();
    }
    out
}
