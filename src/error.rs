use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy of a probing run.
///
/// Only [`ProbeError::Transport`] may end a run; the other kinds are
/// recorded in the log and the run moves on. Body-read failures never leave
/// the dispatcher as errors at all, they travel as
/// [`FailureKind::Read`](crate::probe::FailureKind) outcomes.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("candidate list {} unavailable: {reason}", .path.display())]
    SourceUnavailable { path: PathBuf, reason: String },

    #[error("transport error on {url}: {detail}")]
    Transport { url: String, detail: String },

    #[error("log sink write failed: {0}")]
    SinkWrite(#[from] std::io::Error),
}
