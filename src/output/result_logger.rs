use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::error::ProbeError;
use crate::probe::ProbeOutcome;

/// One outcome bound to the campaign and candidate it came from.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub campaign_label: &'a str,
    pub index: usize,
    pub token: &'a str,
    pub outcome: &'a ProbeOutcome,
}

/// Append-only, timestamped line writer. Write failures are reported and
/// counted but never returned.
pub struct ResultLogger<W: Write> {
    sink: W,
    failed_writes: usize,
}

impl ResultLogger<File> {
    pub fn open_append(path: &Path) -> std::io::Result<Self> {
        let f = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(Self::new(f))
    }
}

impl<W: Write> ResultLogger<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, failed_writes: 0 }
    }

    pub fn record(&mut self, rec: &LogRecord<'_>) {
        let line = format_record(rec);
        self.append(&line);
    }

    /// Free-form line such as a campaign header.
    pub fn note(&mut self, text: &str) {
        self.append(&escape_line(text));
    }

    pub fn failed_writes(&self) -> usize {
        self.failed_writes
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn append(&mut self, text: &str) {
        let line = format!("{} {}\n", Local::now().format("%Y/%m/%d %H:%M:%S"), text);
        // one write per line so records never interleave
        let res = self.sink.write_all(line.as_bytes()).and_then(|_| self.sink.flush());
        if let Err(e) = res {
            self.failed_writes += 1;
            let err = ProbeError::SinkWrite(e);
            tracing::error!(error = %err, "dropping log line");
            eprintln!("[!] {}", err);
        }
    }
}

pub fn format_record(rec: &LogRecord<'_>) -> String {
    let head = format!(
        "[{}] Index: {} with data from list: {}",
        rec.campaign_label,
        rec.index,
        escape_line(rec.token)
    );
    match rec.outcome {
        ProbeOutcome::Success { body, .. } => format!("{} gave the response: {}", head, escape_line(body)),
        ProbeOutcome::Failure { kind, detail } => format!("{} failed ({} error): {}", head, kind, escape_line(detail)),
    }
}

/// Keep a record on one physical line.
fn escape_line(s: &str) -> String {
    s.replace('\r', "\\r").replace('\n', "\\n")
}
