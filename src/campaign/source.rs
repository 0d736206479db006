use std::fs;
use std::path::PathBuf;

use crate::error::ProbeError;

/// A single token drawn from a candidate list, tagged with its zero-based
/// line position in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub token: String,
}

/// Newline-delimited candidate list on disk.
#[derive(Debug, Clone)]
pub struct CandidateListSource {
    path: PathBuf,
}

impl CandidateListSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole file and split it into candidates. Invalid UTF-8 is
    /// replaced, not rejected.
    pub fn load(&self) -> Result<Vec<Candidate>, ProbeError> {
        let data = fs::read(&self.path).map_err(|e| ProbeError::SourceUnavailable {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(split_candidates(&String::from_utf8_lossy(&data)))
    }
}

/// Split on `\n`, dropping a trailing `\r` from each line. A trailing empty
/// line is kept, and empty input yields one empty candidate.
pub fn split_candidates(data: &str) -> Vec<Candidate> {
    data.split('\n')
        .enumerate()
        .map(|(index, line)| Candidate {
            index,
            token: line.strip_suffix('\r').unwrap_or(line).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn tokens(data: &str) -> Vec<String> {
        split_candidates(data).into_iter().map(|c| c.token).collect()
    }

    #[test]
    fn keeps_trailing_empty_line() {
        assert_eq!(tokens("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn strips_crlf() {
        assert_eq!(tokens("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn empty_input_is_one_empty_candidate() {
        let c = split_candidates("");
        assert_eq!(c, vec![Candidate { index: 0, token: String::new() }]);
    }

    #[test]
    fn indices_follow_line_positions() {
        let c = split_candidates("x\n\ny");
        let idx: Vec<usize> = c.iter().map(|c| c.index).collect();
        assert_eq!(idx, vec![0, 1, 2]);
        assert_eq!(c[1].token, "");
    }

    #[test]
    fn load_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "aaa\nAbc").unwrap();
        let got = CandidateListSource::new(f.path()).load().unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].token, "Abc");
    }

    #[test]
    fn invalid_utf8_still_loads_every_line() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"a\n\xffb\nc").unwrap();
        let got = CandidateListSource::new(f.path()).load().unwrap();
        let tokens: Vec<&str> = got.iter().map(|c| c.token.as_str()).collect();
        assert_eq!(tokens, vec!["a", "\u{FFFD}b", "c"]);
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = CandidateListSource::new(dir.path().join("nope.txt")).load().unwrap_err();
        assert!(matches!(err, ProbeError::SourceUnavailable { .. }));
    }
}
