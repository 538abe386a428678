//! Run results and the score sink boundary
//!
//! A finished run produces one `{name, score}` record. Names are trimmed and
//! bounds-checked here; storing and ranking records is the sink's business.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MAX_NAME_CHARS;
use crate::sim::GameState;

/// Problems with a player name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is empty")]
    Empty,
    #[error("name has {chars} characters, at most {max} allowed")]
    TooLong { chars: usize, max: usize },
}

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("invalid name: {0}")]
    Name(#[from] NameError),
    #[error("the run has not ended")]
    RunNotEnded,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("this run has already been submitted")]
    AlreadySubmitted,
    #[error("score sink rejected the record: {0}")]
    Rejected(String),
}

/// Trim a raw name and check it is 1..=20 characters
pub fn validate_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim();
    let chars = name.chars().count();
    if chars == 0 {
        return Err(NameError::Empty);
    }
    if chars > MAX_NAME_CHARS {
        return Err(NameError::TooLong {
            chars,
            max: MAX_NAME_CHARS,
        });
    }
    Ok(name.to_string())
}

/// Final record of a named run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub name: String,
    pub score: u64,
}

impl RunResult {
    /// Build a record, trimming and validating the name
    pub fn new(raw_name: &str, score: u64) -> Result<Self, NameError> {
        Ok(Self {
            name: validate_name(raw_name)?,
            score,
        })
    }

    /// Record for a run that has ended
    pub fn from_state(state: &GameState, raw_name: &str) -> Result<Self, SubmitError> {
        let score = state.final_score().ok_or(SubmitError::RunNotEnded)?;
        Ok(Self::new(raw_name, score)?)
    }

    /// Wire body `{"name": ..., "score": ...}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Where finished runs are sent
pub trait ScoreSink {
    fn submit(&mut self, record: &RunResult) -> Result<(), SubmitError>;
}

/// Lets one run's result through exactly once
///
/// Hosts with an async transport call [`SubmissionGate::begin`] before sending
/// and [`SubmissionGate::finish`] when the request resolves. A failed request
/// reopens the gate so the user can retry; a successful one closes it until
/// [`SubmissionGate::reset`] is called for the next run.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    in_flight: bool,
    submitted: bool,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Result<(), SubmitError> {
        if self.submitted {
            return Err(SubmitError::AlreadySubmitted);
        }
        if self.in_flight {
            return Err(SubmitError::InFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    pub fn finish(&mut self, result: &Result<(), SubmitError>) {
        self.in_flight = false;
        match result {
            Ok(()) => self.submitted = true,
            Err(e) => log::warn!("Score submission failed: {}", e),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// The run's record has been accepted by the sink
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Open the gate for a new run
    pub fn reset(&mut self) {
        self.in_flight = false;
        self.submitted = false;
    }

    /// Send through a synchronous sink, guarded by the gate
    pub fn submit(
        &mut self,
        sink: &mut impl ScoreSink,
        record: &RunResult,
    ) -> Result<(), SubmitError> {
        self.begin()?;
        let result = sink.submit(record);
        self.finish(&result);
        if result.is_ok() {
            log::info!("Score submitted: {} - {}", record.name, record.score);
        }
        result
    }
}

/// In-process sink that keeps every accepted record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryScoreSink {
    pub records: Vec<RunResult>,
}

impl MemoryScoreSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score so far
    pub fn top_score(&self) -> Option<u64> {
        self.records.iter().map(|r| r.score).max()
    }
}

impl ScoreSink for MemoryScoreSink {
    fn submit(&mut self, record: &RunResult) -> Result<(), SubmitError> {
        if record.name.trim().is_empty() {
            return Err(SubmitError::Rejected("invalid data".to_string()));
        }
        self.records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    struct FailingSink;

    impl ScoreSink for FailingSink {
        fn submit(&mut self, _record: &RunResult) -> Result<(), SubmitError> {
            Err(SubmitError::Rejected("unreachable".to_string()))
        }
    }

    #[test]
    fn test_name_trimming_and_bounds() {
        assert_eq!(validate_name("  Ada  ").unwrap(), "Ada");
        assert_eq!(validate_name("   "), Err(NameError::Empty));
        assert_eq!(validate_name(""), Err(NameError::Empty));
        assert!(validate_name(&"a".repeat(20)).is_ok());
        assert_eq!(
            validate_name(&"a".repeat(21)),
            Err(NameError::TooLong { chars: 21, max: 20 })
        );
        // Counted in characters, not bytes
        assert!(validate_name(&"ж".repeat(20)).is_ok());
    }

    #[test]
    fn test_record_json_shape() {
        let record = RunResult::new(" neo ", 1234).unwrap();
        assert_eq!(record.to_json().unwrap(), r#"{"name":"neo","score":1234}"#);
    }

    #[test]
    fn test_record_requires_ended_run() {
        let mut state = GameState::new(Settings {
            seed: Some(8),
            ..Settings::default()
        });
        state.start();
        assert_eq!(
            RunResult::from_state(&state, "neo"),
            Err(SubmitError::RunNotEnded)
        );
        state.player.score = 77;
        state.phase = crate::sim::GamePhase::Ended;
        assert_eq!(
            RunResult::from_state(&state, "neo").unwrap(),
            RunResult {
                name: "neo".to_string(),
                score: 77
            }
        );
    }

    #[test]
    fn test_gate_blocks_duplicates() {
        let mut gate = SubmissionGate::new();
        gate.begin().unwrap();
        assert_eq!(gate.begin(), Err(SubmitError::InFlight));
        gate.finish(&Ok(()));
        assert!(!gate.is_in_flight());
        assert!(gate.is_submitted());
        assert_eq!(gate.begin(), Err(SubmitError::AlreadySubmitted));

        gate.reset();
        assert!(gate.begin().is_ok());
    }

    #[test]
    fn test_second_submission_of_a_run_is_refused() {
        let mut gate = SubmissionGate::new();
        let mut sink = MemoryScoreSink::new();
        let record = RunResult::new("flynn", 42).unwrap();

        gate.submit(&mut sink, &record).unwrap();
        assert_eq!(
            gate.submit(&mut sink, &record),
            Err(SubmitError::AlreadySubmitted)
        );
        assert_eq!(sink.records.len(), 1);
    }

    #[test]
    fn test_failed_submission_is_retriable() {
        let mut gate = SubmissionGate::new();
        let record = RunResult::new("trinity", 10).unwrap();
        assert!(gate.submit(&mut FailingSink, &record).is_err());
        assert!(!gate.is_in_flight());

        let mut sink = MemoryScoreSink::new();
        gate.submit(&mut sink, &record).unwrap();
        assert_eq!(sink.records, vec![record]);
        assert_eq!(sink.top_score(), Some(10));
        assert!(gate.is_submitted());
    }
}
