//! Stage outcome types.

use std::time::Duration;

/// Terminal state of one stage attempt.
///
/// A stage transitions exactly once from running to one of these; there
/// are no retries and outcomes are never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Succeeded,
    Failed,
    /// Failure for the verdict, but distinguished in diagnostics
    TimedOut,
}

/// Recorded result of attempting one pipeline stage.
#[derive(Debug, Clone)]
pub struct StageOutcome {
    pub stage: String,
    pub status: StageStatus,
    /// Captured standard output (full; display truncates)
    pub stdout: String,
    /// Diagnostic text: stderr on failure, timeout note on timeout
    pub message: String,
    pub duration: Duration,
}

impl StageOutcome {
    pub fn succeeded(stage: &str, stdout: String, duration: Duration) -> Self {
        Self {
            stage: stage.to_string(),
            status: StageStatus::Succeeded,
            stdout,
            message: String::new(),
            duration,
        }
    }

    pub fn failed(stage: &str, message: String, duration: Duration) -> Self {
        Self {
            stage: stage.to_string(),
            status: StageStatus::Failed,
            stdout: String::new(),
            message,
            duration,
        }
    }

    pub fn timed_out(stage: &str, message: String, duration: Duration) -> Self {
        Self {
            stage: stage.to_string(),
            status: StageStatus::TimedOut,
            stdout: String::new(),
            message,
            duration,
        }
    }

    /// Whether this stage counts toward overall success.
    pub fn passed(&self) -> bool {
        self.status == StageStatus::Succeeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_succeeded_passes() {
        let ok = StageOutcome::succeeded("a", String::new(), Duration::ZERO);
        let failed = StageOutcome::failed("b", "boom".to_string(), Duration::ZERO);
        let timed = StageOutcome::timed_out("c", "slow".to_string(), Duration::ZERO);

        assert!(ok.passed());
        assert!(!failed.passed());
        assert!(!timed.passed());
    }

    #[test]
    fn test_timeout_distinct_from_failure() {
        let timed = StageOutcome::timed_out("c", "slow".to_string(), Duration::ZERO);
        assert_eq!(timed.status, StageStatus::TimedOut);
        assert_ne!(timed.status, StageStatus::Failed);
    }
}
