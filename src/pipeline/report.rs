//! Result aggregation and reporting.

use colored::Colorize;

use crate::pipeline::stage::{StageOutcome, StageStatus};
use crate::utils::banner;

const BANNER_WIDTH: usize = 60;

/// All outcomes of one pipeline run plus the derived overall verdict.
///
/// Exists only for the lifetime of one invocation; it is rendered to the
/// console and reduced to a process exit code, never persisted.
#[derive(Debug)]
pub struct VerificationReport {
    outcomes: Vec<StageOutcome>,
}

impl VerificationReport {
    pub fn new(outcomes: Vec<StageOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[StageOutcome] {
        &self.outcomes
    }

    /// AND across all recorded outcomes.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(StageOutcome::passed)
    }

    /// 0 iff every stage succeeded, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }

    /// Print the per-stage summary block and the final verdict.
    pub fn print_summary(&self) {
        println!("\n{}", banner(BANNER_WIDTH));
        println!("{}", "VERIFICATION RESULTS".bold());
        println!("{}", banner(BANNER_WIDTH));

        for outcome in &self.outcomes {
            match outcome.status {
                StageStatus::Succeeded => {
                    println!("{} PASS: {}", "✓".green().bold(), outcome.stage);
                }
                StageStatus::Failed => {
                    println!("{} FAIL: {}", "✗".red().bold(), outcome.stage);
                }
                StageStatus::TimedOut => {
                    println!("{} FAIL: {} (timed out)", "✗".red().bold(), outcome.stage);
                }
            }
        }

        println!("\n{}", banner(BANNER_WIDTH));
        if self.all_passed() {
            println!(
                "{}",
                "ALL TESTS PASSED - PIPELINE VERIFICATION COMPLETE"
                    .green()
                    .bold()
            );
        } else {
            println!("{}", "SOME TESTS FAILED - REVIEW REQUIRED".red().bold());
        }
        println!("{}", banner(BANNER_WIDTH));
    }
}
