//! End-to-end pipeline runner command.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::time::Duration;

use crate::pipeline::executor::ShellExecutor;
use crate::pipeline::runner::{PipelineRunner, RunnerConfig};
use crate::utils::banner;

const BANNER_WIDTH: usize = 60;

/// Execute the run command against `root`, returning the process exit code.
pub fn execute(root: &Path, timeout: Duration) -> Result<i32> {
    println!("{}", "Pipeline End-to-End Verification".bold());
    println!("{}", banner(BANNER_WIDTH));

    let executor = ShellExecutor;
    let runner = PipelineRunner::with_config(root, &executor, RunnerConfig { timeout });

    let report = runner.run_pipeline();
    report.print_summary();

    Ok(report.exit_code())
}
