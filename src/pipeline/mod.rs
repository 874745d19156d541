//! Pipeline stage orchestration and verification.

pub mod executor;
pub mod report;
pub mod runner;
pub mod stage;
pub mod stages;

pub use executor::{
    CommandExecutor, ExecutionResult, ExecutionSpec, ShellExecutor, DEFAULT_STAGE_TIMEOUT,
};
pub use report::VerificationReport;
pub use runner::{PipelineRunner, RunnerConfig};
pub use stage::{StageOutcome, StageStatus};
pub use stages::{PipelineStage, StageKind, OPENAPI_DOCUMENT, PIPELINE, STATIC_ARTIFACTS};
