//! Integration tests for the pipeline runner with the real shell executor.
//!
//! Uses portable shell commands against a temporary project root; the
//! fixed production pipeline itself needs npm and is not run here.

#![cfg(target_family = "unix")]

use pipecheck::artifacts::ExpectedArtifact;
use pipecheck::pipeline::{
    PipelineRunner, PipelineStage, RunnerConfig, ShellExecutor, StageKind, StageStatus,
};
use std::time::Duration;
use tempfile::TempDir;

const PRODUCE_AND_CHECK: &[PipelineStage] = &[
    PipelineStage {
        name: "Generate",
        kind: StageKind::Command {
            command: "echo '{\"paths\": {\"/health\": {}}}' > openapi.json",
            working_dir: None,
        },
        artifacts: &[ExpectedArtifact {
            path: "openapi.json",
            description: "OpenAPI specification",
        }],
        inspect_openapi: true,
    },
    PipelineStage {
        name: "Broken Codegen",
        kind: StageKind::Command {
            command: "echo 'no generator installed' >&2; exit 2",
            working_dir: None,
        },
        artifacts: &[ExpectedArtifact {
            path: "client/index.ts",
            description: "TypeScript client",
        }],
        inspect_openapi: false,
    },
    PipelineStage {
        name: "Build",
        kind: StageKind::Command {
            command: "mkdir -p dist && echo ok > dist/index.html",
            working_dir: None,
        },
        artifacts: &[ExpectedArtifact {
            path: "dist/index.html",
            description: "Built application",
        }],
        inspect_openapi: false,
    },
    PipelineStage {
        name: "Dev Server",
        kind: StageKind::ManualPass {
            note: "tested manually",
        },
        artifacts: &[],
        inspect_openapi: false,
    },
];

#[test]
fn test_failing_stage_does_not_stop_the_run() {
    let temp = TempDir::new().unwrap();
    let executor = ShellExecutor;
    let runner = PipelineRunner::new(temp.path(), &executor);

    let report = runner.run_stages(PRODUCE_AND_CHECK);

    let outcomes = report.outcomes();
    assert_eq!(outcomes.len(), 4);
    assert_eq!(outcomes[0].status, StageStatus::Succeeded);
    assert_eq!(outcomes[1].status, StageStatus::Failed);
    assert!(outcomes[1].message.contains("no generator installed"));
    assert_eq!(outcomes[2].status, StageStatus::Succeeded);
    assert_eq!(outcomes[3].status, StageStatus::Succeeded);

    // Exit code 1 because one stage failed
    assert_eq!(report.exit_code(), 1);

    // Successful stages really wrote their artifacts into the root
    assert!(temp.path().join("openapi.json").exists());
    assert!(temp.path().join("dist/index.html").exists());
}

#[test]
fn test_all_passing_stages_exit_zero() {
    const HAPPY: &[PipelineStage] = &[
        PipelineStage {
            name: "Touch",
            kind: StageKind::Command {
                command: "touch out.txt",
                working_dir: None,
            },
            artifacts: &[ExpectedArtifact {
                path: "out.txt",
                description: "Output",
            }],
            inspect_openapi: false,
        },
        PipelineStage {
            name: "Noop",
            kind: StageKind::Command {
                command: "true",
                working_dir: None,
            },
            artifacts: &[],
            inspect_openapi: false,
        },
    ];

    let temp = TempDir::new().unwrap();
    let executor = ShellExecutor;
    let runner = PipelineRunner::new(temp.path(), &executor);

    let report = runner.run_stages(HAPPY);

    assert!(report.all_passed());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_hanging_stage_times_out_and_later_stage_runs() {
    const WITH_HANG: &[PipelineStage] = &[
        PipelineStage {
            name: "Hang",
            kind: StageKind::Command {
                command: "sleep 10",
                working_dir: None,
            },
            artifacts: &[],
            inspect_openapi: false,
        },
        PipelineStage {
            name: "After",
            kind: StageKind::Command {
                command: "true",
                working_dir: None,
            },
            artifacts: &[],
            inspect_openapi: false,
        },
    ];

    let temp = TempDir::new().unwrap();
    let executor = ShellExecutor;
    let runner = PipelineRunner::with_config(
        temp.path(),
        &executor,
        RunnerConfig {
            timeout: Duration::from_millis(100),
        },
    );

    let report = runner.run_stages(WITH_HANG);

    assert_eq!(report.outcomes()[0].status, StageStatus::TimedOut);
    assert!(report.outcomes()[0].message.contains("timeout"));
    assert_eq!(report.outcomes()[1].status, StageStatus::Succeeded);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_stage_runs_in_its_declared_working_dir() {
    const IN_SUBDIR: &[PipelineStage] = &[PipelineStage {
        name: "Package",
        kind: StageKind::Command {
            command: "touch built.marker",
            working_dir: Some("pkg"),
        },
        artifacts: &[ExpectedArtifact {
            path: "pkg/built.marker",
            description: "Marker",
        }],
        inspect_openapi: false,
    }];

    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("pkg")).unwrap();

    let executor = ShellExecutor;
    let runner = PipelineRunner::new(temp.path(), &executor);
    let report = runner.run_stages(IN_SUBDIR);

    assert!(report.all_passed());
    assert!(temp.path().join("pkg/built.marker").exists());
}
